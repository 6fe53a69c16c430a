use crate::time::Time;
use crate::unit::TimeUnit;
use std::cmp::Ordering;

/// Orders by start time, ties broken by end time.
pub fn compare(a: &TimeUnit, b: &TimeUnit) -> Ordering {
    a.start_time()
        .cmp(&b.start_time())
        .then(a.end_time().cmp(&b.end_time()))
}

/// Two units overlap when they share a day and their closed time intervals
/// intersect. Back-to-back units (`a.end == b.start`) overlap.
pub fn overlaps(a: &TimeUnit, b: &TimeUnit) -> bool {
    a.days().intersects(b.days()) && Time::is_overlapping(&a.interval(), &b.interval())
}

/// True if any two positions in `units` overlap.
pub fn has_conflict(units: &[TimeUnit]) -> bool {
    units
        .iter()
        .enumerate()
        .any(|(i, a)| units[i + 1..].iter().any(|b| overlaps(a, b)))
}

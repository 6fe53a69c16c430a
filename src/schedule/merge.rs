use crate::schedule::Schedule;
use crate::schedule::cartesian::cartesian_product;
use crate::schedule::conflict::has_conflict;
use crate::unit::TimeUnit;

/// Pairs every schedule of `a` with every schedule of `b` and keeps the
/// concatenations that are conflict free.
///
/// The whole concatenation is checked, so a conflict already present in one
/// of the inputs still excludes the pairing. An empty schedule acts as the
/// identity; an empty collection yields nothing.
pub fn merge(a: &[Schedule], b: &[Schedule]) -> Vec<Schedule> {
    cartesian_product::<TimeUnit, Schedule>(&[a, b])
        .into_iter()
        .filter(|units| !has_conflict(units))
        .map(Schedule::from)
        .collect()
}

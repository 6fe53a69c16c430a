pub mod cartesian;
pub mod conflict;
pub mod generator;
pub mod merge;


use crate::course::CourseKey;
use crate::unit::TimeUnit;
use serde::Serialize;
use std::fmt;

/// A conflict-free timetable. Units keep the order in which courses were
/// merged in; use [`Schedule::sorted`] for a time-ordered view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    units: Vec<TimeUnit>,
}

impl Schedule {
    pub fn new(units: Vec<TimeUnit>) -> Schedule {
        Schedule { units }
    }

    pub fn units(&self) -> &[TimeUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn has_conflict(&self) -> bool {
        conflict::has_conflict(&self.units)
    }

    /// Units ordered by start time, then end time.
    pub fn sorted(&self) -> Vec<&TimeUnit> {
        let mut units: Vec<&TimeUnit> = self.units.iter().collect();
        units.sort_by(|a, b| conflict::compare(a, b));
        units
    }

    /// Distinct courses in merge order.
    pub fn courses(&self) -> Vec<&CourseKey> {
        let mut courses: Vec<&CourseKey> = vec![];
        for unit in &self.units {
            if !courses.contains(&unit.course()) {
                courses.push(unit.course());
            }
        }
        courses
    }
}

impl From<Vec<TimeUnit>> for Schedule {
    fn from(units: Vec<TimeUnit>) -> Self {
        Schedule::new(units)
    }
}

impl AsRef<[TimeUnit]> for Schedule {
    fn as_ref(&self) -> &[TimeUnit] {
        &self.units
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a TimeUnit;
    type IntoIter = std::slice::Iter<'a, TimeUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in &self.units {
            writeln!(f, "{}", unit)?;
        }
        Ok(())
    }
}

use crate::course::{CourseKey, Lab, RawDays, Section};
use crate::day::DaySet;
use crate::error::{Error, Result};
use crate::time::{Time, normalize_time};
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// One schedulable block of a course: a section or one of its labs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimeUnit {
    days: DaySet,
    start_time: Time,
    end_time: Time,
    course: CourseKey,
    unit_index: usize,
    is_lab: bool,
}

impl TimeUnit {
    pub fn new(
        days: DaySet,
        start_time: Time,
        end_time: Time,
        course: CourseKey,
        unit_index: usize,
        is_lab: bool,
    ) -> Result<TimeUnit> {
        let unit = TimeUnit {
            days,
            start_time,
            end_time,
            course,
            unit_index,
            is_lab,
        };
        if !end_time.is_clock_time() {
            return Err(Error::OutOfDay {
                unit: unit.label(),
                time: end_time,
            });
        }
        if start_time > end_time {
            return Err(Error::InvertedInterval {
                unit: unit.label(),
                start: start_time,
                end: end_time,
            });
        }
        Ok(unit)
    }

    pub fn section(course: &CourseKey, index: usize, section: &Section) -> Result<TimeUnit> {
        Self::from_raw(
            course,
            index,
            false,
            &section.section_days,
            &section.section_start_time,
            &section.section_end_time,
        )
    }

    pub fn lab(course: &CourseKey, index: usize, lab: &Lab) -> Result<TimeUnit> {
        Self::from_raw(
            course,
            index,
            true,
            &lab.lab_days,
            &lab.lab_start_time,
            &lab.lab_end_time,
        )
    }

    fn from_raw(
        course: &CourseKey,
        index: usize,
        is_lab: bool,
        days: &RawDays,
        start: &str,
        end: &str,
    ) -> Result<TimeUnit> {
        let context = |source| Error::Unit {
            unit: format!("{} {} {}", course, kind(is_lab).to_lowercase(), index),
            source,
        };
        let days = days.parse().map_err(context)?;
        let start_time = normalize_time(start).map_err(context)?;
        let end_time = normalize_time(end).map_err(context)?;
        TimeUnit::new(days, start_time, end_time, course.clone(), index, is_lab)
    }

    pub fn days(&self) -> DaySet {
        self.days
    }

    pub fn start_time(&self) -> Time {
        self.start_time
    }

    pub fn end_time(&self) -> Time {
        self.end_time
    }

    pub fn interval(&self) -> (Time, Time) {
        (self.start_time, self.end_time)
    }

    pub fn course(&self) -> &CourseKey {
        &self.course
    }

    pub fn course_prefix(&self) -> &Arc<str> {
        &self.course.prefix
    }

    pub fn course_code(&self) -> &Arc<str> {
        &self.course.code
    }

    pub fn unit_index(&self) -> usize {
        self.unit_index
    }

    pub fn is_lab(&self) -> bool {
        self.is_lab
    }

    pub fn kind(&self) -> &'static str {
        kind(self.is_lab)
    }

    fn label(&self) -> String {
        format!("{} {} {}", self.course, self.kind().to_lowercase(), self.unit_index)
    }
}

fn kind(is_lab: bool) -> &'static str {
    if is_lab { "Lab" } else { "Section" }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} [{}] ({} - {})",
            self.kind(),
            self.course,
            self.days,
            self.start_time,
            self.end_time
        )
    }
}

impl Serialize for TimeUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Descriptor<'a> {
            course: String,
            is_lab: bool,
            days: &'a DaySet,
            start_time: Time,
            end_time: Time,
        }
        Descriptor {
            course: self.course.to_string(),
            is_lab: self.is_lab,
            days: &self.days,
            start_time: self.start_time,
            end_time: self.end_time,
        }
        .serialize(serializer)
    }
}

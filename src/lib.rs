//! Conflict-free timetable generation.
//!
//! Courses offer alternative sections, each optionally paired with labs.
//! [`generate_schedules`] picks one section (plus its labs) per course in
//! every way that leaves no two units sharing a day at overlapping times.

pub mod course;
pub mod day;
pub mod error;
pub mod schedule;
pub mod time;
pub mod unit;

pub use course::{Course, CourseKey, Lab, LabType, Section, load_courses};
pub use day::{Day, DaySet};
pub use error::{Error, ParseError, Result};
pub use schedule::Schedule;
pub use schedule::generator::{Generator, generate_schedules, generate_sub_schedules};
pub use time::{Time, normalize_time};
pub use unit::TimeUnit;

use crate::day::DaySet;
use crate::error::{ParseError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Course identity shared by every unit of the course.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseKey {
    pub prefix: Arc<str>,
    pub code: Arc<str>,
}

impl fmt::Display for CourseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.prefix, self.code)
    }
}

/// Day tokens either still joined (`"M, W, F"`) or already split.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDays {
    Joined(String),
    Split(Vec<String>),
}

impl Default for RawDays {
    fn default() -> Self {
        RawDays::Split(vec![])
    }
}

/// A null days column means no scheduled days.
fn nullable_days<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<RawDays, D::Error> {
    Option::<RawDays>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl RawDays {
    pub fn parse(&self) -> std::result::Result<DaySet, ParseError> {
        match self {
            RawDays::Joined(raw) => DaySet::parse(raw),
            RawDays::Split(tokens) => DaySet::parse_tokens(tokens.iter().map(String::as_str)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LabType {
    #[default]
    Discussion,
    Lab,
    Recitation,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Lab {
    #[serde(default)]
    pub lab_id: Option<Arc<str>>,
    #[serde(default, deserialize_with = "nullable_days")]
    pub lab_days: RawDays,
    pub lab_start_time: String,
    pub lab_end_time: String,
    #[serde(default)]
    pub lab_type: LabType,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub section_id: Option<Arc<str>>,
    #[serde(default)]
    pub section_instructor: Vec<String>,
    #[serde(default, deserialize_with = "nullable_days")]
    pub section_days: RawDays,
    pub section_start_time: String,
    pub section_end_time: String,
    #[serde(default)]
    pub labs: Vec<Lab>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Course {
    pub course_prefix: Arc<str>,
    pub course_code: Arc<str>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Course {
    pub fn key(&self) -> CourseKey {
        CourseKey {
            prefix: self.course_prefix.clone(),
            code: self.course_code.clone(),
        }
    }
}

pub fn load_courses(path: impl AsRef<Path>) -> Result<Vec<Course>> {
    let data = std::fs::read_to_string(path)?;
    #[derive(Deserialize)]
    struct RawData {
        courses: Vec<Course>,
    }
    let raw: RawData = serde_json::from_str(&data)?;
    Ok(raw.courses)
}

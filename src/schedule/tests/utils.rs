use crate::course::{Course, CourseKey, Lab, LabType, RawDays, Section};
use crate::day::{Day, DaySet};
use crate::time::Time;
use crate::unit::TimeUnit;
use proptest::collection::vec;
use proptest::prelude::Strategy;
use std::sync::Arc;

pub fn id(s: &str) -> Arc<str> {
    Arc::from(s)
}

pub fn key(prefix: &str, code: &str) -> CourseKey {
    CourseKey {
        prefix: id(prefix),
        code: id(code),
    }
}

pub fn node(days: &[Day], start: (u16, u16), end: (u16, u16)) -> TimeUnit {
    course_node("TEST", "000", days, start, end, false)
}

pub fn course_node(
    prefix: &str,
    code: &str,
    days: &[Day],
    start: (u16, u16),
    end: (u16, u16),
    is_lab: bool,
) -> TimeUnit {
    TimeUnit::new(
        DaySet::new(days.iter().copied()),
        Time::hm(start.0, start.1),
        Time::hm(end.0, end.1),
        key(prefix, code),
        0,
        is_lab,
    )
    .unwrap()
}

/// Formats a clock time the way course rows carry it, e.g. `"2:05 pm"`.
pub fn twelve_hour(t: Time) -> String {
    let (hour, marker) = match t.hours() {
        0 => (12, "am"),
        h @ 1..=11 => (h, "am"),
        12 => (12, "pm"),
        h => (h - 12, "pm"),
    };
    format!("{}:{:02} {}", hour, t.minutes(), marker)
}

pub fn add_course(courses: &mut Vec<Course>, prefix: &str, code: &str) {
    courses.push(Course {
        course_prefix: id(prefix),
        course_code: id(code),
        sections: vec![],
    });
}

fn find_course<'a>(courses: &'a mut [Course], prefix: &str, code: &str) -> &'a mut Course {
    courses
        .iter_mut()
        .find(|c| &*c.course_prefix == prefix && &*c.course_code == code)
        .unwrap()
}

pub fn add_section(
    courses: &mut Vec<Course>,
    prefix: &str,
    code: &str,
    days: &str,
    start_time: &str,
    end_time: &str,
) {
    let course = find_course(courses, prefix, code);
    course.sections.push(Section {
        section_id: Some(id(&course.sections.len().to_string())),
        section_instructor: vec!["Staff".to_string()],
        section_days: RawDays::Joined(days.to_string()),
        section_start_time: start_time.to_string(),
        section_end_time: end_time.to_string(),
        labs: vec![],
    });
}

pub fn add_lab(
    courses: &mut Vec<Course>,
    prefix: &str,
    code: &str,
    section_index: usize,
    days: &str,
    start_time: &str,
    end_time: &str,
    lab_type: LabType,
) {
    let section = &mut find_course(courses, prefix, code).sections[section_index];
    section.labs.push(Lab {
        lab_id: None,
        lab_days: RawDays::Joined(days.to_string()),
        lab_start_time: start_time.to_string(),
        lab_end_time: end_time.to_string(),
        lab_type,
    });
}

pub fn arb_days() -> impl Strategy<Value = DaySet> {
    (0u8..128).prop_map(|bits| {
        Day::ALL
            .into_iter()
            .filter(|d| bits & (1 << *d as u8) != 0)
            .collect::<DaySet>()
    })
}

/// Start between 07:00 and 20:59, lasting 10 to 179 minutes.
pub fn arb_interval() -> impl Strategy<Value = (Time, Time)> {
    (7 * 60..21 * 60u16, 10..180u16).prop_map(|(start, len)| (Time(start), Time(start + len)))
}

pub fn arb_node() -> impl Strategy<Value = TimeUnit> {
    (arb_days(), arb_interval()).prop_map(|(days, (start, end))| {
        TimeUnit::new(days, start, end, key("ARB", "000"), 0, false).unwrap()
    })
}

fn arb_raw_block() -> impl Strategy<Value = (String, String, String)> {
    (arb_days(), arb_interval())
        .prop_map(|(days, (start, end))| (days.to_string(), twelve_hour(start), twelve_hour(end)))
}

pub fn arb_course(code: usize) -> impl Strategy<Value = Course> {
    vec((arb_raw_block(), vec(arb_raw_block(), 0..3)), 0..4).prop_map(move |sections| Course {
        course_prefix: id("ARB"),
        course_code: id(&code.to_string()),
        sections: sections
            .into_iter()
            .map(|((days, start, end), labs)| Section {
                section_id: None,
                section_instructor: vec![],
                section_days: RawDays::Joined(days),
                section_start_time: start,
                section_end_time: end,
                labs: labs
                    .into_iter()
                    .map(|(days, start, end)| Lab {
                        lab_id: None,
                        lab_days: RawDays::Joined(days),
                        lab_start_time: start,
                        lab_end_time: end,
                        lab_type: LabType::Discussion,
                    })
                    .collect(),
            })
            .collect(),
    })
}

pub fn arb_courses() -> impl Strategy<Value = Vec<Course>> {
    (arb_course(1), arb_course(2), arb_course(3)).prop_map(|(a, b, c)| vec![a, b, c])
}

use crate::course::{Course, LabType};
use crate::error::Result;
use crate::schedule::Schedule;
use crate::schedule::cartesian::cartesian_product;
use crate::schedule::conflict::has_conflict;
use crate::schedule::merge::merge;
use crate::unit::TimeUnit;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Builds every conflict-free schedule taking one sub-schedule per course.
#[derive(Clone, Debug, Default)]
pub struct Generator {
    limit: Option<usize>,
}

impl Generator {
    pub fn new() -> Generator {
        Generator::default()
    }

    /// Caps the number of candidates kept after each course is merged in.
    pub fn with_limit(mut self, limit: usize) -> Generator {
        self.limit = Some(limit);
        self
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn generate(&self, courses: &[Course]) -> Result<Vec<Schedule>> {
        // every course is validated before the fold, which may stop early
        let per_course = courses
            .iter()
            .map(generate_sub_schedules)
            .collect::<Result<Vec<_>>>()?;

        let mut per_course = courses.iter().zip(per_course);
        let Some((first_course, first)) = per_course.next() else {
            return Ok(vec![]);
        };
        let mut candidates = self.cap(first);
        debug!(course = %first_course.key(), candidates = candidates.len(), "seeded fold");

        for (course, subs) in per_course {
            if candidates.is_empty() {
                break;
            }
            candidates = self.cap(merge(&candidates, &subs));
            debug!(course = %course.key(), candidates = candidates.len(), "merged course");
        }

        if candidates.is_empty() {
            debug!("no viable schedule");
        }
        self.assert_invariants(&candidates);
        Ok(candidates)
    }

    fn cap(&self, mut candidates: Vec<Schedule>) -> Vec<Schedule> {
        if let Some(limit) = self.limit {
            if candidates.len() > limit {
                warn!(limit, dropped = candidates.len() - limit, "truncating candidates");
                candidates.truncate(limit);
            }
        }
        candidates
    }

    fn assert_invariants(&self, schedules: &[Schedule]) {
        debug_assert!(
            schedules.iter().all(|s| !s.has_conflict()),
            "Generated schedule contains overlapping units"
        );
        debug_assert!(
            self.limit.is_none_or(|limit| schedules.len() <= limit),
            "Candidate limit exceeded"
        );
    }
}

/// Every conflict-free combination of one section with one lab of each lab
/// type attached to it. Sections without labs stand alone.
pub fn generate_sub_schedules(course: &Course) -> Result<Vec<Schedule>> {
    let key = course.key();
    let mut subs = vec![];

    for (index, section) in course.sections.iter().enumerate() {
        let section_choice = [vec![TimeUnit::section(&key, index, section)?]];

        let mut labs_by_type = BTreeMap::<LabType, Vec<Vec<TimeUnit>>>::new();
        for (lab_index, lab) in section.labs.iter().enumerate() {
            labs_by_type
                .entry(lab.lab_type)
                .or_default()
                .push(vec![TimeUnit::lab(&key, lab_index, lab)?]);
        }

        let mut inputs: Vec<&[Vec<TimeUnit>]> = vec![section_choice.as_slice()];
        inputs.extend(labs_by_type.values().map(Vec::as_slice));

        subs.extend(
            cartesian_product::<TimeUnit, _>(&inputs)
                .into_iter()
                .filter(|units| !has_conflict(units))
                .map(Schedule::from),
        );
    }

    debug!(course = %key, sub_schedules = subs.len(), "expanded course");
    Ok(subs)
}

/// Folds [`merge`] across the courses left to right, pruning conflicts after
/// each course instead of building the full product first.
pub fn generate_schedules(courses: &[Course]) -> Result<Vec<Schedule>> {
    Generator::default().generate(courses)
}

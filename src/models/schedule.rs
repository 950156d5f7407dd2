//! Schedule (search output) model.
//!
//! A schedule is one complete, conflict-free assignment of exactly one
//! section to every input course. The engine emits each schedule as an
//! independent snapshot — entries are copied out of the search stack at
//! emission time and never alias engine working state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Section, Weekday};

/// One course→section choice within a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Course name (key from the input catalog).
    pub course: String,
    /// The chosen section.
    pub section: Section,
}

/// A complete conflict-free assignment of one section per course.
///
/// Entries appear in course visit order (the input catalog order), which
/// is part of the engine's observable output contract. `section_for`
/// provides map-style lookup by course name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Chosen sections, one per input course, in catalog order.
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a course→section choice.
    pub fn push(&mut self, course: impl Into<String>, section: Section) {
        self.entries.push(ScheduleEntry {
            course: course.into(),
            section,
        });
    }

    /// Number of courses in this schedule.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this schedule has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.iter()
    }

    /// The chosen section for a course, if present.
    pub fn section_for(&self, course: &str) -> Option<&Section> {
        self.entries
            .iter()
            .find(|e| e.course == course)
            .map(|e| &e.section)
    }

    /// Counts scheduled meetings per weekday across all chosen sections.
    ///
    /// Feeds day-load filters such as
    /// [`crate::filters::too_many_per_day`]. Unscheduled meetings
    /// contribute nothing.
    pub fn meetings_per_day(&self) -> HashMap<Weekday, usize> {
        let mut counts = HashMap::new();
        for entry in &self.entries {
            for meeting in &entry.section.meetings {
                if !meeting.is_scheduled() {
                    continue;
                }
                for &day in &meeting.days {
                    *counts.entry(day).or_insert(0) += 1;
                }
            }
        }
        counts
    }
}

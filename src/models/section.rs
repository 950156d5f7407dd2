//! Course section model.
//!
//! A section is one registration option for a course: a CRN (course
//! registration number), one or more weekly meeting blocks (a lecture,
//! optionally a linked lab or recitation), and seat/campus metadata.
//!
//! # Conflict Semantics
//!
//! Two sections conflict iff **any** pair of their meeting blocks
//! overlaps — an existential test. A section whose lab is clear but
//! whose lecture collides still conflicts as a whole.

use serde::{Deserialize, Serialize};

use super::MeetingTime;

/// One registration option for a course.
///
/// The `meetings` list is non-empty for well-formed catalogs (checked by
/// [`crate::validation::validate_catalog`]). `is_open` and `campus` are
/// informational: the search engine ignores them, but caller-side
/// filters may not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Course registration number, unique within a term.
    pub crn: u32,
    /// Weekly meeting blocks (lecture, plus any linked lab/recitation).
    pub meetings: Vec<MeetingTime>,
    /// Whether the section has open seats. Informational only.
    pub is_open: bool,
    /// Campus identifier. Informational only.
    pub campus: String,
}

impl Section {
    /// Creates an open section with no meetings yet.
    pub fn new(crn: u32) -> Self {
        Self {
            crn,
            meetings: Vec::new(),
            is_open: true,
            campus: String::new(),
        }
    }

    /// Adds a meeting block.
    pub fn with_meeting(mut self, meeting: MeetingTime) -> Self {
        self.meetings.push(meeting);
        self
    }

    /// Sets the campus identifier.
    pub fn with_campus(mut self, campus: impl Into<String>) -> Self {
        self.campus = campus.into();
        self
    }

    /// Marks the section as having no open seats.
    pub fn closed(mut self) -> Self {
        self.is_open = false;
        self
    }

    /// Whether this section carries a linked lab/recitation component.
    #[inline]
    pub fn has_linked_component(&self) -> bool {
        self.meetings.len() > 1
    }

    /// Whether any meeting of this section overlaps any meeting of `other`.
    ///
    /// Existential over all meeting pairs, short-circuiting on the first
    /// overlap found. The engine never calls this for two sections of
    /// the same course.
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.meetings
            .iter()
            .any(|a| other.meetings.iter().any(|b| a.overlaps(b)))
    }
}

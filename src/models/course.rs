//! Course model.
//!
//! A course is a named group of interchangeable sections. Non-academic
//! commitments (a job shift, ensemble rehearsal, sports practice) are
//! modeled as ordinary courses with a synthetic name and a single
//! section; placing them first in the input list prunes the search
//! early, since they can never be swapped around a conflict.

use serde::{Deserialize, Serialize};

use super::Section;

/// A catalog entry: a course name, display title, and its candidate
/// sections.
///
/// `name` is the stable key ("CIS 1068") and must be unique within a
/// generation request. Section order is a performance hint only — it
/// never changes which schedules exist, only how quickly dead branches
/// are abandoned. Courses are read-only during a search run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Stable key, unique within the input list (e.g. "CIS 1068").
    pub name: String,
    /// Display title (e.g. "Program Design and Abstraction").
    pub title: String,
    /// Candidate sections, in caller-chosen order.
    pub sections: Vec<Section>,
}

impl Course {
    /// Creates a course with no sections yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: String::new(),
            sections: Vec::new(),
        }
    }

    /// Sets the display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Adds a candidate section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Number of candidate sections.
    #[inline]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Whether this course has any sections.
    #[inline]
    pub fn has_sections(&self) -> bool {
        !self.sections.is_empty()
    }
}

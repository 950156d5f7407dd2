//! Catalog input validation.
//!
//! The search engine requires a well-formed catalog and fails fast on a
//! bad one rather than inferring a default (an empty catalog must never
//! silently produce an empty or singleton result set). Checks:
//! - Non-empty course list
//! - Every course has at least one section
//! - Course names unique within the request
//! - Every section has at least one meeting block
//! - Scheduled meeting times are ordered and within the day
//!
//! All detected problems are collected and returned together, so a
//! caller can report every defect in a scraped catalog at once.

use thiserror::Error;

use crate::models::{Course, UNSCHEDULED_MINUTE};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Last valid minute of a day (23:59).
const MAX_MINUTE: i16 = 1439;

/// A catalog validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of catalog validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The course list is empty.
    EmptyCatalog,
    /// A course has no sections.
    SectionlessCourse,
    /// Two courses share the same name.
    DuplicateCourseName,
    /// A section has no meeting blocks.
    EmptyMeetings,
    /// A meeting has an out-of-range or inverted time pair.
    InvalidTimeRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a catalog before schedule generation.
///
/// Checks:
/// 1. The course list is non-empty
/// 2. Course names are unique within the list
/// 3. Every course has at least one section
/// 4. Every section has at least one meeting block
/// 5. Every scheduled meeting satisfies `0 <= start <= end <= 1439`;
///    sentinel times must be sentinel on both ends
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();

    if courses.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCatalog,
            "Catalog contains no courses",
        ));
        return Err(errors);
    }

    let mut names = std::collections::HashSet::new();
    for course in courses {
        if !names.insert(course.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCourseName,
                format!("Duplicate course name: {}", course.name),
            ));
        }

        if !course.has_sections() {
            errors.push(ValidationError::new(
                ValidationErrorKind::SectionlessCourse,
                format!("Course '{}' has no sections", course.name),
            ));
        }

        for section in &course.sections {
            if section.meetings.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EmptyMeetings,
                    format!(
                        "Section {} of course '{}' has no meeting blocks",
                        section.crn, course.name
                    ),
                ));
            }

            for meeting in &section.meetings {
                if let Some(problem) = time_range_problem(meeting.start_minute, meeting.end_minute)
                {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidTimeRange,
                        format!(
                            "Section {} of course '{}': {problem} ({}..{})",
                            section.crn, course.name, meeting.start_minute, meeting.end_minute
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Describes what is wrong with a time pair, if anything.
fn time_range_problem(start: i16, end: i16) -> Option<&'static str> {
    let start_sentinel = start == UNSCHEDULED_MINUTE;
    let end_sentinel = end == UNSCHEDULED_MINUTE;
    if start_sentinel != end_sentinel {
        return Some("time sentinel on only one end");
    }
    if start_sentinel {
        return None; // fully unscheduled, nothing to check
    }
    if start < 0 || end > MAX_MINUTE {
        return Some("minutes outside 0..=1439");
    }
    if start > end {
        return Some("start after end");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MeetingTime, Section};

    fn valid_course(name: &str, crn: u32) -> Course {
        Course::new(name).with_section(
            Section::new(crn)
                .with_meeting(MeetingTime::new(MeetingTime::parse_days("MWF"), 540, 590)),
        )
    }

    #[test]
    fn test_valid_catalog() {
        let catalog = vec![valid_course("CIS 1068", 4521), valid_course("MATH 1041", 7010)];
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn test_empty_catalog() {
        let errors = validate_catalog(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyCatalog);
    }

    #[test]
    fn test_sectionless_course() {
        let catalog = vec![valid_course("CIS 1068", 4521), Course::new("PHYS 1061")];
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::SectionlessCourse));
    }

    #[test]
    fn test_duplicate_course_name() {
        let catalog = vec![valid_course("CIS 1068", 4521), valid_course("CIS 1068", 4522)];
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateCourseName));
    }

    #[test]
    fn test_section_without_meetings() {
        let catalog = vec![Course::new("CIS 1068").with_section(Section::new(4521))];
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyMeetings));
    }

    #[test]
    fn test_inverted_time_range() {
        let catalog = vec![Course::new("CIS 1068").with_section(
            Section::new(4521)
                .with_meeting(MeetingTime::new(MeetingTime::parse_days("MWF"), 590, 540)),
        )];
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidTimeRange));
    }

    #[test]
    fn test_half_sentinel_time() {
        let catalog = vec![Course::new("CIS 1068").with_section(
            Section::new(4521)
                .with_meeting(MeetingTime::new(MeetingTime::parse_days("MWF"), -1, 590)),
        )];
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidTimeRange));
    }

    #[test]
    fn test_unscheduled_meeting_is_valid() {
        let catalog = vec![Course::new("ONLINE 1001")
            .with_section(Section::new(1).with_meeting(MeetingTime::unscheduled()))];
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn test_out_of_day_minutes() {
        let catalog = vec![Course::new("CIS 1068").with_section(
            Section::new(4521)
                .with_meeting(MeetingTime::new(MeetingTime::parse_days("MWF"), 540, 1500)),
        )];
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidTimeRange));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let catalog = vec![
            Course::new("EMPTY"),
            Course::new("CIS 1068").with_section(Section::new(4521)),
        ];
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors.len() >= 2);
    }

    #[test]
    fn test_error_display() {
        let errors = validate_catalog(&[]).unwrap_err();
        assert_eq!(errors[0].to_string(), "Catalog contains no courses");
    }
}

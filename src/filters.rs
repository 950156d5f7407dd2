//! Example downstream schedule filters.
//!
//! The search engine eliminates time conflicts and nothing else. Soft
//! preferences — day load, open seats, campus, instructor — are applied
//! by consumers as a pure post-processing pass over the engine output.
//! These predicates are two such passes; the engine never calls them.

use crate::models::Schedule;

/// Whether any single weekday carries more than `max_per_day` meetings.
///
/// Typical use removes overloaded days after generation:
///
/// ```
/// use course_schedule::filters::too_many_per_day;
/// use course_schedule::models::{Course, MeetingTime, Section};
/// use course_schedule::search::generate_schedules;
///
/// let course = Course::new("CIS 1068").with_section(
///     Section::new(4521)
///         .with_meeting(MeetingTime::new(MeetingTime::parse_days("MWF"), 540, 590)),
/// );
/// let mut schedules = generate_schedules(&[course]).unwrap();
/// schedules.retain(|s| !too_many_per_day(s, 4));
/// assert_eq!(schedules.len(), 1);
/// ```
pub fn too_many_per_day(schedule: &Schedule, max_per_day: usize) -> bool {
    schedule
        .meetings_per_day()
        .values()
        .any(|&count| count > max_per_day)
}

/// Whether every chosen section still has open seats.
pub fn all_sections_open(schedule: &Schedule) -> bool {
    schedule.iter().all(|entry| entry.section.is_open)
}

//! Course catalog domain models.
//!
//! Data types for one generation request: a catalog of [`Course`]s, each
//! offering interchangeable [`Section`]s composed of weekly
//! [`MeetingTime`] blocks, and the [`Schedule`] snapshots the search
//! engine emits.
//!
//! All types are serde-serializable; catalogs arrive as JSON from the
//! scraping and persistence layers that sit outside this crate.

mod course;
mod meeting;
mod schedule;
mod section;

pub use course::Course;
pub use meeting::{MeetingTime, Weekday, UNSCHEDULED_MINUTE};
pub use schedule::{Schedule, ScheduleEntry};
pub use section::Section;

//! Conflict-free course schedule generation.
//!
//! Given a catalog of courses, each offering one or more interchangeable
//! sections with fixed weekly meeting times, this crate enumerates every
//! assignment of exactly one section per course in which no two chosen
//! sections occupy overlapping time on the same day.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Section`, `MeetingTime`,
//!   `Weekday`, `Schedule`
//! - **`search`**: The backtracking enumeration engines (sequential and
//!   subtree-parallel)
//! - **`validation`**: Fail-fast catalog integrity checks
//! - **`filters`**: Example downstream post-filters (day load, open seats)
//!
//! # Scope
//!
//! Catalog acquisition (registration-page scraping, persistence) and
//! preference ranking live outside this crate; it consumes ready-made
//! catalogs and produces raw conflict-free combinations. Non-academic
//! commitments (jobs, rehearsals) are modeled as single-section courses
//! and placed first in the catalog to prune the search early.
//!
//! # Example
//!
//! ```
//! use course_schedule::models::{Course, MeetingTime, Section};
//! use course_schedule::search::generate_schedules;
//!
//! let catalog = vec![
//!     Course::new("CIS 1068").with_section(
//!         Section::new(4521)
//!             .with_meeting(MeetingTime::new(MeetingTime::parse_days("MWF"), 540, 590)),
//!     ),
//!     Course::new("MATH 1041")
//!         .with_section(
//!             Section::new(7010)
//!                 .with_meeting(MeetingTime::new(MeetingTime::parse_days("MWF"), 560, 610)),
//!         )
//!         .with_section(
//!             Section::new(7011)
//!                 .with_meeting(MeetingTime::new(MeetingTime::parse_days("TR"), 540, 590)),
//!         ),
//! ];
//!
//! let schedules = generate_schedules(&catalog).unwrap();
//! assert_eq!(schedules.len(), 1);
//! assert_eq!(schedules[0].section_for("MATH 1041").unwrap().crn, 7011);
//! ```

pub mod filters;
pub mod models;
pub mod search;
pub mod validation;

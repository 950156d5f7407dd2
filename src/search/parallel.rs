//! Subtree-parallel schedule enumeration.
//!
//! Each section of the first course roots an independent, disjoint
//! subtree of the search space: no mutable state crosses subtree
//! boundaries (courses and sections are read-only during search), so
//! the subtrees can be explored on separate workers with no locking.
//! Per-worker result buffers are concatenated in first-section order,
//! which keeps the output identical — order included — to the
//! sequential engine.

use rayon::prelude::*;

use crate::models::{Course, Schedule};
use crate::search::enumerate;
use crate::validation::{validate_catalog, ValidationError};

/// Generates every conflict-free schedule, exploring first-course
/// subtrees in parallel.
///
/// Same contract as [`crate::search::generate_schedules`]: the catalog
/// is validated first, an over-constrained catalog yields an empty
/// vector, and the emission order matches the sequential engine exactly.
/// Worthwhile when the first course has several sections and the
/// remaining product is large; for small catalogs the sequential engine
/// avoids the thread-pool overhead.
pub fn generate_schedules_parallel(
    courses: &[Course],
) -> Result<Vec<Schedule>, Vec<ValidationError>> {
    validate_catalog(courses)?;

    let buffers: Vec<Vec<Schedule>> = (0..courses[0].section_count())
        .into_par_iter()
        .map(|first_section| enumerate(courses, Some(first_section)))
        .collect();

    Ok(buffers.into_iter().flatten().collect())
}

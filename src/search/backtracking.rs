//! Iterative backtracking schedule enumeration.
//!
//! # Algorithm
//!
//! 1. At depth `d`, try sections of `courses[d]` strictly in list order,
//!    resuming from the saved cursor on revisit.
//! 2. A candidate is accepted iff it conflicts with no section already
//!    chosen at shallower depths (linear scan, short-circuit on first
//!    conflict).
//! 3. On acceptance, descend; when every course is assigned, snapshot
//!    the assignment into the results and resume at the deepest course.
//! 4. When a depth exhausts its sections, reset its cursor and back up
//!    one depth; backing up past depth 0 terminates the search.
//!
//! The cursor at each depth advances monotonically between backtracks,
//! so the finite space is explored exactly once per candidate path.
//!
//! # Complexity
//!
//! Worst case O(∏ sections(c) × n²) for n courses — the output itself
//! can be combinatorially large when few sections conflict. There is no
//! mitigation inside the engine; callers order courses so that tightly
//! constrained ones (single-section commitments such as a job shift)
//! come first and prune the tree early. Ordering never changes the set
//! of results, only the cost of finding them.

use crate::models::{Course, Schedule, Section};
use crate::validation::{validate_catalog, ValidationError};

/// Generates every conflict-free schedule for the given catalog.
///
/// Exactly one section is chosen per course. The catalog is validated
/// first (non-empty, no sectionless courses, unique names, well-formed
/// times) and generation fails fast on a bad one. An over-constrained
/// catalog with no conflict-free combination yields `Ok` with an empty
/// vector — that is an answer, not an error.
///
/// # Example
///
/// ```
/// use course_schedule::models::{Course, MeetingTime, Section};
/// use course_schedule::search::generate_schedules;
///
/// let cis = Course::new("CIS 1068").with_section(
///     Section::new(4521)
///         .with_meeting(MeetingTime::new(MeetingTime::parse_days("MW"), 540, 590)),
/// );
/// let math = Course::new("MATH 1041")
///     .with_section(
///         Section::new(7010)
///             .with_meeting(MeetingTime::new(MeetingTime::parse_days("MW"), 540, 590)),
///     )
///     .with_section(
///         Section::new(7011)
///             .with_meeting(MeetingTime::new(MeetingTime::parse_days("TR"), 540, 590)),
///     );
///
/// let schedules = generate_schedules(&[cis, math]).unwrap();
/// assert_eq!(schedules.len(), 1);
/// assert_eq!(schedules[0].section_for("MATH 1041").unwrap().crn, 7011);
/// ```
pub fn generate_schedules(courses: &[Course]) -> Result<Vec<Schedule>, Vec<ValidationError>> {
    validate_catalog(courses)?;
    Ok(enumerate(courses, None))
}

/// Exhaustive DFS over the catalog, optionally with the first course's
/// section pinned (`pinned_first` is a section index into `courses[0]`).
///
/// Pinning roots the search in a single depth-0 subtree; the parallel
/// engine runs one pinned call per first-course section. Callers must
/// pass a validated, non-empty catalog.
pub(crate) fn enumerate(courses: &[Course], pinned_first: Option<usize>) -> Vec<Schedule> {
    let course_count = courses.len();
    let mut results = Vec::new();

    // chosen[d] = accepted section index for courses[d]
    let mut chosen: Vec<usize> = Vec::with_capacity(course_count);
    // cursor[d] = next section index to try at depth d
    let mut cursor = vec![0usize; course_count];

    let base = match pinned_first {
        Some(section_idx) => {
            chosen.push(section_idx);
            1
        }
        None => 0,
    };
    let mut depth = base;

    loop {
        if depth == course_count {
            results.push(snapshot(courses, &chosen));
            if depth == base {
                // One-course pinned subtree: it holds exactly this schedule.
                break;
            }
            chosen.pop();
            depth -= 1;
            continue;
        }

        let sections = &courses[depth].sections;
        let mut accepted = false;
        while cursor[depth] < sections.len() {
            let candidate_idx = cursor[depth];
            cursor[depth] += 1;
            if fits(courses, &chosen, &sections[candidate_idx]) {
                chosen.push(candidate_idx);
                accepted = true;
                break;
            }
        }

        if accepted {
            depth += 1;
        } else {
            // Exhausted this depth: reset its cursor for the next visit
            // and back up, or terminate at the search root.
            cursor[depth] = 0;
            if depth == base {
                break;
            }
            chosen.pop();
            depth -= 1;
        }
    }

    results
}

/// Whether `candidate` is compatible with every already-chosen section.
fn fits(courses: &[Course], chosen: &[usize], candidate: &Section) -> bool {
    chosen
        .iter()
        .enumerate()
        .all(|(depth, &idx)| !candidate.conflicts_with(&courses[depth].sections[idx]))
}

/// Copies the current assignment into an independent [`Schedule`].
///
/// Emitted schedules must never alias the mutable search stack, which
/// keeps backtracking after emission.
fn snapshot(courses: &[Course], chosen: &[usize]) -> Schedule {
    let mut schedule = Schedule::new();
    for (depth, &idx) in chosen.iter().enumerate() {
        schedule.push(
            courses[depth].name.clone(),
            courses[depth].sections[idx].clone(),
        );
    }
    schedule
}

//! Schedule search engines.
//!
//! Enumerates every assignment of one section per course such that no
//! two chosen sections conflict. The search is exhaustive — it neither
//! ranks nor filters beyond the conflict constraint; preference passes
//! (see [`crate::filters`]) run downstream over the output.
//!
//! # Algorithm
//!
//! Depth-first search with backtracking over courses in input order,
//! implemented iteratively with explicit per-depth cursors (no call
//! stack growth for large catalogs). The parallel variant splits the
//! search on the first course's section list; each initial choice roots
//! a disjoint subtree.
//!
//! # Output Contract
//!
//! Schedules are emitted in the order a lexicographic product of the
//! input section orderings would produce, restricted to conflict-free
//! combinations. Both engines produce identical output, order included.

mod backtracking;
mod parallel;

pub use backtracking::generate_schedules;
pub use parallel::generate_schedules_parallel;

pub(crate) use backtracking::enumerate;

//! Waffle solving pipeline
//!
//! Four phases run in order: constraint propagation, per-line candidate
//! enumeration, global assignment search, and swap planning. Each phase
//! reports its own failure class; all failures are recoverable by the caller.

mod assignment;
mod candidates;
mod constraints;
mod engine;
mod error;
mod swaps;

pub use assignment::{Assignment, search_assignments};
pub use candidates::enumerate_candidates;
pub(crate) use candidates::line_candidates;
pub use constraints::propagate;
pub use engine::{Solution, Solver};
pub use error::SolveError;
pub use swaps::{DEFAULT_MAX_SWAPS, apply_swaps, plan_swaps};

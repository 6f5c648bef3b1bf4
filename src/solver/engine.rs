//! Solve pipeline
//!
//! Runs the full pipeline on a parsed board: constraint propagation from
//! the tile colors, per-line candidate enumeration against the dictionary,
//! global assignment search, and minimal swap planning toward the first
//! assignment found.

use crate::core::{Board, Word};

use super::assignment::{Assignment, search_assignments};
use super::candidates::enumerate_candidates;
use super::constraints::propagate;
use super::error::SolveError;
use super::swaps::{DEFAULT_MAX_SWAPS, plan_swaps};

/// The outcome of a successful solve
#[derive(Debug, Clone)]
pub struct Solution {
    assignments: Vec<Assignment>,
    target: Vec<Option<u8>>,
    swaps: Vec<(usize, usize)>,
}

impl Solution {
    /// Every globally consistent assignment, in search order
    #[inline]
    #[must_use]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// The solved per-cell arrangement the swap plan drives toward
    #[inline]
    #[must_use]
    pub fn target(&self) -> &[Option<u8>] {
        &self.target
    }

    /// Minimal swap plan, as pairs of cell indices
    #[inline]
    #[must_use]
    pub fn swaps(&self) -> &[(usize, usize)] {
        &self.swaps
    }
}

/// Waffle solver over a fixed dictionary
pub struct Solver<'a> {
    dictionary: &'a [Word],
    max_swaps: usize,
}

impl<'a> Solver<'a> {
    /// Create a solver with the default swap plan bound
    #[must_use]
    pub const fn new(dictionary: &'a [Word]) -> Self {
        Self {
            dictionary,
            max_swaps: DEFAULT_MAX_SWAPS,
        }
    }

    /// Override the swap plan length bound
    #[must_use]
    pub const fn with_max_swaps(mut self, max_swaps: usize) -> Self {
        self.max_swaps = max_swaps;
        self
    }

    /// Solve a board in place
    ///
    /// Propagation and candidate enumeration update the board's constraint
    /// state as a side effect, which the analysis commands rely on.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NoCandidates`] when a line has no dictionary
    /// word left, [`SolveError::NoAssignment`] when no globally consistent
    /// combination exists, and [`SolveError::SwapDepthExceeded`] when the
    /// target cannot be reached within the swap bound.
    pub fn solve(&self, board: &mut Board) -> Result<Solution, SolveError> {
        propagate(board);
        enumerate_candidates(board, self.dictionary)?;

        let assignments = search_assignments(board);
        let Some(first) = assignments.first() else {
            return Err(SolveError::NoAssignment);
        };

        let target = first.arrangement(board.topology());
        let swaps = plan_swaps(&board.arrangement(), &target, self.max_swaps)
            .ok_or(SolveError::SwapDepthExceeded {
                bound: self.max_swaps,
            })?;

        Ok(Solution {
            assignments,
            target,
            swaps,
        })
    }
}

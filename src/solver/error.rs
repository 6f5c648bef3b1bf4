//! Solve failure taxonomy
//!
//! Four distinct failure classes, reported by the phase that detects them.
//! None are fatal: the caller may re-observe the board, widen the
//! dictionary, or raise the swap depth bound and retry.

use crate::core::{BoardError, LineId};
use std::fmt;

/// Why a solve could not produce a swap plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The observation itself was malformed; no solve was attempted
    Board(BoardError),
    /// A line has zero dictionary candidates after constraint filtering
    NoCandidates { line: LineId },
    /// Every line has candidates but no combination is globally consistent
    NoAssignment,
    /// A valid target exists but no swap sequence within the depth bound
    SwapDepthExceeded { bound: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board(e) => write!(f, "{e}"),
            Self::NoCandidates { line } => {
                write!(f, "Line {line} has no dictionary candidates")
            }
            Self::NoAssignment => {
                write!(f, "No combination of line candidates forms a valid board")
            }
            Self::SwapDepthExceeded { bound } => {
                write!(f, "No swap plan found within {bound} swaps")
            }
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Board(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoardError> for SolveError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}

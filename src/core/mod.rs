//! Core domain types for the Waffle puzzle
//!
//! This module contains the fundamental domain types with zero external
//! dependencies beyond hashing. All types here are pure and testable.

mod board;
mod color;
mod letters;
mod topology;
mod word;

pub use board::{Board, BoardError, Cell, ConstraintSet, Line, Observation};
pub use color::TileColor;
pub use letters::{LetterCounts, LetterSet};
pub use topology::{LineId, Topology, TopologyError};
pub use word::{Word, WordError};

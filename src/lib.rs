//! Waffle Solver
//!
//! A solver for waffle puzzles: square letter grids whose rows and columns
//! spell dictionary words, solved by swapping pairs of tiles under
//! Wordle-style color feedback.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use waffle_solver::core::{Board, Word};
//! use waffle_solver::solver::Solver;
//!
//! let puzzle = std::fs::read_to_string("puzzle.txt").unwrap();
//! let mut board = Board::parse(&puzzle).unwrap();
//!
//! let dictionary = vec![Word::new("sitar").unwrap()];
//! let solution = Solver::new(&dictionary).solve(&mut board).unwrap();
//! println!("{} swaps", solution.swaps().len());
//! ```

// Core domain types
pub mod core;

// Solving pipeline
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

//! Command implementations

pub mod analyze;
pub mod solve;

pub use analyze::{AnalysisReport, CellReport, LineReport, analyze_board};
pub use solve::{SolveConfig, SolveReport, solve_board};

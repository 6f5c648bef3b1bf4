//! Board solving command
//!
//! Parses a puzzle, runs the full solve pipeline, and returns a report
//! suitable for rendering.

use crate::core::{Board, Word};
use crate::solver::{DEFAULT_MAX_SWAPS, Solver};

/// Configuration for solving a board
pub struct SolveConfig {
    pub puzzle: String,
    pub max_swaps: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(puzzle: String) -> Self {
        Self {
            puzzle,
            max_swaps: DEFAULT_MAX_SWAPS,
        }
    }
}

/// Result of solving a board
pub struct SolveReport {
    pub board: Board,
    /// Candidate words remaining per line after propagation
    pub candidates_per_line: Vec<usize>,
    /// Every valid assignment, rows then columns, as word texts
    pub assignments: Vec<Vec<String>>,
    /// The solved arrangement the swap plan drives toward
    pub target: Vec<Option<u8>>,
    /// Swap plan as coordinate pairs, (x, y) to (x, y)
    pub swaps: Vec<((usize, usize), (usize, usize))>,
}

/// Solve a puzzle with the given dictionary
///
/// # Errors
///
/// Returns an error if the puzzle text is malformed, a line has no
/// candidate word, no globally consistent assignment exists, or the
/// target cannot be reached within the swap bound.
pub fn solve_board(config: SolveConfig, dictionary: &[Word]) -> Result<SolveReport, String> {
    let mut board =
        Board::parse(&config.puzzle).map_err(|e| format!("Invalid puzzle: {e}"))?;

    let solver = Solver::new(dictionary).with_max_swaps(config.max_swaps);
    let solution = solver.solve(&mut board).map_err(|e| e.to_string())?;

    let candidates_per_line = board
        .lines()
        .iter()
        .map(|line| line.candidates().len())
        .collect();

    let assignments = solution
        .assignments()
        .iter()
        .map(|a| a.words().iter().map(|w| w.text().to_string()).collect())
        .collect();

    let topology = board.topology();
    let swaps = solution
        .swaps()
        .iter()
        .map(|&(a, b)| (topology.coords_of(a), topology.coords_of(b)))
        .collect();

    let target = solution.target().to_vec();

    Ok(SolveReport {
        board,
        candidates_per_line,
        assignments,
        target,
        swaps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    const SOLVED: &str = "\
        SITAR\n\
        H.R.O\n\
        ADULT\n\
        R.C.O\n\
        POKER\n\
        ggggg\n\
        g.g.g\n\
        ggggg\n\
        g.g.g\n\
        ggggg\n";

    const ONE_SWAP: &str = "\
        SLTAR\n\
        H.R.O\n\
        ADUIT\n\
        R.C.O\n\
        POKER\n\
        gbggg\n\
        g.g.g\n\
        gggbg\n\
        g.g.g\n\
        ggggg\n";

    #[test]
    fn solved_puzzle_reports_no_swaps() {
        let dictionary = words_from_slice(WORDS);
        let config = SolveConfig::new(SOLVED.to_string());

        let report = solve_board(config, &dictionary).unwrap();

        assert!(report.swaps.is_empty());
        assert_eq!(report.candidates_per_line.len(), 6);
        assert_eq!(
            report.assignments[0],
            vec!["SITAR", "ADULT", "POKER", "SHARP", "TRUCK", "ROTOR"]
        );
    }

    #[test]
    fn scrambled_puzzle_reports_coordinate_swaps() {
        let dictionary = words_from_slice(WORDS);
        let config = SolveConfig::new(ONE_SWAP.to_string());

        let report = solve_board(config, &dictionary).unwrap();

        // Cell 1 is (1, 0), cell 13 is (3, 2)
        assert_eq!(report.swaps, vec![((1, 0), (3, 2))]);
    }

    #[test]
    fn malformed_puzzle_returns_error() {
        let dictionary = words_from_slice(WORDS);
        let config = SolveConfig::new("not a puzzle".to_string());

        assert!(solve_board(config, &dictionary).is_err());
    }

    #[test]
    fn empty_dictionary_returns_error() {
        let config = SolveConfig::new(SOLVED.to_string());

        assert!(solve_board(config, &[]).is_err());
    }
}

//! Board analysis command
//!
//! Runs constraint propagation and candidate enumeration without the search
//! phase, reporting what the colors alone reveal about each cell and line.

use crate::core::{Board, LetterSet, Word};
use crate::solver::{line_candidates, propagate};

/// Per-cell analysis
pub struct CellReport {
    pub x: usize,
    pub y: usize,
    pub letter: char,
    pub possible: LetterSet,
}

/// Per-line analysis
pub struct LineReport {
    pub known_letters: String,
    pub candidates: Vec<String>,
}

/// Result of analyzing a board
pub struct AnalysisReport {
    pub board: Board,
    pub cells: Vec<CellReport>,
    pub lines: Vec<LineReport>,
}

/// Analyze a puzzle against the given dictionary
///
/// Unlike solving, analysis tolerates lines with no remaining candidate:
/// the report shows the empty list so the caller can see which line is
/// over-constrained.
///
/// # Errors
///
/// Returns an error if the puzzle text is malformed.
pub fn analyze_board(puzzle: &str, dictionary: &[Word]) -> Result<AnalysisReport, String> {
    let mut board = Board::parse(puzzle).map_err(|e| format!("Invalid puzzle: {e}"))?;
    propagate(&mut board);

    let cells = board
        .cells()
        .map(|cell| CellReport {
            x: cell.x(),
            y: cell.y(),
            letter: cell.letter() as char,
            possible: board
                .constraint(cell.index())
                .map_or(LetterSet::EMPTY, |c| c.possible()),
        })
        .collect();

    let lines = board
        .lines()
        .iter()
        .map(|line| LineReport {
            known_letters: line
                .known_letters()
                .iter()
                .map(|&l| l as char)
                .collect(),
            candidates: line_candidates(&board, line, dictionary)
                .iter()
                .map(|w| w.text().to_string())
                .collect(),
        })
        .collect();

    Ok(AnalysisReport {
        board,
        cells,
        lines,
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

    #[test]
    fn analysis_covers_every_tile() {
        let dictionary = words_from_slice(WORDS);
        let report = analyze_board(SOLVED, &dictionary).unwrap();

        assert_eq!(report.cells.len(), 21);
        assert_eq!(report.lines.len(), 6);
    }

    #[test]
    fn exact_cells_pin_to_one_letter() {
        let dictionary = words_from_slice(WORDS);
        let report = analyze_board(SOLVED, &dictionary).unwrap();

        for cell in &report.cells {
            assert_eq!(cell.possible.len(), 1);
            assert!(cell.possible.contains(cell.letter as u8));
        }
    }

    #[test]
    fn empty_candidate_lines_are_reported_not_rejected() {
        let dictionary = words_from_slice(&["SITAR"]);
        let report = analyze_board(SOLVED, &dictionary).unwrap();

        assert_eq!(report.lines[0].candidates, vec!["SITAR"]);
        assert!(report.lines[1].candidates.is_empty());
    }

    #[test]
    fn malformed_puzzle_returns_error() {
        let dictionary = words_from_slice(WORDS);
        assert!(analyze_board("nonsense", &dictionary).is_err());
    }
}

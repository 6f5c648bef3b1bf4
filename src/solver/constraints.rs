//! Constraint propagation from tile colors
//!
//! Turns one color observation per cell into tightened per-cell possible
//! letter sets and per-line known-letter lists. The per-cell rules commute
//! because they only ever remove letters; known-letter lists are rebuilt from
//! scratch on every run, so propagation is idempotent.

use crate::core::{Board, Cell, TileColor};
use rustc_hash::FxHashSet;

/// Propagate all tile color observations into the board's constraint sets
pub fn propagate(board: &mut Board) {
    for id in 0..board.lines().len() {
        board.line_mut(id).clear_known_letters();
    }

    // Cells are immutable; snapshot them so constraints can be mutated freely.
    let cells: Vec<Cell> = board.cells().cloned().collect();

    for cell in &cells {
        apply_color_rule(board, cell, &cells);
    }
    for cell in &cells {
        apply_uniqueness_rule(board, cell, &cells);
    }
}

/// First pass: the per-cell color rule
fn apply_color_rule(board: &mut Board, cell: &Cell, cells: &[Cell]) {
    let letter = cell.letter();
    match cell.color() {
        TileColor::Exact => {
            if let Some(constraint) = board.constraint_mut(cell.index()) {
                constraint.fix(letter);
            }
            for &line in cell.lines() {
                board.line_mut(line).push_known_letter(letter);
            }

            // If every copy of this letter is already placed, no other cell
            // can hold it.
            if board.is_fully_placed(letter) {
                for other in cells {
                    if other.letter() != letter
                        && let Some(constraint) = board.constraint_mut(other.index())
                    {
                        constraint.mark_impossible(letter);
                    }
                }
            }
        }
        TileColor::Present => {
            if let Some(constraint) = board.constraint_mut(cell.index()) {
                constraint.mark_impossible(letter);
            }
            // A non-intersection cell pins the letter to its single line. For
            // intersection cells the which-line ambiguity is left unresolved.
            if let [line] = cell.lines() {
                board.line_mut(*line).push_known_letter(letter);
            }
        }
        TileColor::Absent => {
            if let Some(constraint) = board.constraint_mut(cell.index()) {
                constraint.mark_impossible(letter);
            }
        }
    }
}

/// Second pass: line-wide and board-wide eliminations
///
/// Applied only to cells that are the unique occurrence of their letter
/// within their own lines. Repeated letters are skipped: their colors depend
/// on left-to-right evaluation order this propagator does not model.
fn apply_uniqueness_rule(board: &mut Board, cell: &Cell, cells: &[Cell]) {
    let letter = cell.letter();

    if cell.color().is_exact() {
        return;
    }

    let has_sibling = cell.lines().iter().any(|&line| {
        board.line(line).cells().iter().any(|&index| {
            index != cell.index()
                && board.cell(index).is_some_and(|other| other.letter() == letter)
        })
    });
    if has_sibling {
        return;
    }

    match cell.color() {
        TileColor::Absent => {
            // The letter cannot appear anywhere in the cell's lines.
            let members: Vec<usize> = cell
                .lines()
                .iter()
                .flat_map(|&line| board.line(line).cells().to_vec())
                .collect();
            for index in members {
                if let Some(constraint) = board.constraint_mut(index) {
                    constraint.mark_impossible(letter);
                }
            }
        }
        TileColor::Present => {
            // The board's only copy of this letter belongs somewhere in the
            // cell's own lines, so it is impossible everywhere else.
            if board.cells_showing(letter).len() != 1 {
                return;
            }
            let own: FxHashSet<usize> = cell
                .lines()
                .iter()
                .flat_map(|&line| board.line(line).cells().iter().copied())
                .collect();
            for other in cells {
                if !own.contains(&other.index())
                    && !other.color().is_exact()
                    && let Some(constraint) = board.constraint_mut(other.index())
                {
                    constraint.mark_impossible(letter);
                }
            }
        }
        TileColor::Exact => unreachable!("handled above"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, LetterSet};

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

    fn propagated(text: &str) -> Board {
        let mut board = Board::parse(text).unwrap();
        propagate(&mut board);
        board
    }

    #[test]
    fn exact_cells_are_pinned_to_their_letter() {
        let board = propagated(SOLVED);
        for cell in board.cells() {
            let constraint = board.constraint(cell.index()).unwrap();
            assert_eq!(
                constraint.possible(),
                LetterSet::single(cell.letter()),
                "cell {} should be pinned",
                cell.index()
            );
        }
    }

    #[test]
    fn exact_appends_known_letters_to_both_lines() {
        let board = propagated(SOLVED);
        // Row 0 (SITAR) has every letter known
        assert_eq!(board.line(0).known_letters(), b"SITAR");
        // Column 0 (SHARP): S arrives via the shared corner cell
        assert!(board.line(3).known_letters().contains(&b'S'));
    }

    #[test]
    fn fully_placed_letter_removed_everywhere_else() {
        // K appears once, green at (2, 4). No other cell may hold K.
        let board = propagated(SOLVED);
        for cell in board.cells() {
            if cell.letter() != b'K' {
                let constraint = board.constraint(cell.index()).unwrap();
                assert!(!constraint.is_possible(b'K'));
            }
        }
    }

    #[test]
    fn present_marks_own_cell_impossible_and_records_known() {
        // Make the I at (1, 0) yellow: row-only cell, so row 0 learns I.
        let text = SOLVED.replacen("ggggg", "gyggg", 1);
        let board = propagated(&text);

        let constraint = board.constraint(1).unwrap();
        assert!(!constraint.is_possible(b'I'));
        assert!(board.line(0).known_letters().contains(&b'I'));
    }

    #[test]
    fn present_at_intersection_records_no_known_letter() {
        // Make the corner S at (0, 0) yellow: two lines, ambiguity unresolved.
        let text = SOLVED.replacen("ggggg", "ygggg", 1);
        let board = propagated(&text);

        assert!(!board.constraint(0).unwrap().is_possible(b'S'));
        assert!(!board.line(0).known_letters().contains(&b'S'));
        assert!(!board.line(3).known_letters().contains(&b'S'));
    }

    #[test]
    fn absent_unique_letter_removed_from_whole_line() {
        // Make the I at (1, 0) black: I occurs nowhere else in row 0, so the
        // whole row loses I.
        let text = SOLVED.replacen("ggggg", "gbggg", 1);
        let board = propagated(&text);

        for &index in board.line(0).cells() {
            assert!(!board.constraint(index).unwrap().is_possible(b'I'));
        }
        // Cells outside row 0 are unaffected by the line-wide rule. (2, 2)
        // shows I green, so it stays pinned to I.
        assert!(board.constraint(12).unwrap().is_possible(b'I'));
    }

    #[test]
    fn absent_with_same_letter_in_line_only_touches_own_cell() {
        // Two O tiles share column 4 in the solved grid: (4, 1) and (4, 3).
        // Turn (4, 1) black. Because a sibling O exists in its line, the
        // line-wide rule must be skipped.
        let text = SOLVED.replacen("g.g.g\nggggg\ng.g.g", "g.g.b\nggggg\ng.g.g", 1);
        let board = propagated(&text);

        // Own cell loses O
        assert!(!board.constraint(9).unwrap().is_possible(b'O'));
        // The sibling cell (4, 3) keeps O possible: last-unplaced-copy boundary
        assert!(board.constraint(19).unwrap().is_possible(b'O'));
    }

    #[test]
    fn present_unique_on_board_removed_outside_own_lines() {
        // Make the K (unique board-wide) at (2, 4) yellow. K must vanish from
        // every non-exact cell outside row 4 and column 2.
        let text = "\
            SITAR\n\
            H.R.O\n\
            ADULT\n\
            R.C.O\n\
            POKER\n\
            gbggg\n\
            g.g.g\n\
            ggggg\n\
            g.g.g\n\
            ggybg\n";
        let board = propagated(text);

        // (1, 0) is black and outside K's lines
        assert!(!board.constraint(1).unwrap().is_possible(b'K'));

        // (3, 4) is black but shares row 4 with K, so K stays possible there
        assert!(board.constraint(23).unwrap().is_possible(b'K'));
    }

    #[test]
    fn propagation_is_idempotent() {
        let text = SOLVED.replacen("ggggg", "gybgg", 1);
        let mut board = Board::parse(text.as_str()).unwrap();
        propagate(&mut board);

        let constraints: Vec<_> = board
            .cells()
            .map(|c| *board.constraint(c.index()).unwrap())
            .collect();
        let known: Vec<Vec<u8>> = board
            .lines()
            .iter()
            .map(|l| l.known_letters().to_vec())
            .collect();

        propagate(&mut board);

        let constraints_after: Vec<_> = board
            .cells()
            .map(|c| *board.constraint(c.index()).unwrap())
            .collect();
        let known_after: Vec<Vec<u8>> = board
            .lines()
            .iter()
            .map(|l| l.known_letters().to_vec())
            .collect();

        assert_eq!(constraints, constraints_after);
        assert_eq!(known, known_after);
    }

    #[test]
    fn possible_and_impossible_stay_disjoint() {
        let text = SOLVED
            .replacen("ggggg", "gybgg", 1)
            .replacen("g.g.g", "y.b.g", 1);
        let board = propagated(&text);

        for cell in board.cells() {
            let constraint = board.constraint(cell.index()).unwrap();
            assert!(
                constraint
                    .possible()
                    .intersection(constraint.impossible())
                    .is_empty()
            );
        }
    }
}

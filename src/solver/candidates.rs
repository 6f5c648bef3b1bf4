//! Per-line dictionary candidate enumeration
//!
//! Filters the dictionary against each line's constraints: a word survives
//! iff it contains the line's known letters (as a multiset) and each of its
//! letters is possible at the corresponding cell. Dictionary order is
//! preserved. Lines are independent once constraints are frozen, so the
//! filtering runs in parallel.

use super::SolveError;
use crate::core::{Board, LetterCounts, Line, Word};
use rayon::prelude::*;

/// Populate every line's candidate list from the dictionary
///
/// # Errors
/// Returns `SolveError::NoCandidates` naming the first line with an empty
/// candidate list; this short-circuits the solve before the search phase.
pub fn enumerate_candidates(board: &mut Board, dictionary: &[Word]) -> Result<(), SolveError> {
    let per_line: Vec<Vec<Word>> = {
        let board = &*board;
        board
            .lines()
            .par_iter()
            .map(|line| line_candidates(board, line, dictionary))
            .collect()
    };

    if let Some(line) = per_line.iter().position(Vec::is_empty) {
        return Err(SolveError::NoCandidates { line });
    }

    for (id, candidates) in per_line.into_iter().enumerate() {
        board.line_mut(id).set_candidates(candidates);
    }
    Ok(())
}

pub(crate) fn line_candidates(board: &Board, line: &Line, dictionary: &[Word]) -> Vec<Word> {
    let known: LetterCounts = line.known_letters().iter().copied().collect();

    dictionary
        .iter()
        .filter(|word| {
            known.is_subset_of(&word.letter_counts())
                && line.cells().iter().enumerate().all(|(pos, &index)| {
                    board
                        .constraint(index)
                        .is_some_and(|c| c.is_possible(word.letter_at(pos)))
                })
        })
        .cloned()
        .collect()
}

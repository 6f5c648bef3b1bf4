//! Global assignment search
//!
//! Finds every combination of one candidate word per line that is globally
//! consistent: intersecting lines must agree on their shared cells, and the
//! combined letters (counting each intersection once) must reproduce the
//! board's letter inventory exactly. The search is recursive backtracking
//! over lines in order with early pruning; partial state is undone on
//! backtrack rather than copied.

use crate::core::{Board, LetterCounts, LineId, Topology, Word};

/// One fully valid choice of a word for every line, rows then columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    words: Vec<Word>,
}

impl Assignment {
    /// The chosen words in line order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Map the line words back onto cell indices
    ///
    /// Returns the solved per-cell letter arrangement over the full grid,
    /// with `None` at the gaps. Intersection cells are written twice with
    /// the same letter, guaranteed by the search's agreement check.
    #[must_use]
    pub fn arrangement(&self, topology: &Topology) -> Vec<Option<u8>> {
        let size = topology.size();
        let mut arrangement = vec![None; size * size];
        for (line, word) in self.words.iter().enumerate() {
            for (pos, &index) in topology.line_cells(line).iter().enumerate() {
                arrangement[index] = Some(word.letter_at(pos));
            }
        }
        arrangement
    }
}

/// Search all per-line candidate combinations for valid assignments
///
/// Returns every valid combination in candidate-list traversal order. An
/// empty result means the board is unsolvable by assignment.
#[must_use]
pub fn search_assignments(board: &Board) -> Vec<Assignment> {
    let mut search = Search {
        board,
        inventory: board.inventory(),
        chosen: Vec::with_capacity(board.lines().len()),
        running: LetterCounts::default(),
        results: Vec::new(),
    };
    search.recurse(0);
    search.results
}

struct Search<'a> {
    board: &'a Board,
    inventory: LetterCounts,
    chosen: Vec<&'a Word>,
    running: LetterCounts,
    results: Vec<Assignment>,
}

impl<'a> Search<'a> {
    fn recurse(&mut self, line: LineId) {
        let board = self.board;
        if line == board.lines().len() {
            if self.running == self.inventory {
                self.results.push(Assignment {
                    words: self.chosen.iter().map(|&w| w.clone()).collect(),
                });
            }
            return;
        }

        'words: for word in board.line(line).candidates() {
            // Intersection agreement with every earlier line
            for (earlier, &chosen) in self.chosen.iter().enumerate() {
                if let Some((pos_earlier, pos_new)) = self.shared_positions(earlier, line)
                    && chosen.letter_at(pos_earlier) != word.letter_at(pos_new)
                {
                    continue 'words;
                }
            }

            // Count the word's letters, then take back the double-count at
            // intersections with already-placed lines. LetterCounts is a
            // plain array, so undo is a saved copy rather than a reverse log.
            let saved = self.running;
            for &letter in word.letters() {
                self.running.add(letter);
            }
            for earlier in 0..line {
                if let Some((_, pos_new)) = self.shared_positions(earlier, line) {
                    self.running.subtract(word.letter_at(pos_new));
                }
            }

            if self.running.is_subset_of(&self.inventory) {
                self.chosen.push(word);
                self.recurse(line + 1);
                self.chosen.pop();
            }

            self.running = saved;
        }
    }

    /// Positions of the shared cell within each line, if the lines intersect
    fn shared_positions(&self, a: LineId, b: LineId) -> Option<(usize, usize)> {
        let topology = self.board.topology();
        let cell = topology.shared_cell(a, b)?;
        let pos_a = topology.line_cells(a).iter().position(|&i| i == cell)?;
        let pos_b = topology.line_cells(b).iter().position(|&i| i == cell)?;
        Some((pos_a, pos_b))
    }
}

//! Board observation arena
//!
//! A `Board` owns the cells, constraint sets, and lines for one solve. Cells
//! and lines live in index-addressed arenas: cells reference lines by id and
//! lines hold cell index lists, so there are no reference cycles and neighbor
//! lookup stays O(1).

use super::{LetterCounts, LetterSet, LineId, TileColor, Topology, TopologyError, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// One tile's observed state: letter, position, and feedback color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub letter: char,
    pub x: usize,
    pub y: usize,
    pub color: TileColor,
}

impl Observation {
    #[must_use]
    pub const fn new(letter: char, x: usize, y: usize, color: TileColor) -> Self {
        Self {
            letter,
            x,
            y,
            color,
        }
    }
}

/// A populated cell, immutable once the observation round is loaded
#[derive(Debug, Clone)]
pub struct Cell {
    index: usize,
    x: usize,
    y: usize,
    letter: u8,
    color: TileColor,
    lines: Vec<LineId>,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[inline]
    #[must_use]
    pub const fn x(&self) -> usize {
        self.x
    }

    #[inline]
    #[must_use]
    pub const fn y(&self) -> usize {
        self.y
    }

    /// Observed letter, uppercase ASCII
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> u8 {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> TileColor {
        self.color
    }

    /// Ids of the lines through this cell (1 or 2)
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[LineId] {
        &self.lines
    }

    /// Whether this cell belongs to both a row and a column
    #[inline]
    #[must_use]
    pub fn is_intersection(&self) -> bool {
        self.lines.len() == 2
    }
}

/// Per-cell letter constraints
///
/// Invariant: `possible` and `impossible` are always disjoint. The sets need
/// not cover the alphabet; `possible` starts as the letters present on the
/// board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintSet {
    possible: LetterSet,
    impossible: LetterSet,
}

impl ConstraintSet {
    #[must_use]
    pub const fn new(possible: LetterSet) -> Self {
        Self {
            possible,
            impossible: LetterSet::EMPTY,
        }
    }

    #[inline]
    #[must_use]
    pub const fn possible(&self) -> LetterSet {
        self.possible
    }

    #[inline]
    #[must_use]
    pub const fn impossible(&self) -> LetterSet {
        self.impossible
    }

    #[inline]
    #[must_use]
    pub const fn is_possible(&self, letter: u8) -> bool {
        self.possible.contains(letter)
    }

    /// Move a letter from possible to impossible
    pub const fn mark_impossible(&mut self, letter: u8) {
        self.possible.remove(letter);
        self.impossible.insert(letter);
    }

    /// Pin the cell to a single letter; everything else becomes impossible
    pub fn fix(&mut self, letter: u8) {
        self.impossible = self
            .impossible
            .union(self.possible.difference(LetterSet::single(letter)));
        self.impossible.remove(letter);
        self.possible = LetterSet::single(letter);
    }
}

/// One of the six intersecting five-letter lines
#[derive(Debug, Clone)]
pub struct Line {
    cells: Vec<usize>,
    known_letters: Vec<u8>,
    candidates: Vec<Word>,
}

impl Line {
    /// Ordered member cell indices
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Letters proven to occur somewhere in this line (multiset, duplicates
    /// matter)
    #[inline]
    #[must_use]
    pub fn known_letters(&self) -> &[u8] {
        &self.known_letters
    }

    /// Dictionary words consistent with this line's constraints, populated by
    /// the candidate enumerator
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    pub(crate) fn push_known_letter(&mut self, letter: u8) {
        self.known_letters.push(letter);
    }

    pub(crate) fn clear_known_letters(&mut self) {
        self.known_letters.clear();
    }

    pub(crate) fn set_candidates(&mut self, candidates: Vec<Word>) {
        self.candidates = candidates;
    }
}

/// Error type for malformed board observations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    Topology(TopologyError),
    WrongTileCount { expected: usize, actual: usize },
    OutOfBounds { x: usize, y: usize },
    GapCell { x: usize, y: usize },
    DuplicateCell { x: usize, y: usize },
    InvalidLetter(char),
    Malformed(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Topology(e) => write!(f, "{e}"),
            Self::WrongTileCount { expected, actual } => {
                write!(f, "Expected {expected} tiles, got {actual}")
            }
            Self::OutOfBounds { x, y } => write!(f, "Tile ({x}, {y}) is outside the board"),
            Self::GapCell { x, y } => write!(f, "Tile ({x}, {y}) falls on an interior gap"),
            Self::DuplicateCell { x, y } => write!(f, "Tile ({x}, {y}) observed twice"),
            Self::InvalidLetter(ch) => write!(f, "Invalid tile letter: {ch:?}"),
            Self::Malformed(msg) => write!(f, "Malformed board text: {msg}"),
        }
    }
}

impl std::error::Error for BoardError {}

impl From<TopologyError> for BoardError {
    fn from(e: TopologyError) -> Self {
        Self::Topology(e)
    }
}

/// The full observed board for one solve
#[derive(Debug, Clone)]
pub struct Board {
    topology: Topology,
    cells: Vec<Option<Cell>>,
    constraints: Vec<Option<ConstraintSet>>,
    lines: Vec<Line>,
    letter_to_cells: FxHashMap<u8, Vec<usize>>,
}

impl Board {
    /// Build a board from one observation per populated cell
    ///
    /// # Errors
    /// Fails fast on malformed input: wrong tile count, out-of-bounds or gap
    /// placement, duplicate cells, or non-alphabetic letters. No partial
    /// solve state is constructed.
    pub fn new(topology: Topology, observations: &[Observation]) -> Result<Self, BoardError> {
        let expected = topology.tile_count();
        if observations.len() != expected {
            return Err(BoardError::WrongTileCount {
                expected,
                actual: observations.len(),
            });
        }

        let size = topology.size();
        let mut cells: Vec<Option<Cell>> = vec![None; size * size];
        let mut letter_to_cells: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        let mut board_letters = LetterSet::EMPTY;

        for obs in observations {
            if obs.x >= size || obs.y >= size {
                return Err(BoardError::OutOfBounds { x: obs.x, y: obs.y });
            }
            if topology.is_gap(obs.x, obs.y) {
                return Err(BoardError::GapCell { x: obs.x, y: obs.y });
            }
            if !obs.letter.is_ascii_alphabetic() {
                return Err(BoardError::InvalidLetter(obs.letter));
            }

            let index = topology.index_of(obs.x, obs.y);
            if cells[index].is_some() {
                return Err(BoardError::DuplicateCell { x: obs.x, y: obs.y });
            }

            let letter = obs.letter.to_ascii_uppercase() as u8;
            board_letters.insert(letter);
            letter_to_cells.entry(letter).or_default().push(index);

            cells[index] = Some(Cell {
                index,
                x: obs.x,
                y: obs.y,
                letter,
                color: obs.color,
                lines: topology.lines_through(index).to_vec(),
            });
        }

        let constraints = cells
            .iter()
            .map(|c| c.as_ref().map(|_| ConstraintSet::new(board_letters)))
            .collect();

        let lines = (0..topology.line_count())
            .map(|id| Line {
                cells: topology.line_cells(id).to_vec(),
                known_letters: Vec::new(),
                candidates: Vec::new(),
            })
            .collect();

        Ok(Self {
            topology,
            cells,
            constraints,
            lines,
            letter_to_cells,
        })
    }

    /// Parse a board from text: five letter rows then five color rows
    ///
    /// Letter rows use `.` for the interior gaps; color rows use `g`, `y`,
    /// `b` (and `.` for gaps). Blank lines and spaces within rows are
    /// ignored.
    ///
    /// ```text
    /// SITAR
    /// H.R.O
    /// ADULT
    /// R.C.O
    /// POKER
    ///
    /// ggggg
    /// g.g.g
    /// ggggg
    /// g.g.g
    /// ggggg
    /// ```
    ///
    /// # Errors
    /// Returns `BoardError::Malformed` for format problems and the
    /// `Board::new` errors for semantic ones.
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.split_whitespace().collect::<String>())
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect();

        if rows.len() % 2 != 0 || rows.is_empty() {
            return Err(BoardError::Malformed(format!(
                "expected letter rows followed by color rows, got {} rows",
                rows.len()
            )));
        }

        let size = rows.len() / 2;
        let topology = Topology::new(size)?;
        let (letter_rows, color_rows) = rows.split_at(size);

        let mut observations = Vec::with_capacity(topology.tile_count());
        for y in 0..size {
            if letter_rows[y].len() != size || color_rows[y].len() != size {
                return Err(BoardError::Malformed(format!(
                    "row {y} is not {size} characters wide"
                )));
            }
            for x in 0..size {
                let letter = letter_rows[y][x];
                let color = color_rows[y][x];
                if topology.is_gap(x, y) {
                    if letter != '.' || color != '.' {
                        return Err(BoardError::Malformed(format!(
                            "({x}, {y}) is a gap and must be '.'"
                        )));
                    }
                    continue;
                }
                if letter == '.' {
                    return Err(BoardError::Malformed(format!("({x}, {y}) is missing a tile")));
                }
                let color = TileColor::from_char(color).ok_or_else(|| {
                    BoardError::Malformed(format!("invalid color {color:?} at ({x}, {y})"))
                })?;
                observations.push(Observation::new(letter, x, y, color));
            }
        }

        Self::new(topology, &observations)
    }

    #[inline]
    #[must_use]
    pub const fn topology(&self) -> &Topology {
        &self.topology
    }

    /// The cell at a linear index, `None` for gaps
    #[inline]
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells[index].as_ref()
    }

    /// Iterate populated cells in board order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter_map(Option::as_ref)
    }

    /// The constraint set of a populated cell
    #[inline]
    #[must_use]
    pub fn constraint(&self, index: usize) -> Option<&ConstraintSet> {
        self.constraints[index].as_ref()
    }

    pub(crate) fn constraint_mut(&mut self, index: usize) -> Option<&mut ConstraintSet> {
        self.constraints[index].as_mut()
    }

    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[inline]
    #[must_use]
    pub fn line(&self, id: LineId) -> &Line {
        &self.lines[id]
    }

    pub(crate) fn line_mut(&mut self, id: LineId) -> &mut Line {
        &mut self.lines[id]
    }

    /// Indices of cells currently showing `letter`
    #[must_use]
    pub fn cells_showing(&self, letter: u8) -> &[usize] {
        self.letter_to_cells
            .get(&letter)
            .map_or(&[], Vec::as_slice)
    }

    /// True if every cell showing `letter` is an exact match, i.e. all copies
    /// of the letter are already placed
    #[must_use]
    pub fn is_fully_placed(&self, letter: u8) -> bool {
        self.cells_showing(letter).iter().all(|&index| {
            self.cells[index]
                .as_ref()
                .is_some_and(|c| c.color().is_exact())
        })
    }

    /// Multiset of letters physically on the board, invariant under swaps
    #[must_use]
    pub fn inventory(&self) -> LetterCounts {
        self.cells().map(Cell::letter).collect()
    }

    /// Current per-cell letter arrangement over the full grid, gaps `None`
    #[must_use]
    pub fn arrangement(&self) -> Vec<Option<u8>> {
        self.cells
            .iter()
            .map(|c| c.as_ref().map(Cell::letter))
            .collect()
    }
}

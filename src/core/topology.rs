//! Grid geometry for the interlocking waffle pattern
//!
//! The reference board is 5×5 with interior gaps at odd-row/odd-column
//! positions, leaving 21 tiles that form six five-letter lines:
//!
//! ```text
//!   A B C D E
//!   F _ G _ H
//!   I J K L M
//!   N _ O _ P
//!   Q R S T U
//! ```
//!
//! Lines are numbered rows first (top to bottom), then columns (left to
//! right): `ABCDE`, `IJKLM`, `QRSTU`, `AFINQ`, `CGKOS`, `EHMPU`.

use std::fmt;

/// Identifier of a line within a [`Topology`]
pub type LineId = usize;

/// Error type for unsupported board sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyError {
    /// Board side length must be odd and at least 3
    UnsupportedSize(usize),
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSize(size) => {
                write!(f, "Unsupported board size {size}: must be odd and >= 3")
            }
        }
    }
}

impl std::error::Error for TopologyError {}

/// Cell/line geometry of a waffle board
///
/// Pure data: maps every populated cell index to the lines through it and
/// every line to its ordered member cell indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    size: usize,
    /// Per linear index: ids of the lines through the cell (empty for gaps)
    cell_lines: Vec<Vec<LineId>>,
    /// Per line id: ordered member cell indices
    line_cells: Vec<Vec<usize>>,
}

impl Topology {
    /// Build the topology for a board of side length `size`
    ///
    /// # Errors
    /// Returns `TopologyError::UnsupportedSize` unless `size` is odd and >= 3.
    pub fn new(size: usize) -> Result<Self, TopologyError> {
        if size < 3 || size % 2 == 0 {
            return Err(TopologyError::UnsupportedSize(size));
        }

        let line_count = (size / 2 + 1) * 2;
        let mut cell_lines = vec![Vec::new(); size * size];
        let mut line_cells = Vec::with_capacity(line_count);

        // Rows at even y, then columns at even x
        for y in (0..size).step_by(2) {
            let cells: Vec<usize> = (0..size).map(|x| y * size + x).collect();
            line_cells.push(cells);
        }
        for x in (0..size).step_by(2) {
            let cells: Vec<usize> = (0..size).map(|y| y * size + x).collect();
            line_cells.push(cells);
        }

        for (id, cells) in line_cells.iter().enumerate() {
            for &index in cells {
                cell_lines[index].push(id);
            }
        }

        Ok(Self {
            size,
            cell_lines,
            line_cells,
        })
    }

    /// Board side length
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of populated cells (gaps excluded)
    #[must_use]
    pub const fn tile_count(&self) -> usize {
        self.size * self.size - (self.size / 2) * (self.size / 2)
    }

    /// Number of lines (half rows, half columns)
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_cells.len()
    }

    /// Whether `(x, y)` is an interior gap (odd row and odd column)
    #[inline]
    #[must_use]
    pub const fn is_gap(&self, x: usize, y: usize) -> bool {
        x % 2 == 1 && y % 2 == 1
    }

    /// Linear index of `(x, y)`
    #[inline]
    #[must_use]
    pub const fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// Coordinates of a linear index
    #[inline]
    #[must_use]
    pub const fn coords_of(&self, index: usize) -> (usize, usize) {
        (index % self.size, index / self.size)
    }

    /// Ids of the lines through a cell: 2 for intersections, 1 otherwise,
    /// empty for gaps
    #[inline]
    #[must_use]
    pub fn lines_through(&self, index: usize) -> &[LineId] {
        &self.cell_lines[index]
    }

    /// Ordered member cell indices of a line
    #[inline]
    #[must_use]
    pub fn line_cells(&self, line: LineId) -> &[usize] {
        &self.line_cells[line]
    }

    /// Iterate populated cell indices in board order
    pub fn tile_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.size * self.size).filter(|&i| {
            let (x, y) = self.coords_of(i);
            !self.is_gap(x, y)
        })
    }

    /// The cell shared by two lines, if they intersect
    #[must_use]
    pub fn shared_cell(&self, a: LineId, b: LineId) -> Option<usize> {
        self.line_cells[a]
            .iter()
            .find(|index| self.line_cells[b].contains(index))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unsupported_sizes() {
        assert_eq!(Topology::new(0), Err(TopologyError::UnsupportedSize(0)));
        assert_eq!(Topology::new(1), Err(TopologyError::UnsupportedSize(1)));
        assert_eq!(Topology::new(4), Err(TopologyError::UnsupportedSize(4)));
        assert!(Topology::new(3).is_ok());
        assert!(Topology::new(5).is_ok());
    }

    #[test]
    fn reference_counts() {
        let topo = Topology::new(5).unwrap();
        assert_eq!(topo.tile_count(), 21);
        assert_eq!(topo.line_count(), 6);
        assert_eq!(topo.tile_indices().count(), 21);
    }

    #[test]
    fn gaps_are_excluded() {
        let topo = Topology::new(5).unwrap();
        for (x, y) in [(1, 1), (3, 1), (1, 3), (3, 3)] {
            assert!(topo.is_gap(x, y));
            assert!(topo.lines_through(topo.index_of(x, y)).is_empty());
        }
        assert!(!topo.is_gap(2, 1));
        assert!(!topo.is_gap(0, 0));
    }

    #[test]
    fn line_membership_matches_reference_layout() {
        let topo = Topology::new(5).unwrap();

        // Row 0 is indices 0..5, row 2 is 10..15, row 4 is 20..25
        assert_eq!(topo.line_cells(0), &[0, 1, 2, 3, 4]);
        assert_eq!(topo.line_cells(1), &[10, 11, 12, 13, 14]);
        assert_eq!(topo.line_cells(2), &[20, 21, 22, 23, 24]);

        // Column 0, 2, 4
        assert_eq!(topo.line_cells(3), &[0, 5, 10, 15, 20]);
        assert_eq!(topo.line_cells(4), &[2, 7, 12, 17, 22]);
        assert_eq!(topo.line_cells(5), &[4, 9, 14, 19, 24]);
    }

    #[test]
    fn intersection_cells_have_two_lines() {
        let topo = Topology::new(5).unwrap();

        // Corner cell (0, 0): row 0 and column 0
        assert_eq!(topo.lines_through(0), &[0, 3]);
        // Center cell (2, 2): row 1 and column 1
        assert_eq!(topo.lines_through(12), &[1, 4]);
        // Edge cell (1, 0): row 0 only
        assert_eq!(topo.lines_through(1), &[0]);
        // Edge cell (0, 1): column 0 only
        assert_eq!(topo.lines_through(5), &[3]);
    }

    #[test]
    fn shared_cells() {
        let topo = Topology::new(5).unwrap();

        assert_eq!(topo.shared_cell(0, 3), Some(0)); // row 0 x col 0
        assert_eq!(topo.shared_cell(1, 4), Some(12)); // row 2 x col 2
        assert_eq!(topo.shared_cell(2, 5), Some(24)); // row 4 x col 4
        assert_eq!(topo.shared_cell(0, 1), None); // two rows never meet
        assert_eq!(topo.shared_cell(3, 5), None); // two columns never meet
    }

    #[test]
    fn coords_roundtrip() {
        let topo = Topology::new(5).unwrap();
        for index in topo.tile_indices() {
            let (x, y) = topo.coords_of(index);
            assert_eq!(topo.index_of(x, y), index);
        }
    }
}

//! Tile feedback colors
//!
//! Each tile on an observed board shows one of three colors:
//! - Green: the letter is in its correct position
//! - Yellow: the letter belongs to the line but sits in the wrong position
//! - Black: the letter does not belong at this position

use std::fmt;

/// Feedback color observed on a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileColor {
    /// Green: correct letter, correct position
    Exact,
    /// Yellow: correct letter, wrong position
    Present,
    /// Black/gray: letter not at this position
    Absent,
}

impl TileColor {
    /// Parse a color from a single character
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green (exact)
    /// - 'Y'/'y'/🟨 for yellow (present)
    /// - 'B'/'b'/'-'/⬛ for black (absent)
    ///
    /// # Examples
    /// ```
    /// use waffle_solver::core::TileColor;
    ///
    /// assert_eq!(TileColor::from_char('g'), Some(TileColor::Exact));
    /// assert_eq!(TileColor::from_char('Y'), Some(TileColor::Present));
    /// assert_eq!(TileColor::from_char('x'), None);
    /// ```
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            'B' | 'b' | '-' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Canonical single-character form (`g`, `y`, `b`)
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Exact => 'g',
            Self::Present => 'y',
            Self::Absent => 'b',
        }
    }

    /// Whether this color pins the letter to its position
    #[inline]
    #[must_use]
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Exact)
    }
}

impl fmt::Display for TileColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Exact => "green",
            Self::Present => "yellow",
            Self::Absent => "black",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for TileColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green" | "exact" => Ok(Self::Exact),
            "yellow" | "present" => Ok(Self::Present),
            "black" | "gray" | "absent" => Ok(Self::Absent),
            other => {
                let mut chars = other.chars();
                match (chars.next().and_then(Self::from_char), chars.next()) {
                    (Some(color), None) => Ok(color),
                    _ => Err(format!("Invalid tile color: {other}")),
                }
            }
        }
    }
}

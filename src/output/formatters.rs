//! Formatting utilities for terminal output

use crate::core::{TileColor, Topology};

/// Format a tile color as an emoji square
#[must_use]
pub const fn color_to_emoji(color: TileColor) -> char {
    match color {
        TileColor::Exact => '🟩',
        TileColor::Present => '🟨',
        TileColor::Absent => '⬛',
    }
}

/// Format a full-grid arrangement as text rows
///
/// Gaps render as spaces, letters as themselves.
#[must_use]
pub fn format_arrangement(arrangement: &[Option<u8>], topology: &Topology) -> String {
    let size = topology.size();
    let mut result = String::with_capacity(size * (size + 1));

    for y in 0..size {
        for x in 0..size {
            match arrangement[y * size + x] {
                Some(letter) => result.push(letter as char),
                None => result.push(' '),
            }
        }
        result.push('\n');
    }

    result
}

/// Format a one-based swap step as a coordinate move
#[must_use]
pub fn format_swap(step: usize, from: (usize, usize), to: (usize, usize)) -> String {
    format!(
        "{step:2}. ({}, {}) <-> ({}, {})",
        from.0, from.1, to.0, to.1
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_for_each_color() {
        assert_eq!(color_to_emoji(TileColor::Exact), '🟩');
        assert_eq!(color_to_emoji(TileColor::Present), '🟨');
        assert_eq!(color_to_emoji(TileColor::Absent), '⬛');
    }

    #[test]
    fn arrangement_renders_gaps_as_spaces() {
        let topology = Topology::new(5).unwrap();
        let arrangement: Vec<Option<u8>> = (0..25)
            .map(|i| {
                let (x, y) = topology.coords_of(i);
                if topology.is_gap(x, y) { None } else { Some(b'A') }
            })
            .collect();

        let text = format_arrangement(&arrangement, &topology);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0], "AAAAA");
        assert_eq!(rows[1], "A A A");
    }

    #[test]
    fn swap_step_formats_coordinates() {
        let text = format_swap(1, (1, 0), (3, 2));
        assert!(text.contains("(1, 0)"));
        assert!(text.contains("(3, 2)"));
    }
}

//! Minimal swap planning
//!
//! Given the board's current letter arrangement and a solved target
//! arrangement over the same tiles, finds a shortest sequence of pairwise
//! tile swaps transforming one into the other. The search is breadth-first
//! over arrangements, so the first plan reaching the target is minimal.
//!
//! Each swap is directed at usefulness: the moving letter lands on a tile
//! where the target wants that letter but the current arrangement lacks it.
//! A swap may displace a correctly needed letter in the process; such a
//! displaced letter is tracked as pending and must be the very next letter
//! moved, which keeps chains of dependent placements contiguous without
//! widening the frontier.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

/// Upper bound on plan length before the search gives up
pub const DEFAULT_MAX_SWAPS: usize = 10;

type Arrangement = Vec<Option<u8>>;

#[derive(Clone)]
struct State {
    arrangement: Arrangement,
    swaps: Vec<(usize, usize)>,
    // Tile index whose letter was displaced by the previous swap and must
    // move next, if any
    pending: Option<usize>,
}

/// Find a minimal swap plan turning `current` into `target`
///
/// Both slices cover the full grid with `None` at the gaps and must hold
/// the same letter multiset. Returns the swap sequence as pairs of cell
/// indices, or `None` when no plan of at most `max_swaps` swaps exists.
#[must_use]
pub fn plan_swaps(
    current: &[Option<u8>],
    target: &[Option<u8>],
    max_swaps: usize,
) -> Option<Vec<(usize, usize)>> {
    let mut queue = VecDeque::new();
    queue.push_back(State {
        arrangement: current.to_vec(),
        swaps: Vec::new(),
        pending: None,
    });
    let mut visited: FxHashSet<(Arrangement, Option<usize>)> = FxHashSet::default();
    visited.insert((current.to_vec(), None));

    while let Some(state) = queue.pop_front() {
        if state.arrangement == target {
            return Some(state.swaps);
        }
        if state.swaps.len() == max_swaps {
            continue;
        }

        let sources: Vec<usize> = match state.pending {
            Some(index) => vec![index],
            None => misplaced_indices(&state.arrangement, target),
        };
        for source in sources {
            let letter = state.arrangement[source];
            for destination in wanted_indices(&state.arrangement, target, letter) {
                if destination == source {
                    continue;
                }
                let mut next = state.clone();
                next.arrangement.swap(source, destination);
                next.swaps.push((source, destination));
                // The letter arriving at `source` becomes pending unless it
                // already sits where the target wants it
                next.pending = if next.arrangement[source] == target[source] {
                    None
                } else {
                    Some(source)
                };
                if visited.insert((next.arrangement.clone(), next.pending)) {
                    queue.push_back(next);
                }
            }
        }
    }
    None
}

/// Apply a swap plan to an arrangement
#[must_use]
pub fn apply_swaps(arrangement: &[Option<u8>], swaps: &[(usize, usize)]) -> Arrangement {
    let mut result = arrangement.to_vec();
    for &(a, b) in swaps {
        result.swap(a, b);
    }
    result
}

/// Tile indices whose current letter differs from the target
fn misplaced_indices(arrangement: &[Option<u8>], target: &[Option<u8>]) -> Vec<usize> {
    arrangement
        .iter()
        .zip(target)
        .enumerate()
        .filter(|(_, (current, wanted))| current.is_some() && current != wanted)
        .map(|(index, _)| index)
        .collect()
}

/// Tile indices where the target wants `letter` but the arrangement lacks it
fn wanted_indices(
    arrangement: &[Option<u8>],
    target: &[Option<u8>],
    letter: Option<u8>,
) -> Vec<usize> {
    target
        .iter()
        .zip(arrangement)
        .enumerate()
        .filter(|(_, (wanted, current))| **wanted == letter && *current != *wanted)
        .map(|(index, _)| index)
        .collect()
}

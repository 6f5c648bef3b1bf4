//! Letter sets and letter multisets
//!
//! A `LetterSet` is a bitset over the uppercase ASCII alphabet, used for the
//! per-cell possible/impossible letter constraints. A `LetterCounts` is a
//! multiset over the same alphabet, used for the board letter inventory and
//! the assignment multiset-agreement check.

use std::fmt;

/// Set of uppercase ASCII letters backed by a `u32` bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterSet(u32);

const fn bit(letter: u8) -> u32 {
    debug_assert!(letter.is_ascii_uppercase());
    1 << (letter - b'A')
}

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every letter `A..=Z`
    pub const ALL: Self = Self((1 << 26) - 1);

    /// Set containing a single letter
    #[inline]
    #[must_use]
    pub const fn single(letter: u8) -> Self {
        Self(bit(letter))
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & bit(letter) != 0
    }

    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        self.0 |= bit(letter);
    }

    #[inline]
    pub const fn remove(&mut self, letter: u8) {
        self.0 &= !bit(letter);
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'A'..=b'Z').filter(move |&l| self.contains(l))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

/// Multiset of uppercase ASCII letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterCounts([u8; 26]);

impl LetterCounts {
    #[inline]
    const fn slot(letter: u8) -> usize {
        debug_assert!(letter.is_ascii_uppercase());
        (letter - b'A') as usize
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, letter: u8) -> u8 {
        self.0[Self::slot(letter)]
    }

    #[inline]
    pub const fn add(&mut self, letter: u8) {
        self.0[Self::slot(letter)] += 1;
    }

    /// Remove one occurrence; saturates at zero
    #[inline]
    pub const fn subtract(&mut self, letter: u8) {
        let slot = Self::slot(letter);
        self.0[slot] = self.0[slot].saturating_sub(1);
    }

    /// Total number of letters counted
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| usize::from(c)).sum()
    }

    /// True if every letter occurs at most as often as in `other`
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a <= b)
    }

    /// Distinct letters with a nonzero count
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        (b'A'..=b'Z').filter(|&l| self.get(l) > 0).collect()
    }
}

impl FromIterator<u8> for LetterCounts {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut counts = Self::default();
        for letter in iter {
            counts.add(letter);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_insert_remove_contains() {
        let mut set = LetterSet::EMPTY;
        assert!(!set.contains(b'A'));

        set.insert(b'A');
        set.insert(b'Z');
        assert!(set.contains(b'A'));
        assert!(set.contains(b'Z'));
        assert_eq!(set.len(), 2);

        set.remove(b'A');
        assert!(!set.contains(b'A'));
        assert_eq!(set.len(), 1);

        // Removing an absent letter is a no-op
        set.remove(b'A');
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn set_all_and_empty() {
        assert_eq!(LetterSet::ALL.len(), 26);
        assert!(LetterSet::EMPTY.is_empty());
        assert!((b'A'..=b'Z').all(|l| LetterSet::ALL.contains(l)));
    }

    #[test]
    fn set_operations_disjoint() {
        let a: LetterSet = [b'A', b'B', b'C'].into_iter().collect();
        let b: LetterSet = [b'B', b'C', b'D'].into_iter().collect();

        assert_eq!(a.union(b).len(), 4);
        assert_eq!(a.intersection(b).len(), 2);
        assert_eq!(a.difference(b).iter().collect::<Vec<_>>(), vec![b'A']);
    }

    #[test]
    fn set_iter_sorted() {
        let set: LetterSet = [b'Z', b'A', b'M'].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![b'A', b'M', b'Z']);
    }

    #[test]
    fn set_display() {
        let set: LetterSet = [b'C', b'A', b'T'].into_iter().collect();
        assert_eq!(set.to_string(), "A C T");
        assert_eq!(LetterSet::EMPTY.to_string(), "");
    }

    #[test]
    fn counts_add_subtract() {
        let mut counts = LetterCounts::default();
        counts.add(b'E');
        counts.add(b'E');
        counts.add(b'S');

        assert_eq!(counts.get(b'E'), 2);
        assert_eq!(counts.get(b'S'), 1);
        assert_eq!(counts.get(b'X'), 0);
        assert_eq!(counts.total(), 3);

        counts.subtract(b'E');
        assert_eq!(counts.get(b'E'), 1);

        counts.subtract(b'X'); // saturates
        assert_eq!(counts.get(b'X'), 0);
    }

    #[test]
    fn counts_subset() {
        let small: LetterCounts = b"EE".iter().copied().collect();
        let large: LetterCounts = b"SPEED".iter().copied().collect();

        assert!(small.is_subset_of(&large));
        assert!(!large.is_subset_of(&small));
        assert!(small.is_subset_of(&small));
    }

    #[test]
    fn counts_letters() {
        let counts: LetterCounts = b"SPEED".iter().copied().collect();
        let letters = counts.letters();
        assert!(letters.contains(b'S'));
        assert!(letters.contains(b'E'));
        assert!(!letters.contains(b'Q'));
        assert_eq!(letters.len(), 4); // S P E D
    }
}

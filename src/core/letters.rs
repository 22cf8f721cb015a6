//! Distinct-letter sets
//!
//! A `LetterSet` records which of the 26 lowercase ASCII letters occur in a
//! word, ignoring how often. Bit `n` is set when letter `b'a' + n` is present.

use std::fmt;

/// Number of letters in the alphabet covered by a `LetterSet`
pub const ALPHABET_LEN: usize = 26;

/// Set of distinct lowercase letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Build the set of distinct letters in `bytes`
    ///
    /// Bytes outside `b'a'..=b'z'` are ignored.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        bytes
            .iter()
            .filter_map(|&b| letter_index(b))
            .fold(Self::EMPTY, |set, idx| Self(set.0 | (1 << idx)))
    }

    /// Check whether `letter` is in the set
    #[inline]
    #[must_use]
    pub fn contains(self, letter: u8) -> bool {
        letter_index(letter).is_some_and(|idx| self.0 & (1 << idx) != 0)
    }

    /// Number of distinct letters
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

    /// True when the two sets have no letter in common
    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_LEN as u8)
            .filter(move |&idx| self.0 & (1 << idx) != 0)
            .map(|idx| b'a' + idx)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

/// Map a lowercase ASCII letter to its alphabet index (0-25)
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter - b'a') as usize)
    } else {
        None
    }
}

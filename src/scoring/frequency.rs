//! Letter frequency accumulation
//!
//! Builds presence counts (how many training words contain each letter at
//! least once) and per-position counts (how many training words have each
//! letter at each position).

use crate::core::{ALPHABET_LEN, WORD_LEN, Word, letter_index};

/// Frequency snapshot of a training list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFrequencies {
    letter_counts: [usize; ALPHABET_LEN],
    position_counts: [[usize; ALPHABET_LEN]; WORD_LEN],
    word_count: usize,
}

impl LetterFrequencies {
    /// Accumulate counts over `words`
    ///
    /// Every occurrence counts, duplicates included. A word contributes at
    /// most 1 to each letter's presence count, and exactly 1 to one letter
    /// in each position.
    ///
    /// # Examples
    /// ```
    /// use wordle_probability::core::Word;
    /// use wordle_probability::scoring::LetterFrequencies;
    ///
    /// let words = vec![Word::new("aabbc").unwrap()];
    /// let freq = LetterFrequencies::accumulate(&words);
    /// assert_eq!(freq.letter_count(b'a'), 1);
    /// assert_eq!(freq.position_count(1, b'a'), 1);
    /// ```
    #[must_use]
    pub fn accumulate<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut letter_counts = [0; ALPHABET_LEN];
        let mut position_counts = [[0; ALPHABET_LEN]; WORD_LEN];
        let mut word_count = 0;

        for word in words {
            word_count += 1;

            for letter in word.letters().iter() {
                if let Some(idx) = letter_index(letter) {
                    letter_counts[idx] += 1;
                }
            }

            for (position, &letter) in word.chars().iter().enumerate() {
                if let Some(idx) = letter_index(letter) {
                    position_counts[position][idx] += 1;
                }
            }
        }

        Self {
            letter_counts,
            position_counts,
            word_count,
        }
    }

    /// Number of training words the counts were built from
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of training words containing `letter` at least once
    ///
    /// Letters never seen (or outside a-z) count 0.
    #[inline]
    #[must_use]
    pub fn letter_count(&self, letter: u8) -> usize {
        letter_index(letter).map_or(0, |idx| self.letter_counts[idx])
    }

    /// Number of training words with `letter` at `position`
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub fn position_count(&self, position: usize, letter: u8) -> usize {
        letter_index(letter).map_or(0, |idx| self.position_counts[position][idx])
    }

    /// Fraction of training words containing `letter`
    ///
    /// Returns 0.0 for an empty training set.
    #[must_use]
    pub fn letter_probability(&self, letter: u8) -> f64 {
        self.ratio(self.letter_count(letter))
    }

    /// Fraction of training words with `letter` at `position`
    ///
    /// Returns 0.0 for an empty training set.
    #[must_use]
    pub fn position_probability(&self, position: usize, letter: u8) -> f64 {
        self.ratio(self.position_count(position, letter))
    }

    /// Letters seen in training with their presence counts
    ///
    /// Ordered by count descending, ties alphabetical.
    #[must_use]
    pub fn ranked_letters(&self) -> Vec<(u8, usize)> {
        rank_counts(&self.letter_counts)
    }

    /// Letters seen at `position` with their counts
    ///
    /// Ordered by count descending, ties alphabetical.
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub fn ranked_position_letters(&self, position: usize) -> Vec<(u8, usize)> {
        rank_counts(&self.position_counts[position])
    }

    fn ratio(&self, count: usize) -> f64 {
        if self.word_count == 0 {
            0.0
        } else {
            count as f64 / self.word_count as f64
        }
    }
}

fn rank_counts(counts: &[usize; ALPHABET_LEN]) -> Vec<(u8, usize)> {
    let mut ranked: Vec<(u8, usize)> = (b'a'..=b'z')
        .zip(counts.iter().copied())
        .filter(|&(_, count)| count > 0)
        .collect();
    // Stable: alphabetical order survives among equal counts
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn sample() -> LetterFrequencies {
        LetterFrequencies::accumulate(&words_from_slice(&["abcde", "fghij", "aabbc"]))
    }

    #[test]
    fn presence_counts_collapse_repeats() {
        let freq = sample();
        let expected = [
            (b'a', 2),
            (b'b', 2),
            (b'c', 2),
            (b'd', 1),
            (b'e', 1),
            (b'f', 1),
            (b'g', 1),
            (b'h', 1),
            (b'i', 1),
            (b'j', 1),
        ];
        for (letter, count) in expected {
            assert_eq!(freq.letter_count(letter), count, "letter {}", letter as char);
        }
        assert_eq!(freq.letter_count(b'z'), 0);
        assert_eq!(freq.word_count(), 3);
    }

    #[test]
    fn first_position_counts() {
        let freq = sample();
        assert_eq!(freq.position_count(0, b'a'), 2);
        assert_eq!(freq.position_count(0, b'f'), 1);
        assert_eq!(freq.ranked_position_letters(0), vec![(b'a', 2), (b'f', 1)]);
    }

    #[test]
    fn position_counts_sum_to_word_count() {
        let words = words_from_slice(&["crane", "slate", "eerie", "crane", "abbey", "mummy"]);
        let freq = LetterFrequencies::accumulate(&words);

        for position in 0..WORD_LEN {
            let total: usize = (b'a'..=b'z').map(|l| freq.position_count(position, l)).sum();
            assert_eq!(total, words.len(), "position {position}");
        }
    }

    #[test]
    fn letter_count_matches_words_containing_letter() {
        let words = words_from_slice(&["crane", "slate", "eerie", "crane", "abbey", "mummy"]);
        let freq = LetterFrequencies::accumulate(&words);

        for letter in b'a'..=b'z' {
            let containing = words.iter().filter(|w| w.has_letter(letter)).count();
            assert_eq!(freq.letter_count(letter), containing);
            assert!(freq.letter_count(letter) <= freq.word_count());
        }
    }

    #[test]
    fn duplicates_count_separately() {
        let freq = LetterFrequencies::accumulate(&words_from_slice(&["crane", "crane"]));
        assert_eq!(freq.word_count(), 2);
        assert_eq!(freq.letter_count(b'c'), 2);
        assert_eq!(freq.position_count(4, b'e'), 2);
    }

    #[test]
    fn empty_training_list() {
        let words: Vec<Word> = Vec::new();
        let freq = LetterFrequencies::accumulate(&words);
        assert!(freq.is_empty());
        assert_eq!(freq.word_count(), 0);
        assert_eq!(freq.letter_probability(b'a'), 0.0);
        assert!(freq.ranked_letters().is_empty());
    }

    #[test]
    fn ranked_letters_break_ties_alphabetically() {
        let ranked = sample().ranked_letters();
        let letters: Vec<u8> = ranked.iter().map(|&(l, _)| l).collect();
        assert_eq!(letters, b"abcdefghij".to_vec());
        assert_eq!(ranked[0], (b'a', 2));
        assert_eq!(ranked[3], (b'd', 1));
    }

    #[test]
    fn probabilities() {
        let freq = sample();
        assert!((freq.letter_probability(b'a') - 2.0 / 3.0).abs() < 1e-12);
        assert!((freq.position_probability(0, b'f') - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn accumulation_is_repeatable() {
        let words = words_from_slice(&["crane", "slate", "eerie"]);
        assert_eq!(
            LetterFrequencies::accumulate(&words),
            LetterFrequencies::accumulate(&words)
        );
    }
}

//! Word scoring from letter frequencies
//!
//! Each position contributes the product of the letter's presence probability
//! and its probability at that position:
//!
//! score(w) = Σᵢ (presence[wᵢ] / N) × (position[i][wᵢ] / N)
//!
//! where N is the number of training words.

use super::LetterFrequencies;
use crate::core::{AnalysisError, WORD_LEN, Word};
use rustc_hash::FxHashMap;

/// A word paired with its score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    pub word: Word,
    pub score: f64,
}

/// Word to score mapping that remembers first-insertion order
///
/// Re-inserting a word overwrites its score but keeps its original slot,
/// so ranking ties fall back to the order words first appeared in.
#[derive(Debug, Clone, Default)]
pub struct WordScores {
    entries: Vec<ScoredWord>,
    index: FxHashMap<String, usize>,
}

impl WordScores {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the score for `word`
    pub fn insert(&mut self, word: Word, score: f64) {
        if let Some(&slot) = self.index.get(word.text()) {
            self.entries[slot].score = score;
        } else {
            self.index.insert(word.text().to_string(), self.entries.len());
            self.entries.push(ScoredWord { word, score });
        }
    }

    /// Score for the word with text `word`, if present
    #[must_use]
    pub fn get(&self, word: &str) -> Option<f64> {
        self.index.get(word).map(|&slot| self.entries[slot].score)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &ScoredWord> {
        self.entries.iter()
    }

    /// Keep only entries for which `keep` returns true, preserving order
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&ScoredWord) -> bool,
    {
        self.entries.retain(|entry| keep(entry));
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(slot, entry)| (entry.word.text().to_string(), slot))
            .collect();
    }

    /// Consume the mapping, yielding entries in insertion order
    #[must_use]
    pub fn into_entries(self) -> Vec<ScoredWord> {
        self.entries
    }
}

/// Per-position breakdown of a word's score
#[derive(Debug, Clone, PartialEq)]
pub struct PositionScore {
    pub letter: u8,
    pub letter_probability: f64,
    pub position_probability: f64,
    pub score: f64,
}

/// Score a single word against the training frequencies
///
/// Letters never seen in training contribute 0.
///
/// # Errors
///
/// Returns `EmptyTrainingSet` if the frequencies were built from no words.
///
/// # Examples
/// ```
/// use wordle_probability::core::Word;
/// use wordle_probability::scoring::{LetterFrequencies, score_word};
///
/// let training = vec![Word::new("crane").unwrap()];
/// let freq = LetterFrequencies::accumulate(&training);
/// let score = score_word(&training[0], &freq).unwrap();
/// assert!((score - 5.0).abs() < 1e-12);
/// ```
pub fn score_word(word: &Word, freq: &LetterFrequencies) -> Result<f64, AnalysisError> {
    ensure_trained(freq)?;
    Ok(breakdown(word, freq).iter().map(|p| p.score).sum())
}

/// Score every word in `words`, in order
///
/// A word listed twice keeps the slot of its first occurrence.
///
/// # Errors
///
/// Returns `EmptyTrainingSet` if the frequencies were built from no words.
/// This is checked before any word is scored.
pub fn score_words<'a, I>(words: I, freq: &LetterFrequencies) -> Result<WordScores, AnalysisError>
where
    I: IntoIterator<Item = &'a Word>,
{
    ensure_trained(freq)?;

    let mut scores = WordScores::new();
    for word in words {
        let score = breakdown(word, freq).iter().map(|p| p.score).sum();
        scores.insert(word.clone(), score);
    }

    Ok(scores)
}

/// Per-position contributions to a word's score
///
/// # Errors
///
/// Returns `EmptyTrainingSet` if the frequencies were built from no words.
pub fn score_breakdown(
    word: &Word,
    freq: &LetterFrequencies,
) -> Result<[PositionScore; WORD_LEN], AnalysisError> {
    ensure_trained(freq)?;
    Ok(breakdown(word, freq))
}

fn ensure_trained(freq: &LetterFrequencies) -> Result<(), AnalysisError> {
    if freq.is_empty() {
        Err(AnalysisError::EmptyTrainingSet)
    } else {
        Ok(())
    }
}

fn breakdown(word: &Word, freq: &LetterFrequencies) -> [PositionScore; WORD_LEN] {
    std::array::from_fn(|position| {
        let letter = word.char_at(position);
        let letter_probability = freq.letter_probability(letter);
        let position_probability = freq.position_probability(position, letter);
        PositionScore {
            letter,
            letter_probability,
            position_probability,
            score: letter_probability * position_probability,
        }
    })
}

//! Implausible-answer filtering
//!
//! Words ending in 's' (likely plurals) and words with a repeated letter are
//! unlikely answers. The filter runs either on the training list before
//! accumulation or on the scores after scoring, never both.

use super::WordScores;
use crate::core::Word;
use std::fmt;

/// True if `word` is an unlikely answer
///
/// # Examples
/// ```
/// use wordle_probability::core::Word;
/// use wordle_probability::scoring::is_implausible;
///
/// assert!(is_implausible(&Word::new("pries").unwrap()));
/// assert!(is_implausible(&Word::new("eerie").unwrap()));
/// assert!(!is_implausible(&Word::new("glyph").unwrap()));
/// ```
#[must_use]
pub fn is_implausible(word: &Word) -> bool {
    word.text().ends_with('s') || word.has_repeated_letter()
}

/// When implausible words are removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Before accumulation: filtered words never reach the statistics
    Pre,
    /// After scoring: filtered words only leave the ranked output
    #[default]
    Post,
    /// No filtering
    Off,
}

impl FilterMode {
    /// Resolve the mode from the two toggles
    ///
    /// Pre-filtering wins; post-filtering only applies when pre is off.
    #[must_use]
    pub const fn from_flags(pre_filter: bool, post_filter: bool) -> Self {
        match (pre_filter, post_filter) {
            (true, _) => Self::Pre,
            (false, true) => Self::Post,
            (false, false) => Self::Off,
        }
    }

    /// Drop implausible words from a list when pre-filtering
    #[must_use]
    pub fn apply_to_list(self, words: Vec<Word>) -> Vec<Word> {
        match self {
            Self::Pre => words.into_iter().filter(|w| !is_implausible(w)).collect(),
            Self::Post | Self::Off => words,
        }
    }

    /// Drop implausible words from the scores when post-filtering
    ///
    /// Returns the number of entries removed.
    pub fn apply_to_scores(self, scores: &mut WordScores) -> usize {
        match self {
            Self::Post => {
                let before = scores.len();
                scores.retain(|entry| !is_implausible(&entry.word));
                before - scores.len()
            }
            Self::Pre | Self::Off => 0,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pre => write!(f, "pre-filter"),
            Self::Post => write!(f, "post-filter"),
            Self::Off => write!(f, "no filter"),
        }
    }
}

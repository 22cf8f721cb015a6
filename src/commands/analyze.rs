//! Word analysis command
//!
//! Breaks a single word's score down by position against the training list.

use crate::core::{AnalysisError, WORD_LEN, Word};
use crate::scoring::{LetterFrequencies, PositionScore, is_implausible, score_breakdown};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub score: f64,
    pub positions: [PositionScore; WORD_LEN],
    pub implausible: bool,
    pub training_words: usize,
}

/// Score `word` against frequencies built from `training`
///
/// The word does not need to appear in the training list.
///
/// # Errors
///
/// Returns `EmptyTrainingSet` if `training` is empty.
pub fn analyze_word(word: &Word, training: &[Word]) -> Result<AnalysisResult, AnalysisError> {
    let freq = LetterFrequencies::accumulate(training);
    let positions = score_breakdown(word, &freq)?;

    Ok(AnalysisResult {
        word: word.text().to_string(),
        score: positions.iter().map(|p| p.score).sum(),
        positions,
        implausible: is_implausible(word),
        training_words: freq.word_count(),
    })
}

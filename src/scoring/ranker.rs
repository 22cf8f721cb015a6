//! Score ranking

use super::{ScoredWord, WordScores};

/// Sort scored words by score, highest first
///
/// The sort is stable: equal scores keep the order in which the words were
/// first inserted into `scores`.
#[must_use]
pub fn rank(scores: WordScores) -> Vec<ScoredWord> {
    let mut ranked = scores.into_entries();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

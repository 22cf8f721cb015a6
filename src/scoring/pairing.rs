//! Follow-up word suggestions
//!
//! For each ranked word, the best-ranked words sharing none of its letters
//! make good second guesses: together the two cover ten distinct letters.

use super::ScoredWord;

/// Default number of follow-ups listed per word
pub const DEFAULT_SUGGESTIONS: usize = 10;

/// A ranked word with its letter-disjoint follow-ups
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion<'a> {
    pub entry: &'a ScoredWord,
    pub partners: Vec<&'a ScoredWord>,
}

/// Up to `limit` words from `ranked` sharing no letter with `entry`, in rank order
#[must_use]
pub fn disjoint_partners<'a>(
    entry: &ScoredWord,
    ranked: &'a [ScoredWord],
    limit: usize,
) -> Vec<&'a ScoredWord> {
    ranked
        .iter()
        .filter(|other| entry.word.shares_no_letters(&other.word))
        .take(limit)
        .collect()
}

/// Follow-up suggestions for every ranked word, in rank order
///
/// Quadratic in the list length; fine for a few thousand words.
#[must_use]
pub fn suggest_pairs(ranked: &[ScoredWord], limit: usize) -> Vec<Suggestion<'_>> {
    ranked
        .iter()
        .map(|entry| Suggestion {
            entry,
            partners: disjoint_partners(entry, ranked, limit),
        })
        .collect()
}

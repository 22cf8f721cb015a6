//! Letter-frequency scoring pipeline
//!
//! Accumulate frequencies over a training list, score candidate words,
//! filter implausible answers, rank by score and pair letter-disjoint words.

mod filter;
mod frequency;
mod pairing;
mod ranker;
mod scorer;

pub use filter::{FilterMode, is_implausible};
pub use frequency::LetterFrequencies;
pub use pairing::{DEFAULT_SUGGESTIONS, Suggestion, disjoint_partners, suggest_pairs};
pub use ranker::rank;
pub use scorer::{PositionScore, ScoredWord, WordScores, score_breakdown, score_word, score_words};

//! Wordle Letter Probability
//!
//! Scores five-letter words by how common their letters are, overall and at
//! each position, across a training list of words.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_probability::scoring::{LetterFrequencies, rank, score_words};
//! use wordle_probability::wordlists::loader::words_from_slice;
//!
//! let words = words_from_slice(&["crane", "slate", "glyph"]);
//! let freq = LetterFrequencies::accumulate(&words);
//! let ranked = rank(score_words(&words, &freq).unwrap());
//! println!("Best word: {}", ranked[0].word);
//! ```

// Core domain types
pub mod core;

// Frequency accumulation, scoring, filtering and ranking
pub mod scoring;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Report files and terminal output
pub mod output;

// Logger setup
pub mod logging;

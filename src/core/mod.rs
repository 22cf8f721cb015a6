//! Core domain types for letter-frequency scoring
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod error;
mod letters;
mod word;

pub use error::AnalysisError;
pub use letters::{ALPHABET_LEN, LetterSet, letter_index};
pub use word::{WORD_LEN, Word, WordError};

//! Word list loading utilities
//!
//! Parses newline-delimited word lists into `Word`s under a configurable
//! policy for lines that are not valid five-letter words.

use crate::core::{AnalysisError, Word};
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// What to do with a line that is not a valid five-letter word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Drop the line and log a warning
    #[default]
    Skip,
    /// Abort the load with `AnalysisError::MalformedWord`
    Reject,
}

/// Load words from a file
///
/// Blank lines are ignored. Duplicates are kept in file order.
///
/// # Errors
///
/// Returns `MissingResource` if the file cannot be read, or `MalformedWord`
/// when `policy` is `Reject` and a line fails validation.
///
/// # Examples
/// ```no_run
/// use wordle_probability::wordlists::loader::{MalformedPolicy, load_from_file};
///
/// let words = load_from_file("data/answers.txt", MalformedPolicy::Skip).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    policy: MalformedPolicy,
) -> Result<Vec<Word>, AnalysisError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| AnalysisError::MissingResource {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content, &path.display().to_string(), policy)?;
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-delimited words
///
/// `origin` names the input in warnings and errors.
///
/// # Errors
///
/// Returns `MalformedWord` for the first invalid line when `policy` is `Reject`.
pub fn parse_words(
    content: &str,
    origin: &str,
    policy: MalformedPolicy,
) -> Result<Vec<Word>, AnalysisError> {
    let mut words = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match Word::new(trimmed) {
            Ok(word) => words.push(word),
            Err(reason) => match policy {
                MalformedPolicy::Skip => {
                    warn!("{origin}:{}: skipping {trimmed:?}: {reason}", idx + 1);
                }
                MalformedPolicy::Reject => {
                    return Err(AnalysisError::MalformedWord {
                        origin: origin.to_string(),
                        line: idx + 1,
                        text: trimmed.to_string(),
                        reason,
                    });
                }
            },
        }
    }

    Ok(words)
}

/// Convert a string slice of words to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_probability::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "slate", "nope"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_trims_and_skips_blank_lines() {
        let words = parse_words("crane\r\n\n  slate \n", "test", MalformedPolicy::Skip).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate"]);
    }

    #[test]
    fn parse_keeps_duplicates() {
        let words = parse_words("crane\ncrane\n", "test", MalformedPolicy::Skip).unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn skip_policy_drops_malformed_lines() {
        let words = parse_words("crane\ncranes\nab1de\nslate", "test", MalformedPolicy::Skip).unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn reject_policy_fails_on_first_malformed_line() {
        let err = parse_words("crane\ncranes\nab1de", "list.txt", MalformedPolicy::Reject).unwrap_err();
        match err {
            AnalysisError::MalformedWord {
                origin,
                line,
                text,
                reason,
            } => {
                assert_eq!(origin, "list.txt");
                assert_eq!(line, 2);
                assert_eq!(text, "cranes");
                assert_eq!(reason, WordError::InvalidLength(6));
            }
            other => panic!("expected MalformedWord, got {other:?}"),
        }
    }

    #[test]
    fn parse_empty_content() {
        let words = parse_words("", "test", MalformedPolicy::Reject).unwrap();
        assert!(words.is_empty());
    }
}

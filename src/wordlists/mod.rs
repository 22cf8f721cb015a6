//! Word lists for letter-frequency scoring
//!
//! Named word sources live as plain text files in a data directory, one
//! five-letter word per line. Any other source name is read as a file path.

pub mod loader;

use crate::core::{AnalysisError, Word};
use loader::{MalformedPolicy, load_from_file};
use std::fmt;
use std::path::{Path, PathBuf};

/// File name of the default corpus in the data directory
pub const CORPUS_FILE: &str = "sgb-words.txt";
/// File name of the curated answer list in the data directory
pub const ANSWERS_FILE: &str = "answers.txt";
/// File name of the dated answer list in the data directory
pub const DATED_FILE: &str = "answers-dated.txt";

/// Where a word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// Default five-letter corpus
    Corpus,
    /// Curated list of past answers
    Answers,
    /// Past answers in publication order
    Dated,
    /// Arbitrary file
    File(PathBuf),
}

impl WordSource {
    /// Resolve a source from its name
    ///
    /// Supported names: "corpus", "answers", "dated". Anything else is taken
    /// as a path to a word list file.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "corpus" | "sgb" => Self::Corpus,
            "answers" | "curated" => Self::Answers,
            "dated" => Self::Dated,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Location of the list, with named sources resolved against `data_dir`
    #[must_use]
    pub fn path(&self, data_dir: &Path) -> PathBuf {
        match self {
            Self::Corpus => data_dir.join(CORPUS_FILE),
            Self::Answers => data_dir.join(ANSWERS_FILE),
            Self::Dated => data_dir.join(DATED_FILE),
            Self::File(path) => path.clone(),
        }
    }

    /// Read the list from disk
    ///
    /// # Errors
    ///
    /// Returns `MissingResource` if the file cannot be read, or
    /// `MalformedWord` if `policy` is `Reject` and a line is not a valid word.
    pub fn load(&self, data_dir: &Path, policy: MalformedPolicy) -> Result<Vec<Word>, AnalysisError> {
        load_from_file(self.path(data_dir), policy)
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Corpus => write!(f, "corpus"),
            Self::Answers => write!(f, "answers"),
            Self::Dated => write!(f, "dated"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_sources() {
        assert_eq!(WordSource::from_name("corpus"), WordSource::Corpus);
        assert_eq!(WordSource::from_name("answers"), WordSource::Answers);
        assert_eq!(WordSource::from_name("curated"), WordSource::Answers);
        assert_eq!(WordSource::from_name("dated"), WordSource::Dated);
    }

    #[test]
    fn unknown_name_is_a_path() {
        assert_eq!(
            WordSource::from_name("lists/mine.txt"),
            WordSource::File(PathBuf::from("lists/mine.txt"))
        );
    }

    #[test]
    fn named_sources_resolve_against_data_dir() {
        let dir = Path::new("data");
        assert_eq!(WordSource::Corpus.path(dir), dir.join(CORPUS_FILE));
        assert_eq!(WordSource::Answers.path(dir), dir.join(ANSWERS_FILE));
        assert_eq!(WordSource::Dated.path(dir), dir.join(DATED_FILE));
    }

    #[test]
    fn file_source_ignores_data_dir() {
        let source = WordSource::File(PathBuf::from("/tmp/words.txt"));
        assert_eq!(source.path(Path::new("data")), PathBuf::from("/tmp/words.txt"));
    }

    #[test]
    fn missing_file_is_missing_resource() {
        let source = WordSource::File(PathBuf::from("definitely/not/here.txt"));
        let result = source.load(Path::new("."), MalformedPolicy::Skip);
        assert!(matches!(result, Err(AnalysisError::MissingResource { .. })));
    }
}

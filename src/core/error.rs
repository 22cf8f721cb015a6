//! Errors raised by the scoring pipeline

use super::WordError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure of a scoring run
///
/// Every variant is fatal: the run stops and no report is written.
#[derive(Debug)]
pub enum AnalysisError {
    /// A word list could not be read
    MissingResource { path: PathBuf, source: io::Error },
    /// No words were left to build frequency statistics from
    EmptyTrainingSet,
    /// A line was not a valid five-letter word (strict mode only)
    MalformedWord {
        origin: String,
        line: usize,
        text: String,
        reason: WordError,
    },
    /// A report file could not be written
    WriteReport { path: PathBuf, source: io::Error },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingResource { path, .. } => {
                write!(f, "cannot read word list {}", path.display())
            }
            Self::EmptyTrainingSet => {
                write!(f, "training set is empty, no letter frequencies to score with")
            }
            Self::MalformedWord {
                origin,
                line,
                text,
                reason,
            } => write!(f, "{origin}:{line}: malformed word {text:?}: {reason}"),
            Self::WriteReport { path, .. } => {
                write!(f, "cannot write report {}", path.display())
            }
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingResource { source, .. } | Self::WriteReport { source, .. } => {
                Some(source)
            }
            Self::MalformedWord { reason, .. } => Some(reason),
            Self::EmptyTrainingSet => None,
        }
    }
}

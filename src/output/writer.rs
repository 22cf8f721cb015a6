//! Report files
//!
//! All reports are rendered in memory first, so nothing is written unless
//! the whole pipeline succeeded.

use super::formatters::{letter_report, score_report, suggestion_report};
use crate::commands::ReportResult;
use crate::core::AnalysisError;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

pub const LETTER_REPORT_FILE: &str = "letter_probabilities.txt";
pub const SCORE_REPORT_FILE: &str = "word_scores.txt";
pub const SUGGESTION_REPORT_FILE: &str = "word_scores_with_suggestions.txt";

/// Paths of the reports written by `write_reports`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub letters: PathBuf,
    pub scores: PathBuf,
    pub suggestions: PathBuf,
}

impl ReportPaths {
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            letters: dir.join(LETTER_REPORT_FILE),
            scores: dir.join(SCORE_REPORT_FILE),
            suggestions: dir.join(SUGGESTION_REPORT_FILE),
        }
    }
}

/// Render and write the three reports into `dir`
///
/// `dir` is created if missing.
///
/// # Errors
///
/// Returns `WriteReport` naming the path that failed.
pub fn write_reports(dir: &Path, result: &ReportResult) -> Result<ReportPaths, AnalysisError> {
    let letters = letter_report(&result.frequencies);
    let scores = score_report(&result.ranked);
    let suggestions = suggestion_report(&result.suggestions());

    fs::create_dir_all(dir).map_err(|source| AnalysisError::WriteReport {
        path: dir.to_path_buf(),
        source,
    })?;

    let paths = ReportPaths::in_dir(dir);
    for (path, contents) in [
        (&paths.letters, letters),
        (&paths.scores, scores),
        (&paths.suggestions, suggestions),
    ] {
        fs::write(path, contents).map_err(|source| AnalysisError::WriteReport {
            path: path.clone(),
            source,
        })?;
        info!("wrote {}", path.display());
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_paths_in_dir() {
        let paths = ReportPaths::in_dir(Path::new("out"));
        assert_eq!(paths.letters, Path::new("out").join(LETTER_REPORT_FILE));
        assert_eq!(paths.scores, Path::new("out").join(SCORE_REPORT_FILE));
        assert_eq!(paths.suggestions, Path::new("out").join(SUGGESTION_REPORT_FILE));
    }
}

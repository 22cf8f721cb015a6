//! Report command
//!
//! Runs the full pipeline: load word lists, accumulate letter frequencies,
//! score, filter, rank and pair letter-disjoint follow-ups.

use crate::core::{AnalysisError, Word};
use crate::scoring::{
    DEFAULT_SUGGESTIONS, FilterMode, LetterFrequencies, ScoredWord, Suggestion,
    disjoint_partners, rank, score_words,
};
use crate::wordlists::WordSource;
use crate::wordlists::loader::MalformedPolicy;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::path::PathBuf;

/// Configuration for a report run
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub training: WordSource,
    /// `None` scores the training list itself
    pub scoring: Option<WordSource>,
    pub data_dir: PathBuf,
    pub filter: FilterMode,
    pub policy: MalformedPolicy,
    pub suggestions: usize,
}

impl ReportConfig {
    #[must_use]
    pub fn new(training: WordSource) -> Self {
        Self {
            training,
            scoring: None,
            data_dir: PathBuf::from("data"),
            filter: FilterMode::default(),
            policy: MalformedPolicy::default(),
            suggestions: DEFAULT_SUGGESTIONS,
        }
    }
}

/// Everything the report writer needs
#[derive(Debug, Clone)]
pub struct ReportResult {
    pub frequencies: LetterFrequencies,
    pub ranked: Vec<ScoredWord>,
    pub filter: FilterMode,
    /// Scoring words scored, counting duplicates
    pub scoring_words: usize,
    /// Words removed by the filter, from the training list (pre) or the scores (post)
    pub filtered_out: usize,
    pub suggestion_limit: usize,
}

impl ReportResult {
    /// Letter-disjoint follow-ups for every ranked word
    ///
    /// Shows a progress bar on stderr when it is a terminal.
    #[must_use]
    pub fn suggestions(&self) -> Vec<Suggestion<'_>> {
        let pb = ProgressBar::new(self.ranked.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} pairing [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }

        let suggestions = self
            .ranked
            .iter()
            .map(|entry| {
                pb.inc(1);
                Suggestion {
                    entry,
                    partners: disjoint_partners(entry, &self.ranked, self.suggestion_limit),
                }
            })
            .collect();

        pb.finish_and_clear();
        suggestions
    }
}

/// Load the configured word lists and run the pipeline
///
/// # Errors
///
/// Returns `MissingResource` or `MalformedWord` if a list cannot be loaded,
/// and `EmptyTrainingSet` if no training words remain after filtering.
pub fn run_report(config: &ReportConfig) -> Result<ReportResult, AnalysisError> {
    let training = config.training.load(&config.data_dir, config.policy)?;
    info!("training list '{}': {} words", config.training, training.len());

    let scoring = match &config.scoring {
        Some(source) => {
            let words = source.load(&config.data_dir, config.policy)?;
            info!("scoring list '{source}': {} words", words.len());
            Some(words)
        }
        None => None,
    };

    build_report(training, scoring, config.filter, config.suggestions)
}

/// Run the pipeline over lists already in memory
///
/// `scoring` of `None` scores the training list.
///
/// # Errors
///
/// Returns `EmptyTrainingSet` if no training words remain after filtering.
pub fn build_report(
    training: Vec<Word>,
    scoring: Option<Vec<Word>>,
    filter: FilterMode,
    suggestion_limit: usize,
) -> Result<ReportResult, AnalysisError> {
    info!("filter mode: {filter}");

    let loaded = training.len();
    let training = filter.apply_to_list(training);
    let mut filtered_out = loaded - training.len();
    let scoring = match scoring {
        Some(words) => filter.apply_to_list(words),
        None => training.clone(),
    };

    let frequencies = LetterFrequencies::accumulate(&training);
    if frequencies.is_empty() {
        return Err(AnalysisError::EmptyTrainingSet);
    }
    debug!("accumulated frequencies over {} words", frequencies.word_count());

    let mut scores = score_words(&scoring, &frequencies)?;
    debug!("scored {} distinct words", scores.len());

    filtered_out += filter.apply_to_scores(&mut scores);
    let ranked = rank(scores);
    info!("ranked {} words, {filtered_out} filtered out", ranked.len());

    Ok(ReportResult {
        frequencies,
        ranked,
        filter,
        scoring_words: scoring.len(),
        filtered_out,
        suggestion_limit,
    })
}

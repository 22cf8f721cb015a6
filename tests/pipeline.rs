// Integration tests for the scoring pipeline
// These tests load word lists from disk and write real report files

use std::fs;
use std::path::{Path, PathBuf};
use wordle_probability::commands::{ReportConfig, analyze_word, run_report};
use wordle_probability::core::{AnalysisError, Word};
use wordle_probability::output::write_reports;
use wordle_probability::scoring::FilterMode;
use wordle_probability::wordlists::WordSource;
use wordle_probability::wordlists::loader::MalformedPolicy;

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn fixture(name: &str) -> WordSource {
    WordSource::File(fixtures().join(name))
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "wordle_probability_{name}_{}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_training_list_end_to_end() {
    let mut config = ReportConfig::new(fixture("training.txt"));
    config.filter = FilterMode::Off;

    let result = run_report(&config).unwrap();
    assert_eq!(result.frequencies.word_count(), 3);
    assert_eq!(result.frequencies.letter_count(b'a'), 2);
    assert_eq!(result.frequencies.position_count(0, b'a'), 2);
    assert_eq!(result.frequencies.position_count(0, b'f'), 1);

    let abcde = result
        .ranked
        .iter()
        .find(|s| s.word.text() == "abcde")
        .unwrap();
    assert!((abcde.score - 10.0 / 9.0).abs() < 1e-12);
}

#[test]
fn test_post_filter_with_separate_scoring_list() {
    let mut config = ReportConfig::new(fixture("training.txt"));
    config.scoring = Some(fixture("scoring.txt"));

    let result = run_report(&config).unwrap();
    let ranked: Vec<&str> = result.ranked.iter().map(|s| s.word.text()).collect();

    // aabbc, hello, eerie repeat letters; grows ends in 's'
    assert_eq!(ranked, ["abcde", "fghij", "glyph"]);
    assert_eq!(result.frequencies.word_count(), 3);
    assert_eq!(result.scoring_words, 8);
}

#[test]
fn test_reports_written() {
    let mut config = ReportConfig::new(fixture("training.txt"));
    config.filter = FilterMode::Off;
    let result = run_report(&config).unwrap();

    let dir = scratch_dir("reports");
    let paths = write_reports(&dir, &result).unwrap();

    let scores = fs::read_to_string(&paths.scores).unwrap();
    assert_eq!(scores, "aabbc 1.3333\nabcde 1.1111\nfghij 0.5556\n");

    let suggestions = fs::read_to_string(&paths.suggestions).unwrap();
    assert!(suggestions.contains("abcde 1.1111\n    fghij 0.5556\n"));

    let letters = fs::read_to_string(&paths.letters).unwrap();
    assert!(letters.starts_with("Letters\na: 0.6667\n"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_strict_policy_rejects_malformed_list() {
    let mut config = ReportConfig::new(fixture("malformed.txt"));
    config.policy = MalformedPolicy::Reject;

    match run_report(&config) {
        Err(AnalysisError::MalformedWord { line, text, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(text, "cranes");
        }
        other => panic!("expected MalformedWord, got {other:?}"),
    }
}

#[test]
fn test_skip_policy_drops_malformed_lines() {
    let config = ReportConfig::new(fixture("malformed.txt"));
    let result = run_report(&config).unwrap();
    assert_eq!(result.frequencies.word_count(), 2);
}

#[test]
fn test_missing_named_list_in_data_dir() {
    let mut config = ReportConfig::new(WordSource::Answers);
    config.data_dir = fixtures().join("no_such_dir");

    assert!(matches!(
        run_report(&config),
        Err(AnalysisError::MissingResource { .. })
    ));
}

#[test]
fn test_analyze_against_fixture() {
    let training = fixture("training.txt")
        .load(Path::new("."), MalformedPolicy::Reject)
        .unwrap();
    let result = analyze_word(&Word::new("abcde").unwrap(), &training).unwrap();
    assert!((result.score - 10.0 / 9.0).abs() < 1e-12);
}

//! Plain-text report rendering

use crate::core::WORD_LEN;
use crate::scoring::{LetterFrequencies, ScoredWord, Suggestion};
use std::fmt::Write;

/// Letter presence probabilities, then one section per position
///
/// Each line is `letter: probability` with 4 decimals, ranked by count.
#[must_use]
pub fn letter_report(freq: &LetterFrequencies) -> String {
    let total = freq.word_count() as f64;
    let mut out = String::new();

    out.push_str("Letters\n");
    write_ranked(&mut out, &freq.ranked_letters(), total);

    for position in 0..WORD_LEN {
        let _ = writeln!(out, "\nPosition {}", position + 1);
        write_ranked(&mut out, &freq.ranked_position_letters(position), total);
    }

    out
}

fn write_ranked(out: &mut String, ranked: &[(u8, usize)], total: f64) {
    for &(letter, count) in ranked {
        let _ = writeln!(out, "{}: {:.4}", letter as char, count as f64 / total);
    }
}

/// `word score` per line in rank order
#[must_use]
pub fn score_report(ranked: &[ScoredWord]) -> String {
    let mut out = String::new();
    for entry in ranked {
        let _ = writeln!(out, "{}", format_entry(entry));
    }
    out
}

/// Each ranked word followed by its indented letter-disjoint follow-ups
#[must_use]
pub fn suggestion_report(suggestions: &[Suggestion<'_>]) -> String {
    let mut out = String::new();
    for suggestion in suggestions {
        let _ = writeln!(out, "{}", format_entry(suggestion.entry));
        for partner in &suggestion.partners {
            let _ = writeln!(out, "    {}", format_entry(partner));
        }
    }
    out
}

/// `word score` with the score to 4 decimals
#[must_use]
pub fn format_entry(entry: &ScoredWord) -> String {
    format!("{} {:.4}", entry.word, entry.score)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

//! Terminal output for command results

use super::formatters::{create_progress_bar, format_entry};
use super::writer::ReportPaths;
use crate::commands::{AnalysisResult, ReportResult};
use crate::core::WORD_LEN;
use colored::Colorize;

/// Number of top-ranked words shown in the summary
const SUMMARY_TOP: usize = 10;

/// Print a summary of a report run
pub fn print_report_summary(result: &ReportResult, paths: &ReportPaths) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LETTER FREQUENCY REPORT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Inputs:".bright_cyan().bold());
    println!("   Training words:   {}", result.frequencies.word_count());
    println!("   Scoring words:    {}", result.scoring_words);
    println!("   Filter:           {}", result.filter);
    println!("   Filtered out:     {}", result.filtered_out);
    println!("   Ranked words:     {}", result.ranked.len());

    if !result.ranked.is_empty() {
        let max = result.ranked[0].score;
        println!("\n🏆 {}", "Top words:".bright_cyan().bold());
        for (i, entry) in result.ranked.iter().take(SUMMARY_TOP).enumerate() {
            let bar = create_progress_bar(entry.score, max, 20);
            println!(
                "   {:2}. {} {}",
                i + 1,
                format_entry(entry).bright_yellow(),
                bar.green()
            );
        }
    }

    println!("\n📁 {}", "Reports:".bright_cyan().bold());
    for path in [&paths.letters, &paths.scores, &paths.suggestions] {
        println!("   {}", path.display());
    }
}

/// Print the per-position breakdown of a word's score
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SCORE ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} training words:", result.training_words);
    println!("   pos  letter  presence  at-position  score");
    for (position, part) in result.positions.iter().enumerate() {
        println!(
            "   {}    {}       {:.4}    {:.4}       {:.4}",
            position + 1,
            (part.letter as char).to_string().bright_yellow(),
            part.letter_probability,
            part.position_probability,
            part.score
        );
    }
    println!(
        "\n   Total score: {}",
        format!("{:.4}", result.score).bright_yellow().bold()
    );
    if result.implausible {
        println!(
            "   {}",
            "Unlikely answer: plural ending or repeated letter".red()
        );
    }
}

/// Dump internal state after a run
pub fn print_debug(result: &ReportResult) {
    let freq = &result.frequencies;
    println!("\n[debug] training word count: {}", freq.word_count());
    println!("[debug] letter counts: {:?}", as_chars(&freq.ranked_letters()));
    for position in 0..WORD_LEN {
        println!(
            "[debug] position {} counts: {:?}",
            position + 1,
            as_chars(&freq.ranked_position_letters(position))
        );
    }
    println!("[debug] filter mode: {:?}", result.filter);
    for entry in &result.ranked {
        println!("[debug] {} {}", entry.word, entry.score);
    }
}

fn as_chars(ranked: &[(u8, usize)]) -> Vec<(char, usize)> {
    ranked.iter().map(|&(letter, count)| (letter as char, count)).collect()
}

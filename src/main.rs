//! Wordle Letter Probability - CLI
//!
//! Builds letter frequencies from a training list, scores candidate words and
//! writes ranked reports.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use wordle_probability::{
    commands::{ReportConfig, analyze_word, run_report},
    core::Word,
    logging,
    output::{print_analysis_result, print_debug, print_report_summary, write_reports},
    scoring::{DEFAULT_SUGGESTIONS, FilterMode},
    wordlists::{WordSource, loader::MalformedPolicy},
};

#[derive(Parser)]
#[command(
    name = "wordle_probability",
    about = "Rank five-letter words by letter and position frequency",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Training list: 'corpus' (default), 'answers', 'dated', or path to file
    #[arg(short, long, global = true, default_value = "corpus")]
    training: String,

    /// Scoring list: 'training' (default, same list), 'corpus', 'answers', 'dated', or path
    #[arg(short, long, global = true, default_value = "training")]
    scoring: String,

    /// Directory holding the named word lists
    #[arg(short, long, global = true, default_value = "data")]
    data_dir: PathBuf,

    /// Directory the reports are written to
    #[arg(short, long, global = true, default_value = ".")]
    output_dir: PathBuf,

    /// Drop unlikely answers before building frequencies
    #[arg(long, global = true)]
    pre_filter: bool,

    /// Keep unlikely answers in the ranked output
    #[arg(long, global = true)]
    no_post_filter: bool,

    /// Follow-up words listed per ranked word
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_SUGGESTIONS)]
    suggestions: usize,

    /// Reject malformed lines instead of skipping them
    #[arg(long, global = true)]
    strict: bool,

    /// Dump internal state to stdout after the run
    #[arg(long, global = true)]
    debug: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every word and write the reports (default)
    Report,

    /// Show how a single word's score breaks down by position
    Score {
        /// Word to score
        word: String,
    },
}

impl Cli {
    fn policy(&self) -> MalformedPolicy {
        if self.strict {
            MalformedPolicy::Reject
        } else {
            MalformedPolicy::Skip
        }
    }

    fn report_config(&self) -> ReportConfig {
        let scoring = match self.scoring.as_str() {
            "training" | "same" => None,
            name => Some(WordSource::from_name(name)),
        };

        ReportConfig {
            training: WordSource::from_name(&self.training),
            scoring,
            data_dir: self.data_dir.clone(),
            filter: FilterMode::from_flags(self.pre_filter, !self.no_post_filter),
            policy: self.policy(),
            suggestions: self.suggestions,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Default to Report if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Report) {
        Commands::Report => run_report_command(&cli),
        Commands::Score { word } => run_score_command(&cli, word),
    }
}

fn run_report_command(cli: &Cli) -> Result<()> {
    let result = run_report(&cli.report_config()).context("scoring run failed")?;
    let paths = write_reports(&cli.output_dir, &result).context("writing reports failed")?;
    info!("reports written to {}", cli.output_dir.display());

    print_report_summary(&result, &paths);
    if cli.debug {
        print_debug(&result);
    }
    Ok(())
}

fn run_score_command(cli: &Cli, word: &str) -> Result<()> {
    let word = Word::new(word).with_context(|| format!("invalid word '{word}'"))?;
    let source = WordSource::from_name(&cli.training);
    let training = source
        .load(&cli.data_dir, cli.policy())
        .with_context(|| format!("loading training list '{source}'"))?;

    let result = analyze_word(&word, &training).context("scoring failed")?;
    print_analysis_result(&result);
    Ok(())
}

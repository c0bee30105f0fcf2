//! Command line front end for the dictation comparison engine.
//!
//! - `diktat compare <REFERENCE> <INPUT>` aligns a finished sentence
//! - `diktat live <REFERENCE> <INPUT>` shows keystroke-level feedback
//! - `diktat normalize <TEXT>` repairs typed digraphs

#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use diktat_core::diff::{render_markers, render_text};
use diktat_core::{load_config, normalize_user_text, ComparisonEngine, EngineConfig};

#[derive(Debug, Parser)]
#[command(name = "diktat", about = "Check dictated German sentences against a reference")]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence).
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compare a finished sentence word by word.
    Compare(CompareArgs),
    /// Character-by-character feedback for partial input.
    Live(CompareArgs),
    /// Print the input with typed digraphs repaired.
    Normalize {
        text: String,
    },
}

#[derive(Debug, Args)]
struct CompareArgs {
    /// The correct sentence.
    reference: String,

    /// What the learner typed.
    input: String,

    /// Treat capitalization errors as errors.
    #[arg(long, default_value_t = false)]
    case_sensitive: bool,

    /// Keep punctuation inside words when comparing.
    #[arg(long, default_value_t = false)]
    keep_punctuation: bool,

    /// JSON config file; falls back to defaults when unreadable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the full result as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl CompareArgs {
    fn engine(&self) -> ComparisonEngine {
        let config = load_config(self.config.as_deref()).unwrap_or_else(|error| {
            tracing::warn!(%error, "failed to load config, using defaults");
            EngineConfig::default()
        });

        let mut options = config.options;
        if self.case_sensitive {
            options = options.with_ignore_case(false);
        }
        if self.keep_punctuation {
            options = options.with_ignore_punctuation(false);
        }

        ComparisonEngine::new(config.with_options(options))
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Compare(args) => {
            let result = args.engine().compare(&args.reference, &args.input);
            if args.json {
                let encoded = serde_json::to_string_pretty(&result)
                    .context("failed to encode comparison as JSON")?;
                println!("{encoded}");
            } else {
                println!("{}", render_text(&result.diff));
                println!("{}", render_markers(&result.diff));
                println!(
                    "{}/{} words correct, {} wrong ({}%)",
                    result.stats.correct_words,
                    result.stats.total_words,
                    result.stats.wrong_words,
                    result.stats.accuracy_percent()
                );
            }
        }
        Command::Live(args) => {
            let tokens = args.engine().compare_live(&args.reference, &args.input);
            if args.json {
                let encoded = serde_json::to_string_pretty(&tokens)
                    .context("failed to encode live feedback as JSON")?;
                println!("{encoded}");
            } else {
                println!("{}", render_text(&tokens));
                println!("{}", render_markers(&tokens));
            }
        }
        Command::Normalize { text } => println!("{}", normalize_user_text(&text)),
    }

    Ok(())
}

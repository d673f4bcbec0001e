//! Subword CLI - Command-line interface for the BPE tokenizer.
//!
//! This is the main entry point for the `subword` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{PairsCommand, TokenizeCommand, TrainCommand};
use env_logger::Env;
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "subword")]
#[command(about = "A word-level BPE subword tokenizer", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Decrease log verbosity (-q warn, -qq error)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    quiet: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Learn merges from a corpus and print them
    Train(TrainCommand),
    /// Train on a corpus, then tokenize text with the learned merges
    Tokenize(TokenizeCommand),
    /// Show the most frequent adjacent pairs of a corpus
    Pairs(PairsCommand),
}

/// Level forced by `-v`/`-q`; `None` leaves `RUST_LOG` (default "info") in charge.
fn verbosity_override(verbose: u8, quiet: u8) -> Option<LevelFilter> {
    match (quiet, verbose) {
        (0, 0) => None,
        (0, 1) => Some(LevelFilter::Debug),
        (0, _) => Some(LevelFilter::Trace),
        (1, _) => Some(LevelFilter::Warn),
        _ => Some(LevelFilter::Error),
    }
}

fn init_logging(verbose: u8, quiet: u8) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp_millis();
    if let Some(level) = verbosity_override(verbose, quiet) {
        builder.filter_level(level);
    }
    let _ = builder.try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Train(cmd) => commands::train::run(cmd)?,
        Commands::Tokenize(cmd) => commands::tokenize::run(cmd)?,
        Commands::Pairs(cmd) => commands::pairs::run(cmd)?,
    }

    Ok(())
}

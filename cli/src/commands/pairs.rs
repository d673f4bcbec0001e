//! Pairs command implementation.

use clap::Parser;

/// Pairs command arguments.
#[derive(Parser)]
pub struct PairsCommand {
    /// Path to the corpus ("-" for stdin)
    #[arg(short, long)]
    pub corpus: String,

    /// Number of pairs to show
    #[arg(short, long, default_value_t = 10)]
    pub top: usize,
}

use super::read_text;
use anyhow::Result as AnyhowResult;
use subword_tokenizer::{PairCounter, Symbolizer, WordVocab};

pub fn run(cmd: PairsCommand) -> AnyhowResult<()> {
    let corpus = read_text(&cmd.corpus)?;

    let vocab = WordVocab::from_corpus(&Symbolizer::default(), &corpus);
    let stats = PairCounter::new().count(&vocab);
    log::info!(
        "{} distinct words, {} distinct pairs",
        vocab.len(),
        stats.len()
    );

    for candidate in stats.top_k(cmd.top) {
        println!(
            "{}\t{} {}",
            candidate.count, candidate.pair.0, candidate.pair.1
        );
    }

    Ok(())
}

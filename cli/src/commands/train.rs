//! Train command implementation.

use clap::Parser;

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Path to the training corpus ("-" for stdin)
    #[arg(short, long)]
    pub corpus: String,

    /// Maximum number of merge rounds
    #[arg(short, long, default_value_t = 100)]
    pub rounds: usize,

    /// End-of-word marker
    #[arg(short, long, default_value = subword_tokenizer::END_OF_WORD)]
    pub end_of_word: String,

    /// Also print the final vocabulary
    #[arg(long, default_value_t = false)]
    pub vocab: bool,
}

use super::read_text;
use anyhow::Result as AnyhowResult;
use std::time::Instant;
use subword_tokenizer::Tokenizer;

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    let corpus = read_text(&cmd.corpus)?;

    let mut tokenizer = Tokenizer::builder()
        .max_rounds(cmd.rounds)
        .end_of_word(&cmd.end_of_word)
        .build()?;

    let start = Instant::now();
    let model = tokenizer.train(&corpus)?;
    log::info!(
        "Training completed in {:.2}s ({:?})",
        start.elapsed().as_secs_f64(),
        model.state
    );

    for (rank, (left, right)) in model.merges.iter().enumerate() {
        println!("{}\t{} {}", rank, left, right);
    }

    if cmd.vocab {
        println!();
        for (word, count) in model.vocab.iter() {
            println!("{}\t{}", count, word.symbols().join(" "));
        }
    }

    Ok(())
}

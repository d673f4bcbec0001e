//! Tokenize command implementation.

use clap::{Parser, ValueEnum};

/// How learned merges are applied.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Mode {
    /// Merge any learned pair met by a left-to-right sweep
    Sweep,
    /// Merge the lowest-rank pair first
    Ranked,
}

impl From<Mode> for EncodingMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Sweep => EncodingMode::Sweep,
            Mode::Ranked => EncodingMode::Ranked,
        }
    }
}

/// Tokenize command arguments.
#[derive(Parser)]
pub struct TokenizeCommand {
    /// Path to the training corpus
    #[arg(short, long)]
    pub corpus: String,

    /// Text to tokenize ("-" for stdin)
    #[arg(short, long)]
    pub input: String,

    /// Maximum number of merge rounds
    #[arg(short, long, default_value_t = 100)]
    pub rounds: usize,

    /// Merge application mode
    #[arg(short, long, value_enum, default_value_t = Mode::Sweep)]
    pub mode: Mode,

    /// Print each word's tokens on its own line
    #[arg(long, default_value_t = false)]
    pub per_word: bool,
}

use super::read_text;
use anyhow::Result as AnyhowResult;
use subword_tokenizer::{EncodingMode, Tokenizer};

pub fn run(cmd: TokenizeCommand) -> AnyhowResult<()> {
    let corpus = read_text(&cmd.corpus)?;

    let input_text = if cmd.input == "-" {
        read_text("-")?
    } else {
        cmd.input
    };

    let mut tokenizer = Tokenizer::builder()
        .max_rounds(cmd.rounds)
        .encoding_mode(cmd.mode.into())
        .build()?;
    tokenizer.train(&corpus)?;

    let encoding = tokenizer.encode(&input_text);
    log::debug!(
        "{} tokens for {} words",
        encoding.len(),
        encoding.word_lengths.len()
    );

    if cmd.per_word {
        for word in encoding.words() {
            println!("{}", word.join(" "));
        }
    } else {
        println!("{}", encoding.tokens.join(" "));
    }

    Ok(())
}

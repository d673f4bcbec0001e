//! CLI commands for the subword tokenizer.

pub mod pairs;
pub mod tokenize;
pub mod train;

pub use pairs::PairsCommand;
pub use tokenize::TokenizeCommand;
pub use train::TrainCommand;

use anyhow::{Context, Result};
use std::io::Read;

/// Read a text argument: a file path, or "-" for stdin.
pub(crate) fn read_text(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        return Ok(buffer);
    }

    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path))
}

//! Subword-tokenizer - High-level tokenizer API
//!
//! This crate provides a user-friendly interface for word-level BPE
//! tokenization, integrating the symbolizer, the trainer and the merge
//! encoders into a single API.
//!
//! # Features
//!
//! - Simple builder pattern for tokenizer configuration
//! - Rank-agnostic sweep encoding (default) or rank-priority encoding
//! - Parallel batch tokenization
//! - Stateless `train` / `tokenize` functions over an explicit model value
//!
//! # Example
//!
//! ```rust
//! use subword_tokenizer::{tokenize, train};
//!
//! let model = train("low lower lowest lower lowest newest widest", 10)?;
//! let tokens = tokenize(&model, "lowest");
//!
//! assert!(tokens.last().unwrap().ends_with("</w>"));
//! # Ok::<(), subword_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use subword_core::{
    EncodingMode, MergeCandidate, MergeList, Pair, PairStats, Result, Symbol, Symbolizer,
    TokenizerError, TrainedModel, TrainingState, Word, WordVocab, END_OF_WORD,
};
pub use subword_training::{BpeTrainer, PairCounter, TrainingConfig};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{tokenize, train, Encoding, Tokenizer, TokenizerBuilder, TokenizerConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Subword-core - Core BPE merge algorithm implementation
//!
//! This crate provides the fundamental data structures and algorithms for
//! word-level byte-pair encoding (BPE): symbolizing text, the word-frequency
//! vocabulary, pair statistics with deterministic merge selection, and the
//! encoders that apply a learned merge list to new text.
//!
//! # Features
//!
//! - Deterministic, insertion-ordered vocabulary and pair statistics
//! - Symbol-aware merge application (never matches across symbol boundaries)
//! - Rank-agnostic sweep encoding and rank-priority encoding
//! - `serde` support on the model types for callers that persist them
//!
//! # Example
//!
//! ```rust
//! use subword_core::{Symbolizer, WordVocab};
//!
//! let vocab = WordVocab::from_corpus(&Symbolizer::default(), "low lower low");
//! assert_eq!(vocab.len(), 2);
//! assert_eq!(vocab.total_occurrences(), 3);
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

// Core BPE data structures
pub mod core;
pub use self::core::{
    merged_symbol, MergeCandidate, MergeList, Pair, PairStats, Symbol, TrainedModel,
    TrainingState, Word, WordVocab,
};

// Text to symbols
pub mod symbolizer;
pub use symbolizer::{Symbolizer, END_OF_WORD};

// Inference
pub mod encoding;
pub use encoding::{EncodingMode, RankedEncoder, SweepEncoder};

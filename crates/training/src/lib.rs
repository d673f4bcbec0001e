//! Subword-training - BPE merge learning
//!
//! This crate learns an ordered list of symbol merges from a text corpus.
//!
//! # Features
//!
//! - Deterministic pair counting and merge selection
//! - A round-limited training loop that stops early once no pairs remain
//! - Integration with subword-core for the vocabulary and model types
//!
//! # Example
//!
//! ```rust
//! use subword_training::{BpeTrainer, TrainingConfig};
//!
//! let config = TrainingConfig::builder().max_rounds(10).build()?;
//! let model = BpeTrainer::new(config).train("aa aa aa")?;
//!
//! assert_eq!(model.merges.len(), 2);
//! # Ok::<(), subword_training::TokenizerError>(())
//! ```

pub use subword_core::{Result, TokenizerError};

// Training infrastructure
pub mod training;
pub use training::{BpeTrainer, PairCounter, TrainingConfig, TrainingConfigBuilder};

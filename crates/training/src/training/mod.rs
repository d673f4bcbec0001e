//! Training infrastructure for BPE tokenizers.
//!
//! This module provides the merge-learning loop and the pair counting it
//! relies on.

pub mod counter;
pub mod trainer;

pub use counter::PairCounter;
pub use trainer::{BpeTrainer, TrainingConfig, TrainingConfigBuilder};

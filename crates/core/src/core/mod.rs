//! Core BPE data structures.
//!
//! This module contains the word vocabulary, merge list, pair statistics and
//! trained model types shared by training and inference.

pub mod merges;
pub mod model;
pub mod priority;
pub mod vocab;

pub use merges::{merged_symbol, MergeList, Pair};
pub use model::{TrainedModel, TrainingState};
pub use priority::{MergeCandidate, PairStats};
pub use vocab::{Symbol, Word, WordVocab};

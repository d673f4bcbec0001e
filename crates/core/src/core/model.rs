//! The result of training.

use crate::core::merges::MergeList;
use crate::core::vocab::WordVocab;
use crate::symbolizer::Symbolizer;
use serde::{Deserialize, Serialize};

/// State of the merge-learning loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingState {
    /// Rounds remain and adjacent pairs remain
    Running,
    /// No adjacent pair is left anywhere in the vocabulary
    Converged,
    /// The configured round limit was reached
    Exhausted,
}

impl TrainingState {
    /// Whether the loop has stopped.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, TrainingState::Running)
    }
}

/// A trained model: the learned merges and the final vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainedModel {
    /// Merges in learned order
    pub merges: MergeList,
    /// Vocabulary after the last merge
    pub vocab: WordVocab,
    /// Terminal state the training loop stopped in
    pub state: TrainingState,
    /// Splits text into words the way the training corpus was split
    pub symbolizer: Symbolizer,
}

impl TrainedModel {
    /// Number of merge rounds performed.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.merges.len()
    }

    /// The end-of-word marker closing every word.
    #[inline]
    pub fn end_of_word(&self) -> &str {
        self.symbolizer.end_of_word()
    }
}

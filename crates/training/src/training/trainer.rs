//! BPE trainer implementation.
//!
//! The trainer runs a simple state machine. Each round counts the adjacent
//! pairs of the current vocabulary, selects the most frequent pair, records it
//! in the merge list and rewrites the vocabulary with that pair merged. The
//! loop stops as [`TrainingState::Exhausted`] once the configured number of
//! rounds has run, or as [`TrainingState::Converged`] when no adjacent pair is
//! left.

use super::counter::PairCounter;
use compact_str::CompactString;
use subword_core::{
    MergeList, Result, Symbolizer, TrainedModel, TrainingState, WordVocab, END_OF_WORD,
};

/// Upper bound on the merge list capacity reserved up front.
const MAX_PREALLOCATED_MERGES: usize = 4096;

/// Configuration for BPE training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingConfig {
    /// Maximum number of merge rounds
    pub max_rounds: usize,
    /// Splits the corpus into symbolized words
    pub symbolizer: Symbolizer,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            max_rounds: 100,
            symbolizer: Symbolizer::default(),
        }
    }
}

impl TrainingConfig {
    /// Create a configuration builder.
    pub fn builder() -> TrainingConfigBuilder {
        TrainingConfigBuilder::default()
    }
}

/// Builder for [`TrainingConfig`].
#[derive(Debug, Clone)]
pub struct TrainingConfigBuilder {
    max_rounds: usize,
    end_of_word: CompactString,
}

impl Default for TrainingConfigBuilder {
    fn default() -> Self {
        Self {
            max_rounds: TrainingConfig::default().max_rounds,
            end_of_word: CompactString::new(END_OF_WORD),
        }
    }
}

impl TrainingConfigBuilder {
    /// Set the maximum number of merge rounds.
    pub fn max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Set the end-of-word marker.
    pub fn end_of_word(mut self, marker: &str) -> Self {
        self.end_of_word = CompactString::new(marker);
        self
    }

    /// Build the configuration.
    ///
    /// Fails if the end-of-word marker is empty or contains whitespace.
    pub fn build(self) -> Result<TrainingConfig> {
        Ok(TrainingConfig {
            max_rounds: self.max_rounds,
            symbolizer: Symbolizer::try_new(&self.end_of_word)?,
        })
    }
}

/// BPE trainer.
///
/// Learns merges from a corpus by repeatedly merging the most frequent
/// adjacent symbol pair. Ties go to the pair observed first when scanning the
/// vocabulary in first-occurrence order, so training is reproducible.
#[derive(Debug, Clone, Default)]
pub struct BpeTrainer {
    /// Configuration
    config: TrainingConfig,
    /// Pair statistics collector
    counter: PairCounter,
}

impl BpeTrainer {
    /// Create a new BPE trainer with the given configuration.
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            counter: PairCounter::new(),
        }
    }

    /// Create a new BPE trainer with the default configuration and the given
    /// round limit.
    pub fn with_max_rounds(max_rounds: usize) -> Self {
        Self::new(TrainingConfig {
            max_rounds,
            ..Default::default()
        })
    }

    /// The trainer configuration.
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Train on `corpus`.
    ///
    /// # Returns
    /// The learned merges, the final vocabulary and the terminal state.
    pub fn train(&self, corpus: &str) -> Result<TrainedModel> {
        let mut vocab = WordVocab::from_corpus(&self.config.symbolizer, corpus);
        let mut merges =
            MergeList::with_capacity(self.config.max_rounds.min(MAX_PREALLOCATED_MERGES));

        log::info!(
            "Starting BPE training: {} words ({} distinct), up to {} merges",
            vocab.total_occurrences(),
            vocab.len(),
            self.config.max_rounds
        );

        let mut state = TrainingState::Running;
        while !state.is_terminal() {
            state = self.step(&mut vocab, &mut merges)?;
        }

        log::info!(
            "Finished training: {} merges, {:?}, {} symbols across {} distinct words",
            merges.len(),
            state,
            vocab.total_symbols(),
            vocab.len()
        );

        Ok(TrainedModel {
            merges,
            vocab,
            state,
            symbolizer: self.config.symbolizer.clone(),
        })
    }

    /// Run one round of the training loop.
    fn step(&self, vocab: &mut WordVocab, merges: &mut MergeList) -> Result<TrainingState> {
        if merges.len() >= self.config.max_rounds {
            return Ok(TrainingState::Exhausted);
        }

        let stats = self.counter.count(vocab);
        let Some(best) = stats.select_best() else {
            return Ok(TrainingState::Converged);
        };

        log::debug!(
            "merge {}: ({}, {}) count={} of {} pairs",
            merges.len(),
            best.pair.0,
            best.pair.1,
            best.count,
            stats.len()
        );

        *vocab = vocab.apply_merge(&best.pair);
        merges.push(best.pair)?;

        Ok(TrainingState::Running)
    }
}

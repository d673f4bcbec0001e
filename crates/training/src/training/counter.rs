//! Pair counting for BPE training.
//!
//! This module tallies the frequency of every adjacent symbol pair in a
//! [`WordVocab`], weighted by word frequency.

use subword_core::{PairStats, WordVocab};

/// Counter for adjacent-pair frequencies.
///
/// Counting is sequential: pairs are observed in vocabulary order and left to
/// right within each word, which fixes the tie-break order of the resulting
/// [`PairStats`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PairCounter;

impl PairCounter {
    /// Create a new pair counter.
    pub fn new() -> Self {
        Self
    }

    /// Count all adjacent pairs of `vocab`.
    ///
    /// Every occurrence of a pair inside a word adds that word's frequency.
    /// Words with fewer than two symbols contribute nothing.
    pub fn count(&self, vocab: &WordVocab) -> PairStats {
        let mut stats = PairStats::new();

        for (word, count) in vocab.iter() {
            for (left, right) in word.pairs() {
                stats.add(left, right, count);
            }
        }

        stats
    }
}

//! Pair statistics and merge selection.
//!
//! [`PairStats`] holds the aggregated frequency of every adjacent symbol pair
//! in a vocabulary. Pairs keep the order in which they were first observed,
//! which is what breaks frequency ties: among pairs with the highest count,
//! the one observed first wins.

use crate::core::merges::Pair;
use crate::core::vocab::Symbol;
use ahash::AHashMap;
use dary_heap::OctonaryHeap;
use std::cmp::Ordering;

/// A pair that could be merged next.
///
/// Candidates compare by `count`, then `first_seen`; the pair itself does not
/// take part. Candidates from one [`PairStats`] have distinct `first_seen`.
#[derive(Debug, Clone)]
pub struct MergeCandidate {
    /// The pair of symbols to merge
    pub pair: Pair,
    /// The aggregated frequency of this pair
    pub count: u64,
    /// Position at which the pair was first observed
    pub first_seen: usize,
}

impl MergeCandidate {
    /// Create a new merge candidate.
    pub fn new(pair: Pair, count: u64, first_seen: usize) -> Self {
        Self {
            pair,
            count,
            first_seen,
        }
    }
}

// Higher count first; on equal counts the earlier observation wins.
impl Ord for MergeCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.first_seen.cmp(&self.first_seen))
    }
}

impl PartialEq for MergeCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MergeCandidate {}

impl PartialOrd for MergeCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Aggregated adjacent-pair frequencies in first-observed order.
#[derive(Debug, Clone, Default)]
pub struct PairStats {
    /// (pair, count) in first-observed order
    entries: Vec<(Pair, u64)>,
    /// Left symbol -> right symbol -> position in `entries`
    index: AHashMap<Symbol, AHashMap<Symbol, usize>>,
}

impl PairStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` to the running total of `(left, right)`.
    ///
    /// A count of 0 is ignored, so absent pairs never appear with 0.
    pub fn add(&mut self, left: &Symbol, right: &Symbol, count: u64) {
        if count == 0 {
            return;
        }

        if let Some(&pos) = self
            .index
            .get(left.as_str())
            .and_then(|rights| rights.get(right.as_str()))
        {
            self.entries[pos].1 += count;
            return;
        }

        let pos = self.entries.len();
        self.index
            .entry(left.clone())
            .or_default()
            .insert(right.clone(), pos);
        self.entries.push(((left.clone(), right.clone()), count));
    }

    /// Get the aggregated count of a pair.
    #[inline]
    pub fn get(&self, left: &str, right: &str) -> Option<u64> {
        let pos = *self.index.get(left)?.get(right)?;
        Some(self.entries[pos].1)
    }

    /// Get the number of distinct pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no pair was observed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(pair, count)` in first-observed order.
    pub fn iter(&self) -> impl Iterator<Item = (&Pair, u64)> + '_ {
        self.entries.iter().map(|(pair, count)| (pair, *count))
    }

    fn candidates(&self) -> impl Iterator<Item = MergeCandidate> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(pos, (pair, count))| MergeCandidate::new(pair.clone(), *count, pos))
    }

    /// Select the pair to merge next.
    ///
    /// Returns the pair with the maximum count, the first-observed one on
    /// ties, or `None` if there are no pairs left.
    pub fn select_best(&self) -> Option<MergeCandidate> {
        self.candidates().max()
    }

    /// The `k` best candidates, in the order [`select_best`](Self::select_best)
    /// would rank them.
    pub fn top_k(&self, k: usize) -> Vec<MergeCandidate> {
        let mut heap: OctonaryHeap<MergeCandidate> = self.candidates().collect();
        let mut top = Vec::with_capacity(k.min(heap.len()));

        while top.len() < k {
            match heap.pop() {
                Some(candidate) => top.push(candidate),
                None => break,
            }
        }

        top
    }
}

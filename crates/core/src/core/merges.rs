//! Learned merge operations.
//!
//! A [`MergeList`] records the pairs merged during training, in the order they
//! were learned (rank 0 = learned first), together with a hash index for fast
//! membership and rank lookups.

use crate::core::vocab::Symbol;
use crate::error::{Result, TokenizerError};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Two adjacent symbols that can be merged.
pub type Pair = (Symbol, Symbol);

/// The symbol produced by merging `left` and `right`.
pub fn merged_symbol(left: &str, right: &str) -> Symbol {
    let mut merged = Symbol::with_capacity(left.len() + right.len());
    merged.push_str(left);
    merged.push_str(right);
    merged
}

/// Ordered list of learned merges with rank lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(into = "Vec<Pair>", try_from = "Vec<Pair>")]
pub struct MergeList {
    /// Pairs in learned order
    pairs: Vec<Pair>,
    /// Left symbol -> right symbol -> rank
    ranks: AHashMap<Symbol, AHashMap<Symbol, u32>>,
}

impl MergeList {
    /// Create a new empty merge list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new merge list with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
            ranks: AHashMap::with_capacity(capacity),
        }
    }

    /// Append a merge, returning its rank.
    ///
    /// Fails if either symbol is empty or the pair is already present.
    pub fn push(&mut self, pair: Pair) -> Result<u32> {
        if pair.0.is_empty() || pair.1.is_empty() {
            return Err(TokenizerError::InvalidMerge(format!(
                "empty symbol in pair ({:?}, {:?})",
                pair.0, pair.1
            )));
        }
        if let Some(rank) = self.rank(&pair.0, &pair.1) {
            return Err(TokenizerError::InvalidMerge(format!(
                "pair ({}, {}) already learned at rank {}",
                pair.0, pair.1, rank
            )));
        }

        let rank = self.pairs.len() as u32;
        self.ranks
            .entry(pair.0.clone())
            .or_default()
            .insert(pair.1.clone(), rank);
        self.pairs.push(pair);

        Ok(rank)
    }

    /// Create a merge list from pairs in rank order.
    pub fn from_pairs(pairs: impl IntoIterator<Item = Pair>) -> Result<Self> {
        let mut merges = Self::new();
        for pair in pairs {
            merges.push(pair)?;
        }
        Ok(merges)
    }

    /// Get the rank of a pair, if it was learned.
    #[inline]
    pub fn rank(&self, left: &str, right: &str) -> Option<u32> {
        self.ranks.get(left)?.get(right).copied()
    }

    /// Check if the pair `(left, right)` is anywhere in the list.
    #[inline]
    pub fn contains(&self, left: &str, right: &str) -> bool {
        self.rank(left, right).is_some()
    }

    /// Get the pair learned at `rank`.
    #[inline]
    pub fn get(&self, rank: u32) -> Option<&Pair> {
        self.pairs.get(rank as usize)
    }

    /// Iterate over pairs in learned order.
    pub fn iter(&self) -> impl Iterator<Item = &Pair> + '_ {
        self.pairs.iter()
    }

    /// The pairs in learned order.
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Get the number of merges.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if there are no merges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Symbols produced by the merges, in learned order.
    pub fn produced_symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.pairs.iter().map(|(left, right)| merged_symbol(left, right))
    }
}

impl PartialEq for MergeList {
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}

impl Eq for MergeList {}

impl TryFrom<Vec<Pair>> for MergeList {
    type Error = TokenizerError;

    fn try_from(pairs: Vec<Pair>) -> Result<Self> {
        Self::from_pairs(pairs)
    }
}

impl From<MergeList> for Vec<Pair> {
    fn from(merges: MergeList) -> Self {
        merges.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> Pair {
        (Symbol::new(a), Symbol::new(b))
    }

    #[test]
    fn test_push_assigns_ranks() {
        let mut merges = MergeList::new();
        assert_eq!(merges.push(pair("t", "</w>")).unwrap(), 0);
        assert_eq!(merges.push(pair("w", "e")).unwrap(), 1);

        assert_eq!(merges.rank("t", "</w>"), Some(0));
        assert_eq!(merges.rank("w", "e"), Some(1));
        assert_eq!(merges.rank("e", "w"), None);
        assert_eq!(merges.get(1), Some(&pair("w", "e")));
        assert_eq!(merges.len(), 2);
    }

    #[test]
    fn test_push_rejects_duplicates() {
        let mut merges = MergeList::new();
        merges.push(pair("a", "b")).unwrap();

        let err = merges.push(pair("a", "b")).unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidMerge(_)));
        assert_eq!(merges.len(), 1);
    }

    #[test]
    fn test_push_rejects_empty_symbol() {
        let mut merges = MergeList::new();
        assert!(merges.push(pair("", "b")).is_err());
        assert!(merges.is_empty());
    }

    #[test]
    fn test_from_pairs() {
        let merges = MergeList::from_pairs(vec![pair("a", "b"), pair("ab", "c")]).unwrap();
        assert!(merges.contains("ab", "c"));
        assert_eq!(
            merges.produced_symbols().collect::<Vec<_>>(),
            vec!["ab", "abc"]
        );
    }

    #[test]
    fn test_merged_symbol() {
        assert_eq!(merged_symbol("lo", "we"), "lowe");
    }
}

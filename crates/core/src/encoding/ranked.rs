//! Rank-priority encoding.

use crate::core::{MergeList, Pair, Word};

/// Applies learned merges in rank order.
///
/// Repeatedly finds the adjacent pair with the lowest learned rank and merges
/// all of its non-overlapping occurrences, until no learned pair is adjacent.
pub struct RankedEncoder<'a> {
    merges: &'a MergeList,
}

impl<'a> RankedEncoder<'a> {
    /// Create an encoder over a merge list.
    pub fn new(merges: &'a MergeList) -> Self {
        Self { merges }
    }

    /// The learned pair with the lowest rank in `word`, if any.
    fn lowest_rank_pair(&self, word: &Word) -> Option<&'a Pair> {
        let rank = word
            .pairs()
            .filter_map(|(a, b)| self.merges.rank(a, b))
            .min()?;
        self.merges.get(rank)
    }

    /// Segment one symbolized word.
    pub fn encode_word(&self, mut word: Word) -> Word {
        while let Some(pair) = self.lowest_rank_pair(&word) {
            word = word.merge_pair(pair);
        }
        word
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolizer::Symbolizer;

    fn merges(pairs: &[(&str, &str)]) -> MergeList {
        MergeList::from_pairs(
            pairs
                .iter()
                .map(|&(a, b)| -> Pair { (a.into(), b.into()) }),
        )
        .unwrap()
    }

    fn encode(merges: &MergeList, word: &str) -> Vec<String> {
        let word = Symbolizer::default().symbolize_word(word);
        RankedEncoder::new(merges)
            .encode_word(word)
            .into_symbols()
            .into_iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_lowest_rank_first() {
        let merges = merges(&[("b", "c"), ("a", "b")]);
        assert_eq!(encode(&merges, "abc"), vec!["a", "bc", "</w>"]);
    }

    #[test]
    fn test_chains_merges() {
        let merges = merges(&[("a", "b"), ("ab", "c"), ("c", "d")]);
        assert_eq!(encode(&merges, "abcd"), vec!["abc", "d", "</w>"]);
    }

    #[test]
    fn test_no_merges() {
        assert_eq!(encode(&MergeList::new(), "ab"), vec!["a", "b", "</w>"]);
    }
}

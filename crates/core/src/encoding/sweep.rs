//! Rank-agnostic sweep encoding.

use crate::core::{merged_symbol, MergeList, Symbol, Word};

/// Applies learned merges by repeated left-to-right sweeps.
///
/// The merge list is used only as a membership set. Each sweep merges every
/// non-overlapping adjacent pair that is a member, scanning left to right and
/// skipping past each merged pair; pairs formed by a sweep are only looked at
/// by the next one. Sweeps repeat until no member pair is adjacent.
pub struct SweepEncoder<'a> {
    merges: &'a MergeList,
}

impl<'a> SweepEncoder<'a> {
    /// Create an encoder over a merge list.
    pub fn new(merges: &'a MergeList) -> Self {
        Self { merges }
    }

    /// Check if any adjacent pair of `tokens` is a learned merge.
    fn has_member_pair(&self, tokens: &[Symbol]) -> bool {
        tokens
            .windows(2)
            .any(|window| self.merges.contains(&window[0], &window[1]))
    }

    /// One left-to-right, non-overlapping merge pass.
    fn sweep(&self, tokens: &[Symbol]) -> Vec<Symbol> {
        let mut merged = Vec::with_capacity(tokens.len());
        let mut i = 0;

        while i < tokens.len() {
            if i + 1 < tokens.len() && self.merges.contains(&tokens[i], &tokens[i + 1]) {
                merged.push(merged_symbol(&tokens[i], &tokens[i + 1]));
                i += 2;
            } else {
                merged.push(tokens[i].clone());
                i += 1;
            }
        }

        merged
    }

    /// Segment one symbolized word.
    ///
    /// Terminates because every sweep that runs merges at least one pair and
    /// so shortens the sequence.
    pub fn encode_word(&self, word: Word) -> Word {
        let mut tokens = word.into_symbols();

        while self.has_member_pair(&tokens) {
            tokens = self.sweep(&tokens);
        }

        Word::new(tokens)
    }
}

//! Word-frequency vocabulary used during training.
//!
//! A [`WordVocab`] maps every distinct word form, under its current
//! segmentation, to the number of times it occurs in the corpus. Entries keep
//! the order in which they were first inserted so that everything computed
//! from the vocabulary (pair statistics, merge selection) is reproducible.

use crate::core::merges::{merged_symbol, Pair};
use crate::symbolizer::Symbolizer;
use ahash::{AHashMap, AHashSet};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// An atomic or merged text fragment.
pub type Symbol = CompactString;

/// One word form as an ordered sequence of symbols.
///
/// Two words are equal iff their symbol sequences are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(Vec<Symbol>);

impl Word {
    /// Create a word from its symbols.
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }

    /// The symbols of this word, in order.
    #[inline]
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// Consume the word and return its symbols.
    pub fn into_symbols(self) -> Vec<Symbol> {
        self.0
    }

    /// Number of symbols in the word.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the word has no symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over adjacent symbol pairs, left to right.
    pub fn pairs(&self) -> impl Iterator<Item = (&Symbol, &Symbol)> + '_ {
        self.0.windows(2).map(|window| (&window[0], &window[1]))
    }

    /// Check if `pair` occurs as two adjacent symbols.
    pub fn contains_pair(&self, pair: &Pair) -> bool {
        self.pairs().any(|(a, b)| *a == pair.0 && *b == pair.1)
    }

    /// Replace every non-overlapping occurrence of `pair`, scanning left to
    /// right, by the concatenation of its two symbols.
    ///
    /// After a merge at position `i` the scan resumes at `i + 2`, so for a
    /// pair like `(a, a)` the word `a a a` becomes `aa a`.
    pub fn merge_pair(&self, pair: &Pair) -> Word {
        let (left, right) = pair;
        let mut merged = Vec::with_capacity(self.0.len());
        let mut i = 0;

        while i < self.0.len() {
            if i + 1 < self.0.len() && self.0[i] == *left && self.0[i + 1] == *right {
                merged.push(merged_symbol(left, right));
                i += 2;
            } else {
                merged.push(self.0[i].clone());
                i += 1;
            }
        }

        Word(merged)
    }
}

impl From<Vec<Symbol>> for Word {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }
}

impl FromIterator<Symbol> for Word {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Frequency-weighted collection of distinct word forms.
///
/// Frequencies are always at least 1. Iteration follows first-insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(into = "Vec<(Word, u64)>", from = "Vec<(Word, u64)>")]
pub struct WordVocab {
    /// Distinct words, in first-insertion order
    words: Vec<Word>,
    /// Frequency of `words[i]`
    counts: Vec<u64>,
    /// Word -> position in `words`
    index: AHashMap<Word, usize>,
}

impl WordVocab {
    /// Create a new empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new vocabulary with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: Vec::with_capacity(capacity),
            counts: Vec::with_capacity(capacity),
            index: AHashMap::with_capacity(capacity),
        }
    }

    /// Build the vocabulary of a corpus.
    ///
    /// Every whitespace-delimited word is symbolized and counted; corpus word
    /// order is not preserved beyond the order of first occurrence.
    pub fn from_corpus(symbolizer: &Symbolizer, corpus: &str) -> Self {
        let mut vocab = Self::new();
        for word in symbolizer.symbolize(corpus) {
            vocab.add_word(word, 1);
        }
        vocab
    }

    /// Add `count` occurrences of `word`.
    ///
    /// A count of 0 is ignored so that no zero-frequency entry is ever stored.
    pub fn add_word(&mut self, word: Word, count: u64) {
        if count == 0 {
            return;
        }

        if let Some(&pos) = self.index.get(&word) {
            self.counts[pos] += count;
            return;
        }

        self.index.insert(word.clone(), self.words.len());
        self.words.push(word);
        self.counts.push(count);
    }

    /// Get the frequency of a word.
    #[inline]
    pub fn frequency(&self, word: &Word) -> Option<u64> {
        self.index.get(word).map(|&pos| self.counts[pos])
    }

    /// Get the number of distinct words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the vocabulary is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over `(word, frequency)` entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Word, u64)> + '_ {
        self.words.iter().zip(self.counts.iter().copied())
    }

    /// Total number of word occurrences.
    pub fn total_occurrences(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Total number of symbols across all word occurrences.
    pub fn total_symbols(&self) -> u64 {
        self.iter()
            .map(|(word, count)| word.len() as u64 * count)
            .sum()
    }

    /// Distinct symbols in first-seen order.
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut seen = AHashSet::new();
        let mut symbols = Vec::new();

        for word in &self.words {
            for symbol in word.symbols() {
                if seen.insert(symbol.clone()) {
                    symbols.push(symbol.clone());
                }
            }
        }

        symbols
    }

    /// Apply one merge to every word, returning the new vocabulary.
    ///
    /// Frequencies are copied unchanged. Should two distinct words become the
    /// same sequence, their frequencies are summed at the first one's position.
    pub fn apply_merge(&self, pair: &Pair) -> WordVocab {
        let mut merged = Self::with_capacity(self.len());

        for (word, count) in self.iter() {
            let new_word = if word.contains_pair(pair) {
                word.merge_pair(pair)
            } else {
                word.clone()
            };

            if merged.index.contains_key(&new_word) {
                log::debug!(
                    "merge ({}, {}) collapsed two word forms into {:?}",
                    pair.0,
                    pair.1,
                    new_word.symbols()
                );
            }
            merged.add_word(new_word, count);
        }

        merged
    }
}

impl PartialEq for WordVocab {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words && self.counts == other.counts
    }
}

impl Eq for WordVocab {}

impl From<Vec<(Word, u64)>> for WordVocab {
    fn from(entries: Vec<(Word, u64)>) -> Self {
        let mut vocab = Self::with_capacity(entries.len());
        for (word, count) in entries {
            vocab.add_word(word, count);
        }
        vocab
    }
}

impl From<WordVocab> for Vec<(Word, u64)> {
    fn from(vocab: WordVocab) -> Self {
        vocab.words.into_iter().zip(vocab.counts).collect()
    }
}

//! Main tokenizer implementation.
//!
//! This module provides the high-level `Tokenizer` struct that ties together
//! the symbolizer, the trainer and the merge encoders.

use compact_str::CompactString;
use subword_core::{
    EncodingMode, MergeList, Pair, RankedEncoder, Result, SweepEncoder, Symbol, Symbolizer,
    TrainedModel, TrainingState, Word, WordVocab, END_OF_WORD,
};
use subword_training::{BpeTrainer, TrainingConfig};

/// Configuration for building a tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Maximum number of merge rounds during training
    pub max_rounds: usize,
    /// End-of-word marker appended to every word
    pub end_of_word: CompactString,
    /// How learned merges are applied to new text
    pub encoding_mode: EncodingMode,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            max_rounds: TrainingConfig::default().max_rounds,
            end_of_word: CompactString::new(END_OF_WORD),
            encoding_mode: EncodingMode::Sweep,
        }
    }
}

/// Builder for creating a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
}

impl TokenizerBuilder {
    /// Create a new tokenizer builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of merge rounds.
    pub fn max_rounds(mut self, rounds: usize) -> Self {
        self.config.max_rounds = rounds;
        self
    }

    /// Set the end-of-word marker.
    pub fn end_of_word(mut self, marker: &str) -> Self {
        self.config.end_of_word = CompactString::new(marker);
        self
    }

    /// Set the encoding mode.
    pub fn encoding_mode(mut self, mode: EncodingMode) -> Self {
        self.config.encoding_mode = mode;
        self
    }

    /// Build the tokenizer.
    pub fn build(self) -> Result<Tokenizer> {
        Tokenizer::new(self.config)
    }
}

/// Main tokenizer struct.
///
/// An untrained tokenizer splits text into atomic symbols only; after
/// [`train`](Tokenizer::train) it applies the learned merges.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Configuration
    config: TokenizerConfig,
    /// Text to symbolized words
    symbolizer: Symbolizer,
    /// Trained model, if any
    model: Option<TrainedModel>,
}

impl Tokenizer {
    /// Create a new untrained tokenizer with the given configuration.
    pub fn new(config: TokenizerConfig) -> Result<Self> {
        let symbolizer = Symbolizer::try_new(&config.end_of_word)?;

        Ok(Self {
            config,
            symbolizer,
            model: None,
        })
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Create a tokenizer around an already trained model.
    pub fn from_model(model: TrainedModel, encoding_mode: EncodingMode) -> Self {
        let config = TokenizerConfig {
            max_rounds: model.rounds(),
            end_of_word: CompactString::new(model.end_of_word()),
            encoding_mode,
        };

        Self {
            config,
            symbolizer: model.symbolizer.clone(),
            model: Some(model),
        }
    }

    /// Create an inference-only tokenizer from merges in learned order.
    ///
    /// The resulting model has an empty vocabulary. Fails on an invalid
    /// end-of-word marker, a duplicate pair or an empty symbol.
    pub fn from_merges(
        pairs: impl IntoIterator<Item = Pair>,
        end_of_word: &str,
        encoding_mode: EncodingMode,
    ) -> Result<Self> {
        let symbolizer = Symbolizer::try_new(end_of_word)?;
        let merges = MergeList::from_pairs(pairs)?;

        let model = TrainedModel {
            merges,
            vocab: WordVocab::new(),
            state: TrainingState::Exhausted,
            symbolizer,
        };

        Ok(Self::from_model(model, encoding_mode))
    }

    /// Train the tokenizer on a corpus, replacing any previous model.
    pub fn train(&mut self, corpus: &str) -> Result<&TrainedModel> {
        let trainer = BpeTrainer::new(TrainingConfig {
            max_rounds: self.config.max_rounds,
            symbolizer: self.symbolizer.clone(),
        });

        if self.model.is_some() {
            log::debug!("Retraining replaces {} learned merges", self.merges().len());
        }

        let model = trainer.train(corpus)?;
        Ok(self.model.insert(model))
    }

    /// The trained model, if the tokenizer has been trained.
    pub fn model(&self) -> Option<&TrainedModel> {
        self.model.as_ref()
    }

    /// The learned merges (empty until trained).
    pub fn merges(&self) -> &[Pair] {
        self.model
            .as_ref()
            .map(|model| model.merges.pairs())
            .unwrap_or(&[])
    }

    /// The tokenizer configuration.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Segment one symbolized word with the learned merges.
    fn encode_word(&self, word: Word) -> Word {
        let Some(model) = &self.model else {
            return word;
        };

        match self.config.encoding_mode {
            EncodingMode::Sweep => SweepEncoder::new(&model.merges).encode_word(word),
            EncodingMode::Ranked => RankedEncoder::new(&model.merges).encode_word(word),
        }
    }

    /// Tokenize text into subword tokens.
    ///
    /// Each whitespace-delimited word is segmented on its own; the result is
    /// the concatenation of all words' tokens, in word order.
    pub fn tokenize(&self, text: &str) -> Vec<Symbol> {
        self.encode(text).tokens
    }

    /// Tokenize text, keeping track of word boundaries.
    pub fn encode(&self, text: &str) -> Encoding {
        let mut tokens = Vec::new();
        let mut word_lengths = Vec::new();

        for word in self.symbolizer.symbolize(text) {
            let word = self.encode_word(word);
            word_lengths.push(word.len());
            tokens.extend(word.into_symbols());
        }

        Encoding {
            tokens,
            word_lengths,
            text: text.to_string(),
        }
    }

    /// Tokenize a batch of texts (parallelized).
    pub fn tokenize_batch<S>(&self, texts: &[S]) -> Vec<Vec<Symbol>>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        texts
            .par_iter()
            .map(|text| self.tokenize(text.as_ref()))
            .collect()
    }
}

/// Result of encoding text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    /// Tokens of all words, in order
    pub tokens: Vec<Symbol>,
    /// Number of tokens of each word
    pub word_lengths: Vec<usize>,
    /// Original text
    pub text: String,
}

impl Encoding {
    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the encoding is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the tokens of each word.
    pub fn words(&self) -> impl Iterator<Item = &[Symbol]> + '_ {
        let mut start = 0;
        self.word_lengths.iter().map(move |&len| {
            let word = &self.tokens[start..start + len];
            start += len;
            word
        })
    }
}

/// Train a model on `corpus` with at most `max_rounds` merges.
pub fn train(corpus: &str, max_rounds: usize) -> Result<TrainedModel> {
    BpeTrainer::with_max_rounds(max_rounds).train(corpus)
}

/// Tokenize `text` with a trained model, using rank-agnostic sweeps.
pub fn tokenize(model: &TrainedModel, text: &str) -> Vec<Symbol> {
    let encoder = SweepEncoder::new(&model.merges);

    model
        .symbolizer
        .symbolize(text)
        .flat_map(|word| encoder.encode_word(word).into_symbols())
        .collect()
}

#[cfg(test)]
mod tests_properties;

#[cfg(test)]
mod tests {
    use super::*;
    use subword_core::TokenizerError;

    const CORPUS: &str =
        "low lower lowest lower lowest newest widest widest newer high highest higher height";

    fn strings(tokens: &[Symbol]) -> Vec<&str> {
        tokens.iter().map(|t| t.as_str()).collect()
    }

    fn trained(max_rounds: usize, mode: EncodingMode) -> Tokenizer {
        let mut tokenizer = Tokenizer::builder()
            .max_rounds(max_rounds)
            .encoding_mode(mode)
            .build()
            .unwrap();
        tokenizer.train(CORPUS).unwrap();
        tokenizer
    }

    #[test]
    fn test_untrained_tokenizer_yields_atomic_symbols() {
        let tokenizer = Tokenizer::builder().build().unwrap();
        assert!(tokenizer.model().is_none());
        assert!(tokenizer.merges().is_empty());
        assert_eq!(
            strings(&tokenizer.tokenize("ab c")),
            vec!["a", "b", "</w>", "c", "</w>"]
        );
    }

    #[test]
    fn test_repeated_word_round_trip() {
        let model = train("aa aa aa", 2).unwrap();
        assert_eq!(strings(&tokenize(&model, "aa")), vec!["aa</w>"]);

        let model = train("aa aa aa", 5).unwrap();
        assert_eq!(strings(&tokenize(&model, "aa")), vec!["aa</w>"]);
    }

    #[test]
    fn test_scenario_fully_trained() {
        let model = train(CORPUS, 50).unwrap();

        assert_eq!(model.merges.get(0).unwrap().0, "t");
        assert_eq!(model.merges.get(0).unwrap().1, "</w>");
        assert_eq!(strings(&tokenize(&model, "lowest")), vec!["lowest</w>"]);
        assert_eq!(strings(&tokenize(&model, "newest")), vec!["newest</w>"]);
    }

    #[test]
    fn test_scenario_shared_suffix() {
        let tokenizer = trained(3, EncodingMode::Sweep);

        let lowest = tokenizer.tokenize("lowest");
        let newest = tokenizer.tokenize("newest");
        assert_eq!(strings(&lowest), vec!["l", "o", "we", "st</w>"]);
        assert_eq!(strings(&newest), vec!["n", "e", "we", "st</w>"]);
        assert_eq!(lowest.last(), newest.last());
    }

    #[test]
    fn test_unseen_symbols_pass_through() {
        let tokenizer = trained(50, EncodingMode::Sweep);
        assert_eq!(
            strings(&tokenizer.tokenize("zq")),
            vec!["z", "q", "</w>"]
        );
    }

    #[test]
    fn test_multiple_words_in_order() {
        let tokenizer = trained(50, EncodingMode::Sweep);
        let encoding = tokenizer.encode("  low\thigh  ");

        assert_eq!(strings(&encoding.tokens), vec!["low</w>", "high</w>"]);
        assert_eq!(encoding.word_lengths, vec![1, 1]);
        assert_eq!(encoding.words().count(), 2);
    }

    #[test]
    fn test_empty_text() {
        let model = train(CORPUS, 10).unwrap();
        assert!(tokenize(&model, "").is_empty());

        let tokenizer = trained(10, EncodingMode::Ranked);
        let encoding = tokenizer.encode("");
        assert!(encoding.is_empty());
        assert_eq!(encoding.words().count(), 0);
    }

    #[test]
    fn test_empty_corpus() {
        let model = train("", 10).unwrap();
        assert!(model.merges.is_empty());
        assert!(model.vocab.is_empty());
        assert_eq!(strings(&tokenize(&model, "ab")), vec!["a", "b", "</w>"]);
    }

    #[test]
    fn test_tokenize_is_idempotent() {
        let tokenizer = trained(12, EncodingMode::Sweep);
        let text = "lowest newest widest height";
        assert_eq!(tokenizer.tokenize(text), tokenizer.tokenize(text));
    }

    #[test]
    fn test_sweep_and_ranked_differ() {
        let pairs: Vec<Pair> = vec![("b".into(), "c".into()), ("a".into(), "b".into())];
        let sweep = Tokenizer::from_merges(pairs.clone(), "</w>", EncodingMode::Sweep).unwrap();
        let ranked = Tokenizer::from_merges(pairs, "</w>", EncodingMode::Ranked).unwrap();

        assert_eq!(strings(&sweep.tokenize("abc")), vec!["ab", "c", "</w>"]);
        assert_eq!(strings(&ranked.tokenize("abc")), vec!["a", "bc", "</w>"]);
    }

    #[test]
    fn test_sweep_can_split_a_training_word() {
        // The sweep merges (i, g) and (h, e) in the same pass, and no learned
        // merge joins "h" with "ig" afterwards; rank order rebuilds the word.
        let sweep = trained(50, EncodingMode::Sweep);
        let ranked = trained(50, EncodingMode::Ranked);

        assert_eq!(
            strings(&sweep.tokenize("highest")),
            vec!["h", "ig", "he", "st</w>"]
        );
        assert_eq!(strings(&ranked.tokenize("highest")), vec!["highest</w>"]);
    }

    #[test]
    fn test_sweep_corpus_token_count_can_grow_with_rounds() {
        // Merge 26 is (h, e). In one sweep it claims the "h" that "ig" needs to
        // form "igh", so three training words split further.
        let count = |rounds: usize, mode: EncodingMode| {
            let model = train(CORPUS, rounds).unwrap();
            Tokenizer::from_model(model, mode).tokenize(CORPUS).len()
        };

        assert_eq!(count(25, EncodingMode::Sweep), 16);
        assert_eq!(count(26, EncodingMode::Sweep), 21);

        assert_eq!(count(25, EncodingMode::Ranked), 16);
        assert_eq!(count(26, EncodingMode::Ranked), 15);
    }

    #[test]
    fn test_from_merges_rejects_duplicates() {
        let pairs: Vec<Pair> = vec![("a".into(), "b".into()), ("a".into(), "b".into())];
        let err = Tokenizer::from_merges(pairs, "</w>", EncodingMode::Sweep).unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidMerge(_)));
    }

    #[test]
    fn test_builder_rejects_bad_marker() {
        let err = Tokenizer::builder().end_of_word("a b").build().unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidConfig(_)));
    }

    #[test]
    fn test_free_functions_match_tokenizer() {
        let model = train(CORPUS, 9).unwrap();
        let tokenizer = Tokenizer::from_model(model.clone(), EncodingMode::Sweep);
        let text = "lower widest highest";

        assert_eq!(tokenizer.tokenize(text), tokenize(&model, text));
        assert_eq!(tokenizer.config().max_rounds, 9);
    }

    #[test]
    fn test_tokenize_batch() {
        let tokenizer = trained(20, EncodingMode::Sweep);
        let texts = vec!["lowest", "", "newer higher"];

        let batch = tokenizer.tokenize_batch(&texts);
        let sequential: Vec<Vec<Symbol>> = texts.iter().map(|t| tokenizer.tokenize(t)).collect();
        assert_eq!(batch, sequential);
    }

    #[test]
    fn test_retrain_replaces_model() {
        let mut tokenizer = Tokenizer::builder().max_rounds(5).build().unwrap();
        tokenizer.train("aa aa").unwrap();
        tokenizer.train("bb").unwrap();

        assert_eq!(tokenizer.merges()[0], ("b".into(), "b".into()));
        assert_eq!(strings(&tokenizer.tokenize("aa")), vec!["a", "a", "</w>"]);
    }
}

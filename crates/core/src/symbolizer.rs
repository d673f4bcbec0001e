//! Splitting text into words and words into atomic symbols.

use crate::core::vocab::{Symbol, Word};
use crate::error::{Result, TokenizerError};
use serde::{Deserialize, Serialize};

/// Default end-of-word marker.
pub const END_OF_WORD: &str = "</w>";

/// Splits text on whitespace runs and each word into its Unicode code points,
/// followed by an end-of-word marker.
///
/// Serializes as its marker string; deserializing goes through
/// [`try_new`](Symbolizer::try_new), so an invalid marker is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbolizer {
    end_of_word: Symbol,
}

impl Symbolizer {
    /// Create a symbolizer with the given end-of-word marker.
    ///
    /// Fails if the marker is empty or contains whitespace, since such a
    /// marker could not be told apart from word content.
    pub fn try_new(end_of_word: &str) -> Result<Self> {
        if end_of_word.is_empty() {
            return Err(TokenizerError::InvalidConfig(
                "end-of-word marker must not be empty".to_string(),
            ));
        }
        if end_of_word.chars().any(char::is_whitespace) {
            return Err(TokenizerError::InvalidConfig(format!(
                "end-of-word marker {:?} must not contain whitespace",
                end_of_word
            )));
        }

        Ok(Self::with_marker(Symbol::new(end_of_word)))
    }

    pub(crate) fn with_marker(end_of_word: Symbol) -> Self {
        Self { end_of_word }
    }

    /// The end-of-word marker.
    #[inline]
    pub fn end_of_word(&self) -> &str {
        &self.end_of_word
    }

    /// Symbolize one word: its code points plus the end-of-word marker.
    pub fn symbolize_word(&self, word: &str) -> Word {
        let mut symbols = Vec::with_capacity(word.chars().count() + 1);
        let mut buf = [0u8; 4];
        symbols.extend(word.chars().map(|c| Symbol::new(c.encode_utf8(&mut buf))));
        symbols.push(self.end_of_word.clone());
        Word::new(symbols)
    }

    /// Split `text` into whitespace-delimited words and symbolize each one.
    ///
    /// Empty or all-whitespace text yields no words.
    pub fn symbolize<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Word> + 'a {
        text.split_whitespace()
            .map(move |word| self.symbolize_word(word))
    }
}

impl Default for Symbolizer {
    fn default() -> Self {
        Self::with_marker(Symbol::new(END_OF_WORD))
    }
}

impl TryFrom<String> for Symbolizer {
    type Error = TokenizerError;

    fn try_from(end_of_word: String) -> Result<Self> {
        Self::try_new(&end_of_word)
    }
}

impl From<Symbolizer> for String {
    fn from(symbolizer: Symbolizer) -> Self {
        symbolizer.end_of_word.into_string()
    }
}

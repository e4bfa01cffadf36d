//! Stop-word filtering backed by the `stop-words` crate.

use crate::language::Language;
use rustc_hash::FxHashSet;
use stop_words::get;

/// A filter for removing stop words from token streams.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// Lowercase stop words.
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Creates a filter with the stop words of `language`.
    pub fn new(language: Language) -> Self {
        let stopwords = get(language.stopword_language())
            .iter()
            .map(|s| s.to_string().to_lowercase())
            .collect();
        Self { stopwords }
    }

    /// Creates an empty filter that keeps every word.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a filter from a custom list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Adds words to the filter.
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Checks if an already lowercased word is a stop word.
    #[inline]
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Number of stop words in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Checks if the filter is empty.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

//! Token normalization: case folding, stop-word removal and stemming.

use crate::config::TextConfig;
use crate::text::{StopwordFilter, WordStemmer};
use unicode_normalization::UnicodeNormalization;

/// Turns a raw word into a normalized token.
#[derive(Debug)]
pub struct Normalizer {
    config: TextConfig,
    min_token_length: usize,
    stopwords: StopwordFilter,
    stemmer: WordStemmer,
}

impl Normalizer {
    /// Creates a normalizer.
    ///
    /// `min_token_length` is counted in characters after stemming.
    pub fn new(
        config: TextConfig,
        min_token_length: usize,
        stopwords: StopwordFilter,
        stemmer: WordStemmer,
    ) -> Self {
        Self {
            config,
            min_token_length,
            stopwords,
            stemmer,
        }
    }

    /// Creates a normalizer that only folds case.
    pub fn plain() -> Self {
        Self::new(
            TextConfig::default(),
            1,
            StopwordFilter::empty(),
            WordStemmer::identity(),
        )
    }

    /// Normalizes a single word.
    ///
    /// Returns `None` if the word should be filtered out.
    pub fn normalize_token(&self, word: &str) -> Option<String> {
        let mut result = if self.config.unicode_normalize {
            word.nfc().collect::<String>()
        } else {
            word.to_string()
        };

        if self.config.lowercase {
            result = result.to_lowercase();
        }

        if result.is_empty() {
            return None;
        }

        // Stop words are matched before stemming
        if self.config.remove_stopwords && self.stopwords.is_stopword(&result) {
            return None;
        }

        let stemmed = self.stemmer.stem(&result).into_owned();

        if stemmed.chars().count() < self.min_token_length {
            return None;
        }

        Some(stemmed)
    }
}

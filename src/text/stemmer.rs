//! Word normalization: identity or Snowball stemming.

use crate::config::WordNormalization;
use crate::language::Language;
use rust_stemmers::Stemmer;
use std::borrow::Cow;
use std::fmt;

/// Reduces a lowercase word to its normalized form.
///
/// The latent-semantic strategy treats the stemmer as its lemmatizer.
pub struct WordStemmer {
    stemmer: Option<Stemmer>,
    language: Language,
}

impl WordStemmer {
    /// Creates a stemmer for the given normalization mode and language.
    pub fn new(normalization: WordNormalization, language: Language) -> Self {
        let stemmer = match normalization {
            WordNormalization::None => None,
            WordNormalization::Stem => Some(Stemmer::create(language.stemmer_algorithm())),
        };
        Self { stemmer, language }
    }

    /// Creates a stemmer that leaves words untouched.
    pub fn identity() -> Self {
        Self::new(WordNormalization::None, Language::default())
    }

    /// Normalizes a single word.
    pub fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        match &self.stemmer {
            Some(stemmer) => stemmer.stem(word),
            None => Cow::Borrowed(word),
        }
    }

    /// The normalization mode of this stemmer.
    pub fn normalization(&self) -> WordNormalization {
        if self.stemmer.is_some() {
            WordNormalization::Stem
        } else {
            WordNormalization::None
        }
    }
}

impl fmt::Debug for WordStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordStemmer")
            .field("normalization", &self.normalization())
            .field("language", &self.language)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let stemmer = WordStemmer::identity();
        assert_eq!(stemmer.stem("running"), "running");
        assert_eq!(stemmer.normalization(), WordNormalization::None);
    }

    #[test]
    fn test_english_stem() {
        let stemmer = WordStemmer::new(WordNormalization::Stem, Language::English);
        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("compilers"), stemmer.stem("compiler"));
    }

    #[test]
    fn test_russian_stem() {
        let stemmer = WordStemmer::new(WordNormalization::Stem, Language::Russian);
        assert_eq!(stemmer.stem("книги"), stemmer.stem("книга"));
    }
}

//! Tokenization of documents into sentences and normalized word tokens.

use crate::config::{Config, Strategy};
use crate::language::Language;
use crate::segmentation::split_sentences_for;
use crate::text::{LexiconTagger, Normalizer, PosTagger, StopwordFilter, WordStemmer};
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

/// A sentence of the source document with its normalized tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Position of the sentence in the document.
    pub index: usize,
    /// The sentence exactly as it appears in the document (trimmed).
    pub text: String,
    /// Normalized tokens, duplicates included.
    pub tokens: Vec<String>,
}

impl Sentence {
    /// Creates a new sentence.
    pub fn new(index: usize, text: String, tokens: Vec<String>) -> Self {
        Self {
            index,
            text,
            tokens,
        }
    }

    /// Number of tokens in the sentence.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if no token survived normalization.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens joined by single spaces.
    pub fn joined_tokens(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Splits text into sentences and sentences into normalized tokens.
///
/// With a part-of-speech tagger attached, words whose tag is not significant
/// are dropped before normalization.
pub struct Tokenizer {
    normalizer: Normalizer,
    tagger: Option<Box<dyn PosTagger>>,
    language: Language,
}

impl Tokenizer {
    /// Creates a tokenizer from its parts. `language` selects the short
    /// forms the sentence splitter protects.
    pub fn new(
        normalizer: Normalizer,
        tagger: Option<Box<dyn PosTagger>>,
        language: Language,
    ) -> Self {
        Self {
            normalizer,
            tagger,
            language,
        }
    }

    /// Builds the tokenizer a summarization strategy needs.
    ///
    /// Luhn keeps every part of speech; LSA tags words with a
    /// [`LexiconTagger`] and keeps only tokens of three or more characters.
    pub fn for_config(config: &Config) -> Self {
        let summarizer = &config.summarizer;
        let stopwords = if config.text.remove_stopwords {
            StopwordFilter::new(summarizer.language)
        } else {
            StopwordFilter::empty()
        };
        let stemmer = WordStemmer::new(summarizer.word_normalization, summarizer.language);
        let normalizer = Normalizer::new(
            config.text.clone(),
            config.text.min_token_length_for(summarizer.strategy),
            stopwords,
            stemmer,
        );

        let tagger: Option<Box<dyn PosTagger>> = match summarizer.strategy {
            Strategy::Luhn => None,
            Strategy::Lsa => Some(Box::new(LexiconTagger::new(summarizer.language))),
        };

        Self::new(normalizer, tagger, summarizer.language)
    }

    /// Replaces the part-of-speech tagger.
    pub fn with_tagger(mut self, tagger: Box<dyn PosTagger>) -> Self {
        self.tagger = Some(tagger);
        self
    }

    /// Splits text into raw sentence strings in document order.
    pub fn sentences(&self, text: &str) -> Vec<String> {
        split_sentences_for(text, self.language)
    }

    /// Normalizes the words of one sentence.
    pub fn tokens(&self, sentence: &str) -> Vec<String> {
        let cleaned = sentence.trim().replace('\u{a0}', "");
        let words: Vec<&str> = cleaned.unicode_words().collect();

        match &self.tagger {
            Some(tagger) => {
                let tags = tagger.tag(&words);
                words
                    .iter()
                    .zip(tags)
                    .filter(|(_, tag)| tag.is_significant())
                    .filter_map(|(word, _)| self.normalizer.normalize_token(word))
                    .collect()
            }
            None => words
                .iter()
                .filter_map(|word| self.normalizer.normalize_token(word))
                .collect(),
        }
    }

    /// Splits text into tokenized sentences.
    pub fn tokenize(&self, text: &str) -> Vec<Sentence> {
        self.sentences(text)
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let tokens = self.tokens(&text);
                Sentence::new(index, text, tokens)
            })
            .collect()
    }
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("normalizer", &self.normalizer)
            .field("language", &self.language)
            .field("pos_filter", &self.tagger.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WordNormalization;
    use crate::text::PosTag;

    fn luhn_tokenizer(normalization: WordNormalization) -> Tokenizer {
        let mut config = Config::default();
        config.summarizer.word_normalization = normalization;
        Tokenizer::for_config(&config)
    }

    #[test]
    fn test_tokens_lowercased_without_stopwords() {
        let tokenizer = luhn_tokenizer(WordNormalization::None);
        let tokens = tokenizer.tokens("The Compiler compiles the crate.");
        assert_eq!(tokens, vec!["compiler", "compiles", "crate"]);
    }

    #[test]
    fn test_tokens_stemmed() {
        let tokenizer = luhn_tokenizer(WordNormalization::Stem);
        let tokens = tokenizer.tokens("Compilers compile crates.");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], "compil");
        assert_eq!(tokens[1], "compil");
    }

    #[test]
    fn test_tokens_idempotent() {
        let tokenizer = luhn_tokenizer(WordNormalization::Stem);
        let sentence = "Ownership rules keep memory safe without a garbage collector.";
        assert_eq!(tokenizer.tokens(sentence), tokenizer.tokens(sentence));
    }

    #[test]
    fn test_empty_sentence() {
        let tokenizer = luhn_tokenizer(WordNormalization::Stem);
        assert!(tokenizer.tokens("").is_empty());
        assert!(tokenizer.tokens("the and of").is_empty());
    }

    #[test]
    fn test_non_breaking_space_removed() {
        let tokenizer = luhn_tokenizer(WordNormalization::None);
        assert_eq!(tokenizer.tokens("10\u{a0}000 compilers"), vec!["10000", "compilers"]);
    }

    #[test]
    fn test_lsa_filters_short_tokens_and_adverbs() {
        let tokenizer = Tokenizer::for_config(&Config::with_strategy(Strategy::Lsa));
        let tokens = tokenizer.tokens("The ox quickly pulled the heavy cart 42 times.");
        assert!(!tokens.contains(&"ox".to_string()));
        assert!(!tokens.iter().any(|t| t.starts_with("quick")));
        assert!(!tokens.contains(&"42".to_string()));
        assert!(tokens.contains(&"cart".to_string()));
        assert!(tokens.iter().all(|t| t.chars().count() > 2));
    }

    struct RejectAll;

    impl PosTagger for RejectAll {
        fn tag(&self, words: &[&str]) -> Vec<PosTag> {
            vec![PosTag::Punct; words.len()]
        }
    }

    #[test]
    fn test_custom_tagger() {
        let tokenizer = luhn_tokenizer(WordNormalization::None).with_tagger(Box::new(RejectAll));
        assert!(tokenizer.tokens("Compilers compile crates.").is_empty());
    }

    #[test]
    fn test_sentences_use_language_short_forms() {
        let mut config = Config::default();
        config.summarizer.language = Language::Russian;
        let tokenizer = Tokenizer::for_config(&config);
        let sentences = tokenizer.tokenize("Я живу в г. Москва. Это город.");

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "Я живу в г. Москва.");
        assert_eq!(sentences[1].index, 1);
    }

    #[test]
    fn test_tokenize_keeps_indices() {
        let tokenizer = luhn_tokenizer(WordNormalization::None);
        let sentences = tokenizer.tokenize("Rust compiles. Cargo downloads crates. Tests pass.");

        assert_eq!(sentences.len(), 3);
        for (i, sentence) in sentences.iter().enumerate() {
            assert_eq!(sentence.index, i);
        }
        assert_eq!(sentences[1].text, "Cargo downloads crates.");
        assert_eq!(sentences[1].joined_tokens(), "cargo downloads crates");
    }
}

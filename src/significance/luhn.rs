//! Luhn's significance factor.
//!
//! Terms whose document-wide count lies strictly above a percentile of the
//! term-count distribution are significant. A sentence scores
//! `(significant occurrences)² / (tokens in sentence)`.

use super::{SentenceScores, SignificanceModel};
use crate::error::Result;
use crate::observer::SummaryObserver;
use crate::stats::percentile;
use crate::text::Sentence;
use crate::vocabulary::{CountVectorizer, Vocabulary};
use ndarray::Axis;
use rustc_hash::FxHashSet;

/// Frequency-threshold significance model.
#[derive(Debug, Clone)]
pub struct LuhnModel {
    significant_word_percentile: f64,
    vectorizer: CountVectorizer,
}

impl LuhnModel {
    /// Creates a model with the given significant-word percentile (`0..=100`).
    pub fn new(significant_word_percentile: f64) -> Self {
        Self {
            significant_word_percentile,
            vectorizer: CountVectorizer::new(),
        }
    }

    /// Fits the vectorizer and returns the vocabulary with the document-wide
    /// count of every term.
    fn term_counts(&self, sentences: &[Sentence]) -> (Vocabulary, Vec<f64>) {
        let documents: Vec<String> = sentences.iter().map(Sentence::joined_tokens).collect();
        let (vocabulary, counts) = self.vectorizer.fit_transform(&documents);
        let totals = counts.sum_axis(Axis(0)).to_vec();
        (vocabulary, totals)
    }

    fn threshold_terms(&self, vocabulary: &Vocabulary, term_counts: &[f64]) -> (f64, Vec<String>) {
        let threshold = percentile(term_counts, self.significant_word_percentile).unwrap_or(0.0);
        let terms = vocabulary
            .terms()
            .iter()
            .zip(term_counts)
            .filter(|(_, count)| **count > threshold)
            .map(|(term, _)| term.clone())
            .collect();
        (threshold, terms)
    }

    /// Returns the count threshold and the significant terms, sorted.
    ///
    /// Both are empty/zero when the document has no vocabulary.
    pub fn significant_terms(&self, sentences: &[Sentence]) -> (f64, Vec<String>) {
        let (vocabulary, term_counts) = self.term_counts(sentences);
        if vocabulary.is_empty() {
            return (0.0, Vec::new());
        }
        self.threshold_terms(&vocabulary, &term_counts)
    }

    /// Significance factor of one sentence.
    pub fn significance_factor(sentence: &Sentence, significant: &FxHashSet<&str>) -> f64 {
        if sentence.is_empty() {
            return 0.0;
        }
        let hits = sentence
            .tokens
            .iter()
            .filter(|token| significant.contains(token.as_str()))
            .count() as f64;
        hits * hits / sentence.len() as f64
    }
}

impl SignificanceModel for LuhnModel {
    fn score(
        &self,
        sentences: &[Sentence],
        observer: &dyn SummaryObserver,
    ) -> Result<SentenceScores> {
        let (vocabulary, term_counts) = self.term_counts(sentences);
        observer.on_vocabulary(vocabulary.len());
        if vocabulary.is_empty() {
            return Ok(SentenceScores::empty(sentences.len()));
        }

        let (threshold, terms) = self.threshold_terms(&vocabulary, &term_counts);
        observer.on_significant_terms(threshold, &terms);

        let significant: FxHashSet<&str> = terms.iter().map(String::as_str).collect();
        let scores = sentences
            .iter()
            .map(|sentence| Self::significance_factor(sentence, &significant))
            .collect();

        Ok(SentenceScores {
            scores,
            vocabulary_size: vocabulary.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoopObserver;

    fn sentence(index: usize, tokens: &[&str]) -> Sentence {
        Sentence::new(
            index,
            format!("Sentence {}.", index),
            tokens.iter().map(|t| t.to_string()).collect(),
        )
    }

    fn corpus() -> Vec<Sentence> {
        vec![
            sentence(0, &["rust", "compil", "rust", "rust"]),
            sentence(1, &["cargo", "crate"]),
            sentence(2, &["rust", "lifetim"]),
            sentence(3, &[]),
        ]
    }

    #[test]
    fn test_significant_terms() {
        let model = LuhnModel::new(80.0);
        // counts: cargo 1, compil 1, crate 1, lifetim 1, rust 4 -> 80th percentile = 1.6
        let (threshold, terms) = model.significant_terms(&corpus());
        assert!((threshold - 1.6).abs() < 1e-12);
        assert_eq!(terms, vec!["rust".to_string()]);
    }

    #[test]
    fn test_scores() {
        let model = LuhnModel::new(80.0);
        let result = model.score(&corpus(), &NoopObserver).unwrap();

        assert_eq!(result.vocabulary_size, 5);
        assert_eq!(result.scores.len(), 4);
        assert!((result.scores[0] - 9.0 / 4.0).abs() < 1e-12);
        assert_eq!(result.scores[1], 0.0);
        assert!((result.scores[2] - 0.5).abs() < 1e-12);
        // Sentence without tokens scores zero instead of dividing by zero
        assert_eq!(result.scores[3], 0.0);
    }

    #[test]
    fn test_duplicates_counted() {
        let significant: FxHashSet<&str> = ["rust"].into_iter().collect();
        let s = sentence(0, &["rust", "rust", "cargo"]);
        assert!((LuhnModel::significance_factor(&s, &significant) - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_vocabulary() {
        let model = LuhnModel::new(80.0);
        let sentences = vec![sentence(0, &["a"]), sentence(1, &[])];
        let result = model.score(&sentences, &NoopObserver).unwrap();
        assert_eq!(result, SentenceScores::empty(2));
    }

    #[test]
    fn test_identical_sentences_score_equally() {
        let model = LuhnModel::new(80.0);
        let sentences = vec![
            sentence(0, &["rust", "cargo", "rust"]),
            sentence(1, &["rust", "cargo", "rust"]),
        ];
        let result = model.score(&sentences, &NoopObserver).unwrap();
        assert_eq!(result.scores[0], result.scores[1]);
    }
}

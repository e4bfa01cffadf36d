//! Vocabularies and term-count matrices.
//!
//! Two layouts are built from the tokenized sentences:
//!
//! - a sentence × term count matrix from a bag-of-words vectorizer over the
//!   space-joined tokens (Luhn), with a lexicographically sorted vocabulary;
//! - a term × sentence incidence matrix (LSA), vocabulary in first-occurrence
//!   order, optionally normalized per column by the column maximum.

use crate::text::Sentence;
use ndarray::{Array2, Axis};
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;

/// Terms of two or more word characters.
static TERM_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Mapping from distinct token to a stable column/row index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    index: FxHashMap<String, usize>,
    terms: Vec<String>,
}

impl Vocabulary {
    /// Builds a vocabulary in first-occurrence order.
    pub fn from_sentences(sentences: &[Sentence]) -> Self {
        let mut vocabulary = Self::default();
        for token in sentences.iter().flat_map(|s| s.tokens.iter()) {
            vocabulary.insert(token);
        }
        vocabulary
    }

    /// Builds a vocabulary with terms sorted lexicographically.
    pub fn sorted<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        terms.sort();
        terms.dedup();
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();
        Self { index, terms }
    }

    fn insert(&mut self, term: &str) -> usize {
        if let Some(&idx) = self.index.get(term) {
            return idx;
        }
        let idx = self.terms.len();
        self.index.insert(term.to_string(), idx);
        self.terms.push(term.to_string());
        idx
    }

    /// Index of `term`, if present.
    #[inline]
    pub fn get(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Term at `idx`.
    pub fn term(&self, idx: usize) -> Option<&str> {
        self.terms.get(idx).map(String::as_str)
    }

    /// Terms in index order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Bag-of-words count vectorizer.
///
/// Each document is a space-joined token string; terms are extracted with
/// the `\b\w\w+\b` pattern, so single-character tokens never become
/// features.
#[derive(Debug, Clone, Default)]
pub struct CountVectorizer;

impl CountVectorizer {
    /// Creates a new vectorizer.
    pub fn new() -> Self {
        Self
    }

    fn analyze<'a>(&self, document: &'a str) -> impl Iterator<Item = &'a str> {
        TERM_PATTERN.find_iter(document).map(|m| m.as_str())
    }

    /// Fits the vocabulary on `documents` and returns it with the
    /// document × term count matrix.
    pub fn fit_transform(&self, documents: &[String]) -> (Vocabulary, Array2<f64>) {
        let vocabulary = Vocabulary::sorted(documents.iter().flat_map(|d| self.analyze(d)));
        let mut counts = Array2::<f64>::zeros((documents.len(), vocabulary.len()));

        for (row, document) in documents.iter().enumerate() {
            for term in self.analyze(document) {
                if let Some(col) = vocabulary.get(term) {
                    counts[[row, col]] += 1.0;
                }
            }
        }

        (vocabulary, counts)
    }
}

/// Builds the term × sentence occurrence matrix.
pub fn incidence_matrix(sentences: &[Sentence], vocabulary: &Vocabulary) -> Array2<f64> {
    let mut matrix = Array2::<f64>::zeros((vocabulary.len(), sentences.len()));
    for (col, sentence) in sentences.iter().enumerate() {
        for token in &sentence.tokens {
            if let Some(row) = vocabulary.get(token) {
                matrix[[row, col]] += 1.0;
            }
        }
    }
    matrix
}

/// Divides every column by its maximum. Columns whose maximum is zero are
/// left as they are.
pub fn normalize_columns(matrix: &mut Array2<f64>) {
    for mut column in matrix.axis_iter_mut(Axis(1)) {
        let max = column.iter().copied().fold(0.0_f64, f64::max);
        if max != 0.0 {
            column.mapv_inplace(|v| v / max);
        }
    }
}

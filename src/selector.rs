//! Sentence selection and summary assembly.

use crate::config::{Strategy, SummarizerConfig};
use crate::stats::percentile;
use crate::text::Sentence;
use std::fmt;

/// Rule that turns per-sentence scores into the kept sentence indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selector {
    /// Keep sentences scoring strictly above the given percentile (`0..=100`).
    Percentile(f64),
    /// Keep the `k` best-scoring sentences.
    TopK(usize),
}

impl Selector {
    /// The selector of the configured strategy.
    pub fn from_config(config: &SummarizerConfig) -> Self {
        match config.strategy {
            Strategy::Luhn => Selector::Percentile(config.summary_sentence_percentile),
            Strategy::Lsa => Selector::TopK(config.target_sentence_count),
        }
    }

    /// Returns the selected indices in ascending (document) order.
    ///
    /// A single-sentence document is always kept: a one-element
    /// distribution can never lie strictly above its own percentile.
    pub fn select(&self, scores: &[f64]) -> Vec<usize> {
        match *self {
            Selector::Percentile(_) if scores.len() == 1 => vec![0],
            Selector::Percentile(p) => {
                let Some(threshold) = percentile(scores, p) else {
                    return Vec::new();
                };
                scores
                    .iter()
                    .enumerate()
                    .filter(|(_, score)| **score > threshold)
                    .map(|(i, _)| i)
                    .collect()
            }
            Selector::TopK(k) => {
                let mut ranked: Vec<usize> = (0..scores.len()).collect();
                // Best first; ties keep document order
                ranked.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
                ranked.truncate(k);
                ranked.sort_unstable();
                ranked
            }
        }
    }
}

/// A sentence chosen for the summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    /// Position of the sentence in the document.
    pub index: usize,
    /// Original sentence text.
    pub text: String,
    /// Score assigned by the significance model.
    pub score: f64,
}

/// An extractive summary: selected sentences in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Selected sentences, ascending by index.
    pub sentences: Vec<ScoredSentence>,
    /// Number of sentences in the source document.
    pub source_sentences: usize,
    separator: &'static str,
}

impl Summary {
    /// A summary without sentences.
    pub fn empty(source_sentences: usize, separator: &'static str) -> Self {
        Self {
            sentences: Vec::new(),
            source_sentences,
            separator,
        }
    }

    /// Assembles the summary from the selected indices.
    ///
    /// Indices are sorted and deduplicated; out-of-range indices are ignored.
    pub fn assemble(
        sentences: &[Sentence],
        scores: &[f64],
        selected: &[usize],
        separator: &'static str,
    ) -> Self {
        let mut indices = selected.to_vec();
        indices.sort_unstable();
        indices.dedup();

        let picked = indices
            .into_iter()
            .filter_map(|i| {
                let sentence = sentences.get(i)?;
                Some(ScoredSentence {
                    index: sentence.index,
                    text: sentence.text.clone(),
                    score: scores.get(i).copied().unwrap_or(0.0),
                })
            })
            .collect();

        Self {
            sentences: picked,
            source_sentences: sentences.len(),
            separator,
        }
    }

    /// Indices of the selected sentences.
    pub fn indices(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.index).collect()
    }

    /// Number of selected sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Returns `true` if no sentence was selected.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// The summary text: selected sentences joined by the separator.
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(self.separator)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

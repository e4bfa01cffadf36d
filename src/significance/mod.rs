//! Sentence significance models.
//!
//! Both strategies turn tokenized sentences into one non-negative score per
//! sentence. [`Significance`] selects between them from the configuration.

mod lsa;
mod luhn;

pub use lsa::LsaModel;
pub use luhn::LuhnModel;

use crate::config::{Strategy, SummarizerConfig};
use crate::error::Result;
use crate::observer::SummaryObserver;
use crate::text::Sentence;

/// Scores of one document.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceScores {
    /// One score per sentence, aligned by sentence index.
    pub scores: Vec<f64>,
    /// Number of terms the model built its representation from.
    pub vocabulary_size: usize,
}

impl SentenceScores {
    /// All-zero scores for a document without vocabulary.
    pub fn empty(sentence_count: usize) -> Self {
        Self {
            scores: vec![0.0; sentence_count],
            vocabulary_size: 0,
        }
    }
}

/// Scores every sentence of a document.
pub trait SignificanceModel: Send + Sync {
    /// Returns scores aligned with `sentences`.
    fn score(&self, sentences: &[Sentence], observer: &dyn SummaryObserver)
        -> Result<SentenceScores>;
}

/// The configured scoring strategy.
#[derive(Debug, Clone)]
pub enum Significance {
    /// Frequency-threshold model.
    Luhn(LuhnModel),
    /// Latent-topic model.
    Lsa(LsaModel),
}

impl Significance {
    /// Builds the model named by the configuration.
    pub fn from_config(config: &SummarizerConfig) -> Self {
        match config.strategy {
            Strategy::Luhn => Significance::Luhn(LuhnModel::new(config.significant_word_percentile)),
            Strategy::Lsa => Significance::Lsa(LsaModel::new(config.target_sentence_count)),
        }
    }
}

impl SignificanceModel for Significance {
    fn score(
        &self,
        sentences: &[Sentence],
        observer: &dyn SummaryObserver,
    ) -> Result<SentenceScores> {
        match self {
            Significance::Luhn(model) => model.score(sentences, observer),
            Significance::Lsa(model) => model.score(sentences, observer),
        }
    }
}

//! Pipeline observer hooks.
//!
//! Observers receive notifications at stage boundaries of one summarization
//! call without being able to influence it. The core never logs on its own;
//! the command-line front end plugs in [`LogObserver`].

use crate::text::Sentence;
use log::{debug, info};

/// Receives pipeline events. Every method has an empty default.
pub trait SummaryObserver {
    /// Sentences and their tokens after tokenization.
    fn on_sentences(&self, _sentences: &[Sentence]) {}

    /// Size of the vocabulary the model built.
    fn on_vocabulary(&self, _size: usize) {}

    /// Luhn: count threshold and the resulting significant terms.
    fn on_significant_terms(&self, _threshold: f64, _terms: &[String]) {}

    /// LSA: weights of the kept topics, strongest first.
    fn on_topic_weights(&self, _weights: &[f64]) {}

    /// LSA: components of one sentence on the kept topics.
    fn on_sentence_topics(&self, _sentence: &Sentence, _components: &[f64]) {}

    /// Final score of every sentence, aligned by index.
    fn on_scores(&self, _sentences: &[Sentence], _scores: &[f64]) {}

    /// Indices of the selected sentences in document order.
    fn on_selection(&self, _selected: &[usize]) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SummaryObserver for NoopObserver {}

/// Observer that reports events through the `log` facade.
///
/// Summary figures go to `info`, per-sentence detail to `debug`.
#[derive(Debug, Clone, Default)]
pub struct LogObserver {
    label: Option<String>,
}

impl LogObserver {
    /// Creates an observer without a document label.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an observer that prefixes every message with `label`.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }

    fn prefix(&self) -> String {
        match &self.label {
            Some(label) => format!("[{}] ", label),
            None => String::new(),
        }
    }
}

impl SummaryObserver for LogObserver {
    fn on_sentences(&self, sentences: &[Sentence]) {
        let tokens: usize = sentences.iter().map(Sentence::len).sum();
        info!(
            "{}{} sentences, {} tokens",
            self.prefix(),
            sentences.len(),
            tokens
        );
    }

    fn on_vocabulary(&self, size: usize) {
        info!("{}vocabulary: {} terms", self.prefix(), size);
    }

    fn on_significant_terms(&self, threshold: f64, terms: &[String]) {
        info!(
            "{}{} significant terms (count > {:.2})",
            self.prefix(),
            terms.len(),
            threshold
        );
        debug!("{}significant terms: {:?}", self.prefix(), terms);
    }

    fn on_topic_weights(&self, weights: &[f64]) {
        info!("{}topic weights: {:?}", self.prefix(), weights);
    }

    fn on_sentence_topics(&self, sentence: &Sentence, components: &[f64]) {
        debug!(
            "{}sentence {} topics {:?}: {}",
            self.prefix(),
            sentence.index,
            components,
            sentence.text
        );
    }

    fn on_scores(&self, sentences: &[Sentence], scores: &[f64]) {
        for (sentence, score) in sentences.iter().zip(scores) {
            debug!("{}sentence {} score {:.4}", self.prefix(), sentence.index, score);
        }
    }

    fn on_selection(&self, selected: &[usize]) {
        info!("{}selected sentences: {:?}", self.prefix(), selected);
    }
}

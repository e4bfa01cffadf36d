//! End-to-end summarization: tokenize, score, select, assemble.

use crate::config::{Config, Strategy};
use crate::error::Result;
use crate::observer::{NoopObserver, SummaryObserver};
use crate::selector::{Selector, Summary};
use crate::significance::{SentenceScores, Significance, SignificanceModel};
use crate::text::{PosTagger, Sentence, Tokenizer};

/// Extractive summarizer for one configuration.
///
/// Construction validates the configuration and loads stop words and the
/// stemmer once; afterwards the summarizer is immutable and can be shared
/// between threads, each call owning its own matrices and scores.
///
/// # Example
///
/// ```
/// use lexsum::{Config, Strategy, Summarizer};
///
/// let summarizer = Summarizer::new(Config::with_strategy(Strategy::Lsa))?;
/// let summary = summarizer.summarize("Rust has no garbage collector. Ownership tracks memory.")?;
/// assert!(!summary.is_empty());
/// # Ok::<(), lexsum::SummaryError>(())
/// ```
#[derive(Debug)]
pub struct Summarizer {
    config: Config,
    tokenizer: Tokenizer,
    model: Significance,
    selector: Selector,
}

impl Summarizer {
    /// Creates a summarizer, failing on an invalid configuration.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let tokenizer = Tokenizer::for_config(&config);
        let model = Significance::from_config(&config.summarizer);
        let selector = Selector::from_config(&config.summarizer);
        Ok(Self {
            config,
            tokenizer,
            model,
            selector,
        })
    }

    /// Replaces the part-of-speech tagger used by the tokenizer.
    pub fn with_tagger(mut self, tagger: Box<dyn PosTagger>) -> Self {
        self.tokenizer = self.tokenizer.with_tagger(tagger);
        self
    }

    /// The configuration this summarizer was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The configured strategy.
    pub fn strategy(&self) -> Strategy {
        self.config.summarizer.strategy
    }

    /// Tokenizes `text` into sentences.
    pub fn sentences(&self, text: &str) -> Vec<Sentence> {
        self.tokenizer.tokenize(text)
    }

    /// Scores already tokenized sentences.
    pub fn score(&self, sentences: &[Sentence]) -> Result<SentenceScores> {
        self.model.score(sentences, &NoopObserver)
    }

    /// Summarizes `text` into a string.
    pub fn summarize(&self, text: &str) -> Result<String> {
        self.summarize_with_observer(text, &NoopObserver)
    }

    /// Summarizes `text`, reporting pipeline events to `observer`.
    pub fn summarize_with_observer(
        &self,
        text: &str,
        observer: &dyn SummaryObserver,
    ) -> Result<String> {
        Ok(self.summarize_detailed(text, observer)?.text())
    }

    /// Summarizes `text` into a structured [`Summary`].
    pub fn summarize_detailed(
        &self,
        text: &str,
        observer: &dyn SummaryObserver,
    ) -> Result<Summary> {
        let separator = self.strategy().separator();

        let sentences = self.tokenizer.tokenize(text);
        observer.on_sentences(&sentences);
        if sentences.is_empty() {
            return Ok(Summary::empty(0, separator));
        }

        let scored = self.model.score(&sentences, observer)?;
        if scored.vocabulary_size == 0 {
            return Ok(Summary::empty(sentences.len(), separator));
        }
        observer.on_scores(&sentences, &scored.scores);

        let selected = self.selector.select(&scored.scores);
        observer.on_selection(&selected);

        Ok(Summary::assemble(&sentences, &scored.scores, &selected, separator))
    }
}

/// Summarizes `text` with a one-off [`Summarizer`].
pub fn summarize(text: &str, config: &Config) -> Result<String> {
    Summarizer::new(config.clone())?.summarize(text)
}

//! Configuration for the Lexsum summarization engine.

use crate::error::{Result, SummaryError};
use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Main configuration for the Lexsum engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scoring and selection configuration.
    pub summarizer: SummarizerConfig,

    /// Text processing configuration.
    pub text: TextConfig,
}

impl Config {
    /// Creates a configuration for the given strategy with default parameters.
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            summarizer: SummarizerConfig {
                strategy,
                ..Default::default()
            },
            text: TextConfig::default(),
        }
    }

    /// Parses a configuration from a JSON string.
    ///
    /// Unknown strategy or normalization names are reported as
    /// [`SummaryError::Config`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config =
            serde_json::from_str(json).map_err(|e| SummaryError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SummaryError::FileNotFound(path.to_path_buf()));
        }
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every parameter before any text is processed.
    pub fn validate(&self) -> Result<()> {
        self.summarizer.validate()?;
        self.text.validate()
    }
}

/// Sentence scoring strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Luhn's significance factor: significant terms by frequency percentile.
    #[default]
    #[serde(alias = "frequency_threshold")]
    Luhn,
    /// Latent semantic analysis over the term-by-sentence matrix.
    #[serde(alias = "latent_topic")]
    Lsa,
}

impl Strategy {
    /// Separator used to join the selected sentences.
    pub fn separator(&self) -> &'static str {
        match self {
            Strategy::Luhn => "\n",
            Strategy::Lsa => " ",
        }
    }
}

impl FromStr for Strategy {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "luhn" | "frequency-threshold" | "frequency_threshold" => Ok(Strategy::Luhn),
            "lsa" | "latent-topic" | "latent_topic" => Ok(Strategy::Lsa),
            other => Err(SummaryError::Config(format!(
                "unsupported strategy '{}' (expected 'luhn' or 'lsa')",
                other
            ))),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Luhn => write!(f, "luhn"),
            Strategy::Lsa => write!(f, "lsa"),
        }
    }
}

/// Word normalization applied after stop-word removal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordNormalization {
    /// Keep words as they are.
    None,
    /// Reduce words with the Snowball stemmer of the configured language.
    #[default]
    #[serde(alias = "stemmer")]
    Stem,
}

impl FromStr for WordNormalization {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" | "identity" => Ok(WordNormalization::None),
            "stem" | "stemmer" => Ok(WordNormalization::Stem),
            other => Err(SummaryError::Config(format!(
                "unsupported word normalization '{}' (expected 'none' or 'stem')",
                other
            ))),
        }
    }
}

impl fmt::Display for WordNormalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordNormalization::None => write!(f, "none"),
            WordNormalization::Stem => write!(f, "stem"),
        }
    }
}

/// Scoring and selection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Scoring strategy.
    /// Default: Luhn.
    pub strategy: Strategy,

    /// Percentile of the term-count distribution above which a term is significant.
    /// Luhn only. Default: 80.
    pub significant_word_percentile: f64,

    /// Percentile of the score distribution above which a sentence is kept.
    /// Luhn only. Default: 95.
    pub summary_sentence_percentile: f64,

    /// Number of sentences in the summary.
    /// LSA only. Default: 3.
    pub target_sentence_count: usize,

    /// Word normalization.
    /// Default: Stem.
    pub word_normalization: WordNormalization,

    /// Language of stop words and stemmer.
    /// Default: English.
    pub language: Language,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Luhn,
            significant_word_percentile: 80.0,
            summary_sentence_percentile: 95.0,
            target_sentence_count: 3,
            word_normalization: WordNormalization::Stem,
            language: Language::English,
        }
    }
}

impl SummarizerConfig {
    /// Minimum number of latent topics kept by the LSA model.
    pub const MIN_TOPICS: usize = 3;

    /// Number of leading topics the LSA model uses.
    pub fn min_dimensions(&self) -> usize {
        Self::MIN_TOPICS.max(self.target_sentence_count)
    }

    fn validate(&self) -> Result<()> {
        check_percentile("significant_word_percentile", self.significant_word_percentile)?;
        check_percentile("summary_sentence_percentile", self.summary_sentence_percentile)?;
        if self.target_sentence_count == 0 {
            return Err(SummaryError::Config(
                "target_sentence_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_percentile(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(SummaryError::Config(format!(
            "{} must be within [0, 100], got {}",
            name, value
        )));
    }
    Ok(())
}

/// Text processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Convert all text to lowercase.
    /// Default: true.
    pub lowercase: bool,

    /// Apply Unicode normalization (NFC).
    /// Default: true.
    pub unicode_normalize: bool,

    /// Drop stop words of the configured language.
    /// Default: true.
    pub remove_stopwords: bool,

    /// Minimum token length in characters.
    /// Default: None (1 for Luhn, 3 for LSA).
    pub min_token_length: Option<usize>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            unicode_normalize: true,
            remove_stopwords: true,
            min_token_length: None,
        }
    }
}

impl TextConfig {
    /// Minimum token length the given strategy works with.
    pub fn min_token_length_for(&self, strategy: Strategy) -> usize {
        self.min_token_length.unwrap_or(match strategy {
            Strategy::Luhn => 1,
            Strategy::Lsa => 3,
        })
    }

    fn validate(&self) -> Result<()> {
        if self.min_token_length == Some(0) {
            return Err(SummaryError::Config(
                "min_token_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.summarizer.strategy, Strategy::Luhn);
        assert_eq!(config.summarizer.significant_word_percentile, 80.0);
        assert_eq!(config.summarizer.summary_sentence_percentile, 95.0);
        assert_eq!(config.summarizer.word_normalization, WordNormalization::Stem);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_min_dimensions() {
        let mut config = SummarizerConfig::default();
        config.target_sentence_count = 1;
        assert_eq!(config.min_dimensions(), 3);
        config.target_sentence_count = 7;
        assert_eq!(config.min_dimensions(), 7);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("Luhn".parse::<Strategy>().unwrap(), Strategy::Luhn);
        assert_eq!("latent-topic".parse::<Strategy>().unwrap(), Strategy::Lsa);
        assert!("textrank".parse::<Strategy>().unwrap_err().is_config());
    }

    #[test]
    fn test_normalization_from_str() {
        assert_eq!("stemmer".parse::<WordNormalization>().unwrap(), WordNormalization::Stem);
        assert_eq!("none".parse::<WordNormalization>().unwrap(), WordNormalization::None);
        assert!("lemma".parse::<WordNormalization>().is_err());
    }

    #[test]
    fn test_percentile_validation() {
        let mut config = Config::default();
        config.summarizer.summary_sentence_percentile = 101.0;
        assert!(config.validate().unwrap_err().is_config());

        config.summarizer.summary_sentence_percentile = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_target_rejected() {
        let mut config = Config::with_strategy(Strategy::Lsa);
        config.summarizer.target_sentence_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_partial() {
        let config = Config::from_json_str(r#"{"summarizer": {"strategy": "lsa"}}"#).unwrap();
        assert_eq!(config.summarizer.strategy, Strategy::Lsa);
        assert_eq!(config.summarizer.target_sentence_count, 3);
        assert!(config.text.lowercase);
    }

    #[test]
    fn test_json_unknown_strategy() {
        let err = Config::from_json_str(r#"{"summarizer": {"strategy": "abstractive"}}"#)
            .unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = Config::with_strategy(Strategy::Lsa);
        config.summarizer.language = Language::Russian;
        let json = config.to_json().unwrap();
        assert_eq!(Config::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_min_token_length_for() {
        let text = TextConfig::default();
        assert_eq!(text.min_token_length_for(Strategy::Luhn), 1);
        assert_eq!(text.min_token_length_for(Strategy::Lsa), 3);
    }
}

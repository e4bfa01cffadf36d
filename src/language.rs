//! Supported languages and language identification.
//!
//! A [`Language`] selects both the stop-word list and the Snowball stemmer.
//! Detection is only used by the command-line front end; the summarizer
//! itself always receives a resolved language.

use crate::error::{Result, SummaryError};
use rust_stemmers::Algorithm;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use stop_words::LANGUAGE;
use whatlang::Lang;

/// Languages with both a stop-word list and a Snowball stemmer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// English (default).
    #[default]
    English,
    /// Russian.
    Russian,
    /// German.
    German,
    /// French.
    French,
    /// Spanish.
    Spanish,
    /// Italian.
    Italian,
    /// Portuguese.
    Portuguese,
    /// Dutch.
    Dutch,
    /// Swedish.
    Swedish,
    /// Norwegian (Bokmål).
    Norwegian,
    /// Danish.
    Danish,
    /// Finnish.
    Finnish,
    /// Hungarian.
    Hungarian,
    /// Turkish.
    Turkish,
    /// Arabic.
    Arabic,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 15] = [
        Language::English,
        Language::Russian,
        Language::German,
        Language::French,
        Language::Spanish,
        Language::Italian,
        Language::Portuguese,
        Language::Dutch,
        Language::Swedish,
        Language::Norwegian,
        Language::Danish,
        Language::Finnish,
        Language::Hungarian,
        Language::Turkish,
        Language::Arabic,
    ];

    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
            Language::German => "de",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::Dutch => "nl",
            Language::Swedish => "sv",
            Language::Norwegian => "no",
            Language::Danish => "da",
            Language::Finnish => "fi",
            Language::Hungarian => "hu",
            Language::Turkish => "tr",
            Language::Arabic => "ar",
        }
    }

    /// Snowball algorithm for this language.
    pub fn stemmer_algorithm(&self) -> Algorithm {
        match self {
            Language::English => Algorithm::English,
            Language::Russian => Algorithm::Russian,
            Language::German => Algorithm::German,
            Language::French => Algorithm::French,
            Language::Spanish => Algorithm::Spanish,
            Language::Italian => Algorithm::Italian,
            Language::Portuguese => Algorithm::Portuguese,
            Language::Dutch => Algorithm::Dutch,
            Language::Swedish => Algorithm::Swedish,
            Language::Norwegian => Algorithm::Norwegian,
            Language::Danish => Algorithm::Danish,
            Language::Finnish => Algorithm::Finnish,
            Language::Hungarian => Algorithm::Hungarian,
            Language::Turkish => Algorithm::Turkish,
            Language::Arabic => Algorithm::Arabic,
        }
    }

    /// Stop-word list identifier for this language.
    pub fn stopword_language(&self) -> LANGUAGE {
        match self {
            Language::English => LANGUAGE::English,
            Language::Russian => LANGUAGE::Russian,
            Language::German => LANGUAGE::German,
            Language::French => LANGUAGE::French,
            Language::Spanish => LANGUAGE::Spanish,
            Language::Italian => LANGUAGE::Italian,
            Language::Portuguese => LANGUAGE::Portuguese,
            Language::Dutch => LANGUAGE::Dutch,
            Language::Swedish => LANGUAGE::Swedish,
            Language::Norwegian => LANGUAGE::Norwegian,
            Language::Danish => LANGUAGE::Danish,
            Language::Finnish => LANGUAGE::Finnish,
            Language::Hungarian => LANGUAGE::Hungarian,
            Language::Turkish => LANGUAGE::Turkish,
            Language::Arabic => LANGUAGE::Arabic,
        }
    }

    /// Detects the language of `text`.
    ///
    /// Returns an error for empty text, for text whatlang cannot classify and
    /// for languages without stop words or a stemmer.
    pub fn detect(text: &str) -> Result<Language> {
        if text.trim().is_empty() {
            return Err(SummaryError::Language(
                "cannot detect language of empty text".to_string(),
            ));
        }

        let info = whatlang::detect(text).ok_or_else(|| {
            SummaryError::Language("could not detect language of text".to_string())
        })?;

        Self::from_whatlang(info.lang()).ok_or_else(|| {
            SummaryError::Language(format!("unsupported language: {}", info.lang().eng_name()))
        })
    }

    fn from_whatlang(lang: Lang) -> Option<Language> {
        let language = match lang {
            Lang::Eng => Language::English,
            Lang::Rus => Language::Russian,
            Lang::Deu => Language::German,
            Lang::Fra => Language::French,
            Lang::Spa => Language::Spanish,
            Lang::Ita => Language::Italian,
            Lang::Por => Language::Portuguese,
            Lang::Nld => Language::Dutch,
            Lang::Swe => Language::Swedish,
            Lang::Nob => Language::Norwegian,
            Lang::Dan => Language::Danish,
            Lang::Fin => Language::Finnish,
            Lang::Hun => Language::Hungarian,
            Lang::Tur => Language::Turkish,
            Lang::Ara => Language::Arabic,
            _ => return None,
        };
        Some(language)
    }
}

impl FromStr for Language {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_lowercase();
        Language::ALL
            .iter()
            .copied()
            .find(|lang| lang.code() == lowered || lang.to_string() == lowered)
            .ok_or_else(|| SummaryError::Config(format!("unsupported language '{}'", s)))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::English => "english",
            Language::Russian => "russian",
            Language::German => "german",
            Language::French => "french",
            Language::Spanish => "spanish",
            Language::Italian => "italian",
            Language::Portuguese => "portuguese",
            Language::Dutch => "dutch",
            Language::Swedish => "swedish",
            Language::Norwegian => "norwegian",
            Language::Danish => "danish",
            Language::Finnish => "finnish",
            Language::Hungarian => "hungarian",
            Language::Turkish => "turkish",
            Language::Arabic => "arabic",
        };
        write!(f, "{}", name)
    }
}

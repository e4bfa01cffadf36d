//! # Lexsum - Extractive Text Summarization
//!
//! Lexsum picks the most significant sentences of a document and returns them
//! verbatim, in their original order.
//!
//! ## Overview
//!
//! A document is split into sentences, and every sentence into normalized
//! tokens (lowercased, stop words removed, stemmed). Each sentence then gets a
//! significance score and the best ones form the summary.
//!
//! ## Strategies
//!
//! - **Luhn** (frequency threshold): terms counted more often than a percentile
//!   of the term-count distribution are significant; a sentence scores
//!   `hits² / length`, and sentences above a second percentile are kept.
//! - **LSA** (latent topics): the term × sentence matrix is decomposed with an
//!   SVD, sentences are scored by their weighted topic components and the
//!   top-K are kept.
//!
//! ## Quick Start
//!
//! ```rust
//! use lexsum::{summarize, Config, Strategy};
//!
//! let text = "Rust guarantees memory safety. The borrow checker enforces ownership. \
//!             Cargo downloads crates.";
//! let summary = summarize(text, &Config::with_strategy(Strategy::Lsa))?;
//! assert!(summary.starts_with("Rust guarantees memory safety."));
//! # Ok::<(), lexsum::SummaryError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`segmentation`] - Rule-based sentence splitting
//! - [`text`] - Stop words, stemming, part-of-speech filtering, tokenization
//! - [`vocabulary`] - Vocabularies and term matrices
//! - [`significance`] - Luhn and LSA scoring models
//! - [`selector`] - Sentence selection and summary assembly
//! - [`summarizer`] - The end-to-end pipeline
//! - [`observer`] - Hooks into intermediate pipeline results

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod language;
pub mod observer;
pub mod segmentation;
pub mod selector;
pub mod significance;
pub mod stats;
pub mod summarizer;
pub mod text;
pub mod vocabulary;

// Re-export commonly used types
pub use config::{Config, Strategy, SummarizerConfig, TextConfig, WordNormalization};
pub use error::{Result, SummaryError};
pub use language::Language;
pub use observer::{LogObserver, NoopObserver, SummaryObserver};
pub use selector::{ScoredSentence, Selector, Summary};
pub use significance::{LsaModel, LuhnModel, SentenceScores, Significance, SignificanceModel};
pub use summarizer::{summarize, Summarizer};
pub use text::{LexiconTagger, PosTag, PosTagger, Sentence, Tokenizer};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

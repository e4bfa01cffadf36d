//! Sentence segmentation.
//!
//! Splits a document into sentences with deterministic punctuation rules and
//! the short forms of its language. No model or semantic analysis is involved.

mod sentence;

pub use sentence::{sentence_spans, sentence_spans_for, split_sentences, split_sentences_for};

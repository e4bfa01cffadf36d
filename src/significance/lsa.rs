//! Latent semantic analysis for sentence scoring.
//!
//! The term × sentence matrix is normalized per column and factored with a
//! thin SVD, `A = U Σ Vᵀ`. Only the leading `max(3, target)` topics are kept.
//! A sentence's score is the length of its right-singular-vector components
//! weighted by the topic strengths:
//!
//! ```text
//! score(j) = sqrt( Σᵢ σᵢ² · Vᵀ[i, j]² )
//! ```
//!
//! Steinberger & Ježek, "Using Latent Semantic Analysis in Text
//! Summarization and Summary Evaluation".

use super::{SentenceScores, SignificanceModel};
use crate::config::SummarizerConfig;
use crate::error::{Result, SummaryError};
use crate::observer::SummaryObserver;
use crate::text::Sentence;
use crate::vocabulary::{incidence_matrix, normalize_columns, Vocabulary};
use nalgebra::DMatrix;

/// Latent-topic significance model.
#[derive(Debug, Clone)]
pub struct LsaModel {
    target_sentence_count: usize,
}

impl LsaModel {
    /// Creates a model for summaries of `target_sentence_count` sentences.
    pub fn new(target_sentence_count: usize) -> Self {
        Self {
            target_sentence_count,
        }
    }

    /// Number of leading topics used for scoring.
    pub fn min_dimensions(&self) -> usize {
        SummarizerConfig::MIN_TOPICS.max(self.target_sentence_count)
    }
}

impl SignificanceModel for LsaModel {
    fn score(
        &self,
        sentences: &[Sentence],
        observer: &dyn SummaryObserver,
    ) -> Result<SentenceScores> {
        let vocabulary = Vocabulary::from_sentences(sentences);
        observer.on_vocabulary(vocabulary.len());
        if vocabulary.is_empty() || sentences.is_empty() {
            return Ok(SentenceScores::empty(sentences.len()));
        }

        let mut matrix = incidence_matrix(sentences, &vocabulary);
        normalize_columns(&mut matrix);

        let (rows, cols) = matrix.dim();
        let dense = DMatrix::from_fn(rows, cols, |r, c| matrix[[r, c]]);
        let svd = dense
            .try_svd(false, true, f64::EPSILON, 0)
            .ok_or_else(|| {
                SummaryError::DegenerateInput(format!(
                    "SVD of the {}x{} term matrix did not converge",
                    rows, cols
                ))
            })?;
        let v_t = svd.v_t.ok_or_else(|| {
            SummaryError::DegenerateInput("SVD produced no right singular vectors".to_string())
        })?;
        let sigma = svd.singular_values;

        // Strongest topics first
        let mut topics: Vec<usize> = (0..sigma.len()).collect();
        topics.sort_by(|&a, &b| sigma[b].total_cmp(&sigma[a]));
        topics.truncate(self.min_dimensions());

        let weights: Vec<f64> = topics.iter().map(|&t| sigma[t] * sigma[t]).collect();
        observer.on_topic_weights(&weights);

        let scores = sentences
            .iter()
            .enumerate()
            .map(|(col, sentence)| {
                let components: Vec<f64> = topics.iter().map(|&t| v_t[(t, col)]).collect();
                observer.on_sentence_topics(sentence, &components);
                weights
                    .iter()
                    .zip(&components)
                    .map(|(w, v)| w * v * v)
                    .sum::<f64>()
                    .sqrt()
            })
            .collect();

        Ok(SentenceScores {
            scores,
            vocabulary_size: vocabulary.len(),
        })
    }
}

//! Lexical-overlap relevance scorer.
//!
//! A model-free [`RelevanceScorer`] standing in where a cross-encoder would
//! sit. Relevance is the harmonic mean of two token-overlap rates, calibrated
//! through a logistic curve so the output lands in the normalized range the
//! rest of the pipeline expects.

use std::collections::HashSet;

use tracing::debug;

use super::{RankedPassage, RelevanceScorer, ScoringError};

/// Tokens shorter than this carry little signal (articles, copulas, short
/// prepositions) and are ignored.
const MIN_TOKEN_LEN: usize = 3;

/// Midpoint of the logistic calibration curve: the raw overlap value mapped
/// to 0.5.
const CALIBRATION_MIDPOINT: f32 = 0.35;

/// Steepness of the logistic calibration curve.
const CALIBRATION_STEEPNESS: f32 = 6.0;

/// Model-free token-overlap relevance scorer.
#[derive(Debug, Clone, Default)]
pub struct LexicalScorer;

impl LexicalScorer {
    pub fn new() -> Self {
        Self
    }

    /// Scores a single (query, passage) pair.
    ///
    /// Coverage is the share of query tokens found in the passage; density is
    /// the share of passage tokens matched by the query. Their harmonic mean
    /// rewards passages that both answer the query and stay on topic, and the
    /// logistic calibration maps it into the normalized range. Pairs where
    /// either side has no content tokens score `0.0`.
    pub fn score(&self, query: &str, passage: &str) -> f32 {
        let query_tokens = content_tokens(query);
        let passage_tokens = content_tokens(passage);

        if query_tokens.is_empty() || passage_tokens.is_empty() {
            return 0.0;
        }

        let matched = query_tokens.intersection(&passage_tokens).count() as f32;
        let coverage = matched / query_tokens.len() as f32;
        let density = matched / passage_tokens.len() as f32;

        let overlap = if matched == 0.0 {
            0.0
        } else {
            2.0 * coverage * density / (coverage + density)
        };

        calibrate(overlap)
    }
}

impl RelevanceScorer for LexicalScorer {
    fn rank(&self, query: &str, corpus: &[&str]) -> Result<Vec<RankedPassage>, ScoringError> {
        debug!(
            query_len = query.len(),
            num_passages = corpus.len(),
            "Scoring corpus lexically"
        );

        Ok(corpus
            .iter()
            .enumerate()
            .map(|(corpus_id, passage)| RankedPassage {
                corpus_id,
                score: self.score(query, passage),
            })
            .collect())
    }
}

/// Lowercased alphanumeric tokens of at least [`MIN_TOKEN_LEN`] characters.
fn content_tokens(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.len() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

fn calibrate(overlap: f32) -> f32 {
    1.0 / (1.0 + (-CALIBRATION_STEEPNESS * (overlap - CALIBRATION_MIDPOINT)).exp())
}

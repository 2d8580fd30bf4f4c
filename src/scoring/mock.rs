//! Canned-score relevance scorer for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{RankedPassage, RelevanceScorer, ScoringError};

/// Test scorer returning pre-registered scores keyed by passage text.
///
/// Unregistered passages get `default_score` (0.0 unless overridden). The
/// call counter lets tests assert the scorer was never invoked on
/// short-circuit paths.
#[derive(Default)]
pub struct MockScorer {
    scores: HashMap<String, f32>,
    default_score: f32,
    fail_reason: Option<String>,
    calls: AtomicUsize,
}

impl MockScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fixed score for a passage text.
    pub fn with_score(mut self, passage: impl Into<String>, score: f32) -> Self {
        self.scores.insert(passage.into(), score);
        self
    }

    /// Sets the score returned for unregistered passages.
    pub fn with_default_score(mut self, score: f32) -> Self {
        self.default_score = score;
        self
    }

    /// Makes every `rank` call fail, for error propagation tests.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            fail_reason: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Number of `rank` invocations so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RelevanceScorer for MockScorer {
    fn rank(&self, _query: &str, corpus: &[&str]) -> Result<Vec<RankedPassage>, ScoringError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(reason) = &self.fail_reason {
            return Err(ScoringError::ComputationFailed {
                reason: reason.clone(),
            });
        }

        Ok(corpus
            .iter()
            .enumerate()
            .map(|(corpus_id, passage)| RankedPassage {
                corpus_id,
                score: self.scores.get(*passage).copied().unwrap_or(self.default_score),
            })
            .collect())
    }
}

//! The absolute-or-relative relevance gate.
//!
//! Given the deduplicated, reranked, descending-by-score candidate list, the
//! gate decides whether the results are worth returning at all:
//!
//! - empty list: [`GateDecision::Insufficient`];
//! - `top >= threshold`: [`GateDecision::Accept`];
//! - `top - second >= SCORE_DELTA_OVERRIDE` (second is `0.0` when absent):
//!   [`GateDecision::Accept`]. A sharp margin over the runner-up is itself
//!   evidence of relevance, so a single strong hit surrounded by weak noise
//!   still surfaces even below the absolute bar;
//! - otherwise: [`GateDecision::Insufficient`].
//!
//! Both comparisons are inclusive (`>=`). [`GateDecision::Empty`] is not
//! produced here: the "index returned nothing" case is detected by the
//! orchestrator before dedup and rerank ever run.

use tracing::debug;

use crate::constants::SCORE_DELTA_OVERRIDE;
use crate::document::Document;

/// Outcome of the relevance gate.
#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    /// The index returned zero candidates; the caller returns
    /// [`NO_RESULTS`](crate::NO_RESULTS).
    Empty,
    /// Candidates existed but none cleared the relevance bar; the caller
    /// returns [`INSUFFICIENT_RELEVANCE`](crate::INSUFFICIENT_RELEVANCE).
    Insufficient,
    /// The candidates are relevant enough to return as-is.
    Accept(Vec<Document>),
}

impl GateDecision {
    /// Returns `true` for [`GateDecision::Accept`].
    pub fn is_accept(&self) -> bool {
        matches!(self, GateDecision::Accept(_))
    }
}

impl std::fmt::Display for GateDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GateDecision::Empty => write!(f, "EMPTY"),
            GateDecision::Insufficient => write!(f, "INSUFFICIENT"),
            GateDecision::Accept(docs) => write!(f, "ACCEPT ({} documents)", docs.len()),
        }
    }
}

/// Applies the gate to a deduplicated, reranked candidate list.
pub fn evaluate(candidates: Vec<Document>, threshold: f32) -> GateDecision {
    let Some(top) = candidates.first() else {
        debug!("No candidates survived dedup and rerank");
        return GateDecision::Insufficient;
    };

    let top_score = top.score;
    let second = candidates.get(1).map(|d| d.score).unwrap_or(0.0);
    let delta = top_score - second;

    if top_score >= threshold {
        debug!(top_score, threshold, "Top score cleared the relevance threshold");
        GateDecision::Accept(candidates)
    } else if delta >= SCORE_DELTA_OVERRIDE {
        debug!(
            top_score,
            second, delta, "Margin over the runner-up cleared the delta override"
        );
        GateDecision::Accept(candidates)
    } else {
        debug!(
            top_score,
            second, delta, threshold, "No candidate cleared the relevance bar"
        );
        GateDecision::Insufficient
    }
}

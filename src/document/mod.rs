//! Candidate document schema and sentinel values.
//!
//! A [`Document`] is a retrieved passage plus its metadata and a relevance
//! score. Documents are created by the semantic index, carried through
//! deduplication and reranking by value, and returned to the caller; nothing
//! in this crate persists them.
//!
//! Two process-wide sentinels exist: [`NO_RESULTS`] (the index returned
//! nothing) and [`INSUFFICIENT_RELEVANCE`] (candidates existed but none
//! cleared the relevance bar). Sentinels are return values only; they are
//! never fed into dedup or reranking and are never mutated.


use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Identifier of the "index returned nothing" sentinel.
pub const NO_RESULTS_ID: &str = "missing_document";

/// Identifier of the "nothing cleared the relevance bar" sentinel.
pub const INSUFFICIENT_RELEVANCE_ID: &str = "insufficient_relevance";

/// Free-form descriptive metadata attached to a candidate document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Human-readable title.
    pub title: String,
    /// Category or tag label.
    pub category: String,
    /// Provenance of the passage (corpus name, URL, pipeline stage).
    pub source: String,
}

impl Metadata {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            source: source.into(),
        }
    }
}

/// A retrieved passage with metadata and a relevance score.
///
/// `score` defaults to `0.0` and is only meaningful after the document has
/// passed through [`Reranker`](crate::Reranker).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier within the index.
    pub id: String,
    /// Descriptive metadata.
    pub metadata: Metadata,
    /// The passage text. Non-empty for any document accepted by the index.
    pub payload: String,
    /// Relevance score assigned by the reranker.
    #[serde(default)]
    pub score: f32,
}

impl Document {
    pub fn new(id: impl Into<String>, metadata: Metadata, payload: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            metadata,
            payload: payload.into(),
            score: 0.0,
        }
    }

    /// Returns `true` if this document is one of the two sentinels.
    pub fn is_sentinel(&self) -> bool {
        self.id == NO_RESULTS_ID || self.id == INSUFFICIENT_RELEVANCE_ID
    }
}

/// Sentinel returned when the semantic index produced zero candidates.
pub static NO_RESULTS: LazyLock<Document> = LazyLock::new(|| Document {
    id: NO_RESULTS_ID.to_string(),
    metadata: Metadata::new("No documents found", "sentinel", "retrieval"),
    payload: "No documents were found for this query.".to_string(),
    score: 0.0,
});

/// Sentinel returned when candidates existed but none cleared the relevance
/// threshold or the delta override.
pub static INSUFFICIENT_RELEVANCE: LazyLock<Document> = LazyLock::new(|| Document {
    id: INSUFFICIENT_RELEVANCE_ID.to_string(),
    metadata: Metadata::new("Insufficient relevance", "sentinel", "retrieval"),
    payload: "Documents were retrieved but none were sufficiently relevant to the query."
        .to_string(),
    score: 0.0,
});

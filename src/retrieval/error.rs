use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::index::IndexError;
use crate::scoring::ScoringError;

#[derive(Debug, Error)]
/// Errors returned by [`Retriever::retrieve`](super::Retriever::retrieve).
///
/// Collaborator failures are propagated verbatim, never downgraded to a
/// sentinel: a sentinel means "searched and found nothing relevant", not
/// "the search subsystem is broken".
pub enum RetrievalError {
    /// The caller violated the input contract (blank query, zero `n_results`).
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The semantic index failed.
    #[error("index query failed: {0}")]
    Index(#[from] IndexError),

    /// Embedding during deduplication failed.
    #[error("embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),

    /// Relevance scoring failed.
    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),
}

use std::path::PathBuf;
use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
/// Errors returned by semantic index operations.
pub enum IndexError {
    /// Embedding documents or the query failed.
    #[error("embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),

    /// The seed data file does not exist.
    #[error("seed data file not found: {path}")]
    SeedFileNotFound { path: PathBuf },

    /// Reading seed data failed.
    #[error("failed to read seed data: {0}")]
    Io(#[from] std::io::Error),

    /// A seed data line was not valid JSON for a document.
    #[error("failed to parse seed data line {line}: {source}")]
    SeedParse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A document violated the schema (empty id or payload).
    #[error("invalid document '{id}': {reason}")]
    InvalidDocument { id: String, reason: String },

    /// The underlying index backend failed.
    #[error("index query failed: {reason}")]
    QueryFailed { reason: String },
}

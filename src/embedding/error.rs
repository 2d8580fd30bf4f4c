use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by embedding operations.
pub enum EmbeddingError {
    /// No text was provided for embedding.
    #[error("no text provided for embedding")]
    EmptyInput,

    /// The backing model failed to produce vectors.
    #[error("embedding inference failed: {reason}")]
    InferenceFailed { reason: String },

    /// A vector had an unexpected dimension.
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by relevance scoring.
pub enum ScoringError {
    /// The scorer referenced a passage index outside the corpus.
    #[error("scorer returned corpus index {index} for a corpus of {len} passages")]
    CorpusIndexOutOfRange { index: usize, len: usize },

    /// The backing model failed to produce scores.
    #[error("scoring computation failed: {reason}")]
    ComputationFailed { reason: String },
}

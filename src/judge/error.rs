use thiserror::Error;

use crate::generation::LlmError;

#[derive(Debug, Error)]
/// Errors returned by answer evaluation.
pub enum JudgeError {
    /// No grounding documents were provided.
    #[error("no context documents to evaluate against")]
    NoDocuments,

    /// A sentinel stands for an absent result and cannot ground an
    /// evaluation.
    #[error("cannot evaluate against sentinel document '{id}'")]
    SentinelContext { id: String },

    /// The LLM call failed.
    #[error("llm call failed: {0}")]
    Llm(#[from] LlmError),
}

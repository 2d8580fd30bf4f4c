use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by the LLM collaborator.
pub enum LlmError {
    /// The request to the model failed.
    #[error("llm request failed: {reason}")]
    RequestFailed { reason: String },

    /// The model returned no usable text.
    #[error("llm returned an empty response")]
    EmptyResponse,
}

#[derive(Debug, Error)]
/// Errors returned by answer generation.
pub enum GenerationError {
    /// The LLM call failed.
    #[error("llm call failed: {0}")]
    Llm(#[from] LlmError),
}

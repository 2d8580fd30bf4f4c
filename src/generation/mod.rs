//! Answer generation over retrieved documents.
//!
//! The [`Generator`] concatenates document payloads into a prompt and hands
//! it to an opaque [`LlmClient`]. When the retriever returned a sentinel
//! instead of real documents, the generator short-circuits: no prompt is
//! built and no LLM call is made; the sentinel's payload becomes the answer.

pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use error::{GenerationError, LlmError};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockLlm;

use tracing::{debug, info};

use crate::document::Document;

/// Fixed instruction prefixed to every generation prompt.
pub const PROMPT_PREAMBLE: &str = "Answer the query based on the following documents:";

/// Opaque, fallible prompt-to-text capability.
pub trait LlmClient {
    fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Builds prompts from retrieved documents and produces answers through an
/// [`LlmClient`].
///
/// Keeps the most recently built prompt for diagnostics.
pub struct Generator<L> {
    llm: L,
    last_prompt: String,
}

impl<L: LlmClient> Generator<L> {
    pub fn new(llm: L) -> Self {
        Self {
            llm,
            last_prompt: String::new(),
        }
    }

    /// Generates an answer for `query` grounded in `documents`.
    ///
    /// A sentinel head document short-circuits generation; its payload is
    /// returned as the answer and `last_prompt` is left untouched.
    pub fn generate(
        &mut self,
        query: &str,
        documents: &[Document],
    ) -> Result<String, GenerationError> {
        if let Some(first) = documents.first()
            && first.is_sentinel()
        {
            info!(sentinel = %first.id, "Sentinel document returned, skipping generation");
            return Ok(first.payload.clone());
        }

        let documents_str = documents
            .iter()
            .map(|d| d.payload.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        self.last_prompt = format!("{PROMPT_PREAMBLE}\n\n{documents_str}\n\nQuery: {query}");

        let answer = self.llm.complete(&self.last_prompt)?;

        debug!(
            prompt_len = self.last_prompt.len(),
            answer_len = answer.len(),
            "LLM response received"
        );

        Ok(answer)
    }

    /// The most recently built prompt, for debugging and evaluation.
    pub fn last_prompt(&self) -> &str {
        &self.last_prompt
    }

    pub fn llm(&self) -> &L {
        &self.llm
    }
}

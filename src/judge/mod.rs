//! LLM-backed answer evaluation.
//!
//! The [`Judge`] cross-checks a generated answer against the documents it was
//! grounded in, asking an [`LlmClient`] whether the answer makes factual
//! claims the documents do not state. Two modes: [`Judge::judge`] returns a
//! [`JudgeResult`] verdict, [`Judge::explain`] returns the evaluator's prose
//! reasoning. The usual document source is
//! [`last_retrieved_documents`](crate::Retriever::last_retrieved_documents)
//! after a pipeline run.

pub mod error;


pub use error::JudgeError;

use tracing::{debug, info};

use crate::document::Document;
use crate::generation::LlmClient;

const JUDGE_INSTRUCTION: &str = "You are a helpful and objective query response evaluator. \
    Listed below are a set of context documents and a generated answer. Does the generated \
    answer contain any factual claims that are not explicitly stated in the context \
    documents? If so, return \"False\". If not, return \"True\".";

const EXPLAIN_INSTRUCTION: &str = "You are a helpful and objective query response evaluator. \
    Listed below are a set of context documents and a generated answer. Explain whether the \
    generated answer is supported by the context or not, and if not, identify the \
    unsupported (hallucinated) parts.";

/// Verdict of an answer evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JudgeResult {
    /// Every factual claim in the answer is grounded in the documents.
    Supported,
    /// The answer makes claims the documents do not state.
    Unsupported,
    /// The evaluator's reply could not be read as a clear yes or no.
    Inconclusive,
}

impl JudgeResult {
    /// Returns `true` for a clear [`Supported`](JudgeResult::Supported) or
    /// [`Unsupported`](JudgeResult::Unsupported) verdict.
    pub fn is_definitive(&self) -> bool {
        !matches!(self, JudgeResult::Inconclusive)
    }
}

impl std::fmt::Display for JudgeResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JudgeResult::Supported => write!(f, "SUPPORTED"),
            JudgeResult::Unsupported => write!(f, "UNSUPPORTED"),
            JudgeResult::Inconclusive => write!(f, "INCONCLUSIVE"),
        }
    }
}

/// Evaluates generated answers against their grounding documents through an
/// [`LlmClient`].
///
/// Keeps the most recently built prompt for diagnostics.
pub struct Judge<L> {
    llm: L,
    last_prompt: String,
}

impl<L: LlmClient> Judge<L> {
    pub fn new(llm: L) -> Self {
        Self {
            llm,
            last_prompt: String::new(),
        }
    }

    /// Asks the evaluator for a verdict on `answer` against `documents`.
    ///
    /// Fails with [`JudgeError::NoDocuments`] on an empty document list and
    /// with [`JudgeError::SentinelContext`] when a sentinel is among the
    /// documents, both before any LLM call.
    pub fn judge(
        &mut self,
        answer: &str,
        documents: &[Document],
    ) -> Result<JudgeResult, JudgeError> {
        let reply = self.evaluate(JUDGE_INSTRUCTION, answer, documents)?;
        let verdict = parse_verdict(&reply);

        info!(verdict = %verdict, "Answer evaluation complete");

        Ok(verdict)
    }

    /// Asks the evaluator for prose reasoning instead of a bare verdict.
    pub fn explain(&mut self, answer: &str, documents: &[Document]) -> Result<String, JudgeError> {
        let reply = self.evaluate(EXPLAIN_INSTRUCTION, answer, documents)?;
        Ok(reply.trim().to_string())
    }

    fn evaluate(
        &mut self,
        instruction: &str,
        answer: &str,
        documents: &[Document],
    ) -> Result<String, JudgeError> {
        if documents.is_empty() {
            return Err(JudgeError::NoDocuments);
        }
        if let Some(sentinel) = documents.iter().find(|d| d.is_sentinel()) {
            return Err(JudgeError::SentinelContext {
                id: sentinel.id.clone(),
            });
        }

        let context_section = documents
            .iter()
            .map(|d| format!("* {}", d.payload))
            .collect::<Vec<_>>()
            .join("\n");

        self.last_prompt = format!(
            "{instruction}\n\nContext documents:\n{context_section}\n\nGenerated answer:\n* {answer}"
        );

        debug!(
            prompt_len = self.last_prompt.len(),
            num_documents = documents.len(),
            "Evaluating answer against grounding documents"
        );

        Ok(self.llm.complete(&self.last_prompt)?)
    }

    /// The most recently built evaluation prompt, for debugging.
    pub fn last_prompt(&self) -> &str {
        &self.last_prompt
    }

    pub fn llm(&self) -> &L {
        &self.llm
    }
}

/// A lone "True" or "False" anywhere in the reply decides the verdict; both
/// or neither reads as [`JudgeResult::Inconclusive`].
fn parse_verdict(reply: &str) -> JudgeResult {
    let lowered = reply.to_lowercase();
    match (lowered.contains("true"), lowered.contains("false")) {
        (true, false) => JudgeResult::Supported,
        (false, true) => JudgeResult::Unsupported,
        _ => JudgeResult::Inconclusive,
    }
}

//! Canned-answer LLM client for tests.

use std::sync::Mutex;

use super::{LlmClient, LlmError};

/// Test LLM returning a fixed answer and recording every prompt it sees.
pub struct MockLlm {
    answer: String,
    fail_reason: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl MockLlm {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            fail_reason: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// An LLM that fails every call, for error propagation tests.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            answer: String::new(),
            fail_reason: Some(reason.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("mock lock poisoned").clone()
    }

    /// Number of `complete` invocations so far.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().expect("mock lock poisoned").len()
    }
}

impl LlmClient for MockLlm {
    fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts
            .lock()
            .expect("mock lock poisoned")
            .push(prompt.to_string());

        if let Some(reason) = &self.fail_reason {
            return Err(LlmError::RequestFailed {
                reason: reason.clone(),
            });
        }

        Ok(self.answer.clone())
    }
}

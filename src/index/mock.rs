//! Canned-response semantic index for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::{IndexError, SemanticIndex};
use crate::document::Document;

/// Test index returning a fixed candidate list for every query.
#[derive(Default)]
pub struct MockIndex {
    responses: Vec<Document>,
    fail_reason: Option<String>,
    calls: AtomicUsize,
}

impl MockIndex {
    /// An index that returns `documents` (truncated to `k`) for any query.
    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            responses: documents,
            ..Self::default()
        }
    }

    /// An index that fails every query, for error propagation tests.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            fail_reason: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Number of `query` invocations so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SemanticIndex for MockIndex {
    fn query(&self, _text: &str, k: usize) -> Result<Vec<Document>, IndexError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(reason) = &self.fail_reason {
            return Err(IndexError::QueryFailed {
                reason: reason.clone(),
            });
        }

        Ok(self.responses.iter().take(k).cloned().collect())
    }
}

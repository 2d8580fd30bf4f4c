//! Canned-vector embedder for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{Embedder, EmbeddingError};

/// Test embedder returning pre-registered vectors.
///
/// Texts without a canned vector fall back to a one-hot vector at a
/// hash-derived bucket: identical texts collide exactly (similarity 1.0),
/// distinct texts land in different buckets with overwhelming probability
/// (similarity 0.0).
pub struct MockEmbedder {
    dim: usize,
    canned: HashMap<String, Vec<f32>>,
    fail_reason: Option<String>,
    calls: AtomicUsize,
}

impl Default for MockEmbedder {
    fn default() -> Self {
        Self::new(8)
    }
}

impl MockEmbedder {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            canned: HashMap::new(),
            fail_reason: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Makes every `embed_batch` call fail, for error propagation tests.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            fail_reason: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Registers a fixed vector for `text`.
    pub fn with_vector(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        self.canned.insert(text.into(), vector);
        self
    }

    /// Number of `embed_batch` invocations so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fallback(&self, text: &str) -> Vec<f32> {
        let hash = blake3::hash(text.as_bytes());
        let mut bucket_bytes = [0u8; 8];
        bucket_bytes.copy_from_slice(&hash.as_bytes()[..8]);
        let bucket = (u64::from_le_bytes(bucket_bytes) % self.dim as u64) as usize;

        let mut vector = vec![0.0f32; self.dim];
        vector[bucket] = 1.0;
        vector
    }
}

impl Embedder for MockEmbedder {
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(reason) = &self.fail_reason {
            return Err(EmbeddingError::InferenceFailed {
                reason: reason.clone(),
            });
        }

        if texts.is_empty() {
            return Err(EmbeddingError::EmptyInput);
        }

        Ok(texts
            .iter()
            .map(|text| {
                self.canned
                    .get(*text)
                    .cloned()
                    .unwrap_or_else(|| self.fallback(text))
            })
            .collect())
    }
}

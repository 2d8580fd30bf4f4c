//! Embedding-similarity deduplication.

use tracing::debug;

use crate::constants::DEDUP_SIMILARITY_THRESHOLD;
use crate::document::Document;
use crate::embedding::{Embedder, EmbeddingError, cosine_similarity};

/// Removes near-duplicate candidates by pairwise cosine similarity.
///
/// A greedy, order-preserving O(n²) pass: each document is compared against
/// every already-kept document and dropped when any similarity exceeds the
/// threshold, so the first-seen copy of a duplicate cluster wins.
/// Deterministic given input order. Does not touch document scores.
pub struct Deduplicator<E> {
    embedder: E,
    similarity_threshold: f32,
}

impl<E: Embedder> Deduplicator<E> {
    /// Creates a deduplicator with the default similarity threshold
    /// ([`DEDUP_SIMILARITY_THRESHOLD`]).
    pub fn new(embedder: E) -> Self {
        Self {
            embedder,
            similarity_threshold: DEDUP_SIMILARITY_THRESHOLD,
        }
    }

    /// Overrides the similarity threshold.
    pub fn with_threshold(mut self, similarity_threshold: f32) -> Self {
        self.similarity_threshold = similarity_threshold;
        self
    }

    pub fn similarity_threshold(&self) -> f32 {
        self.similarity_threshold
    }

    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    /// Returns the order-preserving subset of `documents` with near-duplicates
    /// removed.
    ///
    /// Embeds all payloads in one batch call; an embedding failure propagates
    /// with no partial result.
    pub fn deduplicate(&self, documents: Vec<Document>) -> Result<Vec<Document>, EmbeddingError> {
        if documents.is_empty() {
            return Ok(documents);
        }

        let texts: Vec<&str> = documents.iter().map(|d| d.payload.as_str()).collect();
        let embeddings = self.embedder.embed_batch(&texts)?;

        let total = documents.len();
        let mut kept = Vec::with_capacity(total);
        let mut kept_embeddings: Vec<Vec<f32>> = Vec::with_capacity(total);

        for (document, embedding) in documents.into_iter().zip(embeddings) {
            let is_duplicate = kept_embeddings
                .iter()
                .any(|kept| cosine_similarity(kept, &embedding) > self.similarity_threshold);

            if is_duplicate {
                debug!(id = %document.id, "Dropping near-duplicate candidate");
            } else {
                kept.push(document);
                kept_embeddings.push(embedding);
            }
        }

        debug!(
            total,
            kept = kept.len(),
            threshold = self.similarity_threshold,
            "Deduplication complete"
        );

        Ok(kept)
    }
}

//! Retrieval orchestrator.

use tracing::{debug, info};

use super::dedup::Deduplicator;
use super::error::RetrievalError;
use super::gate::{self, GateDecision};
use super::rerank::Reranker;
use crate::document::{Document, INSUFFICIENT_RELEVANCE, NO_RESULTS};
use crate::embedding::Embedder;
use crate::index::SemanticIndex;
use crate::scoring::RelevanceScorer;

/// Composes index lookup, deduplication, reranking, and the relevance gate
/// into the single [`retrieve`](Retriever::retrieve) operation.
///
/// A retriever carries per-session state (the last accepted document list);
/// callers needing isolation use one instance per logical session.
pub struct Retriever<I, E, S> {
    index: I,
    deduplicator: Deduplicator<E>,
    reranker: Reranker<S>,
    last_retrieved: Vec<Document>,
}

impl<I, E, S> Retriever<I, E, S>
where
    I: SemanticIndex,
    E: Embedder,
    S: RelevanceScorer,
{
    pub fn new(index: I, embedder: E, scorer: S) -> Self {
        Self {
            index,
            deduplicator: Deduplicator::new(embedder),
            reranker: Reranker::new(scorer),
            last_retrieved: Vec::new(),
        }
    }

    /// Overrides the deduplication similarity threshold.
    pub fn with_dedup_threshold(mut self, similarity_threshold: f32) -> Self {
        self.deduplicator = self.deduplicator.with_threshold(similarity_threshold);
        self
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    pub fn deduplicator(&self) -> &Deduplicator<E> {
        &self.deduplicator
    }

    pub fn reranker(&self) -> &Reranker<S> {
        &self.reranker
    }

    /// Mutable access to the index, e.g. for seeding an
    /// [`InMemoryIndex`](crate::InMemoryIndex).
    pub fn index_mut(&mut self) -> &mut I {
        &mut self.index
    }

    /// Retrieves, deduplicates, reranks, and gates candidates for `query`.
    ///
    /// The returned list is never empty: it is either a single sentinel
    /// ([`NO_RESULTS`] or [`INSUFFICIENT_RELEVANCE`]) or a non-empty,
    /// deduplicated, reranked, threshold-passing subset of the index's
    /// candidates, descending by score.
    ///
    /// Fails with [`RetrievalError::InvalidInput`] before touching any
    /// collaborator when `query` is blank or `n_results` is zero.
    /// Collaborator failures propagate unchanged.
    pub fn retrieve(
        &mut self,
        query: &str,
        n_results: usize,
        threshold: f32,
    ) -> Result<Vec<Document>, RetrievalError> {
        if query.trim().is_empty() {
            return Err(RetrievalError::InvalidInput {
                reason: "query must not be blank".to_string(),
            });
        }
        if n_results == 0 {
            return Err(RetrievalError::InvalidInput {
                reason: "n_results must be positive".to_string(),
            });
        }

        let candidates = self.index.query(query, n_results)?;
        debug!(
            num_candidates = candidates.len(),
            n_results, threshold, "Retrieved candidates from index"
        );

        let decision = if candidates.is_empty() {
            GateDecision::Empty
        } else {
            let deduped = self.deduplicator.deduplicate(candidates)?;
            let reranked = self.reranker.rerank(deduped, query)?;
            gate::evaluate(reranked, threshold)
        };

        info!(decision = %decision, "Retrieval gate decision");

        match decision {
            GateDecision::Empty => Ok(vec![NO_RESULTS.clone()]),
            GateDecision::Insufficient => Ok(vec![INSUFFICIENT_RELEVANCE.clone()]),
            GateDecision::Accept(documents) => {
                self.last_retrieved = documents.clone();
                Ok(documents)
            }
        }
    }

    /// The documents accepted by the most recent successful
    /// [`retrieve`](Retriever::retrieve) call, for diagnostics and
    /// evaluation tooling. Sentinel outcomes do not update this.
    pub fn last_retrieved_documents(&self) -> &[Document] {
        &self.last_retrieved
    }

    /// Clears the last-retrieved session state. Idempotent.
    pub fn reset_last_retrieved(&mut self) {
        self.last_retrieved.clear();
    }
}

//! Cross-encoder style reranking.

use std::cmp::Ordering;

use tracing::debug;

use crate::document::Document;
use crate::scoring::{RelevanceScorer, ScoringError};

/// Orders candidates by relevance score against the query.
///
/// The scorer is invoked once over the whole corpus; the returned
/// `(corpus index, score)` pairs are written onto the owned documents and the
/// list is stable-sorted descending, so exact score ties keep their input
/// order.
pub struct Reranker<S> {
    scorer: S,
}

impl<S: RelevanceScorer> Reranker<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Scores and sorts `documents` against `query`, overwriting each
    /// document's `score`.
    ///
    /// An empty corpus returns empty without invoking the scorer.
    pub fn rerank(
        &self,
        mut documents: Vec<Document>,
        query: &str,
    ) -> Result<Vec<Document>, ScoringError> {
        if documents.is_empty() {
            return Ok(documents);
        }

        let corpus: Vec<&str> = documents.iter().map(|d| d.payload.as_str()).collect();
        let ranks = self.scorer.rank(query, &corpus)?;

        let len = documents.len();
        for rank in ranks {
            let document =
                documents
                    .get_mut(rank.corpus_id)
                    .ok_or(ScoringError::CorpusIndexOutOfRange {
                        index: rank.corpus_id,
                        len,
                    })?;
            document.score = rank.score;
        }

        // Vec::sort_by is stable; comparing b against a keeps tied documents
        // in their original relative order while sorting descending.
        documents.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        debug!(
            num_documents = documents.len(),
            top_score = documents.first().map(|d| d.score),
            "Reranking complete"
        );

        Ok(documents)
    }
}

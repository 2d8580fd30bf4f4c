//! End-to-end RAG pipeline.
//!
//! [`RagPipeline`] wires a [`Retriever`] to a [`Generator`]: retrieve and
//! gate candidates for a query, then generate an answer grounded in whatever
//! came back (real documents or a sentinel).


use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::constants::{DEFAULT_N_RESULTS, DEFAULT_RELEVANCE_THRESHOLD};
use crate::document::Document;
use crate::embedding::Embedder;
use crate::generation::{GenerationError, Generator, LlmClient};
use crate::index::SemanticIndex;
use crate::retrieval::{RetrievalError, Retriever};
use crate::scoring::RelevanceScorer;

#[derive(Debug, Error)]
/// Errors returned by [`RagPipeline::run`].
pub enum PipelineError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Answer plus the documents it was grounded in.
#[derive(Debug, Clone, PartialEq)]
pub struct RagResponse {
    pub answer: String,
    pub documents: Vec<Document>,
}

/// Retriever and generator composed into one `run` operation.
pub struct RagPipeline<I, E, S, L> {
    retriever: Retriever<I, E, S>,
    generator: Generator<L>,
    n_results: usize,
    threshold: f32,
}

impl<I, E, S, L> RagPipeline<I, E, S, L>
where
    I: SemanticIndex,
    E: Embedder,
    S: RelevanceScorer,
    L: LlmClient,
{
    pub fn new(retriever: Retriever<I, E, S>, generator: Generator<L>) -> Self {
        Self {
            retriever,
            generator,
            n_results: DEFAULT_N_RESULTS,
            threshold: DEFAULT_RELEVANCE_THRESHOLD,
        }
    }

    /// Overrides the number of candidates requested per query.
    pub fn with_n_results(mut self, n_results: usize) -> Self {
        self.n_results = n_results;
        self
    }

    /// Overrides the relevance threshold passed to the gate.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Applies a [`Config`]: candidate count, relevance threshold, and the
    /// deduplication similarity threshold.
    ///
    /// The embedding dimension and seed-data path apply at index
    /// construction and are the caller's to honor.
    pub fn with_config(self, config: &Config) -> Self {
        Self {
            retriever: self.retriever.with_dedup_threshold(config.dedup_similarity),
            generator: self.generator,
            n_results: config.n_results,
            threshold: config.relevance_threshold,
        }
    }

    pub fn retriever(&self) -> &Retriever<I, E, S> {
        &self.retriever
    }

    pub fn retriever_mut(&mut self) -> &mut Retriever<I, E, S> {
        &mut self.retriever
    }

    pub fn generator(&self) -> &Generator<L> {
        &self.generator
    }

    /// Runs retrieval and generation for `query`.
    pub fn run(&mut self, query: &str) -> Result<RagResponse, PipelineError> {
        let documents = self
            .retriever
            .retrieve(query, self.n_results, self.threshold)?;
        let answer = self.generator.generate(query, &documents)?;

        info!(
            num_documents = documents.len(),
            answer_len = answer.len(),
            "Pipeline run complete"
        );

        Ok(RagResponse { answer, documents })
    }
}

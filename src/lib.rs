//! Sift library crate: the retrieval core of a RAG pipeline.
//!
//! # Public API Surface
//!
//! The exports are organized by module:
//!
//! ## Core Types (Stable)
//! - [`Document`], [`Metadata`] - Candidate document schema
//! - [`NO_RESULTS`], [`INSUFFICIENT_RELEVANCE`] - Sentinel documents
//! - [`Retriever`], [`RetrievalError`] - Retrieval orchestrator
//! - [`GateDecision`] - Relevance gate outcome
//!
//! ## Retrieval Pipeline
//! - [`Deduplicator`] - Embedding-similarity deduplication
//! - [`Reranker`] - Cross-encoder style reranking
//! - [`gate`](retrieval::gate) - Absolute-or-relative relevance gate
//!
//! ## Capability Traits
//! - [`Embedder`] - text to fixed-length vector
//! - [`SemanticIndex`] - nearest-neighbor candidate retrieval
//! - [`RelevanceScorer`] - normalized (query, passage) scoring
//! - [`LlmClient`] - opaque answer generation
//!
//! ## Concrete Collaborators
//! - [`HashedEmbedder`] - deterministic feature-hash embeddings
//! - [`LexicalScorer`] - logistic-calibrated token-overlap scorer
//! - [`InMemoryIndex`] - embedder-backed in-memory semantic index
//!
//! ## Generation and Evaluation
//! - [`Generator`], [`RagPipeline`] - prompt construction and end-to-end runs
//! - [`Judge`], [`JudgeResult`] - LLM-backed answer evaluation
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod document;
pub mod embedding;
pub mod generation;
pub mod index;
pub mod judge;
pub mod logging;
pub mod pipeline;
pub mod retrieval;
pub mod scoring;

pub use config::{Config, ConfigError};
pub use constants::{
    DEDUP_SIMILARITY_THRESHOLD, DEFAULT_EMBEDDING_DIM, DEFAULT_N_RESULTS,
    DEFAULT_RELEVANCE_THRESHOLD, SCORE_DELTA_OVERRIDE,
};
pub use document::{
    Document, INSUFFICIENT_RELEVANCE, INSUFFICIENT_RELEVANCE_ID, Metadata, NO_RESULTS,
    NO_RESULTS_ID,
};
pub use embedding::{Embedder, EmbeddingError, HashedEmbedder, cosine_similarity};
pub use generation::{GenerationError, Generator, LlmClient, LlmError, PROMPT_PREAMBLE};
pub use index::{InMemoryIndex, IndexError, SemanticIndex};
pub use judge::{Judge, JudgeError, JudgeResult};
pub use pipeline::{PipelineError, RagPipeline, RagResponse};
pub use retrieval::{Deduplicator, GateDecision, Reranker, RetrievalError, Retriever};
pub use scoring::{LexicalScorer, RankedPassage, RelevanceScorer, ScoringError};

#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;
#[cfg(any(test, feature = "mock"))]
pub use generation::MockLlm;
#[cfg(any(test, feature = "mock"))]
pub use index::MockIndex;
#[cfg(any(test, feature = "mock"))]
pub use scoring::MockScorer;

//! The retrieval pipeline: deduplicate, rerank, gate.
//!
//! [`Retriever`] composes the stages into the single
//! [`retrieve`](Retriever::retrieve) operation:
//!
//! 1. query the semantic index for candidates,
//! 2. short-circuit to the [`NO_RESULTS`](crate::NO_RESULTS) sentinel when
//!    the index returned nothing,
//! 3. drop near-duplicates ([`Deduplicator`]),
//! 4. score and sort against the query ([`Reranker`]),
//! 5. gate on the absolute threshold or the delta override ([`gate`]).
//!
//! The gate is the one genuinely novel piece of policy here; see [`gate`] for
//! the exact decision procedure.

pub mod dedup;
pub mod error;
pub mod gate;
pub mod rerank;
pub mod retriever;


pub use dedup::Deduplicator;
pub use error::RetrievalError;
pub use gate::GateDecision;
pub use rerank::Reranker;
pub use retriever::Retriever;

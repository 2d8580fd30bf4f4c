//! Cross-cutting policy constants.
//!
//! The threshold and delta values below are tunable policy, not derived
//! quantities. Components take them as parameters; these are the defaults
//! shared across modules.

/// Default relevance threshold applied by the gate when the caller does not
/// choose one.
pub const DEFAULT_RELEVANCE_THRESHOLD: f32 = 0.5;

/// Margin over the runner-up score that accepts a below-threshold top
/// candidate. A sharp separation from the rest of the field is treated as
/// evidence of relevance in its own right.
pub const SCORE_DELTA_OVERRIDE: f32 = 0.1;

/// Cosine similarity above which two candidate payloads are treated as
/// near-duplicates.
pub const DEDUP_SIMILARITY_THRESHOLD: f32 = 0.95;

/// Default number of candidates requested from the semantic index.
pub const DEFAULT_N_RESULTS: usize = 10;

/// Default embedding vector dimension for [`HashedEmbedder`](crate::HashedEmbedder).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

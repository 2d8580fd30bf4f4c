//! Relevance scoring capability.
//!
//! A [`RelevanceScorer`] produces one normalized score per corpus passage for
//! a given query, in the manner of a cross-encoder. Scores must land in
//! `[0, 1]` (implementations typically sigmoid-squash a raw logit) so that a
//! single threshold stays meaningful when the scorer model is swapped. The
//! pipeline only ever compares normalized scores; it never assumes a raw
//! score scale.

pub mod error;
pub mod lexical;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use error::ScoringError;
pub use lexical::LexicalScorer;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockScorer;

/// A normalized relevance score paired with the index of the passage it
/// belongs to, so callers can attach scores without aliasing the corpus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedPassage {
    /// Index into the corpus slice passed to [`RelevanceScorer::rank`].
    pub corpus_id: usize,
    /// Normalized relevance score in `[0, 1]`.
    pub score: f32,
}

/// Opaque (query, passage) relevance scoring capability.
pub trait RelevanceScorer {
    /// Scores every passage in `corpus` against `query`.
    ///
    /// Returns exactly one [`RankedPassage`] per corpus entry, in no
    /// particular order.
    fn rank(&self, query: &str, corpus: &[&str]) -> Result<Vec<RankedPassage>, ScoringError>;
}

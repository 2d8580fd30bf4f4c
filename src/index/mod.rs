//! Semantic index capability.
//!
//! The index is an external collaborator as far as the retrieval pipeline is
//! concerned: an opaque nearest-neighbor lookup from query text to an ordered
//! candidate list. [`InMemoryIndex`] is the bundled implementation, suitable
//! for tests, evaluation harnesses, and small corpora.

pub mod error;
pub mod memory;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use error::IndexError;
pub use memory::InMemoryIndex;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockIndex;

use crate::document::Document;

/// Opaque nearest-neighbor candidate retrieval capability.
pub trait SemanticIndex {
    /// Returns up to `k` candidates for `text`, ordered by decreasing
    /// index-side relevance.
    fn query(&self, text: &str, k: usize) -> Result<Vec<Document>, IndexError>;
}

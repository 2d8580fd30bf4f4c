//! Embedding capability and similarity math.
//!
//! The [`Embedder`] trait is the seam between the retrieval pipeline and
//! whatever model produces vectors. Deduplication and the in-memory index
//! only ever consume it through [`embed_batch`](Embedder::embed_batch) plus
//! [`cosine_similarity`]; swapping in a real transformer backend does not
//! touch any policy code.
//!
//! [`HashedEmbedder`] is the bundled deterministic implementation: no model
//! weights, no I/O, stable across runs.

pub mod error;
pub mod hashed;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use error::EmbeddingError;
pub use hashed::HashedEmbedder;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbedder;

/// Opaque text-to-vector capability.
///
/// All vectors produced by one embedder instance must have the same length.
pub trait Embedder {
    /// Embeds a batch of texts in one call.
    ///
    /// Fails with [`EmbeddingError::EmptyInput`] when given an empty batch.
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError>;

    /// Embeds a single text.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let mut vectors = self.embed_batch(&[text])?;
        vectors.pop().ok_or(EmbeddingError::EmptyInput)
    }
}

/// Cosine similarity between two vectors.
///
/// Mismatched lengths and zero-norm vectors yield `0.0` rather than an error;
/// a degenerate vector is simply never similar to anything.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}

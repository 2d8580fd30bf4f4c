//! Embedder-backed in-memory semantic index.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use super::{IndexError, SemanticIndex};
use crate::document::Document;
use crate::embedding::{Embedder, cosine_similarity};

/// In-memory [`SemanticIndex`] over an [`Embedder`].
///
/// Documents are embedded once on insertion; queries are answered by cosine
/// similarity against the stored vectors, sorted descending and truncated to
/// `k`. Ties keep insertion order.
pub struct InMemoryIndex<E> {
    embedder: E,
    entries: Vec<StoredDocument>,
}

struct StoredDocument {
    document: Document,
    vector: Vec<f32>,
}

impl<E: Embedder> InMemoryIndex<E> {
    pub fn new(embedder: E) -> Self {
        Self {
            embedder,
            entries: Vec::new(),
        }
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Embeds and stores a batch of documents.
    ///
    /// Documents with an empty id or blank payload are rejected before any
    /// embedding happens.
    pub fn add_documents(&mut self, documents: Vec<Document>) -> Result<(), IndexError> {
        if documents.is_empty() {
            return Ok(());
        }

        for doc in &documents {
            validate_document(doc)?;
        }

        let texts: Vec<&str> = documents.iter().map(|d| d.payload.as_str()).collect();
        let vectors = self.embedder.embed_batch(&texts)?;

        debug!(num_documents = documents.len(), "Indexing documents");

        for (document, vector) in documents.into_iter().zip(vectors) {
            self.entries.push(StoredDocument { document, vector });
        }

        Ok(())
    }

    /// Loads documents from a JSON-lines file of `{id, metadata, payload}`
    /// records and indexes them.
    pub fn seed_from_jsonl(&mut self, path: impl AsRef<Path>) -> Result<usize, IndexError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IndexError::SeedFileNotFound {
                path: path.to_path_buf(),
            });
        }

        let reader = BufReader::new(File::open(path)?);
        let mut documents = Vec::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let document: Document =
                serde_json::from_str(&line).map_err(|source| IndexError::SeedParse {
                    line: line_no + 1,
                    source,
                })?;
            documents.push(document);
        }

        let count = documents.len();
        self.add_documents(documents)?;

        info!(path = %path.display(), num_documents = count, "Seeded index from JSONL");

        Ok(count)
    }
}

impl<E: Embedder> SemanticIndex for InMemoryIndex<E> {
    fn query(&self, text: &str, k: usize) -> Result<Vec<Document>, IndexError> {
        if self.entries.is_empty() || k == 0 {
            return Ok(Vec::new());
        }

        let query_vector = self.embedder.embed(text)?;

        let mut scored: Vec<(f32, &Document)> = self
            .entries
            .iter()
            .map(|entry| {
                let similarity = cosine_similarity(&query_vector, &entry.vector);
                (similarity, &entry.document)
            })
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);

        debug!(
            num_indexed = self.entries.len(),
            num_returned = scored.len(),
            top_similarity = scored.first().map(|(s, _)| *s),
            "Index query complete"
        );

        Ok(scored.into_iter().map(|(_, doc)| doc.clone()).collect())
    }
}

fn validate_document(doc: &Document) -> Result<(), IndexError> {
    if doc.id.trim().is_empty() {
        return Err(IndexError::InvalidDocument {
            id: doc.id.clone(),
            reason: "id must not be blank".to_string(),
        });
    }
    if doc.payload.trim().is_empty() {
        return Err(IndexError::InvalidDocument {
            id: doc.id.clone(),
            reason: "payload must not be blank".to_string(),
        });
    }
    Ok(())
}

use std::io::Write;

use super::*;
use crate::document::{Document, Metadata};
use crate::embedding::MockEmbedder;

fn doc(id: &str, payload: &str) -> Document {
    Document::new(id, Metadata::new(id, "test", "fixture"), payload)
}

#[test]
fn test_query_orders_by_similarity_and_truncates() {
    let embedder = MockEmbedder::new(4)
        .with_vector("the query", vec![1.0, 0.0, 0.0, 0.0])
        .with_vector("close match", vec![0.9, 0.1, 0.0, 0.0])
        .with_vector("partial match", vec![0.5, 0.5, 0.0, 0.0])
        .with_vector("unrelated", vec![0.0, 0.0, 1.0, 0.0]);

    let mut index = InMemoryIndex::new(embedder);
    index
        .add_documents(vec![
            doc("unrelated", "unrelated"),
            doc("partial", "partial match"),
            doc("close", "close match"),
        ])
        .unwrap();

    let results = index.query("the query", 2).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, "close");
    assert_eq!(results[1].id, "partial");
}

#[test]
fn test_query_on_empty_index_returns_empty() {
    let index = InMemoryIndex::new(MockEmbedder::default());
    assert!(index.query("anything", 5).unwrap().is_empty());
}

#[test]
fn test_add_rejects_blank_payload() {
    let mut index = InMemoryIndex::new(MockEmbedder::default());
    let result = index.add_documents(vec![doc("bad", "   ")]);
    assert!(matches!(result, Err(IndexError::InvalidDocument { .. })));
    assert!(index.is_empty());
}

#[test]
fn test_seed_from_jsonl() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{"id":"doc-1","metadata":{{"title":"Platypus","category":"mammal","source":"seed"}},"payload":"Platypus are mammals that lay eggs."}}"#
    )
    .unwrap();
    writeln!(file).unwrap();
    writeln!(
        file,
        r#"{{"id":"doc-2","metadata":{{"title":"Echidna","category":"mammal","source":"seed"}},"payload":"Echidnas are spiny monotremes."}}"#
    )
    .unwrap();

    let mut index = InMemoryIndex::new(MockEmbedder::default());
    let count = index.seed_from_jsonl(file.path()).unwrap();

    assert_eq!(count, 2);
    assert_eq!(index.len(), 2);
}

#[test]
fn test_seed_missing_file() {
    let mut index = InMemoryIndex::new(MockEmbedder::default());
    let result = index.seed_from_jsonl("/nonexistent/seed.jsonl");
    assert!(matches!(result, Err(IndexError::SeedFileNotFound { .. })));
}

#[test]
fn test_seed_reports_bad_line_number() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{"id":"doc-1","metadata":{{"title":"t","category":"c","source":"s"}},"payload":"fine"}}"#
    )
    .unwrap();
    writeln!(file, "not json").unwrap();

    let mut index = InMemoryIndex::new(MockEmbedder::default());
    let result = index.seed_from_jsonl(file.path());
    match result {
        Err(IndexError::SeedParse { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected SeedParse, got {other:?}"),
    }
}

#[test]
fn test_mock_index_truncates_and_counts() {
    let index = MockIndex::with_documents(vec![doc("a", "a"), doc("b", "b"), doc("c", "c")]);

    assert_eq!(index.query("q", 2).unwrap().len(), 2);
    assert_eq!(index.query("q", 10).unwrap().len(), 3);
    assert_eq!(index.call_count(), 2);
}

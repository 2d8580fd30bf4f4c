use super::*;

#[test]
fn test_cosine_identical_vectors() {
    let v = vec![1.0, 2.0, 3.0];
    let similarity = cosine_similarity(&v, &v);
    assert!(
        (similarity - 1.0).abs() < 0.001,
        "Identical vectors should have similarity ~1.0"
    );
}

#[test]
fn test_cosine_orthogonal_vectors() {
    let v1 = vec![1.0, 0.0];
    let v2 = vec![0.0, 1.0];
    let similarity = cosine_similarity(&v1, &v2);
    assert!(
        similarity.abs() < 0.001,
        "Orthogonal vectors should have similarity ~0.0"
    );
}

#[test]
fn test_cosine_opposite_vectors() {
    let v1 = vec![1.0, 0.0];
    let v2 = vec![-1.0, 0.0];
    let similarity = cosine_similarity(&v1, &v2);
    assert!(
        (similarity - (-1.0)).abs() < 0.001,
        "Opposite vectors should have similarity ~-1.0"
    );
}

#[test]
fn test_cosine_mismatched_or_zero_is_zero() {
    assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0]), 0.0);
    assert_eq!(cosine_similarity(&[], &[]), 0.0);
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
}

#[test]
fn test_hashed_embedder_is_deterministic() {
    let embedder = HashedEmbedder::new(64);
    let a = embedder.embed("Platypus are mammals that lay eggs.").unwrap();
    let b = embedder.embed("Platypus are mammals that lay eggs.").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_hashed_embedder_unit_norm() {
    let embedder = HashedEmbedder::new(64);
    let v = embedder.embed("some text with several words").unwrap();
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    assert!((norm - 1.0).abs() < 0.001);
}

#[test]
fn test_hashed_embedder_batch_shape() {
    let embedder = HashedEmbedder::new(32);
    let vectors = embedder.embed_batch(&["first", "second", "third"]).unwrap();
    assert_eq!(vectors.len(), 3);
    assert!(vectors.iter().all(|v| v.len() == 32));
}

#[test]
fn test_hashed_embedder_empty_batch_fails() {
    let embedder = HashedEmbedder::default();
    let result = embedder.embed_batch(&[]);
    assert!(matches!(result, Err(EmbeddingError::EmptyInput)));
}

#[test]
fn test_hashed_embedder_identical_texts_maximally_similar() {
    let embedder = HashedEmbedder::new(64);
    let vectors = embedder
        .embed_batch(&["the same passage", "the same passage", "something else"])
        .unwrap();

    let dup = cosine_similarity(&vectors[0], &vectors[1]);
    let distinct = cosine_similarity(&vectors[0], &vectors[2]);
    assert!((dup - 1.0).abs() < 0.001);
    assert!(distinct < dup);
}

#[test]
fn test_mock_embedder_canned_and_fallback() {
    let embedder = MockEmbedder::new(4).with_vector("known", vec![0.0, 1.0, 0.0, 0.0]);

    let vectors = embedder.embed_batch(&["known", "unknown"]).unwrap();
    assert_eq!(vectors[0], vec![0.0, 1.0, 0.0, 0.0]);
    assert_eq!(vectors[1].iter().filter(|&&x| x == 1.0).count(), 1);
    assert_eq!(embedder.call_count(), 1);
}

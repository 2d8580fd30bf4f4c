use super::*;

#[test]
fn test_lexical_score_in_unit_range() {
    let scorer = LexicalScorer::new();
    let pairs = [
        ("why is a platypus so weird", "Platypus are mammals that lay eggs."),
        ("completely unrelated question", "Rust has a borrow checker."),
        ("", "non-empty passage"),
        ("exact match", "exact match"),
    ];

    for (query, passage) in pairs {
        let score = scorer.score(query, passage);
        assert!(
            (0.0..=1.0).contains(&score),
            "score {score} out of range for ({query}, {passage})"
        );
    }
}

#[test]
fn test_lexical_overlap_beats_unrelated() {
    let scorer = LexicalScorer::new();
    let query = "Why is a platypus so weird?";

    let relevant = scorer.score(query, "Platypus are mammals that lay eggs.");
    let unrelated = scorer.score(query, "The stock market closed higher today.");

    assert!(
        relevant > unrelated,
        "expected {relevant} > {unrelated} for the overlapping passage"
    );
}

#[test]
fn test_lexical_exact_match_scores_high() {
    let scorer = LexicalScorer::new();
    let score = scorer.score("platypus eggs", "platypus eggs");
    assert!(score > 0.9, "exact token overlap should score high, got {score}");
}

#[test]
fn test_lexical_density_rewards_focused_passages() {
    let scorer = LexicalScorer::new();
    let query = "platypus eggs";

    let focused = scorer.score(query, "platypus eggs");
    let padded = scorer.score(
        query,
        "platypus eggs and many other long words about unrelated things",
    );

    assert!(
        focused > padded,
        "expected the focused passage ({focused}) to beat the padded one ({padded})"
    );
}

#[test]
fn test_lexical_no_content_tokens_scores_zero() {
    let scorer = LexicalScorer::new();

    assert_eq!(scorer.score("is a to it", "Platypus are mammals."), 0.0);
    assert_eq!(scorer.score("platypus eggs", "is a to"), 0.0);
    assert_eq!(scorer.score("", ""), 0.0);
}

#[test]
fn test_lexical_zero_overlap_floor_is_uniform() {
    let scorer = LexicalScorer::new();
    let query = "quarterly bond yield forecast";

    let first = scorer.score(query, "Platypus are mammals that lay eggs.");
    let second = scorer.score(query, "Penguins swim but cannot fly.");

    assert_eq!(
        first, second,
        "disjoint passages should share the same floor score"
    );
    assert!(first < 0.5, "zero overlap must stay under the default bar");
}

#[test]
fn test_rank_covers_whole_corpus() {
    let scorer = LexicalScorer::new();
    let corpus = ["first passage", "second passage", "third passage"];
    let ranks = scorer.rank("a query", &corpus).unwrap();

    assert_eq!(ranks.len(), 3);
    let mut ids: Vec<usize> = ranks.iter().map(|r| r.corpus_id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![0, 1, 2]);
}

#[test]
fn test_mock_scorer_canned_scores_and_counter() {
    let scorer = MockScorer::new()
        .with_score("alpha", 0.9)
        .with_default_score(0.1);

    let ranks = scorer.rank("q", &["alpha", "beta"]).unwrap();
    assert_eq!(ranks[0].score, 0.9);
    assert_eq!(ranks[1].score, 0.1);
    assert_eq!(scorer.call_count(), 1);
}

#[test]
fn test_mock_scorer_failure() {
    let scorer = MockScorer::failing("model offline");
    let result = scorer.rank("q", &["passage"]);
    assert!(matches!(result, Err(ScoringError::ComputationFailed { .. })));
}

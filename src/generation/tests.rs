use super::*;
use crate::document::{Document, INSUFFICIENT_RELEVANCE, Metadata, NO_RESULTS};

fn doc(id: &str, payload: &str) -> Document {
    Document::new(id, Metadata::new(id, "test", "fixture"), payload)
}

#[test]
fn test_generate_builds_prompt_from_payloads() {
    let mut generator = Generator::new(MockLlm::new("the answer"));
    let documents = vec![doc("a", "first passage"), doc("b", "second passage")];

    let answer = generator.generate("what is this?", &documents).unwrap();
    assert_eq!(answer, "the answer");

    let prompt = generator.last_prompt();
    assert_eq!(
        prompt,
        "Answer the query based on the following documents:\n\n\
         first passage\nsecond passage\n\nQuery: what is this?"
    );
    assert_eq!(generator.llm().prompts(), vec![prompt.to_string()]);
}

#[test]
fn test_generate_short_circuits_on_no_results_sentinel() {
    let mut generator = Generator::new(MockLlm::new("should not be used"));
    let documents = vec![NO_RESULTS.clone()];

    let answer = generator.generate("query", &documents).unwrap();
    assert_eq!(answer, NO_RESULTS.payload);
    assert_eq!(generator.llm().call_count(), 0);
    assert!(generator.last_prompt().is_empty());
}

#[test]
fn test_generate_short_circuits_on_insufficient_relevance_sentinel() {
    let mut generator = Generator::new(MockLlm::new("should not be used"));
    let documents = vec![INSUFFICIENT_RELEVANCE.clone()];

    let answer = generator.generate("query", &documents).unwrap();
    assert_eq!(answer, INSUFFICIENT_RELEVANCE.payload);
    assert_eq!(generator.llm().call_count(), 0);
}

#[test]
fn test_generate_llm_failure_propagates() {
    let mut generator = Generator::new(MockLlm::failing("rate limited"));
    let result = generator.generate("query", &[doc("a", "passage")]);
    assert!(matches!(result, Err(GenerationError::Llm(_))));
}

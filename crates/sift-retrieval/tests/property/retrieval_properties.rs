//! Property tests: similarity bounds, ranking shape and stability,
//! context completeness, total mode resolution.

use proptest::prelude::*;

use sift_core::models::{Document, QueryMode};
use sift_retrieval::context::assemble;
use sift_retrieval::mode::resolve_model;
use sift_retrieval::{cosine_similarity, rank};

fn vector(len: usize) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-100.0f32..100.0, len)
}

fn corpus(dims: usize) -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(vector(dims), 0..20).prop_map(|vectors| {
        vectors
            .into_iter()
            .enumerate()
            .map(|(i, v)| Document::new(i.to_string(), format!("Doc{i}"), format!("content {i}"), v))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_self_similarity_is_one(a in vector(8)) {
        let norm: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        prop_assume!(norm > 1e-3);
        prop_assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_mismatched_lengths_score_zero(a in vector(4), b in vector(5)) {
        prop_assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn prop_zero_vector_scores_zero(b in vector(6)) {
        prop_assert_eq!(cosine_similarity(&[0.0; 6], &b), 0.0);
        prop_assert_eq!(cosine_similarity(&b, &[0.0; 6]), 0.0);
    }

    #[test]
    fn prop_similarity_is_bounded(a in vector(6), b in vector(6)) {
        let s = cosine_similarity(&a, &b);
        prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&s), "s = {}", s);
    }

    #[test]
    fn prop_rank_length_and_order(q in vector(4), docs in corpus(4), k in 0usize..25) {
        let ranked = rank(&q, &docs, k);
        prop_assert_eq!(ranked.len(), k.min(docs.len()));
        for w in ranked.windows(2) {
            prop_assert!(w[0].score >= w[1].score);
        }
    }

    #[test]
    fn prop_rank_is_stable_for_equal_embeddings(
        q in vector(3),
        shared in vector(3),
        copies in 2usize..8,
    ) {
        let docs: Vec<Document> = (0..copies)
            .map(|i| Document::new(i.to_string(), format!("Doc{i}"), "same", shared.clone()))
            .collect();
        let ranked = rank(&q, &docs, copies);
        let ids: Vec<String> = ranked.iter().map(|s| s.document.id.clone()).collect();
        let expected: Vec<String> = (0..copies).map(|i| i.to_string()).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn prop_rank_is_repeatable(q in vector(4), docs in corpus(4), k in 0usize..10) {
        prop_assert_eq!(rank(&q, &docs, k), rank(&q, &docs, k));
    }

    #[test]
    fn prop_context_contains_each_document_once(q in vector(4), docs in corpus(4)) {
        let ranked = rank(&q, &docs, docs.len());
        let context = assemble(&ranked);

        let mut cursor = 0;
        for scored in &ranked {
            let block = format!("Document: {}\n{}", scored.document.name, scored.document.content);
            prop_assert_eq!(context.matches(&block).count(), 1);
            let at = context[cursor..].find(&block).map(|i| i + cursor);
            prop_assert!(at.is_some(), "{} out of ranking order", scored.document.name);
            cursor = at.unwrap_or(cursor) + block.len();
        }
        prop_assert_eq!(context.is_empty(), ranked.is_empty());
    }

    #[test]
    fn prop_unknown_modes_resolve_like_general(raw in "[a-z]{0,12}") {
        let general = resolve_model(Some(QueryMode::General));
        prop_assert_eq!(resolve_model(None), general);
        let parsed = QueryMode::parse(Some(raw.as_str()));
        if !QueryMode::ALL.iter().any(|m| m.as_str() == raw) {
            prop_assert_eq!(resolve_model(Some(parsed)), general);
        }
    }
}

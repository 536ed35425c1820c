//! Linear-scan top-k ranking of a corpus snapshot against a question vector.
//!
//! Every document is scored on every query. An approximate nearest-neighbor
//! index can replace this behind the same signature.

use std::cmp::Ordering;

use sift_core::models::{Document, ScoredDocument};

use crate::similarity::cosine_similarity;

/// Score every document, sort by score descending, keep the first `k`.
///
/// Ties keep their corpus order. Documents without an embedding score `0.0`.
/// Never fails: an empty corpus or `k == 0` yields an empty list.
pub fn rank(question: &[f32], corpus: &[Document], k: usize) -> Vec<ScoredDocument> {
    if k == 0 {
        return Vec::new();
    }

    let mut scored: Vec<ScoredDocument> = corpus
        .iter()
        .map(|doc| ScoredDocument {
            score: cosine_similarity(question, &doc.embedding),
            document: doc.clone(),
        })
        .collect();

    // `sort_by` is stable, so equal scores keep their input order.
    scored.sort_by(|a, b| descending(a.score, b.score));
    scored.truncate(k);
    scored
}

/// Descending order with NaN after every real score.
fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => b.total_cmp(&a),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, embedding: Vec<f32>) -> Document {
        Document::new(id, format!("Doc{id}"), format!("content {id}"), embedding)
    }

    fn ids(ranked: &[ScoredDocument]) -> Vec<&str> {
        ranked.iter().map(|s| s.document.id.as_str()).collect()
    }

    #[test]
    fn orders_by_score_descending() {
        let corpus = vec![
            doc("1", vec![0.0, 1.0]),
            doc("2", vec![1.0, 0.0]),
            doc("3", vec![1.0, 1.0]),
        ];
        let ranked = rank(&[1.0, 0.0], &corpus, 3);
        assert_eq!(ids(&ranked), ["2", "3", "1"]);
        assert!((ranked[0].score - 1.0).abs() < 1e-9);
        assert_eq!(ranked[2].score, 0.0);
    }

    #[test]
    fn truncates_to_k() {
        let corpus: Vec<Document> = (0..10).map(|i| doc(&i.to_string(), vec![1.0, i as f32])).collect();
        assert_eq!(rank(&[1.0, 0.0], &corpus, 3).len(), 3);
    }

    #[test]
    fn fewer_documents_than_k_returns_all() {
        let corpus = vec![doc("1", vec![1.0])];
        assert_eq!(rank(&[1.0], &corpus, 3).len(), 1);
    }

    #[test]
    fn k_zero_returns_empty() {
        let corpus = vec![doc("1", vec![1.0])];
        assert!(rank(&[1.0], &corpus, 0).is_empty());
    }

    #[test]
    fn empty_corpus_returns_empty() {
        assert!(rank(&[1.0, 0.0], &[], 3).is_empty());
    }

    #[test]
    fn ties_keep_corpus_order() {
        let corpus = vec![
            doc("a", vec![1.0, 0.0]),
            doc("b", vec![0.0, 1.0]),
            doc("c", vec![1.0, 0.0]),
            doc("d", vec![1.0, 0.0]),
        ];
        let ranked = rank(&[1.0, 0.0], &corpus, 4);
        assert_eq!(ids(&ranked), ["a", "c", "d", "b"]);
    }

    #[test]
    fn missing_embeddings_participate_with_zero_score() {
        let corpus = vec![
            doc("empty", vec![]),
            doc("short", vec![1.0]),
            doc("match", vec![0.5, 0.5]),
        ];
        let ranked = rank(&[1.0, 1.0], &corpus, 3);
        assert_eq!(ids(&ranked), ["match", "empty", "short"]);
        assert_eq!(ranked[1].score, 0.0);
        assert_eq!(ranked[2].score, 0.0);
    }

    #[test]
    fn negative_scores_rank_below_zero_scores() {
        let corpus = vec![doc("neg", vec![-1.0, 0.0]), doc("none", vec![])];
        let ranked = rank(&[1.0, 0.0], &corpus, 2);
        assert_eq!(ids(&ranked), ["none", "neg"]);
    }

    #[test]
    fn nan_scores_sort_last() {
        let corpus = vec![doc("nan", vec![f32::NAN, 1.0]), doc("ok", vec![0.0, 1.0])];
        let ranked = rank(&[1.0, 1.0], &corpus, 2);
        assert_eq!(ids(&ranked), ["ok", "nan"]);
    }
}

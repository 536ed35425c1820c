//! Provenance: which documents grounded an answer, and how strongly.

use sift_core::models::{DocumentRef, ScoredDocument};

/// `{id, name, score}` for each ranked document, in ranking order.
pub fn provenance(ranked: &[ScoredDocument]) -> Vec<DocumentRef> {
    ranked.iter().map(DocumentRef::from).collect()
}

/// One line per source, e.g. `[1] Doc1 (score:0.93)`, for plain-text display.
pub fn render_sources(refs: &[DocumentRef]) -> String {
    refs.iter()
        .enumerate()
        .map(|(i, r)| format!("[{}] {} (score:{:.2})", i + 1, r.name, r.score))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use sift_core::models::Document;

    use super::*;

    #[test]
    fn provenance_keeps_order_and_scores() {
        let ranked = vec![
            ScoredDocument {
                document: Document::new("7", "Handbook", "...", vec![1.0]),
                score: 0.91,
            },
            ScoredDocument {
                document: Document::new("3", "FAQ", "...", vec![1.0]),
                score: 0.42,
            },
        ];
        let refs = provenance(&ranked);
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].id, "7");
        assert_eq!(refs[0].name, "Handbook");
        assert_eq!(refs[1].score, 0.42);
    }

    #[test]
    fn render_sources_numbers_from_one() {
        let refs = vec![DocumentRef {
            id: "1".into(),
            name: "Doc1".into(),
            score: 0.5,
        }];
        assert_eq!(render_sources(&refs), "[1] Doc1 (score:0.50)");
        assert_eq!(render_sources(&[]), "");
    }
}

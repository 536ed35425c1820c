use serde::{Deserialize, Serialize};

use super::document::ScoredDocument;

/// Provenance entry: one document that grounded an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub id: String,
    pub name: String,
    pub score: f64,
}

impl From<&ScoredDocument> for DocumentRef {
    fn from(scored: &ScoredDocument) -> Self {
        Self {
            id: scored.document.id.clone(),
            name: scored.document.name.clone(),
            score: scored.score,
        }
    }
}

/// A generated answer with the ranked documents it was grounded on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundedAnswer {
    pub answer: String,
    /// Model identifier the answer was generated with.
    pub model: String,
    /// Provenance in ranked order, highest similarity first.
    pub top_documents: Vec<DocumentRef>,
}

impl GroundedAnswer {
    /// Highest provenance score, if any document was selected.
    pub fn top_score(&self) -> Option<f64> {
        self.top_documents.first().map(|d| d.score)
    }
}

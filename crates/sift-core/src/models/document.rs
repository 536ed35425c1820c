use serde::{Deserialize, Serialize};

/// A stored document with its ingestion-time embedding.
///
/// Owned by the document store. The retrieval pipeline only reads documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub content: String,
    /// Dense vector produced once at ingestion. A missing embedding is empty.
    #[serde(default)]
    pub embedding: Vec<f32>,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
        embedding: Vec<f32>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            content: content.into(),
            embedding,
        }
    }

    /// Whether this document carries a usable embedding.
    pub fn has_embedding(&self) -> bool {
        !self.embedding.is_empty()
    }
}

/// A document paired with its similarity to one question. Lives for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub document: Document,
    /// Cosine similarity, nominally in [-1.0, 1.0].
    pub score: f64,
}

/// Input to document ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDocument {
    pub name: String,
    pub content: String,
}

impl NewDocument {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

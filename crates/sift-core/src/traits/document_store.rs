use crate::errors::SiftResult;
use crate::models::Document;

/// Document storage with snapshot reads.
pub trait IDocumentStore: Send + Sync {
    /// Snapshot of every stored document, in insertion order.
    fn list_documents(&self) -> SiftResult<Vec<Document>>;

    /// Store a document that already carries its embedding.
    fn insert(&self, document: Document) -> SiftResult<()>;

    /// Store several documents atomically: either all of them become
    /// visible, in order, or none do.
    fn insert_all(&self, documents: Vec<Document>) -> SiftResult<()>;

    /// Number of stored documents.
    fn count(&self) -> SiftResult<usize>;
}

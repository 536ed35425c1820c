//! SQLite document store.
//!
//! Embeddings are stored as little-endian `f32` blobs next to the document
//! text. Snapshots read every row in insertion order.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection};
use sift_core::errors::{SiftResult, StorageError};
use sift_core::models::Document;
use sift_core::traits::IDocumentStore;
use tracing::{debug, warn};

use crate::to_storage_err;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS documents (
    seq        INTEGER PRIMARY KEY AUTOINCREMENT,
    id         TEXT NOT NULL UNIQUE,
    name       TEXT NOT NULL,
    content    TEXT NOT NULL,
    embedding  BLOB NOT NULL,
    dimensions INTEGER NOT NULL,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);
";

/// A single connection behind a mutex. Writes and snapshot reads serialize.
pub struct SqliteDocumentStore {
    conn: Mutex<Connection>,
}

impl SqliteDocumentStore {
    /// Open (or create) a store backed by a file on disk.
    pub fn open(path: &Path) -> SiftResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| to_storage_err(format!("journal_mode: {e}")))?;
        Self::initialize(conn)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> SiftResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> SiftResult<Self> {
        conn.execute_batch(SCHEMA)
            .map_err(|e| to_storage_err(format!("schema: {e}")))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<F, T>(&self, f: F) -> SiftResult<T>
    where
        F: FnOnce(&Connection) -> SiftResult<T>,
    {
        let guard = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;
        f(&guard)
    }

    fn with_conn_mut<F, T>(&self, f: F) -> SiftResult<T>
    where
        F: FnOnce(&mut Connection) -> SiftResult<T>,
    {
        let mut guard = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;
        f(&mut guard)
    }
}

impl IDocumentStore for SqliteDocumentStore {
    fn list_documents(&self) -> SiftResult<Vec<Document>> {
        self.with_conn(|conn| {
            let mut stmt = conn
                .prepare("SELECT id, name, content, embedding FROM documents ORDER BY seq ASC")
                .map_err(|e| to_storage_err(e.to_string()))?;

            let rows = stmt
                .query_map([], |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, Vec<u8>>(3)?,
                    ))
                })
                .map_err(|e| to_storage_err(e.to_string()))?;

            let mut documents = Vec::new();
            for row in rows {
                let (id, name, content, blob) = row.map_err(|e| to_storage_err(e.to_string()))?;
                let embedding = match bytes_to_f32_vec(&blob) {
                    Some(v) => v,
                    None => {
                        // Still listed; it scores 0 like any document without an embedding.
                        warn!(%id, bytes = blob.len(), "corrupt embedding blob");
                        Vec::new()
                    }
                };
                documents.push(Document {
                    id,
                    name,
                    content,
                    embedding,
                });
            }

            debug!(count = documents.len(), "document snapshot read");
            Ok(documents)
        })
    }

    fn insert(&self, document: Document) -> SiftResult<()> {
        self.with_conn(|conn| insert_row(conn, &document))
    }

    fn insert_all(&self, documents: Vec<Document>) -> SiftResult<()> {
        self.with_conn_mut(|conn| {
            let tx = conn
                .transaction()
                .map_err(|e| to_storage_err(format!("begin: {e}")))?;
            for document in &documents {
                // Dropping `tx` on error rolls back every earlier row.
                insert_row(&tx, document)?;
            }
            tx.commit()
                .map_err(|e| to_storage_err(format!("commit: {e}")))?;
            debug!(count = documents.len(), "documents inserted");
            Ok(())
        })
    }

    fn count(&self) -> SiftResult<usize> {
        self.with_conn(|conn| {
            let n: i64 = conn
                .query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))
                .map_err(|e| to_storage_err(e.to_string()))?;
            Ok(n as usize)
        })
    }
}

fn insert_row(conn: &Connection, document: &Document) -> SiftResult<()> {
    conn.execute(
        "INSERT INTO documents (id, name, content, embedding, dimensions)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            document.id,
            document.name,
            document.content,
            f32_vec_to_bytes(&document.embedding),
            document.embedding.len() as i64
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Convert f32 slice to bytes (little-endian).
fn f32_vec_to_bytes(v: &[f32]) -> Vec<u8> {
    v.iter().flat_map(|f| f.to_le_bytes()).collect()
}

/// Convert bytes back to f32 vec. `None` if the length is not a multiple of 4.
fn bytes_to_f32_vec(bytes: &[u8]) -> Option<Vec<f32>> {
    if bytes.len() % 4 != 0 {
        return None;
    }
    Some(
        bytes
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect(),
    )
}

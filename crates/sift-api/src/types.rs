//! Wire types for the Retrieval API.

use serde::{Deserialize, Serialize};
use sift_core::models::{DocumentRef, GroundedAnswer, QueryMode};

/// `{question, mode?}`. Both fields are optional on the wire; a missing
/// question is rejected by the handler. A missing, null, unknown or
/// non-string mode means `general`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub mode: QueryMode,
}

/// `{answer, topDocuments: [{id, name, score}]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    #[serde(rename = "topDocuments")]
    pub top_documents: Vec<DocumentRef>,
}

impl From<GroundedAnswer> for QueryResponse {
    fn from(answer: GroundedAnswer) -> Self {
        Self {
            answer: answer.answer,
            top_documents: answer.top_documents,
        }
    }
}

/// `{name, content}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// `{id}`, plus every chunk id when the document was split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub id: String,
    #[serde(rename = "chunkIds", default, skip_serializing_if = "Vec::is_empty")]
    pub chunk_ids: Vec<String>,
}

/// `{error}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A status code and a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    pub const OK: u16 = 200;
    pub const BAD_REQUEST: u16 = 400;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body as compact JSON text.
    pub fn body_text(&self) -> String {
        self.body.to_string()
    }
}

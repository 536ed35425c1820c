//! Query and upload handlers with status mapping.
//!
//! Client mistakes (unparseable body, missing or empty fields) map to 400
//! with a short message. Every other failure maps to 500 with a generic
//! body; the cause goes to the log only.

use std::time::Instant;

use serde::Serialize;
use sift_core::constants::INTERNAL_ERROR_MESSAGE;
use sift_core::errors::{SiftError, SiftResult};
use sift_core::models::NewDocument;
use sift_core::CancelToken;
use sift_observability::{QueryLog, QueryLogEntry};
use sift_retrieval::RetrievalEngine;
use sift_storage::Ingestor;
use tracing::{error, info, warn};

use crate::types::{ApiResponse, QueryRequest, QueryResponse, UploadRequest, UploadResponse};

const QUESTION_REQUIRED: &str = "question is required";
const NAME_AND_CONTENT_REQUIRED: &str = "name and content are required";

/// Request handlers over one engine, one ingestor and an optional query log.
pub struct RetrievalApi<'a> {
    engine: RetrievalEngine<'a>,
    ingestor: Ingestor<'a>,
    query_log: Option<&'a QueryLog>,
}

impl<'a> RetrievalApi<'a> {
    pub fn new(engine: RetrievalEngine<'a>, ingestor: Ingestor<'a>) -> Self {
        Self {
            engine,
            ingestor,
            query_log: None,
        }
    }

    /// Record every answered query in `log`.
    pub fn with_query_log(mut self, log: &'a QueryLog) -> Self {
        self.query_log = Some(log);
        self
    }

    /// `POST /query`.
    pub fn handle_query(&self, body: &str) -> ApiResponse {
        self.handle_query_with_cancel(body, &CancelToken::new())
    }

    /// `POST /query`, aborting at the next collaborator boundary once
    /// `cancel` trips.
    pub fn handle_query_with_cancel(&self, body: &str, cancel: &CancelToken) -> ApiResponse {
        let request: QueryRequest = match serde_json::from_str(body) {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "unparseable query body");
                return client_error(QUESTION_REQUIRED);
            }
        };

        let Some(question) = request.question.filter(|q| !q.is_empty()) else {
            return client_error(QUESTION_REQUIRED);
        };

        let started = Instant::now();
        let result = self
            .engine
            .answer_with_cancel(&question, Some(request.mode), cancel);

        match result {
            Ok(answer) => {
                if let Some(log) = self.query_log {
                    log.record(QueryLogEntry::from_answer(
                        question.as_str(),
                        request.mode,
                        &answer,
                        started.elapsed(),
                    ));
                }
                ok(&QueryResponse::from(answer))
            }
            Err(e) => failure(&e, QUESTION_REQUIRED),
        }
    }

    /// `POST /upload`.
    pub fn handle_upload(&self, body: &str) -> ApiResponse {
        let request: UploadRequest = match serde_json::from_str(body) {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "unparseable upload body");
                return client_error(NAME_AND_CONTENT_REQUIRED);
            }
        };

        let (Some(name), Some(content)) = (request.name, request.content) else {
            return client_error(NAME_AND_CONTENT_REQUIRED);
        };

        match self.ingestor.ingest(&NewDocument::new(name, content)) {
            Ok(mut ids) => {
                let id = ids.first().cloned().unwrap_or_default();
                if ids.len() == 1 {
                    ids.clear();
                }
                info!(%id, chunks = ids.len(), "upload stored");
                ok(&UploadResponse { id, chunk_ids: ids })
            }
            Err(e) => failure(&e, NAME_AND_CONTENT_REQUIRED),
        }
    }
}

fn ok<T: Serialize>(body: &T) -> ApiResponse {
    match to_json(body) {
        Ok(body) => ApiResponse {
            status: ApiResponse::OK,
            body,
        },
        Err(e) => failure(&e, INTERNAL_ERROR_MESSAGE),
    }
}

fn to_json<T: Serialize>(body: &T) -> SiftResult<serde_json::Value> {
    Ok(serde_json::to_value(body)?)
}

fn client_error(message: &str) -> ApiResponse {
    ApiResponse {
        status: ApiResponse::BAD_REQUEST,
        body: error_body(message),
    }
}

/// 400 for invalid input (with the endpoint's fixed message), 500 otherwise.
fn failure(e: &SiftError, invalid_input_message: &str) -> ApiResponse {
    if e.is_invalid_input() {
        return client_error(invalid_input_message);
    }
    error!(error = %e, source = ?std::error::Error::source(e), "request failed");
    ApiResponse {
        status: ApiResponse::INTERNAL_SERVER_ERROR,
        body: error_body(INTERNAL_ERROR_MESSAGE),
    }
}

fn error_body(message: &str) -> serde_json::Value {
    serde_json::json!({ "error": message })
}

//! # sift-api
//!
//! The exposed Retrieval API. Requests and responses are JSON bodies with an
//! HTTP-style status; transport is left to the embedding application.

pub mod handlers;
pub mod runtime;
pub mod types;

pub use handlers::RetrievalApi;
pub use runtime::{RuntimeOptions, SiftRuntime};
pub use types::{ApiResponse, ErrorBody, QueryRequest, QueryResponse, UploadRequest, UploadResponse};

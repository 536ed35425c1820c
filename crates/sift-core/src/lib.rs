//! # sift-core
//!
//! Foundation crate for the sift retrieval pipeline.
//! Defines the document model, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod cancel;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use cancel::CancelToken;
pub use config::SiftConfig;
pub use errors::{SiftError, SiftResult};
pub use models::{Document, DocumentRef, GroundedAnswer, NewDocument, QueryMode, ScoredDocument};

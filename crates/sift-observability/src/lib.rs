//! # sift-observability
//!
//! Tracing subscriber setup, span macros for each pipeline stage, and the
//! bounded query log.

pub mod query_log;
pub mod tracing_setup;

pub use query_log::{QueryLog, QueryLogEntry};
pub use tracing_setup::init_tracing;

//! Span definitions per pipeline stage: answer, retrieval, embedding, generation, ingestion.

/// Create an answer span covering one whole question.
#[macro_export]
macro_rules! answer_span {
    ($mode:expr) => {
        tracing::info_span!("sift.answer", mode = %$mode)
    };
}

/// Create a retrieval span.
#[macro_export]
macro_rules! retrieval_span {
    ($top_k:expr) => {
        tracing::info_span!("sift.retrieval", top_k = $top_k)
    };
}

/// Create an embedding span.
#[macro_export]
macro_rules! embedding_span {
    ($provider:expr, $dimension:expr) => {
        tracing::info_span!("sift.embedding", provider = %$provider, dimension = $dimension)
    };
}

/// Create a generation span.
#[macro_export]
macro_rules! generation_span {
    ($model:expr) => {
        tracing::info_span!("sift.generation", model = %$model)
    };
}

/// Create an ingestion span.
#[macro_export]
macro_rules! ingest_span {
    ($name:expr) => {
        tracing::info_span!("sift.ingest", name = %$name)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ANSWER: &str = "sift.answer";
    pub const RETRIEVAL: &str = "sift.retrieval";
    pub const EMBEDDING: &str = "sift.embedding";
    pub const GENERATION: &str = "sift.generation";
    pub const INGEST: &str = "sift.ingest";
}

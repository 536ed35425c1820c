/// Embedding collaborator errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("request timed out after {after_ms} ms")]
    Timeout { after_ms: u64 },

    #[error("API returned {status}: {body}")]
    ApiStatus { status: u16, body: String },

    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("missing API key: set {env_var}")]
    MissingApiKey { env_var: String },
}

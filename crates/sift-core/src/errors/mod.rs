mod embedding_error;
mod generation_error;
mod storage_error;

use std::fmt;

pub use embedding_error::EmbeddingError;
pub use generation_error::GenerationError;
pub use storage_error::StorageError;

/// Result alias used across the workspace.
pub type SiftResult<T> = Result<T, SiftError>;

/// External collaborator a pipeline call depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collaborator {
    Embedding,
    DocumentStore,
    Generation,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Embedding => "embedding",
            Self::DocumentStore => "document store",
            Self::Generation => "generation",
        })
    }
}

/// How an upstream collaborator call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Failed,
    TimedOut,
    Cancelled,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Failed => "failed",
            Self::TimedOut => "timed out",
            Self::Cancelled => "was cancelled",
        })
    }
}

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum SiftError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("upstream {collaborator} call {kind}")]
    UpstreamFailure {
        collaborator: Collaborator,
        kind: FailureKind,
        #[source]
        source: Option<Box<SiftError>>,
    },

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("generation error: {0}")]
    GenerationError(#[from] GenerationError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("config error: {reason}")]
    ConfigError { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl SiftError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Wrap a collaborator error, classifying timeouts.
    pub fn upstream(collaborator: Collaborator, source: SiftError) -> Self {
        if let Self::UpstreamFailure { .. } = source {
            return source;
        }
        let kind = if source.is_timeout() {
            FailureKind::TimedOut
        } else {
            FailureKind::Failed
        };
        Self::UpstreamFailure {
            collaborator,
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// An upstream call that was abandoned before it produced a result.
    pub fn aborted(collaborator: Collaborator, kind: FailureKind) -> Self {
        Self::UpstreamFailure {
            collaborator,
            kind,
            source: None,
        }
    }

    /// Whether this error represents a timeout anywhere in the chain.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::EmbeddingError(EmbeddingError::Timeout { .. }) => true,
            Self::GenerationError(GenerationError::Timeout { .. }) => true,
            Self::UpstreamFailure { kind, .. } => *kind == FailureKind::TimedOut,
            _ => false,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    pub fn is_upstream_failure(&self) -> bool {
        matches!(self, Self::UpstreamFailure { .. })
    }
}

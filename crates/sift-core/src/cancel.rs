//! Caller-supplied cancellation and deadline for one pipeline call.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::errors::{Collaborator, FailureKind, SiftError, SiftResult};

/// Shared cancellation flag with an optional deadline.
///
/// Clones share the flag, so a caller can keep one handle and pass another
/// into the pipeline.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancelToken {
    /// A token that never trips on its own.
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that trips once `timeout` has elapsed from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Some(deadline),
        }
    }

    /// Request cancellation. Visible to every clone.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Time left before the deadline, if one is set.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    /// Fail with an upstream error attributed to `collaborator` if tripped.
    pub fn check(&self, collaborator: Collaborator) -> SiftResult<()> {
        if self.is_cancelled() {
            return Err(SiftError::aborted(collaborator, FailureKind::Cancelled));
        }
        if self.is_expired() {
            return Err(SiftError::aborted(collaborator, FailureKind::TimedOut));
        }
        Ok(())
    }
}

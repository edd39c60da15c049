//! Error types for the analysis core
//!
//! The core never logs or prints; every failure is raised at the point of
//! detection and propagates to the caller of the pipeline. A failed stage
//! aborts the run for that signal, and retries are pointless since the
//! computation is deterministic.

use thiserror::Error;

/// Errors produced by the analysis pipeline.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Caller handed the core unusable data: empty signal, zero-length
    /// averaging window, non-positive sampling frequency.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A stage precondition was violated, e.g. the transform was invoked
    /// with a length that is not a power of two.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Paired sequences disagree on length after folding. Indicates a bug
    /// in the post-processor, not a user error.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
}

impl AnalysisError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }

    pub fn internal(reason: impl Into<String>) -> Self {
        Self::InternalInvariant(reason.into())
    }
}

//! Error types for the backend crate.

use thiserror::Error;

/// Errors produced by numeric backend operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BackendError {
    /// The requested execution provider is not linked into this build.
    #[error("backend not available: {0}")]
    Unavailable(String),

    /// Operand shapes do not line up for the requested operation.
    #[error("operand shape mismatch: expected length {expected}, got {actual}")]
    ShapeMismatch {
        /// Length the operation expected.
        expected: usize,
        /// Length it actually received.
        actual: usize,
    },
}

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

//! Error types for the gate crate.

use thiserror::Error;

/// Errors produced when validating gate matrices.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GateError {
    /// The matrix is not square.
    #[error("gate matrix must be square, got {rows}×{cols}")]
    NotSquare {
        /// Row count of the offending matrix.
        rows: usize,
        /// Column count of the offending matrix.
        cols: usize,
    },

    /// The matrix dimension is not 2^k for some k ≥ 1.
    #[error("gate dimension must be a power of two ≥ 2, got {0}")]
    BadDimension(usize),
}

/// Result type for gate operations.
pub type GateResult<T> = Result<T, GateError>;

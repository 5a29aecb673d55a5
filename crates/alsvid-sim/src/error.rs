//! Error types for the simulation engine.

use alsvid_backend::BackendError;
use thiserror::Error;

/// Errors produced by the simulation engine.
///
/// Every variant is reported synchronously, before any mutation of the
/// state vector; a failed call leaves the simulator exactly as it was.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Register size must be ≥ 1.
    #[error("register must hold at least one qubit, got {0}")]
    InvalidQubitCount(usize),

    /// A qubit index is outside `[0, n)`.
    #[error("qubit index {qubit} out of range for a {n_qubits}-qubit register")]
    QubitOutOfRange {
        /// The offending qubit index.
        qubit: usize,
        /// Number of qubits in the register.
        n_qubits: usize,
    },

    /// A gate matrix has the wrong dimension for the operation.
    #[error("gate has dimension {actual}, expected {expected}")]
    WrongGateShape {
        /// Dimension the operation expected.
        expected: usize,
        /// Dimension it actually received.
        actual: usize,
    },

    /// Controlled-not requires two distinct qubits.
    #[error("control and target are both qubit {0}")]
    ControlEqualsTarget(usize),

    /// A gate parameter must be a finite real scalar.
    #[error("gate parameter must be finite, got {0}")]
    NonFiniteParameter(f64),

    /// The numeric backend failed or is unavailable.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;

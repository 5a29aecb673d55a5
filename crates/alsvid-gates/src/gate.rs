//! The gate matrix type.

use ndarray::Array2;
use num_complex::Complex64;

use crate::error::{GateError, GateResult};

/// A unitary gate acting on k qubits, stored as a dense 2^k × 2^k matrix.
///
/// Unitarity is a contract of the constructors in [`crate::standard`], not a
/// runtime check on the hot path; [`Gate::is_unitary`] exists so callers and
/// tests can verify arbitrary matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct Gate {
    matrix: Array2<Complex64>,
}

impl Gate {
    /// Wrap a matrix as a gate, validating its shape.
    ///
    /// The matrix must be square with dimension 2^k, k ≥ 1. Unitarity is
    /// not checked here.
    pub fn new(matrix: Array2<Complex64>) -> GateResult<Self> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(GateError::NotSquare { rows, cols });
        }
        if rows < 2 || !rows.is_power_of_two() {
            return Err(GateError::BadDimension(rows));
        }
        Ok(Self { matrix })
    }

    pub(crate) fn from_matrix_unchecked(matrix: Array2<Complex64>) -> Self {
        Self { matrix }
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> &Array2<Complex64> {
        &self.matrix
    }

    /// Matrix dimension (2^k for a k-qubit gate).
    pub fn dim(&self) -> usize {
        self.matrix.nrows()
    }

    /// Number of qubits this gate acts on.
    pub fn num_qubits(&self) -> usize {
        self.dim().trailing_zeros() as usize
    }

    /// Check `G† G ≈ I` within `tol` (entrywise).
    pub fn is_unitary(&self, tol: f64) -> bool {
        let dim = self.dim();
        let adjoint = self.matrix.t().mapv(|amp| amp.conj());
        let product = adjoint.dot(&self.matrix);
        let identity = Array2::<Complex64>::eye(dim);
        product
            .iter()
            .zip(identity.iter())
            .all(|(a, b)| (a - b).norm() <= tol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn rejects_non_square() {
        let m = Array2::<Complex64>::zeros((2, 3));
        assert!(matches!(
            Gate::new(m),
            Err(GateError::NotSquare { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn rejects_non_power_of_two() {
        let m = Array2::<Complex64>::zeros((3, 3));
        assert!(matches!(Gate::new(m), Err(GateError::BadDimension(3))));
        let m = Array2::<Complex64>::zeros((1, 1));
        assert!(matches!(Gate::new(m), Err(GateError::BadDimension(1))));
    }

    #[test]
    fn qubit_count_from_dimension() {
        let g = Gate::new(Array2::eye(4)).unwrap();
        assert_eq!(g.dim(), 4);
        assert_eq!(g.num_qubits(), 2);
    }

    #[test]
    fn non_unitary_matrix_is_detected() {
        let m = array![
            [Complex64::new(2.0, 0.0), Complex64::new(0.0, 0.0)],
            [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
        ];
        let g = Gate::new(m).unwrap();
        assert!(!g.is_unitary(1e-9));
    }
}

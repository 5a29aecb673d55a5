//! The numeric backend trait.

use ndarray::{Array1, Array2};
use num_complex::Complex64;

use crate::error::BackendResult;

/// Arithmetic capability the simulation engine is written against.
///
/// The engine never touches ndarray routines directly; everything it needs
/// from a linear-algebra provider — tensor products, dense operator
/// application, elementwise arithmetic, norms, and uniform random samples —
/// goes through this trait, so an execution provider can be swapped without
/// changing gate or measurement logic.
///
/// Implementations must be deterministic given the same operands and the
/// same RNG state.
pub trait NumericBackend: Send {
    /// Human-readable provider name (for logs and diagnostics).
    fn name(&self) -> &str;

    /// Kronecker (tensor) product `a ⊗ b`.
    fn kron(&self, a: &Array2<Complex64>, b: &Array2<Complex64>) -> Array2<Complex64>;

    /// Dense operator application `m · v`.
    ///
    /// Fails with `ShapeMismatch` when the operator's column count does not
    /// equal the vector length.
    fn matvec(&self, m: &Array2<Complex64>, v: &Array1<Complex64>)
    -> BackendResult<Array1<Complex64>>;

    /// Elementwise sum of two equal-length vectors.
    fn add(&self, a: &Array1<Complex64>, b: &Array1<Complex64>)
    -> BackendResult<Array1<Complex64>>;

    /// Elementwise (Hadamard) product of two equal-length vectors.
    fn mul(&self, a: &Array1<Complex64>, b: &Array1<Complex64>)
    -> BackendResult<Array1<Complex64>>;

    /// Euclidean norm `sqrt(Σ |v_i|²)`.
    fn norm(&self, v: &Array1<Complex64>) -> f64;

    /// In-place scalar multiply `v *= factor`.
    fn scale(&self, v: &mut Array1<Complex64>, factor: f64);

    /// One uniform random sample in `[0, 1)`.
    fn uniform(&mut self) -> f64;
}

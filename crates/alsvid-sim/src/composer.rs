//! Operator composition.
//!
//! A single-qubit gate acting on qubit `t` of an n-qubit register is
//! embedded into the full 2^n × 2^n operator as the ordered tensor product
//!
//! ```text
//! U = op(n-1) ⊗ op(n-2) ⊗ … ⊗ op(0),   op(j) = gate if j == t else I
//! ```
//!
//! Under the register convention (qubit j = bit j of the basis-state index,
//! qubit 0 least significant) this places the gate on exactly the right
//! index bit: the leftmost Kronecker factor governs the most significant
//! bit.
//!
//! This construction is O(4^n) in both time and space. That is the point:
//! it is the provably-correct baseline for small registers, and the
//! specialized amplitude-update paths elsewhere in the crate are tested
//! against it rather than trusted on their own.

use ndarray::Array2;
use num_complex::Complex64;

use alsvid_backend::NumericBackend;
use alsvid_gates::{Gate, standard};

/// Embed a single-qubit `gate` on `target` into the full register operator.
///
/// Caller validates `target < n_qubits` and `gate.dim() == 2`.
pub fn embed_single_qubit(
    backend: &dyn NumericBackend,
    gate: &Gate,
    target: usize,
    n_qubits: usize,
) -> Array2<Complex64> {
    debug_assert!(target < n_qubits);
    debug_assert_eq!(gate.dim(), 2);

    let identity = standard::identity();
    let factor = |j: usize| {
        if j == target {
            gate.matrix()
        } else {
            identity.matrix()
        }
    };

    // Fold from qubit n-1 (most significant bit) down to qubit 0.
    let mut full = factor(n_qubits - 1).clone();
    for j in (0..n_qubits - 1).rev() {
        full = backend.kron(&full, factor(j));
    }
    full
}

//! Standard gate constructors.
//!
//! Each constructor is a pure function of its parameters and returns a
//! unitary matrix. The register convention is qubit 0 = least significant
//! bit of the basis-state index; [`cnot`] is fixed to control = qubit 0,
//! target = qubit 1 under that convention.

use ndarray::array;
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

use crate::gate::Gate;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

/// Single-qubit identity.
pub fn identity() -> Gate {
    Gate::from_matrix_unchecked(array![
        [c(1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(1.0, 0.0)],
    ])
}

/// Bit-flip (Pauli X): swaps |0⟩ and |1⟩.
pub fn x() -> Gate {
    Gate::from_matrix_unchecked(array![
        [c(0.0, 0.0), c(1.0, 0.0)],
        [c(1.0, 0.0), c(0.0, 0.0)],
    ])
}

/// Hadamard: maps basis states to equal superpositions.
pub fn h() -> Gate {
    let s = FRAC_1_SQRT_2;
    Gate::from_matrix_unchecked(array![[c(s, 0.0), c(s, 0.0)], [c(s, 0.0), c(-s, 0.0)]])
}

/// Rotation about the X axis by `theta`:
///
/// ```text
/// ⎡ cos(θ/2)    -i·sin(θ/2) ⎤
/// ⎣ -i·sin(θ/2)  cos(θ/2)   ⎦
/// ```
pub fn rx(theta: f64) -> Gate {
    let cos = (theta / 2.0).cos();
    let sin = (theta / 2.0).sin();
    Gate::from_matrix_unchecked(array![
        [c(cos, 0.0), c(0.0, -sin)],
        [c(0.0, -sin), c(cos, 0.0)],
    ])
}

/// Rotation about the Z axis by `theta`: diag(e^{-iθ/2}, e^{iθ/2}).
pub fn rz(theta: f64) -> Gate {
    Gate::from_matrix_unchecked(array![
        [Complex64::from_polar(1.0, -theta / 2.0), c(0.0, 0.0)],
        [c(0.0, 0.0), Complex64::from_polar(1.0, theta / 2.0)],
    ])
}

/// Fixed controlled-not for a two-qubit register, control = qubit 0,
/// target = qubit 1.
///
/// With qubit 0 as the least significant index bit this swaps the
/// amplitudes at indices 1 (|01⟩) and 3 (|11⟩).
pub fn cnot() -> Gate {
    Gate::from_matrix_unchecked(array![
        [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
    ])
}

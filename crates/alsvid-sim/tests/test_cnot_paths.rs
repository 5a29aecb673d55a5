//! Dual-path equivalence tests for controlled-not.
//!
//! The simulator has two CNOT implementations: a dense multiply with the
//! fixed 4×4 matrix (two-qubit register, control 0 → target 1) and a
//! bit-indexed amplitude swap for everything else. Each path is checked
//! here against an independently built dense permutation operator.

use alsvid_gates::standard;
use alsvid_sim::Simulator;
use ndarray::{Array1, Array2};
use num_complex::Complex64;

const TOL: f64 = 1e-12;

/// Dense CNOT operator built from the truth table: when the control bit of
/// the basis index is set, the target bit flips.
fn dense_cnot(n_qubits: usize, control: usize, target: usize) -> Array2<Complex64> {
    let dim = 1 << n_qubits;
    let mut m = Array2::zeros((dim, dim));
    for i in 0..dim {
        let j = if i & (1 << control) != 0 {
            i ^ (1 << target)
        } else {
            i
        };
        m[[j, i]] = Complex64::new(1.0, 0.0);
    }
    m
}

fn assert_amps_eq(actual: &Array1<Complex64>, expected: &Array1<Complex64>) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!((a - e).norm() < TOL, "amplitude mismatch: {a} vs {e}");
    }
}

/// Prepare a 2-qubit simulator in the given basis state.
fn basis_state(index: usize) -> Simulator {
    let mut sim = Simulator::new(2).unwrap();
    for qubit in 0..2 {
        if index & (1 << qubit) != 0 {
            sim.apply_single_qubit_gate(&standard::x(), qubit).unwrap();
        }
    }
    sim
}

#[test]
fn library_matrix_matches_truth_table_operator() {
    assert_eq!(standard::cnot().matrix(), &dense_cnot(2, 0, 1));
}

#[test]
fn fast_path_matches_dense_operator_on_basis_states() {
    let op = dense_cnot(2, 0, 1);
    for index in 0..4 {
        let mut sim = basis_state(index);
        let expected = op.dot(sim.amplitudes());
        sim.apply_cnot(0, 1).unwrap();
        assert_amps_eq(sim.amplitudes(), &expected);
    }
}

#[test]
fn swap_path_matches_dense_operator_on_basis_states() {
    // (control, target) = (1, 0) avoids the fixed-matrix fast path.
    let op = dense_cnot(2, 1, 0);
    for index in 0..4 {
        let mut sim = basis_state(index);
        let expected = op.dot(sim.amplitudes());
        sim.apply_cnot(1, 0).unwrap();
        assert_amps_eq(sim.amplitudes(), &expected);
    }
}

#[test]
fn both_paths_agree_on_a_superposed_input() {
    let prepare = |sim: &mut Simulator| {
        sim.apply_single_qubit_gate(&standard::h(), 0).unwrap();
        sim.apply_param_gate(standard::rx, 0.8, 1).unwrap();
    };

    for (control, target) in [(0, 1), (1, 0)] {
        let mut sim = Simulator::new(2).unwrap();
        prepare(&mut sim);
        let expected = dense_cnot(2, control, target).dot(sim.amplitudes());
        sim.apply_cnot(control, target).unwrap();
        assert_amps_eq(sim.amplitudes(), &expected);
    }
}

#[test]
fn swap_path_matches_dense_operator_on_wider_register() {
    for (control, target) in [(0, 2), (2, 0), (1, 2), (2, 1)] {
        let mut sim = Simulator::new(3).unwrap();
        sim.apply_single_qubit_gate(&standard::h(), 0).unwrap();
        sim.apply_single_qubit_gate(&standard::h(), 2).unwrap();
        sim.apply_param_gate(standard::rz, 1.1, 1).unwrap();

        let expected = dense_cnot(3, control, target).dot(sim.amplitudes());
        sim.apply_cnot(control, target).unwrap();
        assert_amps_eq(sim.amplitudes(), &expected);
    }
}

//! The simulator: state vector, gate application, measurement collapse.

use ndarray::Array1;
use num_complex::Complex64;
use tracing::debug;

use alsvid_backend::{BackendKind, CpuBackend, NumericBackend};
use alsvid_gates::{Gate, standard};

use crate::composer;
use crate::error::{SimError, SimResult};

/// Dense statevector simulator for a fixed-size qubit register.
///
/// The register size is immutable after construction; the state vector is
/// the one piece of mutable state, updated in place by every gate
/// application and measurement. All methods validate their inputs before
/// touching the vector, so a failed call never leaves a partial update.
///
/// Register convention: qubit `j` is bit `j` of the basis-state index
/// (qubit 0 = least significant bit). Memory and the full-operator
/// construction are exponential in the register size; this engine is meant
/// for small registers, not production-scale simulation.
pub struct Simulator {
    /// Number of qubits, fixed at construction.
    n_qubits: usize,
    /// The 2^n complex amplitudes; Euclidean norm 1 after every
    /// completed operation.
    state: Array1<Complex64>,
    /// Numeric execution provider (owns the random source).
    backend: Box<dyn NumericBackend>,
}

impl Simulator {
    /// Create a simulator in the all-zero basis state |0…0⟩ on the default
    /// CPU backend.
    ///
    /// Fails with [`SimError::InvalidQubitCount`] if `n_qubits < 1`.
    pub fn new(n_qubits: usize) -> SimResult<Self> {
        Self::with_backend(n_qubits, Box::new(CpuBackend::new()))
    }

    /// Create a simulator on an explicit backend handle.
    ///
    /// Pair with a seeded backend for deterministic measurement outcomes.
    pub fn with_backend(n_qubits: usize, backend: Box<dyn NumericBackend>) -> SimResult<Self> {
        if n_qubits < 1 {
            return Err(SimError::InvalidQubitCount(n_qubits));
        }
        let mut state = Array1::zeros(1 << n_qubits);
        state[0] = Complex64::new(1.0, 0.0);
        debug!(n_qubits, backend = backend.name(), "simulator created");
        Ok(Self {
            n_qubits,
            state,
            backend,
        })
    }

    /// Create a simulator on the named provider kind.
    ///
    /// An unavailable provider propagates as [`SimError::Backend`]; there
    /// is no silent fallback to the CPU.
    pub fn with_backend_kind(n_qubits: usize, kind: BackendKind) -> SimResult<Self> {
        let backend = alsvid_backend::create(kind)?;
        Self::with_backend(n_qubits, backend)
    }

    /// Number of qubits in the register.
    pub fn num_qubits(&self) -> usize {
        self.n_qubits
    }

    /// Read-only view of the current amplitude vector.
    pub fn amplitudes(&self) -> &Array1<Complex64> {
        &self.state
    }

    /// Probability of each computational basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.state.iter().map(Complex64::norm_sqr).collect()
    }

    fn check_qubit(&self, qubit: usize) -> SimResult<()> {
        if qubit >= self.n_qubits {
            return Err(SimError::QubitOutOfRange {
                qubit,
                n_qubits: self.n_qubits,
            });
        }
        Ok(())
    }

    /// Apply a single-qubit gate to `target`.
    ///
    /// The gate is embedded into the full register operator via the tensor
    /// product composer and multiplied against the state vector.
    pub fn apply_single_qubit_gate(&mut self, gate: &Gate, target: usize) -> SimResult<()> {
        self.check_qubit(target)?;
        if gate.dim() != 2 {
            return Err(SimError::WrongGateShape {
                expected: 2,
                actual: gate.dim(),
            });
        }

        let full = composer::embed_single_qubit(self.backend.as_ref(), gate, target, self.n_qubits);
        self.state = self.backend.matvec(&full, &self.state)?;
        debug!(target, "applied single-qubit gate");
        Ok(())
    }

    /// Materialize a parametrized gate and apply it to `target`.
    ///
    /// Fails with [`SimError::NonFiniteParameter`] if `theta` is NaN or
    /// infinite, before the constructor runs.
    pub fn apply_param_gate(
        &mut self,
        constructor: impl Fn(f64) -> Gate,
        theta: f64,
        target: usize,
    ) -> SimResult<()> {
        if !theta.is_finite() {
            return Err(SimError::NonFiniteParameter(theta));
        }
        self.apply_single_qubit_gate(&constructor(theta), target)
    }

    /// Apply a controlled-not with the given control and target qubits.
    ///
    /// On a two-qubit register with control 0 and target 1 this is a dense
    /// multiply with the fixed CNOT matrix; every other case walks the
    /// basis indices and swaps the amplitude pairs where the control bit is
    /// set. The two paths are verified equivalent by test.
    pub fn apply_cnot(&mut self, control: usize, target: usize) -> SimResult<()> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(SimError::ControlEqualsTarget(control));
        }

        if self.n_qubits == 2 && control == 0 && target == 1 {
            // The fixed matrix is defined for exactly this orientation.
            let cnot = standard::cnot();
            self.state = self.backend.matvec(cnot.matrix(), &self.state)?;
            debug!(control, target, "applied CNOT (dense fast path)");
            return Ok(());
        }

        let ctrl_mask = 1usize << control;
        let tgt_mask = 1usize << target;
        for i in 0..self.state.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                self.state.swap(i, i | tgt_mask);
            }
        }
        debug!(control, target, "applied CNOT (bit-swap path)");
        Ok(())
    }

    /// Projectively measure one qubit, collapsing the state.
    ///
    /// Returns the observed outcome (0 or 1). The mutation is irreversible:
    /// amplitudes on the unobserved branch are zeroed and the rest is
    /// renormalized, so an immediate second measurement of the same qubit
    /// repeats the outcome.
    ///
    /// If the sampled branch carried (numerically) zero probability the
    /// collapsed norm can be exactly 0.0; the renormalization is then
    /// skipped and the zero vector remains — a defined outcome, not a
    /// fault.
    pub fn measure(&mut self, qubit: usize) -> SimResult<u8> {
        self.check_qubit(qubit)?;

        let mask = 1usize << qubit;
        let p_zero: f64 = self
            .state
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask == 0)
            .map(|(_, amp)| amp.norm_sqr())
            .sum();

        let r = self.backend.uniform();
        let outcome: u8 = if r < p_zero { 0 } else { 1 };

        for (i, amp) in self.state.iter_mut().enumerate() {
            let bit = ((i & mask) != 0) as u8;
            if bit != outcome {
                *amp = Complex64::new(0.0, 0.0);
            }
        }

        let norm = self.backend.norm(&self.state);
        if norm > 0.0 {
            self.backend.scale(&mut self.state, 1.0 / norm);
        }

        debug!(qubit, outcome, p_zero, "measured qubit");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_register() {
        assert!(matches!(Simulator::new(0), Err(SimError::InvalidQubitCount(0))));
    }

    #[test]
    fn rejects_out_of_range_target() {
        let mut sim = Simulator::new(2).unwrap();
        let err = sim.apply_single_qubit_gate(&standard::x(), 2).unwrap_err();
        assert!(matches!(
            err,
            SimError::QubitOutOfRange {
                qubit: 2,
                n_qubits: 2
            }
        ));
    }

    #[test]
    fn rejects_two_qubit_gate_on_single_qubit_path() {
        let mut sim = Simulator::new(2).unwrap();
        let err = sim.apply_single_qubit_gate(&standard::cnot(), 0).unwrap_err();
        assert!(matches!(
            err,
            SimError::WrongGateShape {
                expected: 2,
                actual: 4
            }
        ));
    }

    #[test]
    fn rejects_equal_control_and_target() {
        let mut sim = Simulator::new(2).unwrap();
        assert!(matches!(
            sim.apply_cnot(1, 1),
            Err(SimError::ControlEqualsTarget(1))
        ));
    }

    #[test]
    fn rejects_non_finite_parameter() {
        let mut sim = Simulator::new(1).unwrap();
        assert!(matches!(
            sim.apply_param_gate(standard::rx, f64::NAN, 0),
            Err(SimError::NonFiniteParameter(_))
        ));
        assert!(matches!(
            sim.apply_param_gate(standard::rz, f64::INFINITY, 0),
            Err(SimError::NonFiniteParameter(_))
        ));
    }

    #[test]
    fn failed_call_leaves_state_untouched() {
        let mut sim = Simulator::new(2).unwrap();
        sim.apply_single_qubit_gate(&standard::h(), 0).unwrap();
        let before = sim.amplitudes().clone();

        assert!(sim.apply_cnot(0, 5).is_err());
        assert!(sim.apply_single_qubit_gate(&standard::x(), 9).is_err());
        assert_eq!(sim.amplitudes(), &before);
    }
}

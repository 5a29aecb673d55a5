//! `alsvid-sim` — dense statevector simulation of a closed qubit register.
//!
//! The engine holds the 2^n complex amplitude vector of an n-qubit
//! register, applies unitary gates to it, and simulates projective
//! measurement with wavefunction collapse:
//!
//! - single-qubit gates are embedded into the full register operator by
//!   ordered tensor product ([`composer`]) and applied as a dense multiply
//! - controlled-not takes a bit-indexed amplitude-swap path, verified
//!   equivalent to the dense construction by test
//! - measurement samples one uniform draw from the backend's random
//!   source, collapses the disagreeing branch, and renormalizes
//!
//! All arithmetic goes through the `alsvid-backend` provider trait, so the
//! execution substrate can be swapped without touching gate or measurement
//! logic.
//!
//! # Quick start
//!
//! ```rust
//! use alsvid_gates::standard;
//! use alsvid_sim::Simulator;
//!
//! // Bell pair: H on qubit 0, then CNOT 0 → 1.
//! let mut sim = Simulator::new(2)?;
//! sim.apply_single_qubit_gate(&standard::h(), 0)?;
//! sim.apply_cnot(0, 1)?;
//!
//! let amps = sim.amplitudes();
//! assert!((amps[0].norm_sqr() - 0.5).abs() < 1e-9);
//! assert!((amps[3].norm_sqr() - 0.5).abs() < 1e-9);
//! # Ok::<(), alsvid_sim::SimError>(())
//! ```

pub mod composer;
pub mod error;
pub mod simulator;

pub use error::{SimError, SimResult};
pub use simulator::Simulator;

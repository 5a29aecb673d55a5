//! `alsvid-gates` — unitary gate library for the Alsvid simulator.
//!
//! Gates are dense complex matrices wrapped in [`Gate`], built by the pure
//! constructors in [`standard`]: bit-flip [`standard::x`], Hadamard
//! [`standard::h`], the parametrized rotations [`standard::rx`] /
//! [`standard::rz`], and the fixed two-qubit [`standard::cnot`].
//!
//! Every constructor returns a unitary matrix, and `rx(0)` / `rz(0)` equal
//! the identity within floating tolerance — both contracts are covered by
//! this crate's tests.

pub mod error;
pub mod gate;
pub mod standard;

pub use error::{GateError, GateResult};
pub use gate::Gate;

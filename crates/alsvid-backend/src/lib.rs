//! `alsvid-backend` — numeric execution providers for the Alsvid simulator.
//!
//! The simulation engine is written against the [`NumericBackend`] trait
//! rather than a concrete linear-algebra implementation. This crate supplies
//! the trait, the default CPU provider ([`CpuBackend`]), and provider
//! selection ([`BackendKind`] / [`create`]).
//!
//! Backends own their random source, so a seeded backend makes an entire
//! simulation run — including measurement outcomes — reproducible:
//!
//! ```rust
//! use alsvid_backend::{CpuBackend, NumericBackend};
//!
//! let mut a = CpuBackend::seeded(7);
//! let mut b = CpuBackend::seeded(7);
//! assert_eq!(a.uniform(), b.uniform());
//! ```

pub mod backend;
pub mod cpu;
pub mod error;
pub mod registry;

pub use backend::NumericBackend;
pub use cpu::CpuBackend;
pub use error::{BackendError, BackendResult};
pub use registry::{BackendKind, create, create_seeded};

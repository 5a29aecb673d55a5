//! Provider selection.
//!
//! The simulator holds an explicit backend handle; there is no process-wide
//! device state. Callers pick a [`BackendKind`] once, at construction, and
//! an unavailable provider is a hard error for them to handle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::backend::NumericBackend;
use crate::cpu::CpuBackend;
use crate::error::{BackendError, BackendResult};

/// Known execution providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Plain ndarray on the host CPU.
    Cpu,
    /// Reserved for an accelerator provider; none is linked in this build.
    Accelerator,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Cpu => write!(f, "cpu"),
            BackendKind::Accelerator => write!(f, "accelerator"),
        }
    }
}

impl FromStr for BackendKind {
    type Err = BackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cpu" => Ok(BackendKind::Cpu),
            "accelerator" => Ok(BackendKind::Accelerator),
            other => Err(BackendError::Unavailable(format!(
                "unknown backend '{other}'"
            ))),
        }
    }
}

/// Instantiate a provider with an entropy-seeded random source.
pub fn create(kind: BackendKind) -> BackendResult<Box<dyn NumericBackend>> {
    debug!(%kind, "selecting numeric backend");
    match kind {
        BackendKind::Cpu => Ok(Box::new(CpuBackend::new())),
        BackendKind::Accelerator => Err(BackendError::Unavailable(
            "no accelerator provider is linked into this build".into(),
        )),
    }
}

/// Instantiate a provider with a seeded random source.
pub fn create_seeded(kind: BackendKind, seed: u64) -> BackendResult<Box<dyn NumericBackend>> {
    debug!(%kind, seed, "selecting numeric backend");
    match kind {
        BackendKind::Cpu => Ok(Box::new(CpuBackend::seeded(seed))),
        BackendKind::Accelerator => Err(BackendError::Unavailable(
            "no accelerator provider is linked into this build".into(),
        )),
    }
}

//! CPU execution provider backed by ndarray.

use ndarray::{Array1, Array2, linalg};
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::backend::NumericBackend;
use crate::error::{BackendError, BackendResult};

/// Default CPU provider.
///
/// Owns its random source so that measurement sampling is reproducible:
/// construct via [`CpuBackend::seeded`] for deterministic tests, or
/// [`CpuBackend::new`] for an entropy-seeded source.
pub struct CpuBackend {
    rng: StdRng,
}

impl CpuBackend {
    /// Create a CPU backend with an entropy-seeded random source.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a CPU backend whose random source is seeded for reproducibility.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn check_len(expected: usize, actual: usize) -> BackendResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(BackendError::ShapeMismatch { expected, actual })
    }
}

impl NumericBackend for CpuBackend {
    fn name(&self) -> &str {
        "cpu"
    }

    fn kron(&self, a: &Array2<Complex64>, b: &Array2<Complex64>) -> Array2<Complex64> {
        linalg::kron(a, b)
    }

    fn matvec(
        &self,
        m: &Array2<Complex64>,
        v: &Array1<Complex64>,
    ) -> BackendResult<Array1<Complex64>> {
        check_len(m.ncols(), v.len())?;
        Ok(m.dot(v))
    }

    fn add(
        &self,
        a: &Array1<Complex64>,
        b: &Array1<Complex64>,
    ) -> BackendResult<Array1<Complex64>> {
        check_len(a.len(), b.len())?;
        Ok(a + b)
    }

    fn mul(
        &self,
        a: &Array1<Complex64>,
        b: &Array1<Complex64>,
    ) -> BackendResult<Array1<Complex64>> {
        check_len(a.len(), b.len())?;
        Ok(a * b)
    }

    fn norm(&self, v: &Array1<Complex64>) -> f64 {
        v.iter().map(Complex64::norm_sqr).sum::<f64>().sqrt()
    }

    fn scale(&self, v: &mut Array1<Complex64>, factor: f64) {
        v.mapv_inplace(|amp| amp * factor);
    }

    fn uniform(&mut self) -> f64 {
        self.rng.r#gen()
    }
}

//! PyO3 wrapper for Rand

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::config::StreamConfig;
use crate::rng::Rand;

/// Python wrapper for the Rust generator
///
/// # Example (from Python)
///
/// ```python
/// from seeded_rand import Rand
///
/// rng = Rand(2468)
/// lat = rng.next_double() * 180.0 - 90.0
/// blob = rng.fill(32)
/// ```
#[pyclass(name = "Rand")]
pub struct PyRand {
    inner: Rand,
}

#[pymethods]
impl PyRand {
    #[new]
    fn new(seed: u64) -> Self {
        Self {
            inner: Rand::seed(seed),
        }
    }

    /// Create a generator from a JSON stream config
    ///
    /// Raises ValueError if the config does not parse.
    #[staticmethod]
    fn from_config(config_json: &str) -> PyResult<Self> {
        let config = StreamConfig::from_json(config_json)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self {
            inner: config.build(),
        })
    }

    fn next_uint32(&mut self) -> u32 {
        self.inner.next_uint32()
    }

    fn next_uint64(&mut self) -> u64 {
        self.inner.next_uint64()
    }

    fn next_int63(&mut self) -> i64 {
        self.inner.next_int63()
    }

    fn next_int31(&mut self) -> i32 {
        self.inner.next_int31()
    }

    fn next_double(&mut self) -> f64 {
        self.inner.next_double()
    }

    fn next_float(&mut self) -> f32 {
        self.inner.next_float()
    }

    /// Random integer in [min, max); raises ValueError if min >= max
    fn range(&mut self, min: i64, max: i64) -> PyResult<i64> {
        self.inner
            .range(min, max)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Return `length` random bytes (native byte order)
    fn fill<'py>(&mut self, py: Python<'py>, length: usize) -> Bound<'py, PyBytes> {
        let mut buf = vec![0u8; length];
        self.inner.fill(&mut buf);
        PyBytes::new_bound(py, &buf)
    }

    fn next_uuid(&mut self) -> String {
        self.inner.next_uuid().to_string()
    }
}

//! Seeded Rand - deterministic pseudo-random streams
//!
//! Fast, reproducible, non-cryptographic randomness from a 64-bit seed.
//!
//! # Architecture
//!
//! - **rng**: The PCG32 generator and its derived outputs
//! - **config**: Stream configuration (seed, fill byte order)
//!
//! # Critical Invariants
//!
//! 1. Same seed → bit-identical integer and float sequences on every platform
//! 2. Generator state is opaque; only the output sequence is a contract
//! 3. NOT for security: outputs are predictable from a few draws

// Module declarations
pub mod config;
pub mod rng;

// Re-exports for convenience
pub use config::{ConfigError, StreamConfig};
pub use rng::{ByteOrder, Rand, RangeError};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn seeded_rand(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::rand::PyRand>()?;
    Ok(())
}

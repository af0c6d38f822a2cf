//! Deterministic random number generation
//!
//! Uses the PCG32 (XSH RR) algorithm for fast, reproducible streams.
//! CRITICAL: output sequences are a compatibility contract. Changing the
//! step function or the number of steps an output consumes breaks every
//! stored seed.

mod bounded;
mod bytes;
mod pcg32;

pub use bounded::RangeError;
pub use bytes::ByteOrder;
pub use pcg32::Rand;

//! Bounded integer draws
//!
//! Uniform integers in a half-open range, without modulo bias. Draws whose
//! value falls below `2^64 mod span` are rejected and redrawn, so every
//! residue is equally likely.

use super::Rand;
use thiserror::Error;

/// Errors from bounded draws
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("Bound must be greater than zero")]
    ZeroBound,

    #[error("Empty range: min {min} must be less than max {max}")]
    EmptyRange { min: i64, max: i64 },
}

impl Rand {
    /// Generate a random value in `[0, bound)`
    ///
    /// Consumes one [`Rand::next_uint64`] per attempt.
    ///
    /// # Errors
    /// Returns [`RangeError::ZeroBound`] if `bound == 0`.
    pub fn below(&mut self, bound: u64) -> Result<u64, RangeError> {
        if bound == 0 {
            return Err(RangeError::ZeroBound);
        }

        let threshold = bound.wrapping_neg() % bound;
        loop {
            let value = self.next_uint64();
            if value >= threshold {
                return Ok(value % bound);
            }
        }
    }

    /// Generate a random value in range `[min, max)`
    ///
    /// # Errors
    /// Returns [`RangeError::EmptyRange`] if `min >= max`.
    ///
    /// # Example
    /// ```
    /// use seeded_rand::Rand;
    ///
    /// let mut rng = Rand::seed(12345);
    /// let amount = rng.range(10_000, 100_000).unwrap();
    /// assert!((10_000..100_000).contains(&amount));
    /// ```
    pub fn range(&mut self, min: i64, max: i64) -> Result<i64, RangeError> {
        if min >= max {
            return Err(RangeError::EmptyRange { min, max });
        }

        // Two's complement: the difference fits in u64 for any min < max
        let span = max.wrapping_sub(min) as u64;
        let offset = self.below(span)?;
        Ok(min.wrapping_add(offset as i64))
    }
}

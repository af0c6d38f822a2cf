//! Stream configuration
//!
//! Describes how a stream is created: the seed, and the byte order used
//! when filling buffers. Loaded from JSON.

use crate::rng::{ByteOrder, Rand};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading a configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid config: {0}")]
    Parse(String),
}

/// Configuration for a random stream
///
/// # Example
/// ```
/// use seeded_rand::{ByteOrder, StreamConfig};
///
/// let config = StreamConfig::from_json(r#"{"seed": 12345, "byte_order": "little"}"#).unwrap();
/// assert_eq!(config.byte_order, ByteOrder::Little);
///
/// let mut rng = config.build();
/// let mut buf = [0u8; 16];
/// config.fill(&mut rng, &mut buf);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StreamConfig {
    /// Seed passed to [`Rand::seed`]
    pub seed: u64,

    /// Layout of 8-byte groups in buffer fills
    #[serde(default)]
    pub byte_order: ByteOrder,
}

impl StreamConfig {
    /// Config with native byte order
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            byte_order: ByteOrder::Native,
        }
    }

    /// Parse a config from JSON
    ///
    /// Unknown fields are rejected so a misspelled `byte_order` does not
    /// silently fall back to native order.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Create a fresh generator for this config
    pub fn build(&self) -> Rand {
        log::debug!(
            "seeding stream: seed={}, byte_order={:?}",
            self.seed,
            self.byte_order
        );
        Rand::seed(self.seed)
    }

    /// Fill `buf` using the configured byte order
    pub fn fill(&self, rng: &mut Rand, buf: &mut [u8]) {
        rng.fill_ordered(buf, self.byte_order);
    }
}

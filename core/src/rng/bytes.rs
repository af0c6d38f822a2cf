//! Byte-oriented outputs
//!
//! Buffer fills with an explicit byte order, and random identifiers.

use super::Rand;
use serde::{Deserialize, Serialize};
use uuid::{Builder, Uuid};

/// Byte order used to lay out each 8-byte group of a buffer fill
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Host byte order. Matches [`Rand::fill`].
    #[default]
    Native,
    /// Little-endian on every host
    Little,
    /// Big-endian on every host
    Big,
}

impl ByteOrder {
    fn encode(self, value: u64) -> [u8; 8] {
        match self {
            ByteOrder::Native => value.to_ne_bytes(),
            ByteOrder::Little => value.to_le_bytes(),
            ByteOrder::Big => value.to_be_bytes(),
        }
    }
}

impl Rand {
    /// Fill `buf` with random bytes using a fixed byte order
    ///
    /// Consumes the same draws as [`Rand::fill`]; only the layout of each
    /// 8-byte group differs. With [`ByteOrder::Little`] or
    /// [`ByteOrder::Big`] the bytes are identical on every platform.
    pub fn fill_ordered(&mut self, buf: &mut [u8], order: ByteOrder) {
        let mut chunks = buf.chunks_exact_mut(8);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&order.encode(self.next_uint64()));
        }
        for byte in chunks.into_remainder() {
            *byte = self.next_uint32() as u8;
        }
    }

    /// Generate a random version-4 UUID
    ///
    /// Uses two [`Rand::next_uint64`] draws, the first forming the high 64
    /// bits. The result is reproducible from the seed on any platform.
    ///
    /// # Example
    /// ```
    /// use seeded_rand::Rand;
    ///
    /// let mut rng = Rand::seed(2010219);
    /// let id = rng.next_uuid();
    /// assert_eq!(id.get_version_num(), 4);
    /// ```
    pub fn next_uuid(&mut self) -> Uuid {
        let hi = self.next_uint64() as u128;
        let lo = self.next_uint64() as u128;
        let bytes = ((hi << 64) | lo).to_be_bytes();
        Builder::from_random_bytes(bytes).into_uuid()
    }
}

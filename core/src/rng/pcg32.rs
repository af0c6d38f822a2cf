//! PCG32 (XSH RR) random number generator
//!
//! A small, fast PRNG with a single 64-bit state word and 32-bit output.
//!
//! # Algorithm
//!
//! Each step advances the state with a 64-bit LCG
//! (`state * 6364136223846793005 + 1`, wrapping) and derives the output
//! from the *previous* state with an xorshift followed by a data-dependent
//! rotation. Every wider output is built from whole 32-bit steps.
//!
//! # Determinism
//!
//! Same seed → same sequence, on every platform. The integer and float
//! outputs are bit-exact across architectures; only [`Rand::fill`] depends
//! on the host byte order (see [`Rand::fill_ordered`] for a fixed order).
//!
//! NOT cryptographically secure. Never use it where an adversary must not
//! predict the output.

const MULTIPLIER: u64 = 6364136223846793005;
const INCREMENT: u64 = 1;

/// 2^63 as an f64, the divisor mapping a 63-bit integer into [0, 1].
const INT63_SCALE: f64 = (1u64 << 63) as f64;

/// Deterministic pseudo-random number generator
///
/// # Example
/// ```
/// use seeded_rand::Rand;
///
/// let mut rng = Rand::seed(2010219);
/// assert_eq!(rng.next_uint32(), 2424192242);
///
/// let p = rng.next_double();
/// assert!((0.0..1.0).contains(&p));
/// ```
#[derive(Debug, Clone)]
pub struct Rand {
    /// Internal state (64-bit). Opaque: only the output sequence is stable.
    state: u64,
}

impl Rand {
    /// Create a new generator from a seed
    ///
    /// Any value is accepted, including 0. The state is advanced once
    /// before returning so the first output is not a direct transform of
    /// the raw seed.
    pub fn seed(seed: u64) -> Self {
        let mut rand = Self { state: seed };
        rand.step();
        rand
    }

    /// Advance the state and return the output for the old state.
    #[inline]
    fn step(&mut self) -> u32 {
        let old = self.state;
        self.state = old.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);

        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Generate the next 32-bit value (one step)
    pub fn next_uint32(&mut self) -> u32 {
        self.step()
    }

    /// Generate the next 64-bit value (two steps)
    ///
    /// The first 32-bit draw becomes the high half.
    pub fn next_uint64(&mut self) -> u64 {
        let hi = self.next_uint32() as u64;
        let lo = self.next_uint32() as u64;
        (hi << 32) | lo
    }

    /// Generate a non-negative 63-bit integer in `[0, 2^63 - 1]`
    pub fn next_int63(&mut self) -> i64 {
        (self.next_uint64() >> 1) as i64
    }

    /// Generate a non-negative 31-bit integer in `[0, 2^31 - 1]`
    pub fn next_int31(&mut self) -> i32 {
        (self.next_uint32() >> 1) as i32
    }

    /// Generate a random f64 in range [0.0, 1.0)
    ///
    /// Draws `next_int63() / 2^63`. Inputs near 2^63 round up to exactly
    /// 1.0; those draws are discarded and another is taken, so this call
    /// occasionally consumes more than two steps.
    ///
    /// # Example
    /// ```
    /// use seeded_rand::Rand;
    ///
    /// let mut rng = Rand::seed(2468);
    /// let lat = rng.next_double() * 180.0 - 90.0;
    /// let lon = rng.next_double() * 360.0 - 180.0;
    /// assert!((-90.0..90.0).contains(&lat));
    /// assert!((-180.0..180.0).contains(&lon));
    /// ```
    pub fn next_double(&mut self) -> f64 {
        loop {
            let f = self.next_int63() as f64 / INT63_SCALE;
            if f < 1.0 {
                return f;
            }
        }
    }

    /// Generate a random f32 in range [0.0, 1.0)
    ///
    /// Narrows [`Rand::next_double`]; values that round up to 1.0 in single
    /// precision are redrawn.
    pub fn next_float(&mut self) -> f32 {
        loop {
            let f = self.next_double() as f32;
            if f < 1.0 {
                return f;
            }
        }
    }

    /// Fill `buf` with random bytes
    ///
    /// Full 8-byte groups come from [`Rand::next_uint64`] written in the
    /// host's native byte order. Each of the trailing 0-7 bytes is the low
    /// byte of one [`Rand::next_uint32`].
    ///
    /// Buffer contents are only reproducible across hosts that share a
    /// byte order. Use [`Rand::fill_ordered`] with an explicit order for
    /// portable output.
    pub fn fill(&mut self, buf: &mut [u8]) {
        let mut chunks = buf.chunks_exact_mut(8);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next_uint64().to_ne_bytes());
        }
        for byte in chunks.into_remainder() {
            *byte = self.next_uint32() as u8;
        }
    }
}

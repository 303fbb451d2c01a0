//! Bit-exact port of the `java.util.Random` linear congruential generator.
//!
//! The bedrock rule is defined in terms of this generator's exact output
//! sequence, so every draw (including the ones whose values are discarded)
//! must reproduce its state update and extraction formulas.

use rand::RngCore;

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const ADDEND: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// `2^-53`, the spacing of doubles produced by [`JavaRandom::next_double`].
const DOUBLE_UNIT: f64 = 1.0 / (1_u64 << 53) as f64;

/// `2^-24`, the spacing of floats produced by [`JavaRandom::next_float`].
const FLOAT_UNIT: f32 = 1.0 / (1_u32 << 24) as f32;

/// 48-bit linear congruential generator compatible with `java.util.Random`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JavaRandom {
    state: u64,
}

impl JavaRandom {
    /// Create a generator seeded exactly like `new Random(seed)`.
    pub fn new(seed: i64) -> Self {
        Self {
            state: scramble(seed),
        }
    }

    /// Reset the generator as `Random::setSeed` does.
    pub fn set_seed(&mut self, seed: i64) {
        self.state = scramble(seed);
    }

    /// Advance the state and return the top `bits` bits (1..=32) as a signed int.
    #[inline]
    fn next(&mut self, bits: u32) -> i32 {
        debug_assert!((1..=32).contains(&bits));
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(ADDEND)
            & MASK;
        (self.state >> (48 - bits)) as i32
    }

    /// Uniform `i32` over the full range.
    pub fn next_int(&mut self) -> i32 {
        self.next(32)
    }

    /// Uniform `i32` in `0..bound`.
    ///
    /// Uses the `java.util.Random` rejection scheme rather than a plain modulo, so
    /// the number of state advances per call matches it exactly.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is not positive.
    pub fn next_int_bounded(&mut self, bound: i32) -> i32 {
        assert!(bound > 0, "bound must be positive, got {bound}");

        if bound & bound.wrapping_neg() == bound {
            // Power of two: take the high bits.
            return ((i64::from(bound) * i64::from(self.next(31))) >> 31) as i32;
        }

        loop {
            let bits = self.next(31);
            let val = bits % bound;
            if bits.wrapping_sub(val).wrapping_add(bound - 1) >= 0 {
                return val;
            }
        }
    }

    /// Uniform `i64`, built from two 32-bit draws.
    pub fn next_long(&mut self) -> i64 {
        let hi = i64::from(self.next(32));
        let lo = i64::from(self.next(32));
        (hi << 32).wrapping_add(lo)
    }

    /// Uniform boolean.
    pub fn next_bool(&mut self) -> bool {
        self.next(1) != 0
    }

    /// Uniform `f32` in `[0, 1)` with 24 bits of precision.
    pub fn next_float(&mut self) -> f32 {
        self.next(24) as f32 * FLOAT_UNIT
    }

    /// Uniform `f64` in `[0, 1)` with 53 bits of precision.
    pub fn next_double(&mut self) -> f64 {
        let hi = i64::from(self.next(26));
        let lo = i64::from(self.next(27));
        ((hi << 27) + lo) as f64 * DOUBLE_UNIT
    }

    /// Fill `dest` with random bytes, four per `next_int`, low byte first.
    pub fn next_bytes(&mut self, dest: &mut [u8]) {
        for word in dest.chunks_mut(4) {
            let rnd = self.next_int() as u32;
            for (i, byte) in word.iter_mut().enumerate() {
                *byte = (rnd >> (8 * i)) as u8;
            }
        }
    }
}

#[inline]
fn scramble(seed: i64) -> u64 {
    (seed as u64 ^ MULTIPLIER) & MASK
}

impl RngCore for JavaRandom {
    fn next_u32(&mut self) -> u32 {
        self.next_int() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_long() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.next_bytes(dest);
    }
}

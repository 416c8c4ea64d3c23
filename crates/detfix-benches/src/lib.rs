// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared input generators for the detfix benchmarks.

use detfix::{Scalar128, Scalar64};

/// Deterministic xorshift64* stream; benchmarks must not depend on OS entropy.
#[derive(Debug, Clone)]
pub struct InputStream {
    state: u64,
}

impl InputStream {
    /// Starts a stream from a non-zero seed (zero is remapped).
    pub const fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform Q63.64 value in `[-bound, bound)` for an integer `bound`.
    pub fn scalar128(&mut self, bound: i64) -> Scalar128 {
        let span = Scalar128::from(bound) * Scalar128::TWO;
        let unit = Scalar128::from_words(0, self.next_u64());
        unit * span - Scalar128::from(bound)
    }

    /// Uniform Q31.32 value in `[-bound, bound)`.
    pub fn scalar64(&mut self, bound: i64) -> Scalar64 {
        self.scalar128(bound).to_scalar64()
    }

    /// `len` values from [`InputStream::scalar128`].
    pub fn batch128(&mut self, len: usize, bound: i64) -> Vec<Scalar128> {
        (0..len).map(|_| self.scalar128(bound)).collect()
    }

    /// `len` values from [`InputStream::scalar64`].
    pub fn batch64(&mut self, len: usize, bound: i64) -> Vec<Scalar64> {
        (0..len).map(|_| self.scalar64(bound)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_is_reproducible_and_bounded() {
        let a = InputStream::new(7).batch128(64, 10);
        let b = InputStream::new(7).batch128(64, 10);
        assert_eq!(a, b);
        let bound = Scalar128::from(10);
        assert!(a.iter().all(|x| *x >= -bound && *x < bound));
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Q63.128 guard-precision scalar used inside the math kernel.
//!
//! Three 64-bit words: `hi` carries the signed integer part, `lo` and `oo`
//! the two fractional words. Arithmetic wraps modulo 2^192 and carries are
//! propagated explicitly word by word. Multiplication truncates toward zero on
//! the magnitude; the kernel widens every public input to this type, runs its
//! tables here, and narrows once at the end.

use core::cmp::Ordering;
use core::ops::{Add, BitAnd, Mul, Neg, Shl, Shr, Sub};

use crate::fp128::Scalar128;
use crate::wide::mul_limbs;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) struct Scalar192 {
    hi: u64,
    lo: u64,
    oo: u64,
}

impl Scalar192 {
    pub(crate) const ZERO: Self = Self::from_words(0, 0, 0);
    pub(crate) const ONE: Self = Self::from_words(1, 0, 0);
    pub(crate) const TWO: Self = Self::from_words(2, 0, 0);
    pub(crate) const HALF: Self = Self::from_words(0, 1 << 63, 0);
    pub(crate) const MAX: Self = Self::from_words(i64::MAX as u64, u64::MAX, u64::MAX);
    pub(crate) const MIN: Self = Self::from_words(i64::MIN as u64, 0, 0);

    pub(crate) const fn from_words(hi: u64, lo: u64, oo: u64) -> Self {
        Self { hi, lo, oo }
    }

    /// Table constructor: the integer word is written as a signed value.
    pub(crate) const fn from_signed_words(hi: i64, lo: u64, oo: u64) -> Self {
        Self::from_words(hi as u64, lo, oo)
    }

    pub(crate) const fn from_int(value: i64) -> Self {
        Self::from_words(value as u64, 0, 0)
    }

    pub(crate) const fn is_negative(self) -> bool {
        (self.hi as i64) < 0
    }

    /// Integer part, rounded toward negative infinity.
    pub(crate) const fn floor_int(self) -> i64 {
        self.hi as i64
    }

    /// Fractional words only, always in `[0, 1)`.
    pub(crate) const fn fraction(self) -> Self {
        Self::from_words(0, self.lo, self.oo)
    }

    /// Top fractional bits as a segment index: `floor(self * 2^bits)`.
    pub(crate) const fn segment(self, bits: u32) -> u64 {
        (self.hi << bits) | (self.lo >> (64 - bits))
    }

    /// Magnitude, with `MIN` clamped to `MAX` so the result is never negative.
    pub(crate) fn abs_saturating(self) -> Self {
        if self == Self::MIN {
            Self::MAX
        } else if self.is_negative() {
            -self
        } else {
            self
        }
    }

    /// Leading zero count across all 192 bits.
    pub(crate) const fn leading_zeros(self) -> u32 {
        if self.hi != 0 {
            self.hi.leading_zeros()
        } else if self.lo != 0 {
            64 + self.lo.leading_zeros()
        } else {
            128 + self.oo.leading_zeros()
        }
    }

    pub(crate) const fn widen(value: Scalar128) -> Self {
        Self::from_words(value.hi(), value.lo(), 0)
    }

    /// Drops the guard word (truncation toward negative infinity).
    pub(crate) const fn narrow(self) -> Scalar128 {
        Scalar128::from_words(self.hi, self.lo)
    }

    /// Logical right shift; only meaningful for magnitudes.
    pub(crate) fn shr_logical(self, shift: u32) -> Self {
        self.shift_right(shift, 0)
    }

    const fn limbs(self) -> [u64; 3] {
        [self.oo, self.lo, self.hi]
    }

    const fn from_limbs(limbs: [u64; 3]) -> Self {
        Self::from_words(limbs[2], limbs[1], limbs[0])
    }

    fn shift_right(self, shift: u32, fill: u64) -> Self {
        if shift >= 192 {
            return Self::from_limbs([fill; 3]);
        }
        let limbs = self.limbs();
        let word = |i: usize| if i < 3 { limbs[i] } else { fill };
        let skip = (shift / 64) as usize;
        let bits = shift % 64;
        let mut out = [0_u64; 3];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = word(i + skip) >> bits;
            if bits != 0 {
                *slot |= word(i + skip + 1) << (64 - bits);
            }
        }
        Self::from_limbs(out)
    }

    /// Unsigned magnitude limbs; `MIN` maps to `2^191` as expected.
    fn magnitude_limbs(self) -> [u64; 3] {
        if self.is_negative() {
            (-self).limbs()
        } else {
            self.limbs()
        }
    }

    /// Product magnitude as Q126.256 limbs, plus the sign of the result.
    fn mul_magnitude(self, rhs: Self) -> ([u64; 6], bool) {
        let negative = self.is_negative() != rhs.is_negative();
        let mut product = [0_u64; 6];
        mul_limbs(&self.magnitude_limbs(), &rhs.magnitude_limbs(), &mut product);
        (product, negative)
    }

    /// Keeps bits 128..320 of the magnitude product and reapplies the sign.
    fn from_product(product: &[u64; 6], negative: bool) -> Self {
        let out = Self::from_limbs([product[2], product[3], product[4]]);
        if negative {
            -out
        } else {
            out
        }
    }

    /// Multiplication clamping to `MIN`/`MAX` when the magnitude reaches 2^63.
    pub(crate) fn saturating_mul(self, rhs: Self) -> Self {
        let (product, negative) = self.mul_magnitude(rhs);
        if product[5] != 0 || product[4] >> 63 != 0 {
            return if negative { Self::MIN } else { Self::MAX };
        }
        Self::from_product(&product, negative)
    }

    #[cfg(test)]
    pub(crate) fn to_f64(self) -> f64 {
        let scale = 2.0_f64.powi(64);
        (self.hi as i64) as f64 + self.lo as f64 / scale + self.oo as f64 / (scale * scale)
    }
}

impl Ord for Scalar192 {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.hi as i64)
            .cmp(&(other.hi as i64))
            .then(self.lo.cmp(&other.lo))
            .then(self.oo.cmp(&other.oo))
    }
}

impl PartialOrd for Scalar192 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Scalar192 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let (oo, carry_oo) = self.oo.overflowing_add(rhs.oo);
        let (lo, carry_a) = self.lo.overflowing_add(rhs.lo);
        let (lo, carry_b) = lo.overflowing_add(u64::from(carry_oo));
        let hi = self
            .hi
            .wrapping_add(rhs.hi)
            .wrapping_add(u64::from(carry_a) + u64::from(carry_b));
        Self { hi, lo, oo }
    }
}

impl Sub for Scalar192 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        let (oo, borrow_oo) = self.oo.overflowing_sub(rhs.oo);
        let (lo, borrow_a) = self.lo.overflowing_sub(rhs.lo);
        let (lo, borrow_b) = lo.overflowing_sub(u64::from(borrow_oo));
        let hi = self
            .hi
            .wrapping_sub(rhs.hi)
            .wrapping_sub(u64::from(borrow_a) + u64::from(borrow_b));
        Self { hi, lo, oo }
    }
}

impl Neg for Scalar192 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

impl Mul for Scalar192 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let (product, negative) = self.mul_magnitude(rhs);
        Self::from_product(&product, negative)
    }
}

impl Shl<u32> for Scalar192 {
    type Output = Self;
    fn shl(self, shift: u32) -> Self {
        if shift >= 192 {
            return Self::ZERO;
        }
        let limbs = self.limbs();
        let skip = (shift / 64) as usize;
        let bits = shift % 64;
        let mut out = [0_u64; 3];
        for (src, slot) in out.iter_mut().skip(skip).enumerate() {
            *slot = limbs[src] << bits;
            if bits != 0 && src > 0 {
                *slot |= limbs[src - 1] >> (64 - bits);
            }
        }
        Self::from_limbs(out)
    }
}

impl Shr<u32> for Scalar192 {
    type Output = Self;
    /// Arithmetic (sign-filling) shift.
    fn shr(self, shift: u32) -> Self {
        let fill = if self.is_negative() { u64::MAX } else { 0 };
        self.shift_right(shift, fill)
    }
}

impl BitAnd for Scalar192 {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self::from_words(self.hi & rhs.hi, self.lo & rhs.lo, self.oo & rhs.oo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_cross_both_fraction_words() {
        let almost_one = Scalar192::from_words(0, u64::MAX, u64::MAX);
        let eps = Scalar192::from_words(0, 0, 1);
        assert_eq!(almost_one + eps, Scalar192::ONE);
        assert_eq!(Scalar192::ONE - eps, almost_one);
        assert_eq!(-Scalar192::ONE, Scalar192::from_int(-1));
        assert_eq!(Scalar192::MAX + eps, Scalar192::MIN);
    }

    #[test]
    fn ordering_is_signed_on_the_integer_word() {
        let neg_half = -Scalar192::HALF;
        assert!(neg_half < Scalar192::ZERO);
        assert!(Scalar192::MIN < neg_half);
        assert!(Scalar192::from_words(0, 0, 2) > Scalar192::from_words(0, 0, 1));
        assert!(Scalar192::HALF < Scalar192::ONE);
    }

    #[test]
    fn multiply_keeps_guard_bits_and_sign() {
        let half = Scalar192::HALF;
        assert_eq!(half * half, Scalar192::from_words(0, 1 << 62, 0));
        assert_eq!(Scalar192::from_int(-3) * half, Scalar192::from_words((-2_i64) as u64, 1 << 63, 0));

        let third = Scalar192::from_words(0, 0x5555_5555_5555_5555, 0x5555_5555_5555_5555);
        let product = third * Scalar192::from_int(3);
        assert_eq!(product, Scalar192::from_words(0, u64::MAX, u64::MAX));
    }

    #[test]
    fn carries_and_borrows_combine_without_double_counting() {
        let a = Scalar192::from_words(0, u64::MAX, u64::MAX);
        let b = Scalar192::from_words(0, u64::MAX, 1);
        // Guard-word carry feeds a fraction word that overflows into the integer word.
        assert_eq!(a + b, Scalar192::from_words(1, u64::MAX, 0));
        assert_eq!(Scalar192::from_words(1, u64::MAX, 0) - b, a);
        assert_eq!(Scalar192::from_words(1, 0, 0) - Scalar192::from_words(0, 0, 1), a);
    }

    #[test]
    fn saturating_mul_clamps_by_sign() {
        let big = Scalar192::from_int(1 << 40);
        assert_eq!(big.saturating_mul(big), Scalar192::MAX);
        assert_eq!((-big).saturating_mul(big), Scalar192::MIN);
        assert_eq!(Scalar192::MAX.saturating_mul(Scalar192::TWO), Scalar192::MAX);
        assert_eq!(Scalar192::MAX.saturating_mul(-Scalar192::TWO), Scalar192::MIN);

        let x = Scalar192::from_int(-3);
        assert_eq!(x.saturating_mul(Scalar192::HALF), x * Scalar192::HALF);
        assert_eq!(Scalar192::MAX.saturating_mul(Scalar192::ONE), Scalar192::MAX);
        assert_eq!(Scalar192::MAX.saturating_mul(Scalar192::ZERO), Scalar192::ZERO);
    }

    #[test]
    fn shifts_move_bits_between_words() {
        let one = Scalar192::ONE;
        assert_eq!(one >> 1, Scalar192::HALF);
        assert_eq!(one >> 64, Scalar192::from_words(0, 1, 0));
        assert_eq!(one >> 128, Scalar192::from_words(0, 0, 1));
        assert_eq!(one >> 129, Scalar192::ZERO);
        assert_eq!((one >> 128) << 128, one);
        assert_eq!(Scalar192::HALF << 1, one);
        let all_ones = Scalar192::from_words(u64::MAX, u64::MAX, u64::MAX);
        assert_eq!(Scalar192::from_int(-1) >> 191, all_ones);
        assert_eq!(Scalar192::from_int(-1) >> 128, Scalar192::from_words(u64::MAX, u64::MAX, 0));
        assert_eq!(Scalar192::from_int(-4) >> 1, Scalar192::from_int(-2));
        assert_eq!(Scalar192::MIN.shr_logical(63), Scalar192::ONE);
        assert_eq!(one << 192, Scalar192::ZERO);
    }

    #[test]
    fn leading_zeros_spans_all_words() {
        assert_eq!(Scalar192::ONE.leading_zeros(), 63);
        assert_eq!(Scalar192::HALF.leading_zeros(), 64);
        assert_eq!(Scalar192::from_words(0, 0, 1).leading_zeros(), 191);
        assert_eq!(Scalar192::ZERO.leading_zeros(), 192);
    }

    #[test]
    fn narrowing_truncates_guard_word() {
        let x = Scalar192::from_words(5, 7, u64::MAX);
        assert_eq!(x.narrow(), Scalar128::from_words(5, 7));
        assert_eq!(Scalar192::widen(Scalar128::from_words(5, 7)), Scalar192::from_words(5, 7, 0));
        assert!((Scalar192::from_int(-2).to_f64() + 2.0).abs() < f64::EPSILON);
    }
}

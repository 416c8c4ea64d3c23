// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Q63.64 fixed-point scalar.
//!
//! Same policy surface as [`crate::Scalar64`] with one extra 64-bit word of
//! integer range and of fraction. The value is addressed as two words, `hi`
//! (signed integer part) and `lo` (fraction), and stored as a single `i128`
//! so carries between them are native.

use core::fmt;
use core::ops::{
    Add, AddAssign, BitAnd, BitOr, BitXor, Div, DivAssign, Mul, MulAssign, Neg, Not, Rem, Shl,
    Shr, Sub, SubAssign,
};

use bytemuck::{Pod, Zeroable};

use crate::error::FixedError;
use crate::fp64::Scalar64;
use crate::wide::{long_div_u128, mul_wide_u128};

const FRAC_BITS: u32 = 64;
const SCALE: f64 = 18_446_744_073_709_551_616.0;

/// Signed Q63.64 fixed-point number.
///
/// The value is `(hi * 2^64 + lo) / 2^64` with `hi` read as a signed word.
/// Equality and ordering follow the raw 128-bit integer.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
pub struct Scalar128 {
    raw: i128,
}

impl Scalar128 {
    /// Number of fractional bits.
    pub const FRAC_BITS: u32 = FRAC_BITS;
    /// `0.0`
    pub const ZERO: Self = Self::from_raw(0);
    /// `1.0`
    pub const ONE: Self = Self::from_words(1, 0);
    /// `0.5`
    pub const HALF: Self = Self::from_words(0, 1 << 63);
    /// `2.0`
    pub const TWO: Self = Self::from_words(2, 0);
    /// Smallest positive value, `2^-64`.
    pub const EPSILON: Self = Self::from_raw(1);
    /// Most negative representable value, `-2^63`.
    pub const MIN: Self = Self::from_raw(i128::MIN);
    /// Largest representable value, `2^63 - 2^-64`.
    pub const MAX: Self = Self::from_raw(i128::MAX);

    /// Wraps a raw Q63.64 bit pattern.
    pub const fn from_raw(raw: i128) -> Self {
        Self { raw }
    }

    /// Raw Q63.64 bit pattern.
    pub const fn raw(self) -> i128 {
        self.raw
    }

    /// Builds a value from its integer word and fraction word.
    pub const fn from_words(hi: u64, lo: u64) -> Self {
        Self::from_raw((((hi as u128) << 64) | lo as u128) as i128)
    }

    /// Integer word (two's complement).
    pub const fn hi(self) -> u64 {
        (self.raw >> 64) as u64
    }

    /// Fraction word.
    pub const fn lo(self) -> u64 {
        self.raw as u64
    }

    /// Exact integer conversion.
    pub const fn from_i64(value: i64) -> Self {
        Self::from_words(value as u64, 0)
    }

    /// Integer conversion placing `value` in the integer word; values at or
    /// above `2^63` wrap negative. Use `TryFrom<u64>` to reject them.
    pub const fn from_u64(value: u64) -> Self {
        Self::from_words(value, 0)
    }

    /// Integer part, rounded toward negative infinity.
    pub const fn to_i64(self) -> i64 {
        self.hi() as i64
    }

    /// Integer part truncated to 32 bits.
    pub const fn to_i32(self) -> i32 {
        self.hi() as i32
    }

    /// Converts from `f64`, truncating toward zero. Saturates out of range;
    /// NaN maps to zero.
    pub fn from_f64(value: f64) -> Self {
        Self::from_raw((value * SCALE) as i128)
    }

    /// Converts from `f32`; see [`Scalar128::from_f64`].
    pub fn from_f32(value: f32) -> Self {
        Self::from_f64(f64::from(value))
    }

    /// Nearest `f64`.
    pub fn to_f64(self) -> f64 {
        self.raw as f64 / SCALE
    }

    /// Nearest `f32`.
    pub fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }

    /// Narrows to Q31.32: drops the low 32 fraction bits (toward negative
    /// infinity) and wraps integers outside `i32`.
    pub const fn to_scalar64(self) -> Scalar64 {
        Scalar64::from_raw((self.raw >> 32) as i64)
    }

    /// Narrows to Q31.32 like [`Scalar128::to_scalar64`], clamping values
    /// outside the Q31.32 range to its `MIN`/`MAX`.
    pub fn to_scalar64_saturating(self) -> Scalar64 {
        i64::try_from(self.raw >> 32).map_or_else(
            |_| if self.is_negative() { Scalar64::MIN } else { Scalar64::MAX },
            Scalar64::from_raw,
        )
    }

    /// Little-endian wire encoding: `lo` word first, then `hi`.
    pub const fn to_le_bytes(self) -> [u8; 16] {
        self.raw.to_le_bytes()
    }

    /// Inverse of [`Scalar128::to_le_bytes`].
    pub const fn from_le_bytes(bytes: [u8; 16]) -> Self {
        Self::from_raw(i128::from_le_bytes(bytes))
    }

    /// `true` when strictly below zero.
    pub const fn is_negative(self) -> bool {
        self.raw < 0
    }

    /// Addition returning `None` on overflow.
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.raw.checked_add(rhs.raw) {
            Some(raw) => Some(Self::from_raw(raw)),
            None => None,
        }
    }

    /// Subtraction returning `None` on overflow.
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.raw.checked_sub(rhs.raw) {
            Some(raw) => Some(Self::from_raw(raw)),
            None => None,
        }
    }

    /// Multiplication returning `None` when the truncated product does not fit.
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        let negative = (self.raw ^ rhs.raw) < 0;
        let (high, low) = mul_wide_u128(self.raw.unsigned_abs(), rhs.raw.unsigned_abs());
        if high >> 64 != 0 {
            return None;
        }
        let magnitude = (high << 64) | (low >> 64);
        if negative {
            0_i128.checked_sub_unsigned(magnitude).map(Self::from_raw)
        } else {
            i128::try_from(magnitude).ok().map(Self::from_raw)
        }
    }

    /// Addition clamped to `[MIN, MAX]`.
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.saturating_add(rhs.raw))
    }

    /// Subtraction clamped to `[MIN, MAX]`.
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.saturating_sub(rhs.raw))
    }

    /// Rounded quotient, saturating when it does not fit.
    ///
    /// # Errors
    /// [`FixedError::DivideByZero`] when `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> Result<Self, FixedError> {
        if rhs.raw == 0 {
            return Err(FixedError::DivideByZero);
        }
        let negative = (self.raw ^ rhs.raw) < 0;
        let quotient = long_div_u128(self.raw.unsigned_abs(), rhs.raw.unsigned_abs(), FRAC_BITS)
            .and_then(|q| {
                if negative {
                    0_i128.checked_sub_unsigned(q)
                } else {
                    i128::try_from(q).ok()
                }
            });
        Ok(quotient.map_or_else(
            || {
                tracing::trace!(target: "detfix::div", lhs = self.raw, rhs = rhs.raw, "q63.64 quotient saturated");
                if negative {
                    Self::MIN
                } else {
                    Self::MAX
                }
            },
            Self::from_raw,
        ))
    }

    /// Remainder with the sign of the dividend.
    ///
    /// # Errors
    /// [`FixedError::DivideByZero`] when `rhs` is zero.
    pub const fn checked_rem(self, rhs: Self) -> Result<Self, FixedError> {
        if rhs.raw == 0 {
            return Err(FixedError::DivideByZero);
        }
        Ok(Self::from_raw(self.raw.wrapping_rem(rhs.raw)))
    }
}

impl fmt::Display for Scalar128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f64(), f)
    }
}

impl From<Scalar64> for Scalar128 {
    /// Exact widening.
    fn from(value: Scalar64) -> Self {
        Self::from_raw(i128::from(value.raw()) << 32)
    }
}

macro_rules! from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Scalar128 {
            fn from(value: $t) -> Self {
                Self::from_i64(i64::from(value))
            }
        }
    )*};
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl TryFrom<u64> for Scalar128 {
    type Error = FixedError;
    fn try_from(value: u64) -> Result<Self, FixedError> {
        i64::try_from(value)
            .map(Self::from_i64)
            .map_err(|_| FixedError::OutOfRange)
    }
}

impl Add for Scalar128 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.wrapping_add(rhs.raw))
    }
}

impl Sub for Scalar128 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.wrapping_sub(rhs.raw))
    }
}

impl Neg for Scalar128 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_raw(self.raw.wrapping_neg())
    }
}

impl Mul for Scalar128 {
    type Output = Self;
    /// Sign-magnitude product: the 256-bit magnitude product keeps bits
    /// 64..192 (truncating toward zero), then the sign is reapplied.
    fn mul(self, rhs: Self) -> Self {
        let negative = (self.raw ^ rhs.raw) < 0;
        let (high, low) = mul_wide_u128(self.raw.unsigned_abs(), rhs.raw.unsigned_abs());
        let magnitude = ((high << 64) | (low >> 64)) as i128;
        Self::from_raw(if negative {
            magnitude.wrapping_neg()
        } else {
            magnitude
        })
    }
}

#[allow(clippy::panic)]
impl Div for Scalar128 {
    type Output = Self;
    /// # Panics
    /// Panics on a zero divisor, like integer `/`.
    fn div(self, rhs: Self) -> Self {
        match self.checked_div(rhs) {
            Ok(q) => q,
            Err(err) => panic!("{err}"),
        }
    }
}

#[allow(clippy::panic)]
impl Rem for Scalar128 {
    type Output = Self;
    /// # Panics
    /// Panics on a zero divisor, like integer `%`.
    fn rem(self, rhs: Self) -> Self {
        match self.checked_rem(rhs) {
            Ok(r) => r,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Shl<u32> for Scalar128 {
    type Output = Self;
    /// Shift count is masked to `0..128`.
    fn shl(self, shift: u32) -> Self {
        Self::from_raw(self.raw.wrapping_shl(shift))
    }
}

impl Shr<u32> for Scalar128 {
    type Output = Self;
    /// Arithmetic shift; count is masked to `0..128`.
    fn shr(self, shift: u32) -> Self {
        Self::from_raw(self.raw.wrapping_shr(shift))
    }
}

impl BitAnd for Scalar128 {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self::from_raw(self.raw & rhs.raw)
    }
}

impl BitOr for Scalar128 {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self::from_raw(self.raw | rhs.raw)
    }
}

impl BitXor for Scalar128 {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self {
        Self::from_raw(self.raw ^ rhs.raw)
    }
}

impl Not for Scalar128 {
    type Output = Self;
    fn not(self) -> Self {
        Self::from_raw(!self.raw)
    }
}

impl AddAssign for Scalar128 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Scalar128 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Scalar128 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Scalar128 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

/// Serialized as the `[hi, lo]` word pair so the encoding matches the
/// two-word layout on every format, including those without 128-bit ints.
#[cfg(feature = "serde")]
impl serde::Serialize for Scalar128 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&(self.hi(), self.lo()), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Scalar128 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <(u64, u64)>::deserialize(deserializer).map(|(hi, lo)| Self::from_words(hi, lo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_round_trip_through_raw() {
        let x = Scalar128::from_words(u64::MAX, 1 << 63);
        assert_eq!(x.raw(), -(1_i128 << 63));
        assert_eq!((x.hi(), x.lo()), (u64::MAX, 1 << 63));
        assert_eq!(x.to_i64(), -1);
    }

    #[test]
    fn product_truncates_magnitude_toward_zero() {
        let eps = Scalar128::EPSILON;
        assert_eq!(eps * Scalar128::HALF, Scalar128::ZERO);
        assert_eq!(-eps * Scalar128::HALF, Scalar128::ZERO);
        assert_eq!(Scalar128::from(-3) * Scalar128::HALF, Scalar128::from_words(u64::MAX - 1, 1 << 63));
    }

    #[test]
    fn checked_mul_detects_overflow() {
        let big = Scalar128::from_i64(1 << 40);
        assert_eq!(big.checked_mul(big), None);
        assert_eq!(big.checked_mul(-Scalar128::ONE), Some(-big));
        assert_eq!(
            Scalar128::from_i64(-(1 << 62)).checked_mul(Scalar128::TWO),
            Some(Scalar128::MIN)
        );
    }
}

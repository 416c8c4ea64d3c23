// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Q31.32 fixed-point scalar.
//!
//! Policy summary:
//! - Addition, subtraction, multiplication and negation wrap modulo 2^64.
//!   Use the `checked_*` / `saturating_*` forms where overflow is meaningful.
//! - Division rounds to nearest and saturates to `MIN`/`MAX` when the
//!   quotient is not representable.
//! - Float conversions saturate and map NaN to zero; they exist for tooling
//!   and tests, never for simulation state.

use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Shl, Shr, Sub, SubAssign,
};

use bytemuck::{Pod, Zeroable};

use crate::error::FixedError;
use crate::wide::long_div_u64;

const FRAC_BITS: u32 = 32;
const FRAC_MASK: i64 = (1 << FRAC_BITS) - 1;

/// Signed Q31.32 fixed-point number stored in one `i64`.
///
/// The value is `raw / 2^32`. Ordering, equality and hashing all follow the
/// raw integer, so two scalars compare equal exactly when their bits match.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
pub struct Scalar64 {
    raw: i64,
}

impl Scalar64 {
    /// Number of fractional bits.
    pub const FRAC_BITS: u32 = FRAC_BITS;
    /// `0.0`
    pub const ZERO: Self = Self::from_raw(0);
    /// `1.0`
    pub const ONE: Self = Self::from_raw(1 << FRAC_BITS);
    /// `0.5`
    pub const HALF: Self = Self::from_raw(1 << (FRAC_BITS - 1));
    /// `2.0`
    pub const TWO: Self = Self::from_raw(2 << FRAC_BITS);
    /// Smallest positive value, `2^-32`.
    pub const EPSILON: Self = Self::from_raw(1);
    /// Most negative representable value, `-2^31`.
    pub const MIN: Self = Self::from_raw(i64::MIN);
    /// Largest representable value, `2^31 - 2^-32`.
    pub const MAX: Self = Self::from_raw(i64::MAX);

    /// Wraps a raw Q31.32 bit pattern.
    pub const fn from_raw(raw: i64) -> Self {
        Self { raw }
    }

    /// Raw Q31.32 bit pattern.
    pub const fn raw(self) -> i64 {
        self.raw
    }

    /// Integer conversion; values outside `i32` wrap.
    pub const fn from_i64(value: i64) -> Self {
        Self::from_raw(value.wrapping_shl(FRAC_BITS))
    }

    /// Integer part, rounded toward negative infinity.
    pub const fn to_i64(self) -> i64 {
        self.raw >> FRAC_BITS
    }

    /// Integer part, rounded toward negative infinity.
    pub const fn to_i32(self) -> i32 {
        (self.raw >> FRAC_BITS) as i32
    }

    /// Converts from `f64`, truncating toward zero. Saturates out of range;
    /// NaN maps to zero.
    pub fn from_f64(value: f64) -> Self {
        Self::from_raw((value * 4_294_967_296.0) as i64)
    }

    /// Converts from `f32`; see [`Scalar64::from_f64`].
    pub fn from_f32(value: f32) -> Self {
        Self::from_f64(f64::from(value))
    }

    /// Nearest `f64` (exact for every Q31.32 value).
    pub fn to_f64(self) -> f64 {
        self.raw as f64 / 4_294_967_296.0
    }

    /// Nearest `f32`.
    pub fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }

    /// Little-endian wire encoding of the raw value.
    pub const fn to_le_bytes(self) -> [u8; 8] {
        self.raw.to_le_bytes()
    }

    /// Inverse of [`Scalar64::to_le_bytes`].
    pub const fn from_le_bytes(bytes: [u8; 8]) -> Self {
        Self::from_raw(i64::from_le_bytes(bytes))
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
        let wide = (i128::from(self.raw) * i128::from(rhs.raw)) >> FRAC_BITS;
        i64::try_from(wide).ok().map(Self::from_raw)
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
        let quotient = long_div_u64(self.raw.unsigned_abs(), rhs.raw.unsigned_abs(), FRAC_BITS)
            .and_then(|q| {
                if negative {
                    0_i64.checked_sub_unsigned(q)
                } else {
                    i64::try_from(q).ok()
                }
            });
        Ok(quotient.map_or_else(
            || {
                tracing::trace!(target: "detfix::div", lhs = self.raw, rhs = rhs.raw, "q31.32 quotient saturated");
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

impl fmt::Display for Scalar64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f64(), f)
    }
}

macro_rules! from_small_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Scalar64 {
            fn from(value: $t) -> Self {
                Self::from_i64(i64::from(value))
            }
        }
    )*};
}

from_small_int!(i8, i16, i32, u8, u16);

impl TryFrom<i64> for Scalar64 {
    type Error = FixedError;
    fn try_from(value: i64) -> Result<Self, FixedError> {
        i32::try_from(value)
            .map(Self::from)
            .map_err(|_| FixedError::OutOfRange)
    }
}

impl TryFrom<u32> for Scalar64 {
    type Error = FixedError;
    fn try_from(value: u32) -> Result<Self, FixedError> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<u64> for Scalar64 {
    type Error = FixedError;
    fn try_from(value: u64) -> Result<Self, FixedError> {
        i64::try_from(value)
            .map_err(|_| FixedError::OutOfRange)
            .and_then(Self::try_from)
    }
}

impl Add for Scalar64 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.wrapping_add(rhs.raw))
    }
}

impl Sub for Scalar64 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.wrapping_sub(rhs.raw))
    }
}

impl Neg for Scalar64 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_raw(self.raw.wrapping_neg())
    }
}

impl Mul for Scalar64 {
    type Output = Self;
    /// Split-word product: four partial products of the 32-bit halves,
    /// with the low×low term shifted down before accumulation.
    fn mul(self, rhs: Self) -> Self {
        let li = self.raw >> FRAC_BITS;
        let lf = self.raw & FRAC_MASK;
        let ri = rhs.raw >> FRAC_BITS;
        let rf = rhs.raw & FRAC_MASK;

        let raw = li
            .wrapping_mul(ri)
            .wrapping_shl(FRAC_BITS)
            .wrapping_add(li.wrapping_mul(rf))
            .wrapping_add(ri.wrapping_mul(lf))
            .wrapping_add(((lf as u64).wrapping_mul(rf as u64) >> FRAC_BITS) as i64);
        Self::from_raw(raw)
    }
}

#[allow(clippy::panic)]
impl Div for Scalar64 {
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
impl Rem for Scalar64 {
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

impl Shl<u32> for Scalar64 {
    type Output = Self;
    /// Shift count is masked to `0..64`.
    fn shl(self, shift: u32) -> Self {
        Self::from_raw(self.raw.wrapping_shl(shift))
    }
}

impl Shr<u32> for Scalar64 {
    type Output = Self;
    /// Arithmetic shift; count is masked to `0..64`.
    fn shr(self, shift: u32) -> Self {
        Self::from_raw(self.raw.wrapping_shr(shift))
    }
}

impl AddAssign for Scalar64 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Scalar64 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Scalar64 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Scalar64 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Scalar64 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.raw)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Scalar64 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::from_raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_word_product_matches_wide_reference() {
        let samples = [
            0_i64,
            1,
            -1,
            1 << 32,
            -(1 << 32),
            0x0000_0001_8000_0000,
            -0x0000_0002_4000_0001,
            0x1234_5678_9abc_def0,
            i64::MAX,
            i64::MIN,
        ];
        for &a in &samples {
            for &b in &samples {
                let reference = ((i128::from(a) * i128::from(b)) >> 32) as i64;
                let got = Scalar64::from_raw(a) * Scalar64::from_raw(b);
                assert_eq!(got.raw(), reference, "{a:#x} * {b:#x}");
            }
        }
    }

    #[test]
    fn remainder_of_min_by_minus_one_does_not_trap() {
        let r = Scalar64::MIN.checked_rem(Scalar64::from_raw(-1));
        assert_eq!(r, Ok(Scalar64::ZERO));
    }
}

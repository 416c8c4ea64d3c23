// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Math functions for [`Scalar128`].
//!
//! Utilities (`floor`, `clamp`, `lerp`, ...) operate directly on Q63.64.
//! Transcendentals run in the Q63.128 kernel and truncate the guard word on
//! the way out, so results are within a few units of `EPSILON` of the true
//! value.

use crate::error::FixedError;
use crate::fp128::Scalar128;
use crate::fp192::Scalar192;

use super::consts::{DEG_TO_RAD, RAD_TO_DEG};
use super::kernel;

/// π
pub const PI: Scalar128 = Scalar128::from_words(3, 2611923443488327891);
/// π / 2
pub const HALF_PI: Scalar128 = Scalar128::from_words(1, 10529333758598939753);
/// 2π
pub const TAU: Scalar128 = Scalar128::from_words(6, 5223846886976655782);
/// Euler's number.
pub const E: Scalar128 = Scalar128::from_words(2, 13249961062380153451);
/// Comparison tolerance for kernel results, `2^-32`.
pub const EPSILON: Scalar128 = Scalar128::from_words(0, 1 << 32);

const CEIL_BIAS: Scalar128 = Scalar128::from_words(0, u64::MAX);

fn widen(x: Scalar128) -> Scalar192 {
    Scalar192::widen(x)
}

fn unary(x: Scalar128, f: fn(Scalar192) -> Scalar192) -> Scalar128 {
    f(widen(x)).narrow()
}

fn unary_checked(
    x: Scalar128,
    f: fn(Scalar192) -> Result<Scalar192, FixedError>,
) -> Result<Scalar128, FixedError> {
    f(widen(x)).map(Scalar192::narrow)
}

/// Absolute value; `MIN` wraps to itself.
pub fn abs(x: Scalar128) -> Scalar128 {
    if x.is_negative() {
        -x
    } else {
        x
    }
}

/// Largest integer not greater than `x`.
pub const fn floor(x: Scalar128) -> Scalar128 {
    Scalar128::from_words(x.hi(), 0)
}

/// Smallest integer not less than `x`.
pub fn ceiling(x: Scalar128) -> Scalar128 {
    floor(x + CEIL_BIAS)
}

/// Nearest integer, halves rounded up.
pub fn round(x: Scalar128) -> Scalar128 {
    floor(x + Scalar128::HALF)
}

/// `-1`, `0` or `1`.
pub fn sign(x: Scalar128) -> Scalar128 {
    match x.cmp(&Scalar128::ZERO) {
        core::cmp::Ordering::Less => -Scalar128::ONE,
        core::cmp::Ordering::Equal => Scalar128::ZERO,
        core::cmp::Ordering::Greater => Scalar128::ONE,
    }
}

/// Smaller of two values.
pub fn min(x: Scalar128, y: Scalar128) -> Scalar128 {
    if x < y {
        x
    } else {
        y
    }
}

/// Larger of two values.
pub fn max(x: Scalar128, y: Scalar128) -> Scalar128 {
    if x > y {
        x
    } else {
        y
    }
}

/// Restricts `x` to `[lo, hi]`. The lower bound is tested first, so an
/// inverted range yields `lo`.
pub fn clamp(x: Scalar128, lo: Scalar128, hi: Scalar128) -> Scalar128 {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

/// Restricts `x` to `[0, 1]`.
pub fn clamp01(x: Scalar128) -> Scalar128 {
    clamp(x, Scalar128::ZERO, Scalar128::ONE)
}

/// Linear interpolation `x + (y - x) * t`; `t` is not clamped.
pub fn lerp(x: Scalar128, y: Scalar128, t: Scalar128) -> Scalar128 {
    x + (y - x) * t
}

/// Radians to degrees.
pub fn rad_to_deg(x: Scalar128) -> Scalar128 {
    (widen(x) * RAD_TO_DEG).narrow()
}

/// Degrees to radians.
pub fn deg_to_rad(x: Scalar128) -> Scalar128 {
    (widen(x) * DEG_TO_RAD).narrow()
}

/// Reciprocal `1 / x`, saturating for arguments below `2^-63` in magnitude.
///
/// # Errors
/// [`FixedError::InvalidOperation`] when `x` is zero.
pub fn rcp(x: Scalar128) -> Result<Scalar128, FixedError> {
    unary_checked(x, kernel::rcp)
}

/// Square root.
///
/// # Errors
/// [`FixedError::InvalidOperation`] when `x` is negative.
pub fn sqrt(x: Scalar128) -> Result<Scalar128, FixedError> {
    unary_checked(x, kernel::sqrt)
}

/// Reciprocal square root.
///
/// # Errors
/// [`FixedError::InvalidOperation`] when `x <= 0`.
pub fn rsqrt(x: Scalar128) -> Result<Scalar128, FixedError> {
    unary_checked(x, kernel::rsqrt)
}

/// `2^x`. Saturates to `MAX` for `x >= 63` and to zero for `x <= -63`.
pub fn exp2(x: Scalar128) -> Scalar128 {
    unary(x, kernel::exp2)
}

/// `e^x`, computed as `2^(x log2 e)`.
pub fn exp(x: Scalar128) -> Scalar128 {
    unary(x, kernel::exp)
}

/// `10^x`, computed as `2^(x log2 10)`.
pub fn exp10(x: Scalar128) -> Scalar128 {
    unary(x, kernel::exp10)
}

/// `x^e` for positive `x`. `pow(1, e)` and `pow(x, 0)` are exactly one.
///
/// # Errors
/// [`FixedError::InvalidOperation`] when `x <= 0`.
pub fn pow(x: Scalar128, e: Scalar128) -> Result<Scalar128, FixedError> {
    kernel::pow(widen(x), widen(e)).map(Scalar192::narrow)
}

/// Base-2 logarithm.
///
/// # Errors
/// [`FixedError::InvalidOperation`] when `x <= 0`.
pub fn log2(x: Scalar128) -> Result<Scalar128, FixedError> {
    unary_checked(x, kernel::log2)
}

/// Natural logarithm.
///
/// # Errors
/// [`FixedError::InvalidOperation`] when `x <= 0`.
pub fn ln(x: Scalar128) -> Result<Scalar128, FixedError> {
    unary_checked(x, kernel::ln)
}

/// Base-10 logarithm.
///
/// # Errors
/// [`FixedError::InvalidOperation`] when `x <= 0`.
pub fn log10(x: Scalar128) -> Result<Scalar128, FixedError> {
    unary_checked(x, kernel::log10)
}

/// Logarithm of `x` in `base`, saturating when `base` is very close to one.
///
/// # Errors
/// [`FixedError::InvalidOperation`] when `x <= 0`, `base <= 0` or `base == 1`.
pub fn log(x: Scalar128, base: Scalar128) -> Result<Scalar128, FixedError> {
    kernel::log(widen(x), widen(base)).map(Scalar192::narrow)
}

/// Sine of `x` radians.
pub fn sin(x: Scalar128) -> Scalar128 {
    unary(x, kernel::sin)
}

/// Cosine of `x` radians.
pub fn cos(x: Scalar128) -> Scalar128 {
    unary(x, kernel::cos)
}

/// Sine and cosine of `x` radians.
pub fn sin_cos(x: Scalar128) -> (Scalar128, Scalar128) {
    (sin(x), cos(x))
}

/// Tangent of `x` radians; `±MAX` where the cosine is exactly zero.
pub fn tan(x: Scalar128) -> Scalar128 {
    unary(x, kernel::tan)
}

/// Arctangent in `[-π/2, π/2]`.
pub fn atan(x: Scalar128) -> Scalar128 {
    unary(x, kernel::atan)
}

/// Angle of the vector `(x, y)` in `[-π, π]`. `atan2(0, x)` is `π` for
/// negative `x` and zero otherwise.
pub fn atan2(y: Scalar128, x: Scalar128) -> Scalar128 {
    kernel::atan2(widen(y), widen(x)).narrow()
}

/// Arcsine in `[-π/2, π/2]`.
///
/// # Errors
/// [`FixedError::InvalidOperation`] when `|x| > 1`.
pub fn asin(x: Scalar128) -> Result<Scalar128, FixedError> {
    unary_checked(x, kernel::asin)
}

/// Arccosine in `[0, π]`.
///
/// # Errors
/// [`FixedError::InvalidOperation`] when `|x| > 1`.
pub fn acos(x: Scalar128) -> Result<Scalar128, FixedError> {
    unary_checked(x, kernel::acos)
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Math functions for [`Scalar64`].
//!
//! Rounding utilities work on the raw Q31.32 bits. Every transcendental
//! widens to [`Scalar128`], calls the matching [`super::math128`] function,
//! and narrows the result, so both widths share one set of tables.

use crate::error::FixedError;
use crate::fp128::Scalar128;
use crate::fp64::Scalar64;

use super::math128;

/// π
pub const PI: Scalar64 = Scalar64::from_raw(13493037704);
/// π / 2
pub const HALF_PI: Scalar64 = Scalar64::from_raw(6746518852);
/// 2π
pub const TAU: Scalar64 = Scalar64::from_raw(26986075409);
/// Euler's number.
pub const E: Scalar64 = Scalar64::from_raw(11674931554);
/// Comparison tolerance for kernel results, `2^-16`.
pub const EPSILON: Scalar64 = Scalar64::from_raw(1 << 16);

const FRAC_MASK: i64 = 0xFFFF_FFFF;
const INT_MASK: i64 = !FRAC_MASK;

fn unary(x: Scalar64, f: fn(Scalar128) -> Scalar128) -> Scalar64 {
    f(Scalar128::from(x)).to_scalar64()
}

/// For functions whose Q63.64 result saturates; keeps that saturation
/// visible after narrowing.
fn unary_saturating(x: Scalar64, f: fn(Scalar128) -> Scalar128) -> Scalar64 {
    f(Scalar128::from(x)).to_scalar64_saturating()
}

fn unary_checked(
    x: Scalar64,
    f: fn(Scalar128) -> Result<Scalar128, FixedError>,
) -> Result<Scalar64, FixedError> {
    f(Scalar128::from(x)).map(Scalar128::to_scalar64)
}

/// Absolute value (branch-free); `MIN` wraps to itself.
pub const fn abs(x: Scalar64) -> Scalar64 {
    let raw = x.raw();
    let mask = raw >> 63;
    Scalar64::from_raw((raw ^ mask).wrapping_sub(mask))
}

/// Largest integer not greater than `x`.
pub const fn floor(x: Scalar64) -> Scalar64 {
    Scalar64::from_raw(x.raw() & INT_MASK)
}

/// Smallest integer not less than `x`.
pub const fn ceiling(x: Scalar64) -> Scalar64 {
    Scalar64::from_raw(x.raw().wrapping_add(FRAC_MASK) & INT_MASK)
}

/// Nearest integer, halves rounded up.
pub const fn round(x: Scalar64) -> Scalar64 {
    Scalar64::from_raw(x.raw().wrapping_add(1 << 31) & INT_MASK)
}

/// `-1`, `0` or `1`.
pub fn sign(x: Scalar64) -> Scalar64 {
    Scalar64::from(x.raw().signum() as i32)
}

/// Smaller of two values.
pub fn min(x: Scalar64, y: Scalar64) -> Scalar64 {
    if x < y {
        x
    } else {
        y
    }
}

/// Larger of two values.
pub fn max(x: Scalar64, y: Scalar64) -> Scalar64 {
    if x > y {
        x
    } else {
        y
    }
}

/// Restricts `x` to `[lo, hi]`. The lower bound is tested first, so an
/// inverted range yields `lo`.
pub fn clamp(x: Scalar64, lo: Scalar64, hi: Scalar64) -> Scalar64 {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

/// Restricts `x` to `[0, 1]`.
pub fn clamp01(x: Scalar64) -> Scalar64 {
    clamp(x, Scalar64::ZERO, Scalar64::ONE)
}

/// Linear interpolation `x + (y - x) * t`; `t` is not clamped.
pub fn lerp(x: Scalar64, y: Scalar64, t: Scalar64) -> Scalar64 {
    x + (y - x) * t
}

/// Radians to degrees.
pub fn rad_to_deg(x: Scalar64) -> Scalar64 {
    unary(x, math128::rad_to_deg)
}

/// Degrees to radians.
pub fn deg_to_rad(x: Scalar64) -> Scalar64 {
    unary(x, math128::deg_to_rad)
}

/// Reciprocal `1 / x`, saturating when the result leaves the Q31.32 range.
///
/// # Errors
/// [`FixedError::InvalidOperation`] when `x` is zero.
pub fn rcp(x: Scalar64) -> Result<Scalar64, FixedError> {
    math128::rcp(x.into()).map(Scalar128::to_scalar64_saturating)
}

/// Square root.
///
/// # Errors
/// [`FixedError::InvalidOperation`] when `x` is negative.
pub fn sqrt(x: Scalar64) -> Result<Scalar64, FixedError> {
    unary_checked(x, math128::sqrt)
}

/// Reciprocal square root.
///
/// # Errors
/// [`FixedError::InvalidOperation`] when `x <= 0`.
pub fn rsqrt(x: Scalar64) -> Result<Scalar64, FixedError> {
    unary_checked(x, math128::rsqrt)
}

/// `2^x`, saturating to `MAX` once the result leaves the Q31.32 range.
pub fn exp2(x: Scalar64) -> Scalar64 {
    unary_saturating(x, math128::exp2)
}

/// `e^x`, saturating like [`exp2`].
pub fn exp(x: Scalar64) -> Scalar64 {
    unary_saturating(x, math128::exp)
}

/// `10^x`, saturating like [`exp2`].
pub fn exp10(x: Scalar64) -> Scalar64 {
    unary_saturating(x, math128::exp10)
}

/// `x^e` for positive `x`, saturating like [`exp2`].
///
/// # Errors
/// [`FixedError::InvalidOperation`] when `x <= 0`.
pub fn pow(x: Scalar64, e: Scalar64) -> Result<Scalar64, FixedError> {
    math128::pow(x.into(), e.into()).map(Scalar128::to_scalar64_saturating)
}

/// Base-2 logarithm.
///
/// # Errors
/// [`FixedError::InvalidOperation`] when `x <= 0`.
pub fn log2(x: Scalar64) -> Result<Scalar64, FixedError> {
    unary_checked(x, math128::log2)
}

/// Natural logarithm.
///
/// # Errors
/// [`FixedError::InvalidOperation`] when `x <= 0`.
pub fn ln(x: Scalar64) -> Result<Scalar64, FixedError> {
    unary_checked(x, math128::ln)
}

/// Base-10 logarithm.
///
/// # Errors
/// [`FixedError::InvalidOperation`] when `x <= 0`.
pub fn log10(x: Scalar64) -> Result<Scalar64, FixedError> {
    unary_checked(x, math128::log10)
}

/// Logarithm of `x` in `base`, saturating when `base` is very close to one.
///
/// # Errors
/// [`FixedError::InvalidOperation`] when `x <= 0`, `base <= 0` or `base == 1`.
pub fn log(x: Scalar64, base: Scalar64) -> Result<Scalar64, FixedError> {
    math128::log(x.into(), base.into()).map(Scalar128::to_scalar64_saturating)
}

/// Sine of `x` radians.
pub fn sin(x: Scalar64) -> Scalar64 {
    unary(x, math128::sin)
}

/// Cosine of `x` radians.
pub fn cos(x: Scalar64) -> Scalar64 {
    unary(x, math128::cos)
}

/// Sine and cosine of `x` radians.
pub fn sin_cos(x: Scalar64) -> (Scalar64, Scalar64) {
    (sin(x), cos(x))
}

/// Tangent of `x` radians, saturating near the poles.
pub fn tan(x: Scalar64) -> Scalar64 {
    unary_saturating(x, math128::tan)
}

/// Arctangent in `[-π/2, π/2]`.
pub fn atan(x: Scalar64) -> Scalar64 {
    unary(x, math128::atan)
}

/// Angle of the vector `(x, y)` in `[-π, π]`.
pub fn atan2(y: Scalar64, x: Scalar64) -> Scalar64 {
    math128::atan2(y.into(), x.into()).to_scalar64()
}

/// Arcsine in `[-π/2, π/2]`.
///
/// # Errors
/// [`FixedError::InvalidOperation`] when `|x| > 1`.
pub fn asin(x: Scalar64) -> Result<Scalar64, FixedError> {
    unary_checked(x, math128::asin)
}

/// Arccosine in `[0, π]`.
///
/// # Errors
/// [`FixedError::InvalidOperation`] when `|x| > 1`.
pub fn acos(x: Scalar64) -> Result<Scalar64, FixedError> {
    unary_checked(x, math128::acos)
}

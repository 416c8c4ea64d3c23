// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar abstraction for geometry code.
//!
//! Vector, matrix and collision code is written once against
//! [`FixedScalar`] and bound to either [`Scalar64`] or [`Scalar128`]. The
//! trait only forwards to the inherent operators and to the kernel in
//! [`crate::math`]; it adds no policy of its own.
//!
//! Determinism contract:
//! - Every method is a pure function of its arguments' bits.
//! - Trigonometric functions take and return radians.
//! - Fallible methods report the same [`FixedError`] as the kernel function
//!   they forward to.

use core::fmt;
use core::hash::Hash;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::FixedError;
use crate::fp128::Scalar128;
use crate::fp64::Scalar64;
use crate::math::{math128, math64};

/// Deterministic fixed-point arithmetic and the transcendentals geometry
/// needs (normalisation, rotation, angle recovery).
pub trait FixedScalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + Default
    + Eq
    + Ord
    + Hash
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Returns the additive identity (zero).
    fn zero() -> Self;

    /// Returns the multiplicative identity (one).
    fn one() -> Self;

    /// Absolute value (wrapping at `MIN`).
    fn abs(self) -> Self;

    /// Reciprocal `1 / self`.
    ///
    /// # Errors
    /// Fails for zero.
    fn rcp(self) -> Result<Self, FixedError>;

    /// Square root.
    ///
    /// # Errors
    /// Fails for negative input.
    fn sqrt(self) -> Result<Self, FixedError>;

    /// Reciprocal square root.
    ///
    /// # Errors
    /// Fails for zero or negative input.
    fn rsqrt(self) -> Result<Self, FixedError>;

    /// Sine of `self` (radians).
    fn sin(self) -> Self;

    /// Cosine of `self` (radians).
    fn cos(self) -> Self;

    /// Both sine and cosine of `self` (radians).
    fn sin_cos(self) -> (Self, Self) {
        (Self::sin(self), Self::cos(self))
    }

    /// Angle of the vector `(x, self)` in `[-π, π]`.
    fn atan2(self, x: Self) -> Self;

    /// Arcsine in `[-π/2, π/2]`.
    ///
    /// # Errors
    /// Fails outside `[-1, 1]`.
    fn asin(self) -> Result<Self, FixedError>;

    /// Arccosine in `[0, π]`.
    ///
    /// # Errors
    /// Fails outside `[-1, 1]`.
    fn acos(self) -> Result<Self, FixedError>;

    /// Boundary conversion from `f64` for payloads and test scaffolding.
    /// Saturates outside the representable range.
    fn from_f64(value: f64) -> Self;

    /// Conversion to `f64` for interop and diagnostics.
    fn to_f64(self) -> f64;
}

macro_rules! impl_fixed_scalar {
    ($ty:ty, $math:ident) => {
        impl FixedScalar for $ty {
            fn zero() -> Self {
                <$ty>::ZERO
            }

            fn one() -> Self {
                <$ty>::ONE
            }

            fn abs(self) -> Self {
                $math::abs(self)
            }

            fn rcp(self) -> Result<Self, FixedError> {
                $math::rcp(self)
            }

            fn sqrt(self) -> Result<Self, FixedError> {
                $math::sqrt(self)
            }

            fn rsqrt(self) -> Result<Self, FixedError> {
                $math::rsqrt(self)
            }

            fn sin(self) -> Self {
                $math::sin(self)
            }

            fn cos(self) -> Self {
                $math::cos(self)
            }

            fn sin_cos(self) -> (Self, Self) {
                $math::sin_cos(self)
            }

            fn atan2(self, x: Self) -> Self {
                $math::atan2(self, x)
            }

            fn asin(self) -> Result<Self, FixedError> {
                $math::asin(self)
            }

            fn acos(self) -> Result<Self, FixedError> {
                $math::acos(self)
            }

            fn from_f64(value: f64) -> Self {
                <$ty>::from_f64(value)
            }

            fn to_f64(self) -> f64 {
                <$ty>::to_f64(self)
            }
        }
    };
}

impl_fixed_scalar!(Scalar64, math64);
impl_fixed_scalar!(Scalar128, math128);

#[cfg(test)]
mod tests {
    use super::*;

    fn hypot<S: FixedScalar>(x: S, y: S) -> S {
        (x * x + y * y).sqrt().unwrap_or_else(|_| S::zero())
    }

    #[test]
    fn generic_code_runs_on_both_widths() {
        let three = Scalar64::from(3);
        let four = Scalar64::from(4);
        assert_eq!(hypot(three, four), Scalar64::from(5));

        let three = Scalar128::from(3);
        let four = Scalar128::from(4);
        assert_eq!(hypot(three, four), Scalar128::from(5));
    }

    #[test]
    fn sin_cos_default_matches_components() {
        let angle = Scalar128::from_f64(0.75);
        let (s, c) = FixedScalar::sin_cos(angle);
        assert_eq!(s, FixedScalar::sin(angle));
        assert_eq!(c, FixedScalar::cos(angle));
    }

    fn angle_between<S: FixedScalar>(cos_theta: S) -> S {
        cos_theta.acos().unwrap_or_else(|_| S::zero())
    }

    #[test]
    fn inverse_trig_is_reachable_generically() {
        let half = angle_between(Scalar128::from_f64(0.5));
        assert!((FixedScalar::to_f64(half) - core::f64::consts::FRAC_PI_3).abs() < 1e-15);
        let right = angle_between(Scalar64::ZERO);
        assert!((FixedScalar::to_f64(right) - core::f64::consts::FRAC_PI_2).abs() < 1e-9);
        assert!(FixedScalar::asin(Scalar64::TWO).is_err());
    }
}

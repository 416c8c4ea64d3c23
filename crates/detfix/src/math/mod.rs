// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Deterministic math kernel.
//!
//! [`math128`] is the primary surface: every transcendental widens its
//! [`Scalar128`](crate::Scalar128) arguments to the internal Q63.128 type,
//! evaluates a checked-in polynomial table, and narrows once. [`math64`]
//! forwards to it for [`Scalar64`](crate::Scalar64).
//!
//! Domain violations (`sqrt(-1)`, `log2(0)`, `asin(2)`, ...) return
//! [`FixedError::InvalidOperation`](crate::FixedError::InvalidOperation)
//! rather than a sentinel value.

mod consts;
mod kernel;
mod lut;
pub mod math128;
pub mod math64;

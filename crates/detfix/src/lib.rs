// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! detfix: deterministic binary fixed-point scalars and math kernel.
//!
//! Two public scalar widths share one policy surface:
//! - [`Scalar64`]: Q31.32 in a single `i64`, the everyday simulation type.
//! - [`Scalar128`]: Q63.64 in two 64-bit words, for wide range/precision and
//!   as the overflow-safe intermediate for `Scalar64` math.
//!
//! Transcendentals live in [`math`]: [`math::math128`] evaluates every
//! function over an internal Q63.128 guard-precision type and narrows the
//! result, [`math::math64`] re-exposes the same functions for `Scalar64`.
//! No floating-point instruction participates in any result, so outputs are
//! bit-identical on every platform.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self,
    // Word splitting and fixed-point rescaling are intentional bit casts.
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless
)]

mod error;
mod fp128;
mod fp192;
mod fp64;
/// Transcendental and utility functions for both scalar widths.
pub mod math;
mod scalar;
mod wide;

/// Error type shared by fallible arithmetic and kernel functions.
pub use error::FixedError;
/// Q63.64 fixed-point scalar.
pub use fp128::Scalar128;
/// Q31.32 fixed-point scalar.
pub use fp64::Scalar64;
/// Scalar abstraction consumed by geometry code.
pub use scalar::FixedScalar;

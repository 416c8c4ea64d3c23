// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Failure conditions for fixed-point arithmetic and the math kernel.
///
/// Fixed point has no NaN or infinity encoding, so anything a float would
/// poison is rejected at the call site instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedError {
    /// Division or remainder with a zero divisor.
    #[error("division by zero")]
    DivideByZero,
    /// Checked conversion or arithmetic result not representable in the
    /// target format.
    #[error("value out of range for the fixed-point format")]
    OutOfRange,
    /// Argument outside the documented domain of a kernel function.
    #[error("invalid operation: {op} argument outside its domain")]
    InvalidOperation {
        /// Name of the rejecting function (e.g. `"sqrt"`).
        op: &'static str,
    },
}

impl FixedError {
    pub(crate) fn domain(op: &'static str) -> Self {
        tracing::debug!(target: "detfix::math", op, "domain error");
        Self::InvalidOperation { op }
    }
}

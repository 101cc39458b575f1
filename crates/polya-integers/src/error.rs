//! Errors raised by the rational layer.

use thiserror::Error;

/// Failure building or dividing a [`Rational`](crate::Rational).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
    /// A zero denominator or a division by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Text that is not of the form `n` or `n/d`.
    #[error("invalid rational literal `{0}`")]
    Parse(String),
}

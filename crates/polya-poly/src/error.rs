//! Errors raised by the polynomial engine.
//!
//! All of them indicate a broken caller invariant; none is recoverable by
//! retrying.

use thiserror::Error;

/// A polynomial operation received inputs of the wrong shape.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A monomial's exponent vector does not match the declared variable count.
    #[error("monomial with {found} variables in a polynomial with {expected}")]
    ShapeMismatch {
        /// Declared variable count of the polynomial.
        expected: usize,
        /// Length of the offending exponent vector.
        found: usize,
    },

    /// `extend_to` was asked to drop variables.
    #[error("cannot turn a polynomial in {current} variables into one in {requested}")]
    VariableNarrowing {
        /// Current variable count.
        current: usize,
        /// Requested (smaller) variable count.
        requested: usize,
    },

    /// `eval` received the wrong number of values.
    #[error("length mismatch: {expected} variables but got {found} values")]
    EvaluationArityMismatch {
        /// Variable count of the polynomial.
        expected: usize,
        /// Number of values supplied.
        found: usize,
    },
}

//! # polya-poly
//!
//! Sparse multivariate polynomials with exact rational coefficients.
//!
//! This crate provides:
//! - [`Exponents`], the fixed-length exponent vector of a monomial
//! - [`Polynomial`], a map from exponent vectors to [`Rational`] coefficients
//! - Ring arithmetic, evaluation and the cycle-index direct product
//! - A LaTeX rendering hook ([`latex`])
//!
//! ## Variable counts
//!
//! Every polynomial lives in a declared number of variables `x_1, ..., x_n`.
//! Binary operations on polynomials with different counts widen the smaller
//! operand with [`Polynomial::extend_to`]; nothing ever narrows.
//!
//! [`Rational`]: polya_integers::Rational

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod arithmetic;
pub mod direct_product;
pub mod error;
mod eval;
pub mod exponent;
pub mod latex;
pub mod polynomial;

#[cfg(test)]
mod proptests;

pub use error::PolyError;
pub use exponent::{gcd, pad_and_add, Exponents};
pub use latex::LatexStyle;
pub use polynomial::Polynomial;

//! # polya-integers
//!
//! Exact rational arithmetic for the polya polynomial engine.
//!
//! This crate wraps `dashu` to provide an arbitrary precision rational
//! type ([`Rational`]) that is always kept in lowest terms with a positive
//! denominator. Every polynomial coefficient and every evaluation result in
//! the workspace is a [`Rational`]; there is no floating point anywhere.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::RationalError;
pub use rational::Rational;

//! # polya
//!
//! Pólya-style counting with exact sparse multivariate polynomials.
//!
//! ## Features
//!
//! - **Exact arithmetic**: arbitrary precision rational coefficients, no
//!   floating point anywhere
//! - **Sparse polynomials**: maps from exponent vectors to coefficients with
//!   automatic widening across variable counts
//! - **Direct product**: the cycle-index product of groups acting on a
//!   product of sets
//! - **Cycle indices**: memoised `Z(S_n)` and matrix counting up to row and
//!   column permutation
//!
//! ## Quick Start
//!
//! ```rust
//! use polya::prelude::*;
//!
//! let mut cache = CycleIndexCache::new();
//! // 3 × 3 binary matrices up to row and column permutation
//! assert_eq!(count_matrices(&mut cache, 3, 3, 2), Rational::from_integer(36));
//!
//! let x1 = Polynomial::var(1);
//! let p = (&x1 + &Polynomial::one(1)).pow(2);
//! assert_eq!(p.eval_all(3), Rational::from_integer(16));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polya_cycle as cycle;
pub use polya_integers as integers;
pub use polya_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polya_cycle::{count_matrices, CycleIndexCache};
    pub use polya_integers::{Rational, RationalError};
    pub use polya_poly::{Exponents, LatexStyle, PolyError, Polynomial};
}

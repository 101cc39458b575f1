//! # polya-cycle
//!
//! Cycle-index polynomials of symmetric groups and the counts they yield.
//!
//! The cycle index `Z(S_n)` records the cycle types of all permutations of
//! `n` points. Combined with [`Polynomial::direct_product`] it counts
//! matrices up to permutations of their rows and columns (Pólya
//! enumeration):
//!
//! ```text
//! #{w × h matrices over s symbols} / (S_w × S_h) = (Z(S_w) ⊗ Z(S_h))(s, s, ...)
//! ```
//!
//! [`Polynomial::direct_product`]: polya_poly::Polynomial::direct_product

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod count;
pub mod symmetric;

#[cfg(test)]
mod proptests;

pub use count::count_matrices;
pub use symmetric::CycleIndexCache;

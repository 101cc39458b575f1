//! Exponent vectors and the small integer helpers the engine builds on.
//!
//! Position `i` of an [`Exponents`] holds the power of `x_{i+1}`.
//!
//! Exponent arithmetic is checked: an overflowing exponent panics instead of
//! wrapping to a different monomial.

use smallvec::SmallVec;
use std::fmt;
use std::ops::Index;

/// Inline capacity before an exponent vector spills to the heap.
///
/// Cycle indices of `S_n` for the sizes people actually render stay below
/// this; direct products (`n²` variables) spill.
const INLINE_VARS: usize = 8;

/// The exponent vector of a single monomial.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Exponents(SmallVec<[u64; INLINE_VARS]>);

impl Exponents {
    /// The all-zero vector of length `num_vars` (the monomial 1).
    #[must_use]
    pub fn zeros(num_vars: usize) -> Self {
        Self(SmallVec::from_elem(0, num_vars))
    }

    /// The vector of length `num_vars` with a single 1 at 0-based `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= num_vars`.
    #[must_use]
    pub fn unit(index: usize, num_vars: usize) -> Self {
        assert!(index < num_vars, "unit index {index} out of range for {num_vars} variables");
        let mut exps = Self::zeros(num_vars);
        exps.0[index] = 1;
        exps
    }

    /// Number of variables this vector spans.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the zero-length vector.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if every exponent is zero.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.0.iter().all(|&e| e == 0)
    }

    /// The exponents as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// Sum of all exponents.
    ///
    /// # Panics
    ///
    /// Panics if the sum overflows `u64`.
    #[must_use]
    pub fn total_degree(&self) -> u64 {
        self.0.iter().fold(0, |acc, &e| add_exponents(acc, e))
    }

    /// Right-pads with zeros to `num_vars` entries.
    ///
    /// Vectors that are already at least that long are returned unchanged.
    #[must_use]
    pub fn padded(&self, num_vars: usize) -> Self {
        let mut exps = self.clone();
        if exps.len() < num_vars {
            exps.0.resize(num_vars, 0);
        }
        exps
    }

    /// Non-zero exponents paired with their 0-based variable index.
    pub fn nonzero(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.0.iter().copied().enumerate().filter(|&(_, e)| e != 0)
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u64] {
        &mut self.0
    }
}

impl Index<usize> for Exponents {
    type Output = u64;

    fn index(&self, index: usize) -> &u64 {
        &self.0[index]
    }
}

impl From<Vec<u64>> for Exponents {
    fn from(exps: Vec<u64>) -> Self {
        Self(SmallVec::from_vec(exps))
    }
}

impl From<&[u64]> for Exponents {
    fn from(exps: &[u64]) -> Self {
        Self(SmallVec::from_slice(exps))
    }
}

impl<const N: usize> From<[u64; N]> for Exponents {
    fn from(exps: [u64; N]) -> Self {
        Self(exps.into_iter().collect())
    }
}

impl FromIterator<u64> for Exponents {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Debug for Exponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Exponents").field(&self.as_slice()).finish()
    }
}

/// Zips two sequences, treating missing trailing entries as zero.
///
/// The result is as long as the longer input.
pub fn zip_padded<'a>(a: &'a [u64], b: &'a [u64]) -> impl Iterator<Item = (u64, u64)> + 'a {
    let len = a.len().max(b.len());
    (0..len).map(move |i| {
        (
            a.get(i).copied().unwrap_or(0),
            b.get(i).copied().unwrap_or(0),
        )
    })
}

/// `a + b`, panicking on overflow.
pub(crate) fn add_exponents(a: u64, b: u64) -> u64 {
    a.checked_add(b).expect("exponent overflows u64")
}

/// `a * b`, panicking on overflow.
pub(crate) fn mul_exponents(a: u64, b: u64) -> u64 {
    a.checked_mul(b).expect("exponent overflows u64")
}

/// Adds two exponent vectors elementwise after right-padding the shorter
/// one with zeros.
///
/// This is monomial multiplication across variable counts: the result has
/// `max(a.len(), b.len())` entries.
///
/// # Panics
///
/// Panics if an exponent sum overflows `u64`.
#[must_use]
pub fn pad_and_add(a: &Exponents, b: &Exponents) -> Exponents {
    zip_padded(a.as_slice(), b.as_slice())
        .map(|(x, y)| add_exponents(x, y))
        .collect()
}

/// Greatest common divisor by the Euclidean algorithm; `gcd(0, j) = j`.
#[must_use]
pub fn gcd(mut i: usize, mut j: usize) -> usize {
    while i > 0 {
        (i, j) = (j % i, i);
    }
    j
}

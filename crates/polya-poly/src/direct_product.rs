//! The direct product of cycle-index polynomials.
//!
//! For cycle indices `Z(G)` and `Z(H)` of permutation groups acting on sets
//! `A` and `B`, the direct product `Z(G) ⊗ Z(H)` is the cycle index of
//! `G × H` acting on `A × B` (Harary & Palmer; Definition 2.2 of
//! doi:10.1016/0012-365X(93)90015-L). A cycle of length `i` and a cycle of
//! length `j` combine into `gcd(i, j)` cycles of length `lcm(i, j)`, so
//!
//! ```text
//! x_i^a ⊗ x_j^b = x_{lcm(i,j)}^{a·b·gcd(i,j)}
//! ```
//!
//! extended multiplicatively over monomials and bilinearly over
//! polynomials. Both operands are first widened to `n` variables; the
//! result lives in `n²` variables since `lcm(i, j) ≤ n²`.

use tracing::{debug, instrument};

use crate::exponent::{add_exponents, gcd, mul_exponents, Exponents};
use crate::polynomial::{widen_pair, Polynomial};

/// How one pair of 1-indexed variables `(i, j)` feeds the product monomial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CyclePairing {
    /// 0-based slot of `x_{lcm(i,j)}` in the product exponent vector.
    target: usize,
    /// `gcd(i, j)`, the number of product cycles per pair of cycles.
    multiplicity: u64,
}

/// Precomputed `(i, j) -> (lcm - 1, gcd)` table for `n` variables, row-major
/// over 0-based `(i - 1, j - 1)`.
#[derive(Debug)]
struct PairingTable {
    num_vars: usize,
    pairings: Vec<CyclePairing>,
}

impl PairingTable {
    fn new(num_vars: usize) -> Self {
        let mut pairings = Vec::with_capacity(num_vars * num_vars);
        for i in 1..=num_vars {
            for j in 1..=num_vars {
                let d = gcd(i, j);
                pairings.push(CyclePairing {
                    target: i * j / d - 1,
                    multiplicity: u64::try_from(d).expect("gcd fits in u64"),
                });
            }
        }
        Self { num_vars, pairings }
    }

    fn get(&self, i: usize, j: usize) -> CyclePairing {
        self.pairings[i * self.num_vars + j]
    }

    /// Merges two length-`n` exponent vectors into one of length `n²`.
    fn merge(&self, e: &Exponents, f: &Exponents) -> Exponents {
        debug_assert_eq!(e.len(), self.num_vars);
        debug_assert_eq!(f.len(), self.num_vars);

        let mut g = Exponents::zeros(self.num_vars * self.num_vars);
        let slots = g.as_mut_slice();
        for (i, a) in e.nonzero() {
            for (j, b) in f.nonzero() {
                let pairing = self.get(i, j);
                let exponent = mul_exponents(mul_exponents(a, b), pairing.multiplicity);
                slots[pairing.target] = add_exponents(slots[pairing.target], exponent);
            }
        }
        g
    }
}

/// Merges two exponent vectors of equal length `n` into the exponent vector
/// of length `n²` of their direct product.
///
/// For every pair of 1-indexed positions `(i, j)`, `e[i] · f[j] · gcd(i, j)`
/// is added to position `lcm(i, j)`.
///
/// # Panics
///
/// Panics if `e` and `f` differ in length, or if an exponent overflows `u64`.
#[must_use]
pub fn merge_exponents(e: &Exponents, f: &Exponents) -> Exponents {
    assert_eq!(e.len(), f.len(), "exponent vectors must have equal length");
    PairingTable::new(e.len()).merge(e, f)
}

impl Polynomial {
    /// The direct product `self ⊗ other`.
    ///
    /// Operands in `m` and `k` variables are widened to `n = max(m, k)`; the
    /// result has `n²` variables. Coefficients multiply and products that
    /// land on the same exponent vector are summed.
    ///
    /// # Panics
    ///
    /// Panics if a product exponent overflows `u64`.
    #[must_use]
    #[instrument(skip_all, fields(lhs_terms = self.len(), rhs_terms = other.len()))]
    pub fn direct_product(&self, other: &Self) -> Self {
        let (lhs, rhs, n) = widen_pair(self, other);
        let table = PairingTable::new(n);

        let mut product = Self::with_capacity(n * n, lhs.len() * rhs.len());
        for (e, c) in lhs.terms() {
            for (f, d) in rhs.terms() {
                product.accumulate(table.merge(e, f), c * d);
            }
        }

        debug!(num_vars = n * n, terms = product.len(), "direct product");
        product
    }
}

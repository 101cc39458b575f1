//! Cycle index of the symmetric group.
//!
//! Uses the recurrence
//!
//! ```text
//! Z(S_0) = 1,   Z(S_n) = (1/n) Σ_{i=1..n} x_i · Z(S_{n-i})
//! ```
//!
//! which follows from splitting off the cycle containing the first point.

use polya_integers::Rational;
use polya_poly::Polynomial;
use tracing::{debug, instrument};

/// Memoised cycle indices `Z(S_0), Z(S_1), ...`.
///
/// Entry `n` is a polynomial in exactly `n` variables. The cache only grows;
/// asking for `Z(S_n)` fills every smaller entry on the way.
#[derive(Clone, Debug)]
pub struct CycleIndexCache {
    /// `symmetric[n]` is `Z(S_n)`.
    symmetric: Vec<Polynomial>,
}

impl Default for CycleIndexCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleIndexCache {
    /// A cache seeded with `Z(S_0) = 1` and `Z(S_1) = x_1`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            symmetric: vec![Polynomial::one(0), Polynomial::var(1)],
        }
    }

    /// Number of cycle indices already computed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symmetric.len()
    }

    /// Always false: the seeded entries are never evicted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symmetric.is_empty()
    }

    /// The cycle index `Z(S_n)` of the symmetric group on `n` letters.
    #[instrument(skip(self), level = "debug")]
    pub fn symmetric(&mut self, n: usize) -> &Polynomial {
        while self.symmetric.len() <= n {
            let next = self.next_symmetric();
            self.symmetric.push(next);
        }
        &self.symmetric[n]
    }

    /// Computes `Z(S_m)` for `m = self.len()` from the cached smaller ones.
    fn next_symmetric(&self) -> Polynomial {
        let m = self.symmetric.len();
        let mut sum = Polynomial::zero(m);
        for i in 1..=m {
            sum += &self.symmetric[m - i] * &Polynomial::var(i);
        }
        let weight = Rational::from(m)
            .recip()
            .expect("cache is seeded with two entries");
        let z = sum.scale(&weight);
        debug!(n = m, terms = z.len(), "cycle index");
        z
    }
}

//! Exact evaluation at rational points.

use num_traits::{One, Zero};
use polya_integers::Rational;
use rustc_hash::FxHashMap;

use crate::polynomial::Polynomial;
use crate::PolyError;

impl Polynomial {
    /// Evaluates at `values`, where `values[i]` is substituted for `x_{i+1}`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::EvaluationArityMismatch`] unless exactly
    /// [`num_vars`](Self::num_vars) values are given.
    pub fn eval(&self, values: &[Rational]) -> Result<Rational, PolyError> {
        if values.len() != self.num_vars() {
            return Err(PolyError::EvaluationArityMismatch {
                expected: self.num_vars(),
                found: values.len(),
            });
        }

        let mut total = Rational::zero();
        for (exps, coeff) in self.terms() {
            let monomial: Rational = exps
                .nonzero()
                .map(|(i, e)| values[i].pow(e))
                .fold(Rational::one(), |acc, v| acc * v);
            total += coeff * &monomial;
        }
        Ok(total)
    }

    /// Evaluates with every variable set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if a monomial's total degree overflows `u64`.
    #[must_use]
    pub fn eval_all(&self, value: impl Into<Rational>) -> Rational {
        let value = value.into();
        if self.is_empty() {
            return Rational::zero();
        }

        // Substituting one value everywhere only depends on total degree.
        let mut powers: FxHashMap<u64, Rational> = FxHashMap::default();
        let mut total = Rational::zero();
        for (exps, coeff) in self.terms() {
            let power = powers
                .entry(exps.total_degree())
                .or_insert_with_key(|&degree| value.pow(degree));
            total += coeff * &*power;
        }
        total
    }
}

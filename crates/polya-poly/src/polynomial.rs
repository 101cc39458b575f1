//! The sparse polynomial type.
//!
//! A [`Polynomial`] maps exponent vectors to rational coefficients. Terms
//! remember the order in which their exponent vector first appeared; that
//! order has no algebraic meaning but drives how [`latex`](crate::latex)
//! groups monomials into rows.

use std::borrow::Cow;
use std::fmt;

use num_traits::{One, Zero};
use polya_integers::Rational;
use rustc_hash::FxHashMap;

use crate::exponent::Exponents;
use crate::PolyError;

/// A multivariate polynomial in `x_1, ..., x_{num_vars}` over the rationals.
///
/// Every exponent vector has exactly `num_vars` entries. Entries with a zero
/// coefficient are allowed; addition keeps them while subtraction and
/// [`prune_zeros`](Self::prune_zeros) remove them.
#[derive(Clone)]
pub struct Polynomial {
    /// Number of variables.
    num_vars: usize,
    /// Terms in first-insertion order.
    terms: Vec<(Exponents, Rational)>,
    /// Inverse map: exponent vector -> position in `terms`.
    index: FxHashMap<Exponents, usize>,
}

impl Polynomial {
    /// Creates an empty polynomial with room for `capacity` terms.
    pub(crate) fn with_capacity(num_vars: usize, capacity: usize) -> Self {
        Self {
            num_vars,
            terms: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Builds a polynomial from raw monomials.
    ///
    /// Repeated exponent vectors have their coefficients summed.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ShapeMismatch`] if an exponent vector's length
    /// differs from `num_vars`.
    pub fn from_terms<I, E>(num_vars: usize, terms: I) -> Result<Self, PolyError>
    where
        I: IntoIterator<Item = (E, Rational)>,
        E: Into<Exponents>,
    {
        let terms = terms.into_iter();
        let mut poly = Self::with_capacity(num_vars, terms.size_hint().0);
        for (exps, coeff) in terms {
            let exps = exps.into();
            if exps.len() != num_vars {
                return Err(PolyError::ShapeMismatch {
                    expected: num_vars,
                    found: exps.len(),
                });
            }
            poly.accumulate(exps, coeff);
        }
        Ok(poly)
    }

    /// The zero polynomial in `num_vars` variables.
    #[must_use]
    pub fn zero(num_vars: usize) -> Self {
        Self::with_capacity(num_vars, 0)
    }

    /// The constant `coeff` in `num_vars` variables.
    ///
    /// A zero coefficient gives the empty polynomial.
    #[must_use]
    pub fn constant(num_vars: usize, coeff: Rational) -> Self {
        if coeff.is_zero() {
            return Self::zero(num_vars);
        }
        let mut poly = Self::with_capacity(num_vars, 1);
        poly.accumulate(Exponents::zeros(num_vars), coeff);
        poly
    }

    /// The constant 1 in `num_vars` variables.
    #[must_use]
    pub fn one(num_vars: usize) -> Self {
        Self::constant(num_vars, Rational::one())
    }

    /// The variable `x_i` (1-indexed), as a polynomial in exactly `i` variables.
    ///
    /// # Panics
    ///
    /// Panics if `i == 0`; variables are numbered from 1.
    #[must_use]
    pub fn var(i: usize) -> Self {
        assert!(i >= 1, "variables are numbered from 1");
        let mut poly = Self::with_capacity(i, 1);
        poly.accumulate(Exponents::unit(i - 1, i), Rational::one());
        poly
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Returns the number of stored monomials, zero coefficients included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if no monomial is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if every stored coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.iter().all(|(_, c)| c.is_zero())
    }

    /// Iterates over `(exponents, coefficient)` in insertion order.
    pub fn terms(&self) -> impl ExactSizeIterator<Item = (&Exponents, &Rational)> + '_ {
        self.terms.iter().map(|(e, c)| (e, c))
    }

    /// Returns the stored coefficient of a monomial, if present.
    #[must_use]
    pub fn coeff(&self, exps: &Exponents) -> Option<&Rational> {
        self.index.get(exps).map(|&i| &self.terms[i].1)
    }

    /// Maximum total degree over the stored monomials.
    #[must_use]
    pub fn total_degree(&self) -> u64 {
        self.terms
            .iter()
            .map(|(e, _)| e.total_degree())
            .max()
            .unwrap_or(0)
    }

    /// Adds `coeff` to the coefficient of `exps`, appending a new term if the
    /// monomial is not present yet.
    pub(crate) fn accumulate(&mut self, exps: Exponents, coeff: Rational) {
        debug_assert_eq!(exps.len(), self.num_vars);
        match self.index.get(&exps).copied() {
            Some(i) => self.terms[i].1 += coeff,
            None => {
                self.index.insert(exps.clone(), self.terms.len());
                self.terms.push((exps, coeff));
            }
        }
    }

    /// Applies `f` to every coefficient, keeping exponents and order.
    pub(crate) fn map_coeffs(&self, mut f: impl FnMut(&Rational) -> Rational) -> Self {
        Self {
            num_vars: self.num_vars,
            terms: self.terms.iter().map(|(e, c)| (e.clone(), f(c))).collect(),
            index: self.index.clone(),
        }
    }

    /// Widens the polynomial to `num_vars` variables by right-padding every
    /// exponent vector with zeros. The value is unchanged; the new variables
    /// simply do not occur.
    ///
    /// When `num_vars` equals the current count the polynomial is borrowed
    /// back without copying.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::VariableNarrowing`] if `num_vars` is smaller than
    /// the current count.
    pub fn extend_to(&self, num_vars: usize) -> Result<Cow<'_, Self>, PolyError> {
        if num_vars < self.num_vars {
            return Err(PolyError::VariableNarrowing {
                current: self.num_vars,
                requested: num_vars,
            });
        }
        Ok(self.widened(num_vars))
    }

    /// [`extend_to`](Self::extend_to) without the narrowing check; counts at
    /// or below the current one borrow `self`.
    fn widened(&self, num_vars: usize) -> Cow<'_, Self> {
        if num_vars <= self.num_vars {
            return Cow::Borrowed(self);
        }
        let mut widened = Self::with_capacity(num_vars, self.len());
        for (exps, coeff) in &self.terms {
            widened.accumulate(exps.padded(num_vars), coeff.clone());
        }
        Cow::Owned(widened)
    }

    /// Removes every monomial whose coefficient is exactly zero.
    #[must_use]
    pub fn prune_zeros(self) -> Self {
        if self.terms.iter().all(|(_, c)| !c.is_zero()) {
            return self;
        }
        let mut pruned = Self::with_capacity(self.num_vars, self.len());
        for (exps, coeff) in self.terms {
            if !coeff.is_zero() {
                pruned.accumulate(exps, coeff);
            }
        }
        pruned
    }
}

/// Brings two operands to a common variable count, widening the smaller.
pub(crate) fn widen_pair<'a>(
    a: &'a Polynomial,
    b: &'a Polynomial,
) -> (Cow<'a, Polynomial>, Cow<'a, Polynomial>, usize) {
    let n = a.num_vars.max(b.num_vars);
    (a.widened(n), b.widened(n), n)
}

impl PartialEq for Polynomial {
    /// Compares as maps: insertion order is ignored, stored zero
    /// coefficients are not.
    fn eq(&self, other: &Self) -> bool {
        self.num_vars == other.num_vars
            && self.len() == other.len()
            && self
                .terms
                .iter()
                .all(|(e, c)| other.coeff(e).is_some_and(|d| c == d))
    }
}

impl Eq for Polynomial {}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("num_vars", &self.num_vars)
            .field("terms", &self.terms)
            .finish()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "0");
        }

        let terms: Vec<_> = self
            .terms
            .iter()
            .map(|(exps, c)| {
                let vars: Vec<_> = exps
                    .nonzero()
                    .map(|(i, e)| {
                        if e == 1 {
                            format!("x_{}", i + 1)
                        } else {
                            format!("x_{}^{e}", i + 1)
                        }
                    })
                    .collect();
                if vars.is_empty() {
                    c.to_string()
                } else if c.is_one() {
                    vars.join("*")
                } else {
                    format!("{c}*{}", vars.join("*"))
                }
            })
            .collect();

        write!(f, "{}", terms.join(" + "))
    }
}

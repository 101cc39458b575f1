//! Ring operations on [`Polynomial`].
//!
//! Every operator builds a fresh polynomial; operands are never touched.
//! Addition keeps monomials whose coefficients cancel to zero, subtraction
//! prunes them. Callers that compare structurally rely on that difference.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use num_traits::{One, Zero};
use polya_integers::Rational;
use tracing::trace;

use crate::exponent::pad_and_add;
use crate::polynomial::{widen_pair, Polynomial};

impl Polynomial {
    /// Multiplies every coefficient by `c`.
    ///
    /// Scaling by zero gives the empty polynomial in the same variable count,
    /// whatever was stored before.
    #[must_use]
    pub fn scale(&self, c: &Rational) -> Self {
        if c.is_zero() {
            return Self::zero(self.num_vars());
        }
        self.map_coeffs(|x| x * c)
    }

    /// Raises to the power `n` by repeated squaring.
    ///
    /// `p.pow(0)` is the constant 1 in `p`'s variable count.
    ///
    /// # Panics
    ///
    /// Panics if a resulting exponent overflows `u64`.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        match n {
            0 => Self::one(self.num_vars()),
            1 => self.clone(),
            _ => {
                let half = self.pow(n / 2);
                let square = &half * &half;
                trace!(n, terms = square.len(), "squared");
                if n % 2 == 0 {
                    square
                } else {
                    self * &square
                }
            }
        }
    }

    fn add_impl(&self, rhs: &Self) -> Self {
        let (lhs, rhs, _) = widen_pair(self, rhs);
        // Monomials of the right operand come first in the result.
        let mut sum = rhs.into_owned();
        for (exps, coeff) in lhs.terms() {
            sum.accumulate(exps.clone(), coeff.clone());
        }
        sum
    }

    fn sub_impl(&self, rhs: &Self) -> Self {
        self.add_impl(&rhs.neg_impl()).prune_zeros()
    }

    fn neg_impl(&self) -> Self {
        self.scale(&-Rational::one())
    }

    /// Schoolbook product. Operands may have different variable counts:
    /// exponent vectors are padded pairwise.
    fn mul_impl(&self, rhs: &Self) -> Self {
        let num_vars = self.num_vars().max(rhs.num_vars());
        let mut product = Self::with_capacity(num_vars, self.len() * rhs.len());
        for (e, c) in self.terms() {
            for (f, d) in rhs.terms() {
                product.accumulate(pad_and_add(e, f), c * d);
            }
        }
        product
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $impl:ident) => {
        impl $trait for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                self.$impl(&rhs)
            }
        }

        impl $trait<&Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                self.$impl(rhs)
            }
        }

        impl $trait<Polynomial> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                self.$impl(&rhs)
            }
        }

        impl $trait for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                self.$impl(rhs)
            }
        }
    };
}

forward_binop!(Add, add, add_impl);
forward_binop!(Sub, sub, sub_impl);
forward_binop!(Mul, mul, mul_impl);

impl AddAssign<&Polynomial> for Polynomial {
    fn add_assign(&mut self, rhs: &Polynomial) {
        *self = self.add_impl(rhs);
    }
}

impl AddAssign for Polynomial {
    fn add_assign(&mut self, rhs: Polynomial) {
        *self = self.add_impl(&rhs);
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.neg_impl()
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.neg_impl()
    }
}

// Scalar multiplication, scalar on the left.
impl Mul<&Polynomial> for &Rational {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        rhs.scale(self)
    }
}

impl Mul<Polynomial> for Rational {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        rhs.scale(&self)
    }
}

impl Mul<&Polynomial> for i64 {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        rhs.scale(&Rational::from(self))
    }
}

impl Mul<Polynomial> for i64 {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        rhs.scale(&Rational::from(self))
    }
}

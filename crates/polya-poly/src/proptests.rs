//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use polya_integers::Rational;
    use proptest::prelude::*;

    use crate::{Exponents, Polynomial};

    // Strategy for generating small rational coefficients
    fn small_coeff() -> impl Strategy<Value = Rational> {
        (-20i64..20i64, 1i64..6i64).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    // Strategy for generating sparse polynomials in 1-3 variables, degree < 4
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        (1usize..=3).prop_flat_map(|num_vars| {
            proptest::collection::vec(
                (proptest::collection::vec(0u64..4, num_vars), small_coeff()),
                0..5,
            )
            .prop_map(move |terms| {
                Polynomial::from_terms(
                    num_vars,
                    terms.into_iter().map(|(e, c)| (Exponents::from(e), c)),
                )
                .unwrap()
            })
        })
    }

    fn point(n: usize) -> impl Strategy<Value = Vec<Rational>> {
        proptest::collection::vec(small_coeff(), n)
    }

    // Widens both sides to a common count so structural equality applies.
    fn common(a: &Polynomial, b: &Polynomial) -> (Polynomial, Polynomial) {
        let n = a.num_vars().max(b.num_vars());
        (
            a.extend_to(n).unwrap().into_owned(),
            b.extend_to(n).unwrap().into_owned(),
        )
    }

    proptest! {
        // Ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!((&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // Compare after pruning: addition keeps cancelled terms.
            let left = (&a * &(&b + &c)).prune_zeros();
            let right = (&a * &b + &a * &c).prune_zeros();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_sub_self_is_empty(a in small_poly()) {
            let diff = &a - &a;
            prop_assert!(diff.is_empty());
            prop_assert_eq!(diff, Polynomial::zero(a.num_vars()));
        }

        #[test]
        fn poly_add_sub_roundtrip(a in small_poly(), b in small_poly()) {
            let (a, b) = common(&a, &b);
            prop_assert_eq!(&(&a + &b) - &b, a.prune_zeros());
        }

        #[test]
        fn poly_scale_zero(a in small_poly()) {
            prop_assert_eq!(a.scale(&Rational::zero()), Polynomial::zero(a.num_vars()));
        }

        #[test]
        fn poly_pow_small(a in small_poly(), n in 0u32..4) {
            let expected = (0..n).fold(Polynomial::one(a.num_vars()), |acc, _| &acc * &a);
            prop_assert_eq!(a.pow(n).prune_zeros(), expected.prune_zeros());
        }

        // Evaluation is a ring homomorphism

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in point(3)) {
            let sum = &a + &b;
            let at = |p: &Polynomial| p.eval(&x[..p.num_vars()]).unwrap();
            prop_assert_eq!(at(&sum), at(&a) + at(&b));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in point(3)) {
            let product = &a * &b;
            let at = |p: &Polynomial| p.eval(&x[..p.num_vars()]).unwrap();
            prop_assert_eq!(at(&product), at(&a) * at(&b));
        }

        #[test]
        fn poly_eval_all_matches_eval(a in small_poly(), v in small_coeff()) {
            let values = vec![v.clone(); a.num_vars()];
            prop_assert_eq!(a.eval_all(v), a.eval(&values).unwrap());
        }

        #[test]
        fn poly_extend_preserves_value(
            a in small_poly(),
            extra in 0usize..3,
            x in point(6)
        ) {
            let n = a.num_vars() + extra;
            let wide = a.extend_to(n).unwrap();
            prop_assert_eq!(wide.num_vars(), n);
            prop_assert_eq!(
                wide.eval(&x[..n]).unwrap(),
                a.eval(&x[..a.num_vars()]).unwrap()
            );
        }

        // Direct product

        #[test]
        fn direct_product_shape(a in small_poly(), b in small_poly()) {
            let n = a.num_vars().max(b.num_vars());
            prop_assert_eq!(a.direct_product(&b).num_vars(), n * n);
        }

        #[test]
        fn direct_product_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.direct_product(&b), b.direct_product(&a));
        }

        #[test]
        fn direct_product_unit(a in small_poly()) {
            // x_1 is the cycle index of the trivial group on one point
            let p = a.direct_product(&Polynomial::var(1));
            let n = a.num_vars();
            let expected = a.extend_to(n * n).unwrap().into_owned();
            prop_assert_eq!(p.prune_zeros(), expected.prune_zeros());
        }
    }
}

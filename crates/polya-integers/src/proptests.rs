//! Property-based tests for exact rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::Rational;

    // Strategy for generating small rationals with non-zero denominators
    fn small_rational() -> impl Strategy<Value = Rational> {
        (-200i64..200i64, prop_oneof![(-50i64..=-1i64), (1i64..=50i64)])
            .prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    proptest! {
        // Field axioms

        #[test]
        fn rational_add_commutative(a in small_rational(), b in small_rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_add_associative(
            a in small_rational(),
            b in small_rational(),
            c in small_rational()
        ) {
            prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
        }

        #[test]
        fn rational_mul_commutative(a in small_rational(), b in small_rational()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn rational_distributive(
            a in small_rational(),
            b in small_rational(),
            c in small_rational()
        ) {
            prop_assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn rational_additive_inverse(a in small_rational()) {
            prop_assert!((&a + &(-&a)).is_zero());
            prop_assert!((&a - &a).is_zero());
        }

        #[test]
        fn rational_recip(a in small_rational()) {
            if a.is_zero() {
                prop_assert!(a.recip().is_err());
            } else {
                prop_assert!((&a * &a.recip().unwrap()).is_one());
            }
        }

        // Representation invariants

        #[test]
        fn rational_lowest_terms(n in -1000i64..1000i64, d in 1i64..1000i64, k in 1i64..20i64) {
            prop_assert_eq!(Rational::new(n * k, d * k).unwrap(), Rational::new(n, d).unwrap());
        }

        #[test]
        fn rational_display_roundtrip(a in small_rational()) {
            prop_assert_eq!(a.to_string().parse::<Rational>().unwrap(), a);
        }

        #[test]
        fn rational_pow_is_repeated_mul(a in small_rational(), e in 0u64..6) {
            let expected = (0..e).fold(Rational::one(), |acc, _| acc * &a);
            prop_assert_eq!(a.pow(e), expected);
        }
    }
}

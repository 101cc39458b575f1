//! Property-based tests for cycle indices and matrix counts.

#[cfg(test)]
mod tests {
    use num_traits::One;
    use polya_integers::Rational;
    use proptest::prelude::*;

    use crate::{count_matrices, CycleIndexCache};

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn cycle_index_has_n_vars(n in 0usize..8) {
            let mut cache = CycleIndexCache::new();
            prop_assert_eq!(cache.symmetric(n).num_vars(), n);
        }

        #[test]
        fn cycle_index_at_one_is_one(n in 0usize..8) {
            let mut cache = CycleIndexCache::new();
            prop_assert_eq!(cache.symmetric(n).eval_all(1), Rational::one());
        }

        #[test]
        fn count_is_integral(w in 0usize..4, h in 0usize..4, s in 1i64..4) {
            let mut cache = CycleIndexCache::new();
            prop_assert!(count_matrices(&mut cache, w, h, s).is_integer());
        }

        #[test]
        fn count_is_symmetric(w in 0usize..4, h in 0usize..4, s in 1i64..4) {
            let mut cache = CycleIndexCache::new();
            prop_assert_eq!(
                count_matrices(&mut cache, w, h, s),
                count_matrices(&mut cache, h, w, s)
            );
        }

        #[test]
        fn count_bounded_by_all_matrices(w in 1usize..4, h in 1usize..4, s in 1i64..4) {
            // orbits <= matrices <= orbits * w! * h!
            let mut cache = CycleIndexCache::new();
            let orbits = count_matrices(&mut cache, w, h, s);
            let all = Rational::from_integer(s).pow(u64::try_from(w * h).unwrap());
            let group: usize = (1..=w).product::<usize>() * (1..=h).product::<usize>();
            prop_assert!(orbits <= all);
            prop_assert!(all <= orbits * Rational::from(group));
        }
    }
}

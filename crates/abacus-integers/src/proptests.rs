//! Property-based tests for rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{CompareConfig, Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    proptest! {
        // Canonical form

        #[test]
        fn construct_is_canonical(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d).unwrap();
            prop_assert!(r.denominator().is_positive());
            prop_assert!(r.numerator().gcd(r.denominator()).is_one());
        }

        #[test]
        fn construct_is_scale_invariant(
            n in small_int(),
            d in non_zero_int(),
            k in non_zero_int()
        ) {
            prop_assert_eq!(
                Rational::from_i64(n, d).unwrap(),
                Rational::from_i64(n * k, d * k).unwrap()
            );
        }

        #[test]
        fn zero_denominator_always_fails(n in small_int()) {
            prop_assert!(Rational::new(Integer::new(n), Integer::zero()).is_err());
        }

        // Field axioms

        #[test]
        fn add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!((&a + &b) + &c, a + (&b + &c));
        }

        #[test]
        fn mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn mul_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!((&a * &b) * &c, a * (&b * &c));
        }

        #[test]
        fn distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn additive_inverse(a in rational()) {
            prop_assert_eq!(&a + &(-&a), Rational::zero());
        }

        #[test]
        fn multiplicative_inverse(n in non_zero_int(), d in non_zero_int()) {
            let a = Rational::from_i64(n, d).unwrap();
            let inv = a.recip().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn sub_undoes_add(a in rational(), b in rational()) {
            prop_assert_eq!(&(&a + &b) - &b, a);
        }

        // Text form

        #[test]
        fn display_parse_roundtrip(a in rational()) {
            prop_assert_eq!(a.to_string().parse::<Rational>(), Ok(a));
        }

        // Ordering

        #[test]
        fn order_matches_sign_of_difference(a in rational(), b in rational()) {
            prop_assert_eq!(a.cmp(&b), (&a - &b).signum().cmp(&0));
        }

        #[test]
        fn decimal_order_matches_exact_for_small_values(a in rational(), b in rational()) {
            prop_assert_eq!(a.compare_with(&b, &CompareConfig::decimal()), a.cmp(&b));
        }
    }
}

//! Property-based tests for the core routines.

use num_bigint::BigUint;
use proptest::prelude::*;

use numkit_core::{calculate, factorial, factorial_u64, find_max, CalcError};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The maximum bounds every element and is itself an element.
    #[test]
    fn max_is_upper_bound_and_member(values in prop::collection::vec(any::<i64>(), 1..200)) {
        let max = find_max(&values).unwrap();
        prop_assert!(values.iter().all(|&v| v <= max));
        prop_assert!(values.contains(&max));
    }

    /// Finite floats obey the same bound and membership rules.
    #[test]
    fn max_of_finite_floats(values in prop::collection::vec(-1.0e9f64..1.0e9, 1..100)) {
        let max = find_max(&values).unwrap();
        prop_assert!(values.iter().all(|&v| v <= max));
        prop_assert!(values.contains(&max));
    }

    /// Agrees with the standard library's maximum for integers.
    #[test]
    fn max_matches_iterator_max(values in prop::collection::vec(any::<i32>(), 0..100)) {
        prop_assert_eq!(find_max(&values), values.iter().copied().max());
    }

    /// n! = n × (n − 1)! for n ≥ 1.
    #[test]
    fn factorial_recurrence(n in 1i64..300) {
        let prev = factorial(n - 1).unwrap();
        let cur = factorial(n).unwrap();
        prop_assert_eq!(cur, prev * BigUint::from(n.unsigned_abs()));
    }

    /// Every negative input is a domain error.
    #[test]
    fn factorial_negative_rejected(n in i64::MIN..0) {
        prop_assert_eq!(factorial(n), Err(CalcError::Domain(n)));
    }

    /// Table fast path agrees with the recursive result.
    #[test]
    fn factorial_u64_agrees(n in 0i64..=20) {
        let small = factorial_u64(n).unwrap();
        prop_assert_eq!(BigUint::from(small), factorial(n).unwrap());
    }

    /// Sum and product do not depend on operand order.
    #[test]
    fn calculate_commutative(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let ab = calculate(a, b).unwrap();
        let ba = calculate(b, a).unwrap();
        prop_assert_eq!(ab.sum, ba.sum);
        prop_assert_eq!(ab.product, ba.product);
        prop_assert_eq!(ab.difference, -ba.difference);
    }

    /// A zero divisor yields (x, x, 0, undefined).
    #[test]
    fn calculate_zero_divisor(x in -1_000_000i64..1_000_000) {
        let r = calculate(x, 0).unwrap();
        prop_assert_eq!(r.sum, x);
        prop_assert_eq!(r.difference, x);
        prop_assert_eq!(r.product, 0);
        prop_assert_eq!(r.quotient, None);
    }

    /// A non-zero divisor always yields a quotient that multiplies back.
    #[test]
    fn calculate_quotient_defined(x in -10_000i64..10_000, y in 1i64..10_000) {
        let q = calculate(x, y).unwrap().quotient.unwrap();
        #[allow(clippy::cast_precision_loss)]
        let back = q * y as f64;
        #[allow(clippy::cast_precision_loss)]
        let expected = x as f64;
        prop_assert!((back - expected).abs() < 1e-6);
    }

    /// Over the whole `i64` range, results match wide arithmetic or report
    /// overflow; nothing panics.
    #[test]
    fn calculate_full_i64_range(a in any::<i64>(), b in any::<i64>()) {
        let wide = (
            i128::from(a) + i128::from(b),
            i128::from(a) - i128::from(b),
            i128::from(a) * i128::from(b),
        );
        let fits = |v: i128| i64::try_from(v).is_ok();
        match calculate(a, b) {
            Ok(r) => {
                prop_assert_eq!(i128::from(r.sum), wide.0);
                prop_assert_eq!(i128::from(r.difference), wide.1);
                prop_assert_eq!(i128::from(r.product), wide.2);
                prop_assert_eq!(r.quotient.is_none(), b == 0);
            }
            Err(err) => {
                prop_assert!(matches!(err, CalcError::ArithmeticOverflow(_)));
                prop_assert!(!(fits(wide.0) && fits(wide.1) && fits(wide.2)));
            }
        }
    }
}

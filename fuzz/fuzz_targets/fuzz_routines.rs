#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use numkit_core::{calculate, factorial, factorial_u64, find_max, CalcError};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }

    // First 8 bytes drive the factorial; cap the magnitude for speed.
    let raw = i64::from_le_bytes(data[..8].try_into().unwrap());
    let n = raw % 2_000;
    match factorial(n) {
        Ok(value) => {
            assert!(n >= 0);
            if let Ok(small) = factorial_u64(n) {
                assert_eq!(BigUint::from(small), value);
            }
        }
        Err(err) => assert_eq!(err, CalcError::Domain(n)),
    }

    // Remaining bytes form the sequence for the maximum finder.
    let values: Vec<i8> = data[8..].iter().map(|&b| b as i8).collect();
    match find_max(&values) {
        Some(max) => {
            assert!(values.iter().all(|&v| v <= max));
            assert!(values.contains(&max));
        }
        None => assert!(values.is_empty()),
    }

    // i8 operands overflow readily; wide results must agree or be rejected.
    if let [x, y, ..] = values[..] {
        let wide = i16::from(x) * i16::from(y);
        match calculate(x, y) {
            Ok(r) => {
                assert_eq!(r.quotient.is_none(), y == 0);
                assert_eq!(i16::from(r.product), wide);
            }
            Err(err) => assert!(matches!(err, CalcError::ArithmeticOverflow(_))),
        }
    }
});

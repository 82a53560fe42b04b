//! Recursive factorial with boundary validation.
//!
//! `factorial` follows the structural definition n! = n × (n − 1)! with the
//! base case n ≤ 1. Negative inputs and inputs above the configured limit are
//! rejected before the first recursive call. The configured limit itself is
//! clamped to [`HARD_MAX_FACTORIAL_N`].

use num_bigint::BigUint;

use crate::constants::{
    DEFAULT_MAX_FACTORIAL_N, FACTORIAL_TABLE, HARD_MAX_FACTORIAL_N, MAX_FACTORIAL_U64,
};
use crate::error::CalcError;
use crate::options::Options;

/// Compute n! with the default recursion limit.
///
/// # Example
/// ```
/// assert_eq!(numkit_core::factorial(5).unwrap().to_string(), "120");
/// assert!(numkit_core::factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> Result<BigUint, CalcError> {
    factorial_bounded(n, DEFAULT_MAX_FACTORIAL_N)
}

/// Compute n! honouring `opts.max_factorial_n`, capped at [`HARD_MAX_FACTORIAL_N`].
pub fn factorial_with_options(n: i64, opts: &Options) -> Result<BigUint, CalcError> {
    let opts = opts.clone().normalize();
    factorial_bounded(n, opts.max_factorial_n)
}

/// Compute n! as a `u64` from the precomputed table.
///
/// Returns [`CalcError::Overflow`] for n > 20.
#[allow(clippy::cast_possible_truncation)]
pub fn factorial_u64(n: i64) -> Result<u64, CalcError> {
    let n_u = validate(n)?;
    if n_u > MAX_FACTORIAL_U64 {
        return Err(CalcError::Overflow(n));
    }
    Ok(FACTORIAL_TABLE[n_u as usize])
}

fn factorial_bounded(n: i64, limit: u64) -> Result<BigUint, CalcError> {
    let limit = limit.min(HARD_MAX_FACTORIAL_N);
    let n_u = validate(n)?;
    if n_u > limit {
        tracing::debug!(n, limit, "factorial input rejected: above limit");
        return Err(CalcError::TooLarge { n: n_u, limit });
    }
    Ok(factorial_recursive(n_u))
}

fn validate(n: i64) -> Result<u64, CalcError> {
    u64::try_from(n).map_err(|_| {
        tracing::debug!(n, "factorial input rejected: negative");
        CalcError::Domain(n)
    })
}

fn factorial_recursive(n: u64) -> BigUint {
    if n <= 1 {
        return BigUint::from(1u32);
    }
    factorial_recursive(n - 1) * n
}

//! # numkit-core
//!
//! Small pure routines taken from an introductory functions lesson: a
//! maximum finder, a recursive factorial, and a four-operation calculator
//! that tolerates division by zero.

pub mod calculator;
pub mod constants;
pub mod error;
pub mod factorial;
pub mod max;
pub mod options;

// Re-exports
pub use calculator::{calculate, Calculation, Operand};
pub use constants::{
    exit_codes, DEFAULT_MAX_FACTORIAL_N, DEFAULT_QUOTIENT_PRECISION, FACTORIAL_TABLE,
    HARD_MAX_FACTORIAL_N, MAX_FACTORIAL_U64,
};
pub use error::CalcError;
pub use factorial::{factorial, factorial_u64, factorial_with_options};
pub use max::find_max;
pub use options::Options;

//! Constants for factorial limits, display defaults, and exit codes.

/// Default upper bound on factorial input.
///
/// The recursion depth of [`crate::factorial::factorial`] equals `n`, so the
/// bound also caps stack usage.
pub const DEFAULT_MAX_FACTORIAL_N: u64 = 5_000;

/// Ceiling on any configured factorial limit.
///
/// Caller-supplied limits above this are clamped, keeping recursion depth
/// within a few megabytes of stack whatever the configuration says.
pub const HARD_MAX_FACTORIAL_N: u64 = 10_000;

/// Largest factorial input whose result fits in a `u64`.
/// 20! = 2432902008176640000
pub const MAX_FACTORIAL_U64: u64 = 20;

/// Default number of decimal places when displaying a quotient.
pub const DEFAULT_QUOTIENT_PRECISION: usize = 2;

/// Precomputed factorials for n = 0..=20 (machine-word fast path).
///
/// 21! = 51,090,942,171,709,440,000 overflows `u64::MAX`
/// (18,446,744,073,709,551,615).
pub const FACTORIAL_TABLE: [u64; 21] = {
    let mut table = [0u64; 21];
    table[0] = 1;
    let mut i = 1;
    while i < 21 {
        table[i] = table[i - 1] * i as u64;
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Input outside the mathematical domain of the operation.
    /// (2 is left to clap for usage errors.)
    pub const ERROR_DOMAIN: i32 = 5;
    /// Input or result exceeds a configured or representable limit.
    pub const ERROR_TOO_LARGE: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

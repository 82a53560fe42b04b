//! Calculation options and configuration.

use crate::constants::{DEFAULT_MAX_FACTORIAL_N, DEFAULT_QUOTIENT_PRECISION};

/// Options for numkit computations and their display.
#[derive(Debug, Clone)]
pub struct Options {
    /// Largest accepted factorial input (0 = default).
    pub max_factorial_n: u64,
    /// Decimal places shown for a quotient.
    pub precision: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_factorial_n: DEFAULT_MAX_FACTORIAL_N,
            precision: DEFAULT_QUOTIENT_PRECISION,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where limits are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.max_factorial_n == 0 {
            self.max_factorial_n = DEFAULT_MAX_FACTORIAL_N;
        }
        self
    }
}

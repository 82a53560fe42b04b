//! Application configuration from CLI flags and environment.

use clap::{Parser, Subcommand};

use numkit_core::{CalcError, Options, HARD_MAX_FACTORIAL_N};

/// Largest accepted quotient precision; `f64` carries about 17 significant digits.
pub const MAX_PRECISION: usize = 17;

/// numkit — maximum, factorial, and four-operation calculator.
#[derive(Parser, Debug)]
#[command(name = "numkit", version, about)]
pub struct AppConfig {
    /// Operation to run (defaults to `demo`).
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Quiet mode (only output the values).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Decimal places shown for a quotient.
    #[arg(long, global = true, default_value = "2", env = "NUMKIT_PRECISION")]
    pub precision: usize,

    /// Largest accepted factorial input (0 = built-in default, at most 10000).
    #[arg(long, global = true, default_value = "0", env = "NUMKIT_MAX_FACTORIAL")]
    pub max_factorial: u64,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Operations exposed on the command line.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Find the largest of the given numbers.
    Max {
        /// Numbers to scan (may be empty).
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Compute n! recursively.
    Factorial {
        /// Non-negative integer.
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Sum, difference, product and quotient of two numbers.
    Calc {
        /// Left operand.
        #[arg(allow_negative_numbers = true)]
        x: f64,
        /// Right operand (divisor).
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Run the functions lesson demonstration.
    Demo,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The selected operation, falling back to the demonstration.
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Demo)
    }

    /// Check flag combinations that clap cannot express.
    pub fn validate(&self) -> Result<(), CalcError> {
        if self.quiet && self.verbose {
            return Err(CalcError::Config(
                "--quiet and --verbose are mutually exclusive".into(),
            ));
        }
        if self.precision > MAX_PRECISION {
            return Err(CalcError::Config(format!(
                "precision {} exceeds the maximum of {MAX_PRECISION}",
                self.precision
            )));
        }
        if self.max_factorial > HARD_MAX_FACTORIAL_N {
            return Err(CalcError::Config(format!(
                "max factorial {} exceeds the ceiling of {HARD_MAX_FACTORIAL_N}",
                self.max_factorial
            )));
        }
        Ok(())
    }

    /// Build calculation options from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            max_factorial_n: self.max_factorial,
            precision: self.precision,
        }
        .normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numkit_core::DEFAULT_MAX_FACTORIAL_N;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("numkit").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn no_subcommand_is_demo() {
        let config = parse(&[]);
        assert_eq!(config.command(), Command::Demo);
    }

    #[test]
    fn parse_max_values() {
        let config = parse(&["max", "3", "-7", "2.5"]);
        assert_eq!(
            config.command(),
            Command::Max {
                values: vec![3.0, -7.0, 2.5]
            }
        );
    }

    #[test]
    fn parse_max_empty() {
        let config = parse(&["max"]);
        assert_eq!(config.command(), Command::Max { values: vec![] });
    }

    #[test]
    fn parse_negative_factorial() {
        let config = parse(&["factorial", "-3"]);
        assert_eq!(config.command(), Command::Factorial { n: -3 });
    }

    #[test]
    fn parse_calc_with_global_flags() {
        let config = parse(&["calc", "10", "3", "--precision", "4", "-q"]);
        assert_eq!(config.command(), Command::Calc { x: 10.0, y: 3.0 });
        assert_eq!(config.precision, 4);
        assert!(config.quiet);
    }

    #[test]
    fn options_normalize_limit() {
        let config = parse(&["factorial", "5"]);
        assert_eq!(config.options().max_factorial_n, DEFAULT_MAX_FACTORIAL_N);

        let config = parse(&["factorial", "5", "--max-factorial", "10"]);
        assert_eq!(config.options().max_factorial_n, 10);
    }

    #[test]
    fn validate_rejects_conflicting_flags() {
        let config = parse(&["demo", "-q", "-v"]);
        assert!(matches!(config.validate(), Err(CalcError::Config(_))));
    }

    #[test]
    fn validate_rejects_large_precision() {
        let config = parse(&["calc", "1", "3", "--precision", "40"]);
        assert!(matches!(config.validate(), Err(CalcError::Config(_))));
    }

    #[test]
    fn validate_rejects_limit_above_ceiling() {
        let config = parse(&["factorial", "5", "--max-factorial", "1000000"]);
        assert!(matches!(config.validate(), Err(CalcError::Config(_))));

        let at_ceiling = HARD_MAX_FACTORIAL_N.to_string();
        let config = parse(&["factorial", "5", "--max-factorial", at_ceiling.as_str()]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(parse(&["demo"]).validate().is_ok());
    }
}

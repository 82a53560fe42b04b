//! Result presenters for the console and JSON output.

use num_bigint::BigUint;
use serde::Serialize;

use numkit_core::Calculation;

use crate::output::{
    format_list, format_max, format_quotient, format_real, format_result, format_thousands,
};

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present the maximum of a sequence.
    fn present_max(&self, values: &[f64], max: Option<f64>);

    /// Present n!.
    fn present_factorial(&self, n: i64, value: &BigUint);

    /// Present the four arithmetic results of `x` and `y`.
    fn present_calculation(&self, x: f64, y: f64, result: &Calculation<f64>);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Human-readable console presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    precision: usize,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, precision: usize) -> Self {
        Self {
            verbose,
            quiet,
            precision,
        }
    }

    /// Lines printed for a maximum.
    #[must_use]
    pub fn render_max(&self, values: &[f64], max: Option<f64>) -> Vec<String> {
        if self.quiet {
            return vec![format_max(max)];
        }
        let mut lines = vec![format!("Max of {}: {}", format_list(values), format_max(max))];
        if self.verbose {
            lines.push(format!("Elements scanned: {}", values.len()));
        }
        lines
    }

    /// Lines printed for a factorial.
    #[must_use]
    pub fn render_factorial(&self, n: i64, value: &BigUint) -> Vec<String> {
        if self.quiet {
            return vec![value.to_string()];
        }
        let mut lines = vec![format!("{n}! = {}", format_result(value, self.verbose))];
        if self.verbose {
            let digits = value.to_string().len() as u64;
            lines.push(format!("Result digits: {}", format_thousands(digits)));
            lines.push(format!("Result bits: {}", format_thousands(value.bits())));
        }
        lines
    }

    /// Lines printed for a calculation.
    #[must_use]
    pub fn render_calculation(&self, x: f64, y: f64, result: &Calculation<f64>) -> Vec<String> {
        let quotient = format_quotient(result.quotient, self.precision);
        if self.quiet {
            return vec![format!(
                "{} {} {} {quotient}",
                format_real(result.sum),
                format_real(result.difference),
                format_real(result.product),
            )];
        }
        vec![
            format!("Results for {} and {}:", format_real(x), format_real(y)),
            format!("  Sum: {}", format_real(result.sum)),
            format!("  Difference: {}", format_real(result.difference)),
            format!("  Product: {}", format_real(result.product)),
            format!("  Quotient: {quotient}"),
        ]
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_max(&self, values: &[f64], max: Option<f64>) {
        for line in self.render_max(values, max) {
            println!("{line}");
        }
    }

    fn present_factorial(&self, n: i64, value: &BigUint) {
        for line in self.render_factorial(n, value) {
            println!("{line}");
        }
    }

    fn present_calculation(&self, x: f64, y: f64, result: &Calculation<f64>) {
        for line in self.render_calculation(x, y, result) {
            println!("{line}");
        }
    }

    fn present_error(&self, error: &str) {
        crate::ui::print_error(error);
    }
}

#[derive(Serialize)]
struct MaxReport<'a> {
    operation: &'static str,
    values: &'a [f64],
    max: Option<f64>,
}

#[derive(Serialize)]
struct FactorialReport {
    operation: &'static str,
    n: i64,
    value: String,
    digits: usize,
}

#[derive(Serialize)]
struct CalculationReport<'a> {
    operation: &'static str,
    x: f64,
    y: f64,
    #[serde(flatten)]
    result: &'a Calculation<f64>,
}

/// Presenter emitting one JSON object per result.
#[derive(Default)]
pub struct JsonResultPresenter;

impl JsonResultPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// JSON document for a maximum.
    #[must_use]
    pub fn render_max(&self, values: &[f64], max: Option<f64>) -> String {
        to_json(&MaxReport {
            operation: "max",
            values,
            max,
        })
    }

    /// JSON document for a factorial. The value is a decimal string.
    #[must_use]
    pub fn render_factorial(&self, n: i64, value: &BigUint) -> String {
        let value = value.to_string();
        to_json(&FactorialReport {
            operation: "factorial",
            n,
            digits: value.len(),
            value,
        })
    }

    /// JSON document for a calculation; an undefined quotient is `null`.
    #[must_use]
    pub fn render_calculation(&self, x: f64, y: f64, result: &Calculation<f64>) -> String {
        to_json(&CalculationReport {
            operation: "calc",
            x,
            y,
            result,
        })
    }
}

impl ResultPresenter for JsonResultPresenter {
    fn present_max(&self, values: &[f64], max: Option<f64>) {
        println!("{}", self.render_max(values, max));
    }

    fn present_factorial(&self, n: i64, value: &BigUint) {
        println!("{}", self.render_factorial(n, value));
    }

    fn present_calculation(&self, x: f64, y: f64, result: &Calculation<f64>) {
        println!("{}", self.render_calculation(x, y, result));
    }

    fn present_error(&self, error: &str) {
        eprintln!("{}", serde_json::json!({ "error": error }));
    }
}

fn to_json<T: Serialize>(report: &T) -> String {
    serde_json::to_string(report).unwrap_or_else(|e| {
        tracing::warn!("failed to serialize report: {e}");
        String::from("{}")
    })
}

//! CLI output formatting.

use num_bigint::BigUint;

/// Text shown in place of a quotient when the divisor is zero.
pub const UNDEFINED: &str = "undefined";

/// Text shown in place of a maximum when the sequence is empty.
pub const NONE: &str = "none";

/// Format a `BigUint` for display, potentially truncating.
#[must_use]
pub fn format_result(value: &BigUint, verbose: bool) -> String {
    let s = value.to_string();
    if !verbose && s.len() > 100 {
        format!("{}...{} ({} digits)", &s[..50], &s[s.len() - 50..], s.len())
    } else {
        s
    }
}

/// Format a real number, dropping the fractional part when it is zero.
///
/// Negative zero prints as `0`.
#[must_use]
pub fn format_real(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Format a quotient with `precision` decimals, or [`UNDEFINED`].
#[must_use]
pub fn format_quotient(quotient: Option<f64>, precision: usize) -> String {
    match quotient {
        Some(q) => format!("{q:.precision$}"),
        None => UNDEFINED.to_string(),
    }
}

/// Format an optional maximum, or [`NONE`].
#[must_use]
pub fn format_max(max: Option<f64>) -> String {
    max.map_or_else(|| NONE.to_string(), format_real)
}

/// Format a sequence as `[a, b, c]`.
#[must_use]
pub fn format_list(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().copied().map(format_real).collect();
    format!("[{}]", items.join(", "))
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

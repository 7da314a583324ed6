//! Series/parallel resistor network solver.
//!
//! Takes a comma-separated list of resistor values and computes both
//! equivalents. Like the Ohm solver, every failure mode is rendered as
//! fixed text rather than an error.

use super::quantity;

/// Fixed text for unparseable or degenerate lists.
pub const INVALID_LIST: &str = "Invalid resistor list. Example: 10,5,20";

/// Fixed text when fewer than two values are supplied.
pub const NEED_TWO: &str = "Enter at least two resistors (e.g., 10,5,20)";

/// Compute series and parallel equivalents of a resistor list.
///
/// Tokens may carry surrounding whitespace; empty tokens are dropped before
/// parsing, so trailing commas are harmless. The series total prints in
/// default float form while the parallel equivalent is rounded to three
/// decimals; both shapes are part of the wire format.
pub fn solve(values: &str) -> String {
    let tokens: Vec<&str> = values
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();

    let resistors: Vec<f64> = match tokens.iter().map(|token| token.parse::<f64>()).collect() {
        Ok(resistors) => resistors,
        Err(_) => return INVALID_LIST.to_string(),
    };

    if resistors.len() < 2 {
        return NEED_TWO.to_string();
    }

    // A zero resistor has no finite reciprocal; the list is invalid.
    if resistors.iter().any(|&r| r == 0.0) {
        return INVALID_LIST.to_string();
    }

    let series: f64 = resistors.iter().sum();
    let reciprocal_sum: f64 = resistors.iter().map(|r| 1.0 / r).sum();
    if reciprocal_sum == 0.0 {
        return INVALID_LIST.to_string();
    }
    let parallel = 1.0 / reciprocal_sum;

    format!(
        "Series = {} Ω\nParallel = {:.3} Ω",
        quantity::format_value(series),
        parallel
    )
}

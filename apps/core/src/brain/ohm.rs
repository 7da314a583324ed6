//! Ohm's Law solver.
//!
//! Given two of voltage, current and resistance, computes the third.
//! Every failure mode collapses to fixed human-readable text; this function
//! never returns an error to its caller.

use super::quantity;

/// Prompt shown when fewer or more than two quantities are present.
pub const PROMPT_TWO_VALUES: &str = "Enter any two values (V, I, R) to calculate the third.";

/// Fixed text for non-numeric tokens and zero divisors.
pub const INVALID_INPUT: &str = "Invalid input for Ohm's law.";

/// Solve for the missing quantity.
///
/// Each argument is a raw optional token; `None`, empty and the literal
/// `none` all mean the quantity is unknown. Exactly one quantity must be
/// missing for a computation to happen; otherwise the caller gets the
/// prompt text back.
pub fn solve(voltage: Option<&str>, current: Option<&str>, resistance: Option<&str>) -> String {
    let parsed = (
        quantity::parse_token(voltage),
        quantity::parse_token(current),
        quantity::parse_token(resistance),
    );
    let (v, i, r) = match parsed {
        (Ok(v), Ok(i), Ok(r)) => (v, i, r),
        _ => return INVALID_INPUT.to_string(),
    };

    match (v, i, r) {
        (None, Some(i), Some(r)) => format!("Voltage = {} V", quantity::format_value(i * r)),
        (Some(v), None, Some(r)) => {
            // A zero divisor is reported as invalid input, never as infinity.
            if r == 0.0 {
                return INVALID_INPUT.to_string();
            }
            format!("Current = {} A", quantity::format_value(v / r))
        }
        (Some(v), Some(i), None) => {
            if i == 0.0 {
                return INVALID_INPUT.to_string();
            }
            format!("Resistance = {} Ω", quantity::format_value(v / i))
        }
        _ => PROMPT_TWO_VALUES.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_voltage() {
        assert_eq!(solve(None, Some("2"), Some("10")), "Voltage = 20.0 V");
    }

    #[test]
    fn test_solve_current() {
        assert_eq!(solve(Some("10"), None, Some("5")), "Current = 2.0 A");
    }

    #[test]
    fn test_solve_resistance() {
        assert_eq!(solve(Some("10"), Some("2"), None), "Resistance = 5.0 Ω");
    }

    #[test]
    fn test_under_specified_prompts() {
        assert_eq!(solve(Some("10"), None, None), PROMPT_TWO_VALUES);
        assert_eq!(solve(None, None, None), PROMPT_TWO_VALUES);
    }

    #[test]
    fn test_fully_specified_prompts() {
        assert_eq!(solve(Some("10"), Some("2"), Some("5")), PROMPT_TWO_VALUES);
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        assert_eq!(solve(Some("ten"), Some("2"), None), INVALID_INPUT);
    }

    #[test]
    fn test_zero_divisor_is_invalid() {
        assert_eq!(solve(Some("10"), Some("0"), None), INVALID_INPUT);
        assert_eq!(solve(Some("10"), None, Some("0")), INVALID_INPUT);
    }
}

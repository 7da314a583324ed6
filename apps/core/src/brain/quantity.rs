//! Quantity token normalization.
//!
//! Electrical quantities arrive as raw text tokens. Absence can be signaled
//! three ways (missing field, empty token, the literal `none`); all of them
//! collapse to a true `None` here, before any computation looks at the value.

use thiserror::Error;

/// A token that is present but not numeric.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid numeric token `{token}`")]
pub struct InvalidToken {
    pub token: String,
}

/// Normalize one raw token into an optional quantity.
///
/// Absent, empty (after trimming) and `none` (case-insensitive) all mean the
/// quantity is unknown. Anything else must parse as a float.
pub fn parse_token(raw: Option<&str>) -> Result<Option<f64>, InvalidToken> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let token = raw.trim();
    if token.is_empty() || token.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    token
        .parse::<f64>()
        .map(Some)
        .map_err(|_| InvalidToken {
            token: token.to_string(),
        })
}

/// Render a computed quantity.
///
/// Integral values keep one decimal place (`5.0`, not `5`); the web client
/// relies on this wire format. Fractional values print at full precision.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_token_is_missing() {
        assert_eq!(parse_token(None), Ok(None));
    }

    #[test]
    fn test_empty_and_none_are_missing() {
        assert_eq!(parse_token(Some("")), Ok(None));
        assert_eq!(parse_token(Some("   ")), Ok(None));
        assert_eq!(parse_token(Some("none")), Ok(None));
        assert_eq!(parse_token(Some("NoNe")), Ok(None));
    }

    #[test]
    fn test_numeric_tokens_parse() {
        assert_eq!(parse_token(Some("10")), Ok(Some(10.0)));
        assert_eq!(parse_token(Some(" 2.5 ")), Ok(Some(2.5)));
        assert_eq!(parse_token(Some("-3")), Ok(Some(-3.0)));
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let err = parse_token(Some("ten")).unwrap_err();
        assert_eq!(err.token, "ten");
    }

    #[test]
    fn test_integral_values_keep_one_decimal() {
        assert_eq!(format_value(5.0), "5.0");
        assert_eq!(format_value(35.0), "35.0");
        assert_eq!(format_value(-2.0), "-2.0");
    }

    #[test]
    fn test_fractional_values_print_fully() {
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(0.125), "0.125");
    }
}

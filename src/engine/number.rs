//! # Raw Numeric Input
//!
//! Both engines receive numbers as raw text typed by a user. Parsing is lenient:
//! leading whitespace is skipped and the longest numeric prefix wins, so
//! `"12.5 sq ft"` reads as `12.5`. Text without a numeric prefix yields `None`.

const INFINITY_LITERAL: &str = "Infinity";

/// Parse the leading floating-point number of `text`
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if trimmed[end..].starts_with(INFINITY_LITERAL) {
        return Some(if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let integer_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - integer_start;

    if end < len && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while fraction_end < len && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        mantissa_digits += fraction_end - fraction_start;
        if mantissa_digits > 0 {
            end = fraction_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    // An exponent only counts when it carries at least one digit ("1e" reads as 1)
    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exponent_end = end + 1;
        if exponent_end < len && matches!(bytes[exponent_end], b'+' | b'-') {
            exponent_end += 1;
        }
        let exponent_digits_start = exponent_end;
        while exponent_end < len && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits_start {
            end = exponent_end;
        }
    }

    trimmed[..end].parse::<f64>().ok()
}

/// Parse `text` and keep it only if it is a finite number strictly above zero
pub fn parse_positive(text: &str) -> Option<f64> {
    parse_leading_float(text).filter(|value| value.is_finite() && *value > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_leading_float_should_read_plain_numbers() {
        assert_eq!(parse_leading_float("10"), Some(10.0));
        assert_eq!(parse_leading_float("12.75"), Some(12.75));
        assert_eq!(parse_leading_float("-3"), Some(-3.0));
        assert_eq!(parse_leading_float("+4.5"), Some(4.5));
    }

    #[test]
    fn parse_leading_float_should_accept_partial_decimals() {
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("5."), Some(5.0));
        assert_eq!(parse_leading_float("-.25"), Some(-0.25));
    }

    #[test]
    fn parse_leading_float_should_skip_leading_whitespace() {
        assert_eq!(parse_leading_float("   42"), Some(42.0));
        assert_eq!(parse_leading_float("\t7.5\n"), Some(7.5));
    }

    #[test]
    fn parse_leading_float_should_ignore_trailing_text() {
        assert_eq!(parse_leading_float("12abc"), Some(12.0));
        assert_eq!(parse_leading_float("1000 sqft"), Some(1000.0));
        assert_eq!(parse_leading_float("3.5.1"), Some(3.5));
        assert_eq!(parse_leading_float("0x10"), Some(0.0));
    }

    #[test]
    fn parse_leading_float_should_handle_exponents() {
        assert_eq!(parse_leading_float("1e3"), Some(1000.0));
        assert_eq!(parse_leading_float("2.5E-1"), Some(0.25));
        assert_eq!(parse_leading_float("1e"), Some(1.0));
        assert_eq!(parse_leading_float("4e+x"), Some(4.0));
    }

    #[test]
    fn parse_leading_float_should_read_infinity() {
        assert_eq!(parse_leading_float("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_leading_float("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_leading_float("infinity"), None);
    }

    #[test]
    fn parse_leading_float_should_reject_text_without_number() {
        assert_eq!(parse_leading_float(""), None);
        assert_eq!(parse_leading_float("   "), None);
        assert_eq!(parse_leading_float("abc"), None);
        assert_eq!(parse_leading_float("."), None);
        assert_eq!(parse_leading_float("-"), None);
        assert_eq!(parse_leading_float("e5"), None);
    }

    #[test]
    fn parse_positive_should_drop_zero_negative_and_infinite() {
        assert_eq!(parse_positive("3"), Some(3.0));
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("-0"), None);
        assert_eq!(parse_positive("-2"), None);
        assert_eq!(parse_positive("Infinity"), None);
        assert_eq!(parse_positive("n/a"), None);
    }
}

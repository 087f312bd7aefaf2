use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Leading decimal number, optionally signed, with optional exponent.
    /// Matches the numeric prefix of: "12", "-3.5", ".5", "1e3", "42 kg", "7abc"
    static ref NUMERIC_PREFIX: Regex =
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").unwrap();
}

/// Parse the leading number of user-typed text.
///
/// Trailing garbage after the number is ignored, so `"12abc"` reads as 12.
/// Returns `None` when there is no leading number or it is not finite.
pub fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let m = NUMERIC_PREFIX.find(trimmed)?;
    m.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_numeric("1"), Some(1.0));
        assert_eq!(parse_numeric("-3.5"), Some(-3.5));
        assert_eq!(parse_numeric(".5"), Some(0.5));
        assert_eq!(parse_numeric("+2."), Some(2.0));
        assert_eq!(parse_numeric("1e3"), Some(1000.0));
        assert_eq!(parse_numeric("  42"), Some(42.0));
    }

    #[test]
    fn test_numeric_prefix() {
        assert_eq!(parse_numeric("12abc"), Some(12.0));
        assert_eq!(parse_numeric("10 kg"), Some(10.0));
        assert_eq!(parse_numeric("2e"), Some(2.0));
    }

    #[test]
    fn test_rejects_non_numbers() {
        assert_eq!(parse_numeric("abc"), None);
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("-"), None);
        assert_eq!(parse_numeric("."), None);
        assert_eq!(parse_numeric("Infinity"), None);
        assert_eq!(parse_numeric("NaN"), None);
        assert_eq!(parse_numeric("1e999"), None);
    }
}

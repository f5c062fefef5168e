//! Numeric parsing helpers shared by the normalizers.

/// Parses a string as a finite f64, returning None for invalid or empty strings.
///
/// `NaN` and infinities parse successfully with `str::parse` but are not
/// usable figures, so they are rejected here.
pub fn parse_finite_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|parsed| parsed.is_finite())
}

/// Parses a string as i64, returning None for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(parse_finite_f64("45.5"), Some(45.5));
        assert_eq!(parse_finite_f64("  15.00 "), Some(15.0));
    }

    #[test]
    fn test_rejects_non_finite() {
        assert_eq!(parse_finite_f64("NaN"), None);
        assert_eq!(parse_finite_f64("inf"), None);
        assert_eq!(parse_finite_f64("-infinity"), None);
    }

    #[test]
    fn test_empty_and_invalid() {
        assert_eq!(parse_finite_f64(""), None);
        assert_eq!(parse_finite_f64("abc"), None);
        assert_eq!(parse_i64(" "), None);
        assert_eq!(parse_i64("12.5"), None);
        assert_eq!(parse_i64(" 30 "), Some(30));
    }
}

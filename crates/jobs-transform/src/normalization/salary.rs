//! Salary expression parsing.
//!
//! Source listings carry salaries as free text in a small family of shapes:
//!
//! - Yearly ranges: `£40K - £50K (Glassdoor est.)`
//! - Single yearly figures: `£35K (Employer est.)`
//! - Hourly rates: `£15.00 Per Hour`, `£12.50 - £14.00 PerHour`
//!
//! A trailing `K` always scales its figure by 1000. Hourly figures are not
//! annualized: both units are kept side by side and told apart by
//! [`SalaryUnit`], so callers must segment by unit before comparing
//! magnitudes.

use jobs_model::{Salary, SalaryUnit};

use super::numeric::parse_finite_f64;

const CURRENCY_SYMBOL: &str = "£";
const ESTIMATE_ANNOTATIONS: [&str; 2] = ["(Employer est.)", "(Glassdoor est.)"];
const HOURLY_MARKERS: [&str; 2] = ["Per Hour", "PerHour"];
const NON_BREAKING_SPACE: char = '\u{a0}';
const RANGE_SEPARATOR: char = '-';
const THOUSANDS_SUFFIX: char = 'K';

/// A salary expression split into its unit and unparsed bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryParts {
    pub unit: SalaryUnit,
    pub low: String,
    /// `None` when the expression has no range separator.
    pub high: Option<String>,
}

/// Remove the currency symbol, estimate annotations and non-breaking spaces.
pub fn clean_salary_text(raw: &str) -> String {
    let mut cleaned = raw.replace(CURRENCY_SYMBOL, "");
    for annotation in ESTIMATE_ANNOTATIONS {
        cleaned = cleaned.replace(annotation, "");
    }
    cleaned.retain(|ch| ch != NON_BREAKING_SPACE);
    cleaned.trim().to_string()
}

/// Clean an expression, detect its unit and split it into bound texts.
pub fn split_salary(raw: &str) -> SalaryParts {
    let mut cleaned = clean_salary_text(raw);
    let unit = if HOURLY_MARKERS.iter().any(|marker| cleaned.contains(marker)) {
        SalaryUnit::Hourly
    } else {
        SalaryUnit::Yearly
    };
    for marker in HOURLY_MARKERS {
        cleaned = cleaned.replace(marker, "");
    }
    let mut parts = cleaned.split(RANGE_SEPARATOR);
    let low = parts.next().unwrap_or_default().trim().to_string();
    let high = parts.next().map(|part| part.trim().to_string());
    SalaryParts { unit, low, high }
}

/// Parse one bound such as `40K` or `15.00`.
pub fn parse_salary_bound(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    match trimmed.strip_suffix(THOUSANDS_SUFFIX) {
        Some(thousands) => parse_finite_f64(thousands).map(|value| value * 1000.0),
        None => parse_finite_f64(trimmed),
    }
}

/// Normalize a salary expression into a range, midpoint and unit.
///
/// Returns `None` when the lower bound cannot be parsed. An unparseable or
/// empty upper bound (`"20K-"`) falls back to the lower bound.
pub fn normalize_salary(raw: &str) -> Option<Salary> {
    let parts = split_salary(raw);
    let low = parse_salary_bound(&parts.low)?;
    let high = parts
        .high
        .as_deref()
        .and_then(parse_salary_bound)
        .unwrap_or(low);
    Some(Salary::from_bounds(low, high, parts.unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_annotations() {
        assert_eq!(
            clean_salary_text("£40K - £50K (Glassdoor est.)"),
            "40K - 50K"
        );
        assert_eq!(clean_salary_text("£35K(Employer est.)"), "35K");
        assert_eq!(clean_salary_text("\u{a0}£30K\u{a0}"), "30K");
    }

    #[test]
    fn test_split_detects_hourly_marker() {
        let parts = split_salary("£12.50 - £14.00 PerHour");
        assert_eq!(parts.unit, SalaryUnit::Hourly);
        assert_eq!(parts.low, "12.50");
        assert_eq!(parts.high.as_deref(), Some("14.00"));
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        let parts = split_salary("£15.00 per hour");
        assert_eq!(parts.unit, SalaryUnit::Yearly);
        assert_eq!(normalize_salary("£15.00 per hour"), None);
    }

    #[test]
    fn test_bound_suffix() {
        assert_eq!(parse_salary_bound("40K"), Some(40_000.0));
        assert_eq!(parse_salary_bound(" 42.5K "), Some(42_500.0));
        assert_eq!(parse_salary_bound("15.00"), Some(15.0));
        assert_eq!(parse_salary_bound("K"), None);
        assert_eq!(parse_salary_bound(""), None);
    }

    #[test]
    fn test_open_range_falls_back_to_low() {
        let salary = normalize_salary("£20K-").expect("parse");
        assert_eq!(salary.min, 20_000.0);
        assert_eq!(salary.max, 20_000.0);
        assert_eq!(salary.avg, 20_000.0);
    }

    #[test]
    fn test_empty_is_absent() {
        assert_eq!(normalize_salary(""), None);
        assert_eq!(normalize_salary("   "), None);
        assert_eq!(normalize_salary("(Glassdoor est.)"), None);
    }
}

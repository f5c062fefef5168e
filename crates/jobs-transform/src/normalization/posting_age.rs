//! Relative posting-age parsing.
//!
//! Listings report their age as a day count with a `d` unit, optionally
//! followed by `+` when the site caps the figure ("30d+" means at least 30
//! days). The `+` is dropped, so capped ages read as their lower bound.

use super::numeric::parse_i64;

/// Parse a posting age such as `5d` or `30d+` into days.
///
/// Returns `None` for anything that is not a whole day count, including
/// hour-granular ages like `24h`.
pub fn normalize_posting_age(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix('+').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('d').unwrap_or(trimmed);
    parse_i64(trimmed)
}

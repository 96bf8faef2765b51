//! Locale-aware numeric normalization.

/// Parses a locale-formatted decimal, returning None for empty or invalid text.
///
/// Whitespace (including no-break spaces used as digit grouping) is removed
/// and a comma is read as the decimal separator, so `"1 234,5"` parses as
/// `1234.5`. Non-finite results are rejected.
pub fn parse_decimal(value: &str) -> Option<f64> {
    let normalized: String = value
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

//! Status values that move a position out of GREEN.
//!
//! Comparisons trim surrounding whitespace and ignore ASCII case. Values not
//! listed here never affect the label.

/// Validation statuses that make a position RED.
pub const FAILED_VALIDATION: &[&str] = &["failed"];

/// Validation statuses that make a position AMBER.
pub const WARNING_VALIDATION: &[&str] = &["warning"];

/// Enrichment statuses that make a position AMBER.
pub const REVIEW_ENRICHMENT: &[&str] = &["partial", "unmatched"];

pub fn is_failed_validation(status: Option<&str>) -> bool {
    matches_any(status, FAILED_VALIDATION)
}

pub fn is_warning_validation(status: Option<&str>) -> bool {
    matches_any(status, WARNING_VALIDATION)
}

pub fn needs_enrichment_review(status: Option<&str>) -> bool {
    matches_any(status, REVIEW_ENRICHMENT)
}

fn matches_any(status: Option<&str>, values: &[&str]) -> bool {
    status
        .map(str::trim)
        .is_some_and(|status| values.iter().any(|v| status.eq_ignore_ascii_case(v)))
}

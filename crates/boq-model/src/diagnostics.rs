//! Per-row ingestion diagnostics.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Why a line item was not turned into a position.
///
/// Variants are declared in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MissingId,
    MissingCode,
    MissingDescription,
    MissingUnit,
    MissingQuantity,
}

impl SkipReason {
    pub const ALL: [SkipReason; 5] = [
        SkipReason::MissingId,
        SkipReason::MissingCode,
        SkipReason::MissingDescription,
        SkipReason::MissingUnit,
        SkipReason::MissingQuantity,
    ];

    /// Tag used in reports, e.g. `missing_id`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::MissingId => "missing_id",
            SkipReason::MissingCode => "missing_code",
            SkipReason::MissingDescription => "missing_description",
            SkipReason::MissingUnit => "missing_unit",
            SkipReason::MissingQuantity => "missing_quantity",
        }
    }

    /// Human-readable explanation.
    pub fn message(&self) -> &'static str {
        match self {
            SkipReason::MissingId => "line item has no identifier",
            SkipReason::MissingCode => "line item has no classification code",
            SkipReason::MissingDescription => "line item has no description or name",
            SkipReason::MissingUnit => "line item has no unit of measure",
            SkipReason::MissingQuantity => "line item quantity is missing or not a number",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkipReason {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        SkipReason::ALL
            .into_iter()
            .find(|reason| reason.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownSkipReason(s.to_string()))
    }
}

/// A skipped line item, keyed by its 1-based traversal index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    pub row_index: usize,
    pub reason: SkipReason,
}

impl SkippedRow {
    pub fn new(row_index: usize, reason: SkipReason) -> Self {
        Self { row_index, reason }
    }
}

impl fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {}: {} ({})",
            self.row_index,
            self.reason,
            self.reason.message()
        )
    }
}

/// Outcome counts for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub parsed_count: usize,
    /// Skipped rows in traversal order.
    pub skipped: Vec<SkippedRow>,
}

impl Diagnostics {
    pub fn new(parsed_count: usize, skipped: Vec<SkippedRow>) -> Self {
        Self {
            parsed_count,
            skipped,
        }
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Number of line items seen, valid or not.
    pub fn total_rows(&self) -> usize {
        self.parsed_count + self.skipped.len()
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Skipped rows grouped by reason, in validation order.
    pub fn reason_counts(&self) -> BTreeMap<SkipReason, usize> {
        let mut counts = BTreeMap::new();
        for row in &self.skipped {
            *counts.entry(row.reason).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_reason_round_trips_through_tag() {
        for reason in SkipReason::ALL {
            assert_eq!(reason.as_str().parse::<SkipReason>(), Ok(reason));
        }
        assert_eq!("MISSING_UNIT".parse::<SkipReason>(), Ok(SkipReason::MissingUnit));
        assert!("missing_price".parse::<SkipReason>().is_err());
    }

    #[test]
    fn skip_reason_serializes_as_tag() {
        let json = serde_json::to_string(&SkippedRow::new(4, SkipReason::MissingDescription))
            .expect("serialize row");
        assert_eq!(json, r#"{"row_index":4,"reason":"missing_description"}"#);
    }

    #[test]
    fn reason_counts_follow_validation_order() {
        let diagnostics = Diagnostics::new(
            0,
            vec![
                SkippedRow::new(1, SkipReason::MissingQuantity),
                SkippedRow::new(2, SkipReason::MissingId),
                SkippedRow::new(3, SkipReason::MissingQuantity),
            ],
        );
        let counts: Vec<_> = diagnostics.reason_counts().into_iter().collect();
        assert_eq!(
            counts,
            vec![(SkipReason::MissingId, 1), (SkipReason::MissingQuantity, 2)]
        );
    }

    #[test]
    fn skipped_row_display() {
        let row = SkippedRow::new(7, SkipReason::MissingUnit);
        assert_eq!(row.to_string(), "row 7: missing_unit (line item has no unit of measure)");
    }
}

//! Bill-of-quantities data model.
//!
//! Shared record types passed between the ingestion and audit stages:
//! normalized [`Position`]s, per-row [`Diagnostics`], and the coarse
//! [`AuditLabel`] risk classification.

pub mod audit;
pub mod diagnostics;
pub mod error;
pub mod numeric;
pub mod position;

pub use audit::{AuditLabel, AuditedPosition, ClassificationStats};
pub use diagnostics::{Diagnostics, SkipReason, SkippedRow};
pub use error::{ModelError, Result};
pub use numeric::parse_decimal;
pub use position::{Position, PositionDraft};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_counts() {
        let diagnostics = Diagnostics::new(
            3,
            vec![
                SkippedRow::new(2, SkipReason::MissingCode),
                SkippedRow::new(5, SkipReason::MissingQuantity),
            ],
        );
        assert_eq!(diagnostics.parsed_count, 3);
        assert_eq!(diagnostics.skipped_count(), 2);
        assert_eq!(diagnostics.total_rows(), 5);
        assert!(!diagnostics.is_clean());
    }

    #[test]
    fn audited_position_serializes_flat() {
        let position = PositionDraft {
            id: "1.1".to_string(),
            code: "C-100".to_string(),
            unit: "m2".to_string(),
            quantity: Some(12.5),
            description: "Screed".to_string(),
            specification: None,
        }
        .validate()
        .expect("valid position");
        let audited = AuditedPosition::new(position, AuditLabel::Amber);
        let json = serde_json::to_value(&audited).expect("serialize audited position");
        assert_eq!(json["id"], "1.1");
        assert_eq!(json["audit"], "AMBER");
        assert!(json["specification"].is_null());
    }
}

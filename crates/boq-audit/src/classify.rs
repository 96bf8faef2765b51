//! Label assignment and batch tallying.

use boq_model::{AuditLabel, AuditedPosition, ClassificationStats};
use serde::Serialize;
use tracing::{debug, trace};

use crate::signals::AuditSignals;
use crate::status;

/// Classified positions in input order, with per-label counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedBatch<P> {
    pub audited: Vec<AuditedPosition<P>>,
    pub stats: ClassificationStats,
}

/// Assign a label; the first matching rule wins.
pub fn classify<P: AuditSignals + ?Sized>(position: &P) -> AuditLabel {
    let code_blank = position.code().is_none_or(|code| code.trim().is_empty());
    if code_blank || status::is_failed_validation(position.validation_status()) {
        return AuditLabel::Red;
    }

    if status::is_warning_validation(position.validation_status())
        || status::needs_enrichment_review(position.enrichment_status())
        || !is_priced(position.unit_price())
    {
        return AuditLabel::Amber;
    }

    AuditLabel::Green
}

/// Classify each position independently and count the labels.
pub fn classify_all<P, I>(positions: I) -> ClassifiedBatch<P>
where
    P: AuditSignals,
    I: IntoIterator<Item = P>,
{
    let mut stats = ClassificationStats::default();
    let audited: Vec<_> = positions
        .into_iter()
        .map(|position| {
            let label = classify(&position);
            trace!(code = position.code().unwrap_or(""), label = %label, "position classified");
            stats.record(label);
            AuditedPosition::new(position, label)
        })
        .collect();
    debug!(
        total = audited.len(),
        green = stats.green,
        amber = stats.amber,
        red = stats.red,
        "classification complete"
    );
    ClassifiedBatch { audited, stats }
}

// Zero is treated like a missing price.
fn is_priced(unit_price: Option<f64>) -> bool {
    unit_price.is_some_and(|price| price.is_finite() && price != 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PricedPosition;

    fn priced(code: &str, price: Option<f64>) -> PricedPosition {
        PricedPosition {
            code: Some(code.to_string()),
            unit_price: price,
            ..PricedPosition::default()
        }
    }

    #[test]
    fn blank_code_is_red_regardless_of_other_signals() {
        let mut position = priced("  ", Some(100.0));
        position.validation_status = Some("ok".to_string());
        assert_eq!(classify(&position), AuditLabel::Red);

        position.code = None;
        assert_eq!(classify(&position), AuditLabel::Red);
    }

    #[test]
    fn failed_validation_is_red() {
        let mut position = priced("C-1", Some(100.0));
        position.validation_status = Some("Failed".to_string());
        assert_eq!(classify(&position), AuditLabel::Red);
    }

    #[test]
    fn warning_validation_is_amber() {
        let mut position = priced("C-1", Some(100.0));
        position.validation_status = Some("warning".to_string());
        assert_eq!(classify(&position), AuditLabel::Amber);
    }

    #[test]
    fn enrichment_review_is_amber() {
        for status in ["partial", "UNMATCHED"] {
            let mut position = priced("C-1", Some(100.0));
            position.enrichment_status = Some(status.to_string());
            assert_eq!(classify(&position), AuditLabel::Amber, "{status}");
        }
    }

    #[test]
    fn zero_or_missing_price_is_amber() {
        assert_eq!(classify(&priced("C-1", Some(0.0))), AuditLabel::Amber);
        assert_eq!(classify(&priced("C-1", None)), AuditLabel::Amber);
        assert_eq!(classify(&priced("C-1", Some(f64::NAN))), AuditLabel::Amber);
    }

    #[test]
    fn priced_and_clean_is_green() {
        let mut position = priced("C-1", Some(100.0));
        assert_eq!(classify(&position), AuditLabel::Green);
        position.validation_status = Some("passed".to_string());
        position.enrichment_status = Some("matched".to_string());
        assert_eq!(classify(&position), AuditLabel::Green);
    }

    #[test]
    fn empty_batch_has_zero_stats() {
        let batch = classify_all(Vec::<PricedPosition>::new());
        assert!(batch.audited.is_empty());
        assert_eq!(batch.stats, ClassificationStats::default());
    }

    #[test]
    fn batch_preserves_order() {
        let batch = classify_all(vec![
            priced("A", Some(1.0)),
            priced("", Some(1.0)),
            priced("C", None),
        ]);
        let labels: Vec<_> = batch.audited.iter().map(AuditedPosition::audit).collect();
        assert_eq!(
            labels,
            vec![AuditLabel::Green, AuditLabel::Red, AuditLabel::Amber]
        );
        assert_eq!(batch.stats.total(), 3);
    }
}

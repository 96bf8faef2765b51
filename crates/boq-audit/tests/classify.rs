//! Integration tests for audit classification.

use boq_audit::{AuditLabel, PricedPosition, classify, classify_all};
use boq_ingest::{TagMapping, parse_boq};
use proptest::prelude::*;

#[test]
fn extracted_positions_without_prices_are_amber() {
    let parsed = parse_boq(
        "<BOQ><Position><ID>1</ID><Code>A</Code><Unit>m</Unit><Quantity>2</Quantity><Description>Kerb</Description></Position></BOQ>",
        &TagMapping::default(),
    )
    .expect("parse");
    let batch = classify_all(&parsed.positions);
    assert_eq!(batch.stats.amber, 1);
    assert_eq!(batch.audited[0].audit(), AuditLabel::Amber);
    assert_eq!(batch.audited[0].position().id(), "1");
}

#[test]
fn audited_json_is_flat() {
    let rows: Vec<PricedPosition> = serde_json::from_str(
        r#"[
            {"id": "1", "code": "A", "unit_price": 100, "validation_status": "passed"},
            {"id": "2", "code": "", "unit_price": 100},
            {"id": "3", "code": "C", "unit_price": "0,00"},
            {"id": "4", "code": "D", "unit_price": 5, "enrichment_status": "Partial"}
        ]"#,
    )
    .expect("parse rows");
    let batch = classify_all(rows);
    let json = serde_json::to_value(&batch).expect("serialize batch");

    let labels: Vec<_> = json["audited"]
        .as_array()
        .expect("array")
        .iter()
        .map(|row| row["audit"].as_str().expect("label").to_string())
        .collect();
    assert_eq!(labels, vec!["GREEN", "RED", "AMBER", "AMBER"]);
    assert_eq!(json["audited"][0]["id"], "1");
    assert_eq!(
        json["stats"],
        serde_json::json!({"green": 1, "amber": 2, "red": 1})
    );
}

#[test]
fn reclassified_record_has_single_audit_key() {
    let rows: Vec<PricedPosition> =
        serde_json::from_str(r#"[{"code": "A", "unit_price": 5, "audit": "RED"}]"#)
            .expect("parse rows");
    let batch = classify_all(rows);
    let json = serde_json::to_string(&batch.audited[0]).expect("serialize position");
    assert_eq!(json.matches("\"audit\"").count(), 1);
    let value: serde_json::Value = serde_json::from_str(&json).expect("reparse");
    assert_eq!(value["audit"], "GREEN");
}

fn status() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just("failed".to_string()),
        Just("WARNING".to_string()),
        Just("partial".to_string()),
        Just("unmatched".to_string()),
        Just("passed".to_string()),
        "[a-z]{0,8}",
    ])
}

fn position() -> impl Strategy<Value = PricedPosition> {
    (
        prop::option::of("[A-Z0-9 ]{0,6}"),
        status(),
        status(),
        prop::option::of(prop_oneof![Just(0.0), -1.0e6..1.0e6f64]),
    )
        .prop_map(|(code, validation_status, enrichment_status, unit_price)| PricedPosition {
            code,
            validation_status,
            enrichment_status,
            unit_price,
            ..PricedPosition::default()
        })
}

proptest! {
    #[test]
    fn prop_stats_sum_to_batch_size(batch in prop::collection::vec(position(), 0..50)) {
        let size = batch.len();
        let classified = classify_all(batch.clone());
        prop_assert_eq!(classified.stats.total(), size);
        prop_assert_eq!(classified.audited.len(), size);

        for (row, audited) in batch.iter().zip(&classified.audited) {
            prop_assert_eq!(audited.audit(), classify(row));
            prop_assert_eq!(audited.position(), row);
        }

        prop_assert_eq!(classify_all(batch), classified);
    }

    #[test]
    fn prop_blank_code_is_always_red(mut row in position(), blank in "[ ]{0,3}") {
        row.code = Some(blank);
        prop_assert_eq!(classify(&row), AuditLabel::Red);
    }

    #[test]
    fn prop_green_requires_price(row in position()) {
        if classify(&row) == AuditLabel::Green {
            prop_assert!(row.unit_price.is_some_and(|price| price != 0.0));
        }
    }
}

//! Line item to position extraction.

use boq_model::{Position, PositionDraft, SkipReason, parse_decimal};

use crate::mapping::TagMapping;
use crate::tree::Element;

/// Extract a validated position from a line-item element.
///
/// Never fails with an error: malformed or missing field text resolves to
/// a [`SkipReason`].
pub fn extract(node: &Element, mapping: &TagMapping) -> Result<Position, SkipReason> {
    let specification = node.child_text(&mapping.specification);
    PositionDraft {
        id: node.child_text(&mapping.id).to_string(),
        code: node.child_text(&mapping.code).to_string(),
        unit: node.child_text(&mapping.unit).to_string(),
        quantity: parse_decimal(node.child_text(&mapping.quantity)),
        description: resolve_description(node, mapping).to_string(),
        specification: (!specification.is_empty()).then(|| specification.to_string()),
    }
    .validate()
}

/// Primary description if non-empty, else the secondary name tag, else `""`.
pub fn resolve_description<'a>(node: &'a Element, mapping: &TagMapping) -> &'a str {
    [&mapping.description, &mapping.name]
        .into_iter()
        .map(|tag| node.child_text(tag))
        .find(|text| !text.is_empty())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(tag: &str, text: &str) -> Element {
        Element::new(tag).with_text(text)
    }

    fn line_item(fields: &[(&str, &str)]) -> Element {
        fields
            .iter()
            .fold(Element::new("Position"), |node, (tag, text)| {
                node.with_child(field(tag, text))
            })
    }

    fn complete() -> Vec<(&'static str, &'static str)> {
        vec![
            ("ID", "01.0010"),
            ("Code", "C-330"),
            ("Unit", "m2"),
            ("Quantity", "12,75"),
            ("Description", "Floor screed"),
        ]
    }

    #[test]
    fn extracts_complete_line_item() {
        let node = line_item(&complete());
        let position = extract(&node, &TagMapping::default()).expect("valid");
        assert_eq!(position.id(), "01.0010");
        assert_eq!(position.code(), "C-330");
        assert_eq!(position.unit(), "m2");
        assert_eq!(position.quantity(), 12.75);
        assert_eq!(position.description(), "Floor screed");
        assert_eq!(position.specification(), None);
    }

    #[test]
    fn keeps_specification_when_present() {
        let mut fields = complete();
        fields.push(("Specification", "DIN 18560"));
        let position = extract(&line_item(&fields), &TagMapping::default()).expect("valid");
        assert_eq!(position.specification(), Some("DIN 18560"));
    }

    #[test]
    fn falls_back_to_name() {
        let mut fields = complete();
        fields[4] = ("Description", "  ");
        fields.push(("Name", "Fallback description"));
        let node = line_item(&fields);
        assert_eq!(
            resolve_description(&node, &TagMapping::default()),
            "Fallback description"
        );
        let position = extract(&node, &TagMapping::default()).expect("valid");
        assert_eq!(position.description(), "Fallback description");
    }

    #[test]
    fn primary_description_wins() {
        let mut fields = complete();
        fields.push(("Name", "Secondary"));
        let node = line_item(&fields);
        assert_eq!(
            resolve_description(&node, &TagMapping::default()),
            "Floor screed"
        );
    }

    #[test]
    fn missing_id_wins_over_everything() {
        let node = line_item(&[("Quantity", "abc")]);
        assert_eq!(
            extract(&node, &TagMapping::default()),
            Err(SkipReason::MissingId)
        );
    }

    #[test]
    fn unparsable_quantity_is_missing() {
        let mut fields = complete();
        fields[3] = ("Quantity", "twelve");
        assert_eq!(
            extract(&line_item(&fields), &TagMapping::default()),
            Err(SkipReason::MissingQuantity)
        );
    }

    #[test]
    fn honours_custom_tags() {
        let mapping: TagMapping = serde_json::from_str(
            r#"{"line_item":"Item","id":"RNo","quantity":"Qty","description":"ShortText"}"#,
        )
        .expect("mapping");
        let node = Element::new("Item")
            .with_child(field("RNo", "3"))
            .with_child(field("Code", "X"))
            .with_child(field("Unit", "h"))
            .with_child(field("Qty", "8"))
            .with_child(field("ShortText", "Labour"));
        let position = extract(&node, &mapping).expect("valid");
        assert_eq!(position.id(), "3");
        assert_eq!(position.quantity(), 8.0);
    }
}

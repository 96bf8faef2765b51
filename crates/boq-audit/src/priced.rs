//! Position records carrying upstream validation, enrichment and pricing.

use boq_model::parse_decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::signals::AuditSignals;

/// A position-shaped record as delivered by upstream stages.
///
/// All fields are optional. Numbers may arrive as JSON numbers or as
/// locale-formatted strings; empty strings read as absent. Fields this
/// type does not name are kept in `extra` and written back unchanged. A
/// label from an earlier audit is read into `prior_audit` and never written
/// back, so a re-classified record carries exactly one `audit` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricedPosition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specification: Option<String>,
    #[serde(default)]
    pub validation_status: Option<String>,
    #[serde(default)]
    pub enrichment_status: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub unit_price: Option<f64>,
    #[serde(default, rename = "audit", skip_serializing)]
    pub prior_audit: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AuditSignals for PricedPosition {
    fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    fn validation_status(&self) -> Option<&str> {
        self.validation_status.as_deref()
    }

    fn enrichment_status(&self) -> Option<&str> {
        self.enrichment_status.as_deref()
    }

    fn unit_price(&self) -> Option<f64> {
        self.unit_price
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(value)) => Some(value),
        Some(Raw::Text(text)) => parse_decimal(&text),
        None => None,
    })
}

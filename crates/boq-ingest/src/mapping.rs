//! Source tag names consumed by traversal and extraction.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

/// Names of the tags that carry line items and their fields.
///
/// Deserializes with per-field defaults, so a mapping file only needs the
/// tags that differ from the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TagMapping {
    /// Tag identifying a line item; every other tag is a container.
    pub line_item: String,
    pub id: String,
    /// Classification code.
    pub code: String,
    /// Unit of measure.
    pub unit: String,
    /// Locale-formatted quantity text.
    pub quantity: String,
    /// Primary description.
    pub description: String,
    /// Secondary description, used when the primary one is empty.
    pub name: String,
    pub specification: String,
}

impl Default for TagMapping {
    fn default() -> Self {
        Self {
            line_item: "Position".to_string(),
            id: "ID".to_string(),
            code: "Code".to_string(),
            unit: "Unit".to_string(),
            quantity: "Quantity".to_string(),
            description: "Description".to_string(),
            name: "Name".to_string(),
            specification: "Specification".to_string(),
        }
    }
}

impl TagMapping {
    /// Load a mapping from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| IngestError::MappingRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| IngestError::MappingParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Set the line-item tag.
    #[must_use]
    pub fn with_line_item(mut self, tag: impl Into<String>) -> Self {
        self.line_item = tag.into();
        self
    }

    /// `(field, tag)` pairs in extraction order, for display.
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("line_item", self.line_item.as_str()),
            ("id", self.id.as_str()),
            ("code", self.code.as_str()),
            ("description", self.description.as_str()),
            ("name", self.name.as_str()),
            ("unit", self.unit.as_str()),
            ("quantity", self.quantity.as_str()),
            ("specification", self.specification.as_str()),
        ]
    }
}

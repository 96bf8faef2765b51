//! Normalized bill-of-quantities positions.

use serde::{Deserialize, Serialize};

use crate::diagnostics::SkipReason;

/// A validated line item.
///
/// Every field except `specification` is non-empty. Positions are only
/// obtainable through [`PositionDraft::validate`], so a partially valid
/// position cannot exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PositionDraft")]
pub struct Position {
    id: String,
    code: String,
    unit: String,
    quantity: f64,
    description: String,
    specification: Option<String>,
}

impl Position {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn specification(&self) -> Option<&str> {
        self.specification.as_deref()
    }
}

/// Field values resolved from a line item before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionDraft {
    pub id: String,
    pub code: String,
    pub unit: String,
    /// Parsed quantity; `None` when the source text was empty or unparsable.
    pub quantity: Option<f64>,
    pub description: String,
    pub specification: Option<String>,
}

impl PositionDraft {
    /// Checks required fields in fixed order and builds a [`Position`].
    ///
    /// The first failing check decides the reason: id, code, description,
    /// unit, then quantity.
    pub fn validate(self) -> Result<Position, SkipReason> {
        let id = required(&self.id, SkipReason::MissingId)?;
        let code = required(&self.code, SkipReason::MissingCode)?;
        let description = required(&self.description, SkipReason::MissingDescription)?;
        let unit = required(&self.unit, SkipReason::MissingUnit)?;
        let quantity = self
            .quantity
            .filter(|q| q.is_finite())
            .ok_or(SkipReason::MissingQuantity)?;
        let specification = self
            .specification
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Ok(Position {
            id,
            code,
            unit,
            quantity,
            description,
            specification,
        })
    }
}

impl TryFrom<PositionDraft> for Position {
    type Error = SkipReason;

    fn try_from(draft: PositionDraft) -> Result<Self, Self::Error> {
        draft.validate()
    }
}

fn required(value: &str, reason: SkipReason) -> Result<String, SkipReason> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(reason)
    } else {
        Ok(trimmed.to_string())
    }
}

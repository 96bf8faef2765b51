//! Audit risk labels and batch statistics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Coarse risk classification, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditLabel {
    /// Complete and priced.
    Green,
    /// Usable but needs review.
    Amber,
    /// Structurally unusable or rejected upstream.
    Red,
}

impl AuditLabel {
    pub const ALL: [AuditLabel; 3] = [AuditLabel::Green, AuditLabel::Amber, AuditLabel::Red];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuditLabel::Green => "GREEN",
            AuditLabel::Amber => "AMBER",
            AuditLabel::Red => "RED",
        }
    }
}

impl fmt::Display for AuditLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditLabel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "GREEN" => Ok(AuditLabel::Green),
            "AMBER" => Ok(AuditLabel::Amber),
            "RED" => Ok(AuditLabel::Red),
            _ => Err(ModelError::UnknownAuditLabel(s.to_string())),
        }
    }
}

/// A position paired with its audit label.
///
/// Serializes as the position's own fields plus `audit`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditedPosition<P> {
    #[serde(flatten)]
    position: P,
    audit: AuditLabel,
}

impl<P> AuditedPosition<P> {
    pub fn new(position: P, audit: AuditLabel) -> Self {
        Self { position, audit }
    }

    pub fn position(&self) -> &P {
        &self.position
    }

    pub fn audit(&self) -> AuditLabel {
        self.audit
    }

    pub fn into_inner(self) -> P {
        self.position
    }
}

/// Per-label counts for one classification batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationStats {
    pub green: usize,
    pub amber: usize,
    pub red: usize,
}

impl ClassificationStats {
    pub fn record(&mut self, label: AuditLabel) {
        match label {
            AuditLabel::Green => self.green += 1,
            AuditLabel::Amber => self.amber += 1,
            AuditLabel::Red => self.red += 1,
        }
    }

    pub fn count(&self, label: AuditLabel) -> usize {
        match label {
            AuditLabel::Green => self.green,
            AuditLabel::Amber => self.amber,
            AuditLabel::Red => self.red,
        }
    }

    pub fn total(&self) -> usize {
        self.green + self.amber + self.red
    }

    /// Most severe label present, if any position was counted.
    pub fn worst(&self) -> Option<AuditLabel> {
        AuditLabel::ALL
            .into_iter()
            .rev()
            .find(|label| self.count(*label) > 0)
    }
}

impl FromIterator<AuditLabel> for ClassificationStats {
    fn from_iter<I: IntoIterator<Item = AuditLabel>>(iter: I) -> Self {
        let mut stats = Self::default();
        for label in iter {
            stats.record(label);
        }
        stats
    }
}

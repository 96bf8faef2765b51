//! Document assembly: positions plus diagnostics.

use boq_model::{Diagnostics, Position, SkippedRow};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::extract::extract;
use crate::loader::parse_document;
use crate::mapping::TagMapping;
use crate::tree::{Element, walk};

/// Valid positions and the record of skipped rows for one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedDocument {
    /// Valid positions in traversal order.
    pub positions: Vec<Position>,
    pub diagnostics: Diagnostics,
}

/// Extract every line item under `root`.
///
/// Invalid line items are recorded in the diagnostics with their row index
/// and never abort the document.
pub fn assemble(root: &Element, mapping: &TagMapping) -> ParsedDocument {
    let mut positions = Vec::new();
    let mut skipped = Vec::new();

    for (row_index, node) in walk(root, &mapping.line_item) {
        match extract(node, mapping) {
            Ok(position) => positions.push(position),
            Err(reason) => {
                debug!(row_index, reason = %reason, "line item skipped");
                skipped.push(SkippedRow::new(row_index, reason));
            }
        }
    }

    let diagnostics = Diagnostics::new(positions.len(), skipped);
    info!(
        root = %root.name,
        parsed = diagnostics.parsed_count,
        skipped = diagnostics.skipped_count(),
        "document assembled"
    );
    ParsedDocument {
        positions,
        diagnostics,
    }
}

/// Parse XML markup and assemble it in one step.
pub fn parse_boq(xml: &str, mapping: &TagMapping) -> Result<ParsedDocument> {
    let root = parse_document(xml)?;
    Ok(assemble(&root, mapping))
}

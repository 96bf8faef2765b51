//! Bill-of-quantities ingestion.
//!
//! This crate turns a tree-structured BOQ export into normalized positions
//! plus per-row diagnostics.
//!
//! # Stages
//!
//! - **Loading**: Parse XML markup into an owned [`Element`] tree
//! - **Walking**: Yield line-item elements in document order with 1-based row indices
//! - **Extraction**: Map a line item's child tags onto a validated position
//! - **Assembly**: Partition a document into positions and diagnostics
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use boq_ingest::{TagMapping, assemble, load_document};
//!
//! let root = load_document(Path::new("exports/site-a.xml"))?;
//! let parsed = assemble(&root, &TagMapping::default());
//! println!("{} positions", parsed.diagnostics.parsed_count);
//! ```

mod assemble;
mod error;
mod extract;
mod loader;
mod mapping;
mod tree;

// === Error Types ===
pub use error::{IngestError, Result};

// === Document Tree ===
pub use loader::{load_document, parse_document};
pub use tree::{Element, LineItems, walk};

// === Configuration ===
pub use mapping::TagMapping;

// === Extraction ===
pub use assemble::{ParsedDocument, assemble, parse_boq};
pub use boq_model::parse_decimal as parse_quantity;
pub use extract::{extract, resolve_description};

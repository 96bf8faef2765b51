//! Error types for BOQ document ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a document or its configuration.
///
/// Invalid line items are never errors; they are reported as skip reasons.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Failed to read document file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Markup Errors ===
    /// The XML reader rejected the markup.
    #[error("malformed XML at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    /// Tag or text content is not valid UTF-8.
    #[error("invalid UTF-8 in document at byte {position}")]
    Encoding { position: u64 },

    /// Document contains no element at all.
    #[error("document has no root element")]
    NoRootElement,

    /// A second top-level element follows the root.
    #[error("unexpected second root element <{name}>")]
    MultipleRoots { name: String },

    /// A closing tag appeared with no element open.
    #[error("closing tag without open element at byte {position}")]
    UnexpectedEndTag { position: u64 },

    /// Input ended while an element was still open.
    #[error("element <{name}> is not closed")]
    UnclosedElement { name: String },

    // === Configuration Errors ===
    /// Failed to read tag mapping file.
    #[error("failed to read tag mapping {path}: {source}")]
    MappingRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Tag mapping file is not valid JSON for a mapping.
    #[error("invalid tag mapping {path}: {source}")]
    MappingParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

//! XML loading into an owned [`Element`] tree.

use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesStart, Event};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::tree::Element;

/// Read and parse a BOQ document from disk.
pub fn load_document(path: &Path) -> Result<Element> {
    let contents = fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let root = parse_document(&contents)?;
    debug!(
        path = %path.display(),
        root = %root.name,
        bytes = contents.len(),
        "document loaded"
    );
    Ok(root)
}

/// Parse XML markup into an element tree.
///
/// Namespace prefixes are dropped from tag names, attributes are ignored,
/// and each element keeps only its own trimmed character data. Open
/// elements are tracked on an explicit stack.
pub fn parse_document(xml: &str) -> Result<Element> {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
    let mut reader = Reader::from_str(xml);
    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let position = reader.buffer_position();
        let event = reader.read_event().map_err(|source| IngestError::Xml {
            position: reader.error_position(),
            source,
        })?;
        match event {
            Event::Start(start) => open.push(Element::new(local_name(&start, position)?)),
            Event::Empty(start) => {
                let element = Element::new(local_name(&start, position)?);
                attach(element, &mut open, &mut root)?;
            }
            Event::End(_) => {
                let Some(mut element) = open.pop() else {
                    return Err(IngestError::UnexpectedEndTag { position });
                };
                let trimmed = element.text.trim();
                if trimmed.len() != element.text.len() {
                    element.text = trimmed.to_string();
                }
                attach(element, &mut open, &mut root)?;
            }
            Event::Text(text) => {
                if let Some(current) = open.last_mut() {
                    let raw = utf8(&text, position)?;
                    let unescaped = unescape(raw).map_err(|err| IngestError::Xml {
                        position,
                        source: err.into(),
                    })?;
                    current.text.push_str(&unescaped);
                }
            }
            Event::CData(data) => {
                if let Some(current) = open.last_mut() {
                    current.text.push_str(utf8(&data, position)?);
                }
            }
            Event::GeneralRef(reference) => {
                if let Some(current) = open.last_mut() {
                    let resolved = reference
                        .resolve_char_ref()
                        .map_err(|source| IngestError::Xml { position, source })?;
                    match resolved {
                        Some(ch) => current.text.push(ch),
                        None => {
                            let name = utf8(&reference, position)?;
                            match resolve_predefined_entity(name) {
                                Some(value) => current.text.push_str(value),
                                None => {
                                    current.text.push('&');
                                    current.text.push_str(name);
                                    current.text.push(';');
                                }
                            }
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(element) = open.last() {
        return Err(IngestError::UnclosedElement {
            name: element.name.clone(),
        });
    }
    root.ok_or(IngestError::NoRootElement)
}

fn attach(element: Element, open: &mut [Element], root: &mut Option<Element>) -> Result<()> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(element);
    } else if root.is_some() {
        return Err(IngestError::MultipleRoots {
            name: element.name.clone(),
        });
    } else {
        *root = Some(element);
    }
    Ok(())
}

fn local_name(start: &BytesStart<'_>, position: u64) -> Result<String> {
    std::str::from_utf8(start.local_name().as_ref())
        .map(str::to_string)
        .map_err(|_| IngestError::Encoding { position })
}

fn utf8(bytes: &[u8], position: u64) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|_| IngestError::Encoding { position })
}

//! Owned document tree and line-item traversal.

use std::iter::FusedIterator;

/// One element of a loaded document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Local tag name, without namespace prefix.
    pub name: String,
    /// Trimmed character data directly inside this element.
    pub text: String,
    /// Child elements in document order.
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// First direct child with the given tag.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Trimmed text of the first direct child with the given tag, or `""`.
    pub fn child_text(&self, name: &str) -> &str {
        self.child(name).map_or("", |child| child.text.trim())
    }
}

impl Drop for Element {
    // Unlinks descendants onto a heap worklist so dropping a deep tree
    // does not recurse once per nesting level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Depth-first iterator over line-item elements.
///
/// Yields `(row_index, element)` with a 1-based index counting every line
/// item met. A line item's own children are never visited. Uses an explicit
/// stack, so nesting depth does not grow the call stack.
#[derive(Debug, Clone)]
pub struct LineItems<'a> {
    stack: Vec<&'a Element>,
    tag: &'a str,
    row_index: usize,
}

impl<'a> Iterator for LineItems<'a> {
    type Item = (usize, &'a Element);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if node.name == self.tag {
                self.row_index += 1;
                return Some((self.row_index, node));
            }
            self.stack.extend(node.children.iter().rev());
        }
        None
    }
}

impl FusedIterator for LineItems<'_> {}

/// Walks `root` in document order, yielding elements tagged `line_item_tag`.
///
/// Each call starts a fresh traversal with numbering from 1.
pub fn walk<'a>(root: &'a Element, line_item_tag: &'a str) -> LineItems<'a> {
    LineItems {
        stack: vec![root],
        tag: line_item_tag,
        row_index: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> Element {
        Element::new("Position").with_child(Element::new("ID").with_text(id))
    }

    #[test]
    fn yields_items_in_document_order() {
        let root = Element::new("BOQ")
            .with_child(
                Element::new("Section")
                    .with_child(item("1"))
                    .with_child(Element::new("Group").with_child(item("2"))),
            )
            .with_child(item("3"));

        let ids: Vec<_> = walk(&root, "Position")
            .map(|(row, node)| (row, node.child_text("ID")))
            .collect();
        assert_eq!(ids, vec![(1, "1"), (2, "2"), (3, "3")]);
    }

    #[test]
    fn does_not_descend_into_line_items() {
        let nested = item("outer").with_child(item("inner"));
        let root = Element::new("BOQ").with_child(nested);
        let rows: Vec<_> = walk(&root, "Position").collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].1.child_text("ID"), "outer");
    }

    #[test]
    fn root_can_be_a_line_item() {
        let root = item("only");
        assert_eq!(walk(&root, "Position").count(), 1);
    }

    #[test]
    fn traversal_is_restartable() {
        let root = Element::new("BOQ").with_child(item("1")).with_child(item("2"));
        let first: Vec<_> = walk(&root, "Position").map(|(row, _)| row).collect();
        let second: Vec<_> = walk(&root, "Position").map(|(row, _)| row).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn deep_nesting_does_not_overflow() {
        let mut node = item("deep");
        for _ in 0..100_000 {
            node = Element::new("Group").with_child(node);
        }
        let root = Element::new("BOQ").with_child(node);
        let rows: Vec<_> = walk(&root, "Position").map(|(row, _)| row).collect();
        assert_eq!(rows, vec![1]);
    }

    #[test]
    fn child_text_defaults_to_empty() {
        let node = item("1");
        assert_eq!(node.child_text("Unit"), "");
    }
}

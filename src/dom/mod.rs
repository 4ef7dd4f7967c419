pub mod parser;
pub mod css;

use std::collections::HashMap;

/// Handle to an element in a `Document` arena.
///
/// Handles are handed out in creation order and never reused, so a `NodeId`
/// held by an outside observer (the schema panel) stays valid for the
/// lifetime of the document it came from without owning anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// A single element of the live document tree.
///
/// Unlike a full browser DOM this keeps only what the page view and the
/// schema panel need: tag, attributes, direct text content, the child list
/// in live order, and the one style property the highlight interaction
/// writes (the inline background color).
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    pub attributes: HashMap<String, String>,
    /// Direct text content (text-node children, trimmed and joined).
    pub text: String,
    /// Element children in live DOM order.
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
    /// Current inline background color as written in CSS, if any.
    pub background: Option<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>, attributes: HashMap<String, String>) -> Self {
        Self {
            tag: tag.into(),
            attributes,
            text: String::new(),
            children: Vec::new(),
            parent: None,
            background: None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }
}

/// The live document tree, arena-style: elements live in one `Vec` and
/// point at each other through `NodeId`s.
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
    root: NodeId,
    pub url: String,
    pub title: String,
}

impl Document {
    pub(crate) fn new(elements: Vec<Element>, root: NodeId, url: String, title: String) -> Self {
        Self {
            elements,
            root,
            url,
            title,
        }
    }

    /// The document element (`<html>`).
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The top-level content container (`<body>`), if the page has one.
    pub fn body(&self) -> Option<NodeId> {
        self.get(self.root).and_then(|root| {
            root.children
                .iter()
                .copied()
                .find(|&id| self.get(id).is_some_and(|el| el.tag == "body"))
        })
    }

    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    /// Total number of elements in the document.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Number of elements in the subtree rooted at `id` (including `id`).
    pub fn subtree_count(&self, id: NodeId) -> usize {
        let Some(el) = self.get(id) else { return 0 };
        1 + el
            .children
            .iter()
            .map(|&c| self.subtree_count(c))
            .sum::<usize>()
    }

    /// First element with the given tag, in creation order.
    pub fn find(&self, tag: &str) -> Option<NodeId> {
        self.elements
            .iter()
            .position(|el| el.tag == tag)
            .map(NodeId)
    }

    pub fn background(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|el| el.background.as_deref())
    }

    /// Overwrite an element's inline background color. `None` clears it.
    pub fn set_background(&mut self, id: NodeId, color: Option<String>) {
        if let Some(el) = self.get_mut(id) {
            el.background = color;
        }
    }

    /// Collect the text of the subtree rooted at `id`, in document order.
    pub fn collect_text(&self, id: NodeId) -> String {
        let mut buf = String::new();
        self.collect_text_inner(id, &mut buf);
        buf
    }

    fn collect_text_inner(&self, id: NodeId, buf: &mut String) {
        let Some(el) = self.get(id) else { return };
        if !el.text.is_empty() {
            if !buf.is_empty() {
                buf.push(' ');
            }
            buf.push_str(el.text.trim());
        }
        for &child in &el.children {
            self.collect_text_inner(child, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with(tags: &[(&str, Option<usize>)]) -> Document {
        // (tag, parent index) pairs, index 0 is the root
        let mut elements: Vec<Element> = Vec::new();
        for (tag, parent) in tags {
            let mut el = Element::new(*tag, HashMap::new());
            el.parent = parent.map(NodeId);
            elements.push(el);
        }
        for i in 0..elements.len() {
            if let Some(p) = elements[i].parent {
                elements[p.0].children.push(NodeId(i));
            }
        }
        Document::new(elements, NodeId(0), String::new(), String::new())
    }

    #[test]
    fn body_lookup() {
        let doc = doc_with(&[("html", None), ("head", Some(0)), ("body", Some(0))]);
        assert_eq!(doc.body(), Some(NodeId(2)));
    }

    #[test]
    fn body_missing() {
        let doc = doc_with(&[("html", None), ("head", Some(0))]);
        assert_eq!(doc.body(), None);
    }

    #[test]
    fn subtree_count_includes_root() {
        let doc = doc_with(&[
            ("html", None),
            ("body", Some(0)),
            ("div", Some(1)),
            ("p", Some(2)),
        ]);
        assert_eq!(doc.subtree_count(NodeId(1)), 3);
        assert_eq!(doc.element_count(), 4);
    }

    #[test]
    fn set_background_roundtrip() {
        let mut doc = doc_with(&[("html", None), ("body", Some(0))]);
        let body = doc.body().unwrap();
        assert_eq!(doc.background(body), None);
        doc.set_background(body, Some("blue".into()));
        assert_eq!(doc.background(body), Some("blue"));
        doc.set_background(body, None);
        assert_eq!(doc.background(body), None);
    }
}

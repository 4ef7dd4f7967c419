//! The DOM schema: a nested-box snapshot of the live document tree.
//!
//! `SchemaTree::build` walks the document once and produces one box per
//! element, colored by `ColorPicker`. `DomSchema` wraps the tree with the
//! hover/highlight state machine and the connected/disconnected lifecycle.
//! Boxes hold `NodeId` back-references into the document; highlighting
//! writes the bound element's inline background and leaving restores the
//! value captured when the box was created.

pub mod color;

use crate::dom::{Document, NodeId};
use crate::schema::color::{ColorPicker, PALETTE};

/// Reserved color for the root box. Not part of the palette, so no tag can
/// ever be assigned it.
pub const ROOT_COLOR: &str = "black";

/// Background written into the live element while its box is hovered.
pub const HIGHLIGHT_COLOR: &str = "rgba(255, 0, 0, 0.4)";

/// Handle to a box in a `SchemaTree` arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchemaId(pub usize);

/// One box of the schema, mirroring exactly one element of the document.
#[derive(Debug, Clone)]
pub struct SchemaNode {
    /// Creation sequence number; equals the arena index and is never reused.
    pub id: usize,
    /// Box background color (CSS string from the palette, or `ROOT_COLOR`).
    pub color: String,
    /// Lowercase tag name of the element this box represents.
    pub label: String,
    element: NodeId,
    original_background: Option<String>,
    /// Child boxes in live DOM child order.
    pub children: Vec<SchemaId>,
}

impl SchemaNode {
    /// The live element this box represents. Fixed at construction.
    pub fn element(&self) -> NodeId {
        self.element
    }

    /// The element's background as captured when this box was created.
    pub fn original_background(&self) -> Option<&str> {
        self.original_background.as_deref()
    }
}

/// Error while building the schema.
#[derive(Debug)]
pub struct SchemaError {
    pub message: String,
    pub phase: &'static str,
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.phase, self.message)
    }
}

/// The built box tree. One node per element, ids unique and stable for the
/// life of the tree.
#[derive(Debug)]
pub struct SchemaTree {
    nodes: Vec<SchemaNode>,
    root: SchemaId,
}

impl SchemaTree {
    /// Snapshot `doc` into a box tree using the default palette.
    pub fn build(doc: &Document) -> Result<Self, SchemaError> {
        Self::build_with(doc, ColorPicker::new(PALETTE))
    }

    /// Snapshot `doc` with a caller-supplied picker.
    ///
    /// The walk keeps an explicit LIFO work list; only the relative order of
    /// one parent's direct children is guaranteed. The preceding color fed
    /// to the picker is a single value carried across the entire walk, so it
    /// names the last box created anywhere, not necessarily a true sibling.
    pub fn build_with(doc: &Document, mut picker: ColorPicker) -> Result<Self, SchemaError> {
        let body = doc.body().ok_or_else(|| SchemaError {
            message: "document has no body element".to_string(),
            phase: "traverse",
        })?;
        let body_el = doc.get(body).ok_or_else(|| SchemaError {
            message: "body handle points at nothing".to_string(),
            phase: "traverse",
        })?;

        let mut nodes = vec![SchemaNode {
            id: 0,
            color: ROOT_COLOR.to_string(),
            label: body_el.tag.clone(),
            element: body,
            original_background: body_el.background.clone(),
            children: Vec::new(),
        }];

        let mut fringe = vec![SchemaId(0)];
        let mut preceding = ROOT_COLOR.to_string();

        while let Some(current) = fringe.pop() {
            let parent_color = nodes[current.0].color.clone();
            let parent_element = nodes[current.0].element;
            let child_elements = match doc.get(parent_element) {
                Some(el) => el.children.clone(),
                None => Vec::new(),
            };

            for child_id in child_elements {
                let child = doc.get(child_id).ok_or_else(|| SchemaError {
                    message: format!("dangling child reference {:?}", child_id),
                    phase: "traverse",
                })?;

                let color = picker.color_for(&child.tag, &parent_color, &preceding);
                preceding = color.clone();

                let sid = SchemaId(nodes.len());
                nodes.push(SchemaNode {
                    id: sid.0,
                    color,
                    label: child.tag.clone(),
                    element: child_id,
                    original_background: child.background.clone(),
                    children: Vec::new(),
                });
                nodes[current.0].children.push(sid);
                fringe.push(sid);
            }
        }

        log::debug!("schema built: {} boxes for {}", nodes.len(), doc.url);

        Ok(Self {
            nodes,
            root: SchemaId(0),
        })
    }

    pub fn root(&self) -> SchemaId {
        self.root
    }

    pub fn get(&self, id: SchemaId) -> Option<&SchemaNode> {
        self.nodes.get(id.0)
    }

    pub fn nodes(&self) -> &[SchemaNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Per-instance styling for the schema panel.
///
/// Kept on the component rather than in the global egui style so host
/// styling and panel styling cannot leak into each other.
#[derive(Debug, Clone)]
pub struct SchemaStyle {
    /// Panel width as a fraction of the viewport width.
    pub panel_fraction: f32,
    /// Inner padding of each box, in points.
    pub padding: f32,
    /// Gap between a box and its children, in points.
    pub margin: f32,
    pub font_size: f32,
    /// Label color (white on the colored boxes).
    pub text_color: [u8; 4],
}

impl Default for SchemaStyle {
    fn default() -> Self {
        Self {
            panel_fraction: 0.25,
            padding: 4.0,
            margin: 4.0,
            font_size: 14.0,
            text_color: [255, 255, 255, 255],
        }
    }
}

/// The schema component: a built tree plus hover state and lifecycle.
///
/// Interaction is armed by `connect` after the panel is first shown and
/// disarmed by `disconnect`; while disconnected, hover input is ignored and
/// no highlight can remain active.
pub struct DomSchema {
    tree: SchemaTree,
    style: SchemaStyle,
    hovered: Option<SchemaId>,
    connected: bool,
}

impl DomSchema {
    /// Build the schema for `doc`. Fails (and attaches nothing) if the
    /// document has no body.
    pub fn build(doc: &Document) -> Result<Self, SchemaError> {
        Ok(Self {
            tree: SchemaTree::build(doc)?,
            style: SchemaStyle::default(),
            hovered: None,
            connected: false,
        })
    }

    pub fn tree(&self) -> &SchemaTree {
        &self.tree
    }

    pub fn style(&self) -> &SchemaStyle {
        &self.style
    }

    pub fn hovered(&self) -> Option<SchemaId> {
        self.hovered
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Arm hover interaction.
    pub fn connect(&mut self) {
        self.connected = true;
    }

    /// Disarm interaction, restoring any active highlight first. Pointer
    /// events after this have no effect until the next `connect`.
    pub fn disconnect(&mut self, doc: &mut Document) {
        self.set_hovered(None, doc);
        self.connected = false;
    }

    /// Drive the highlight state machine from the innermost box the pointer
    /// is over this frame.
    ///
    /// The previous frame's target is compared against `target`: a change
    /// is a leave transition (restore the old element's background) followed
    /// by an enter transition (write the highlight color into the new one).
    /// Both transitions share this one code path, so arming and disarming
    /// are always symmetric.
    pub fn set_hovered(&mut self, target: Option<SchemaId>, doc: &mut Document) {
        if !self.connected || target == self.hovered {
            return;
        }
        if let Some(old) = self.hovered.take() {
            self.unhighlight(old, doc);
        }
        if let Some(new) = target {
            self.highlight(new, doc);
            self.hovered = Some(new);
        }
    }

    fn highlight(&self, id: SchemaId, doc: &mut Document) {
        if let Some(node) = self.tree.get(id) {
            doc.set_background(node.element, Some(HIGHLIGHT_COLOR.to_string()));
        }
    }

    fn unhighlight(&self, id: SchemaId, doc: &mut Document) {
        if let Some(node) = self.tree.get(id) {
            // None clears the background when no original was captured
            doc.set_background(node.element, node.original_background.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parser::parse_html;
    use crate::dom::Element;
    use std::collections::HashMap;

    fn find(tree: &SchemaTree, label: &str) -> SchemaId {
        SchemaId(
            tree.nodes()
                .iter()
                .position(|n| n.label == label)
                .unwrap_or_else(|| panic!("no box labeled {label}")),
        )
    }

    #[test]
    fn one_box_per_element() {
        let html = r#"<html><body>
            <div><p>a</p><p>b</p></div>
            <ul><li>x</li><li>y</li></ul>
        </body></html>"#;
        let doc = parse_html(html, "https://example.com");
        let tree = SchemaTree::build(&doc).unwrap();
        assert_eq!(tree.len(), doc.subtree_count(doc.body().unwrap()));
    }

    #[test]
    fn children_mirror_live_order() {
        let html = r#"<html><body><div></div><span></span><p></p></body></html>"#;
        let doc = parse_html(html, "https://example.com");
        let tree = SchemaTree::build(&doc).unwrap();
        let root = tree.get(tree.root()).unwrap();
        let labels: Vec<&str> = root
            .children
            .iter()
            .map(|&c| tree.get(c).unwrap().label.as_str())
            .collect();
        assert_eq!(labels, ["div", "span", "p"]);
    }

    #[test]
    fn ids_unique_and_monotonic() {
        let html = r#"<html><body><div><span></span></div><p></p></body></html>"#;
        let doc = parse_html(html, "https://example.com");
        let tree = SchemaTree::build(&doc).unwrap();
        for (i, node) in tree.nodes().iter().enumerate() {
            assert_eq!(node.id, i);
        }
    }

    #[test]
    fn root_color_is_reserved() {
        let html = r#"<html><body><div></div><span></span></body></html>"#;
        let doc = parse_html(html, "https://example.com");
        let tree = SchemaTree::build(&doc).unwrap();
        assert_eq!(tree.get(tree.root()).unwrap().color, ROOT_COLOR);
        for node in &tree.nodes()[1..] {
            assert_ne!(node.color, ROOT_COLOR);
        }
    }

    #[test]
    fn five_node_scenario() {
        // body with <div> and <span>, each holding one <p>: five boxes, and
        // the second <p> reuses the first one's color (sticky per tag).
        let html = r#"<html><body>
            <div><p>one</p></div>
            <span><p>two</p></span>
        </body></html>"#;
        let doc = parse_html(html, "https://example.com");
        let tree = SchemaTree::build(&doc).unwrap();
        assert_eq!(tree.len(), 5);

        let p_colors: Vec<&str> = tree
            .nodes()
            .iter()
            .filter(|n| n.label == "p")
            .map(|n| n.color.as_str())
            .collect();
        assert_eq!(p_colors.len(), 2);
        assert_eq!(p_colors[0], p_colors[1]);

        let div = tree.get(find(&tree, "div")).unwrap();
        let span = tree.get(find(&tree, "span")).unwrap();
        assert_ne!(div.color, span.color);
    }

    #[test]
    fn preceding_color_runs_across_subtrees() {
        // The preceding color is one running value for the whole walk. With
        // the LIFO order the <ul> subtree is expanded before <div>'s, so
        // <span>'s exclusion set is {div's color, li's color} — not its true
        // (nonexistent) preceding sibling. A per-parent reset would hand
        // <span> "#ccc"; the running value hands it "#bbb".
        let html = r#"<html><body>
            <div><span></span></div>
            <ul><li></li></ul>
        </body></html>"#;
        let doc = parse_html(html, "https://example.com");
        let picker = ColorPicker::new(&["#aaa", "#bbb", "#ccc"]);
        let tree = SchemaTree::build_with(&doc, picker).unwrap();

        assert_eq!(tree.get(find(&tree, "div")).unwrap().color, "#aaa");
        assert_eq!(tree.get(find(&tree, "ul")).unwrap().color, "#bbb");
        assert_eq!(tree.get(find(&tree, "li")).unwrap().color, "#ccc");
        assert_eq!(tree.get(find(&tree, "span")).unwrap().color, "#bbb");
    }

    #[test]
    fn missing_body_fails_fast() {
        let elements = vec![Element::new("html", HashMap::new())];
        let doc = Document::new(
            elements,
            NodeId(0),
            "https://example.com".into(),
            String::new(),
        );
        let err = SchemaTree::build(&doc).unwrap_err();
        assert_eq!(err.phase, "traverse");
        assert!(err.to_string().contains("no body"));
    }

    #[test]
    fn original_background_captured_at_build() {
        let html = r#"<html><body>
            <div style="background-color: blue">x</div>
        </body></html>"#;
        let doc = parse_html(html, "https://example.com");
        let tree = SchemaTree::build(&doc).unwrap();
        let div = tree.get(find(&tree, "div")).unwrap();
        assert_eq!(div.original_background(), Some("blue"));
    }

    #[test]
    fn highlight_sets_and_restores_background() {
        let html = r#"<html><body>
            <div style="background-color: blue">x</div>
        </body></html>"#;
        let mut doc = parse_html(html, "https://example.com");
        let mut schema = DomSchema::build(&doc).unwrap();
        schema.connect();

        let div_box = find(schema.tree(), "div");
        let div_el = schema.tree().get(div_box).unwrap().element();

        schema.set_hovered(Some(div_box), &mut doc);
        assert_eq!(doc.background(div_el), Some(HIGHLIGHT_COLOR));

        schema.set_hovered(None, &mut doc);
        assert_eq!(doc.background(div_el), Some("blue"));
    }

    #[test]
    fn unhighlight_clears_when_no_original() {
        let html = r#"<html><body><p>x</p></body></html>"#;
        let mut doc = parse_html(html, "https://example.com");
        let mut schema = DomSchema::build(&doc).unwrap();
        schema.connect();

        let p_box = find(schema.tree(), "p");
        let p_el = schema.tree().get(p_box).unwrap().element();

        schema.set_hovered(Some(p_box), &mut doc);
        assert_eq!(doc.background(p_el), Some(HIGHLIGHT_COLOR));
        schema.set_hovered(None, &mut doc);
        assert_eq!(doc.background(p_el), None);
    }

    #[test]
    fn hover_moving_between_boxes_swaps_highlight() {
        let html = r#"<html><body><div>a</div><p>b</p></body></html>"#;
        let mut doc = parse_html(html, "https://example.com");
        let mut schema = DomSchema::build(&doc).unwrap();
        schema.connect();

        let div_box = find(schema.tree(), "div");
        let p_box = find(schema.tree(), "p");
        let div_el = schema.tree().get(div_box).unwrap().element();
        let p_el = schema.tree().get(p_box).unwrap().element();

        schema.set_hovered(Some(div_box), &mut doc);
        schema.set_hovered(Some(p_box), &mut doc);
        assert_eq!(doc.background(div_el), None);
        assert_eq!(doc.background(p_el), Some(HIGHLIGHT_COLOR));
    }

    #[test]
    fn transitions_repeat_indefinitely() {
        let html = r#"<html><body><div style="background: #abc">x</div></body></html>"#;
        let mut doc = parse_html(html, "https://example.com");
        let mut schema = DomSchema::build(&doc).unwrap();
        schema.connect();

        let div_box = find(schema.tree(), "div");
        let div_el = schema.tree().get(div_box).unwrap().element();

        for _ in 0..3 {
            schema.set_hovered(Some(div_box), &mut doc);
            assert_eq!(doc.background(div_el), Some(HIGHLIGHT_COLOR));
            schema.set_hovered(None, &mut doc);
            assert_eq!(doc.background(div_el), Some("#abc"));
        }
    }

    #[test]
    fn disconnect_leaves_no_residual_effects() {
        let html = r#"<html><body><div style="background-color: blue">x</div></body></html>"#;
        let mut doc = parse_html(html, "https://example.com");
        let mut schema = DomSchema::build(&doc).unwrap();
        schema.connect();

        let div_box = find(schema.tree(), "div");
        let div_el = schema.tree().get(div_box).unwrap().element();

        schema.set_hovered(Some(div_box), &mut doc);
        schema.disconnect(&mut doc);
        assert_eq!(doc.background(div_el), Some("blue"));

        // Pointer events on the detached structure change nothing.
        schema.set_hovered(Some(div_box), &mut doc);
        assert_eq!(doc.background(div_el), Some("blue"));
        assert_eq!(schema.hovered(), None);
    }

    #[test]
    fn hover_ignored_before_connect() {
        let html = r#"<html><body><p>x</p></body></html>"#;
        let mut doc = parse_html(html, "https://example.com");
        let mut schema = DomSchema::build(&doc).unwrap();

        let p_box = find(schema.tree(), "p");
        let p_el = schema.tree().get(p_box).unwrap().element();

        schema.set_hovered(Some(p_box), &mut doc);
        assert_eq!(doc.background(p_el), None);
        assert_eq!(schema.hovered(), None);
    }
}

use crate::dom::css::background_from_style;
use crate::dom::{Document, Element, NodeId};
use scraper::{ElementRef, Html, Node};
use std::collections::HashMap;

/// Tags whose children should be stripped (invisible/script content)
const SKIP_CHILDREN: &[&str] = &["script", "style", "noscript", "svg"];

/// Parse raw HTML into a domscope `Document` arena.
pub fn parse_html(html: &str, url: &str) -> Document {
    let document = Html::parse_document(html);

    // Extract <title>
    let title = scraper::Selector::parse("title")
        .ok()
        .and_then(|sel| document.select(&sel).next())
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default();

    let mut elements = Vec::new();
    let root = convert_element(document.root_element(), None, &mut elements);

    Document::new(elements, root, url.to_string(), title.trim().to_string())
}

fn convert_element(
    el: ElementRef<'_>,
    parent: Option<NodeId>,
    arena: &mut Vec<Element>,
) -> NodeId {
    let tag = el.value().name.local.as_ref().to_string();
    let attributes: HashMap<String, String> = el
        .value()
        .attrs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let background = attributes
        .get("style")
        .and_then(|s| background_from_style(s));

    let id = NodeId(arena.len());
    let mut node = Element::new(tag.clone(), attributes);
    node.parent = parent;
    node.background = background;
    arena.push(node);

    // Skip children of invisible elements
    if SKIP_CHILDREN.contains(&tag.as_str()) {
        return id;
    }

    let mut text = String::new();
    let mut children = Vec::new();

    for child_ref in el.children() {
        match child_ref.value() {
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child_ref) {
                    children.push(convert_element(child_el, Some(id), arena));
                }
            }
            Node::Text(t) => {
                let s = t.text.trim();
                if !s.is_empty() {
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    text.push_str(s);
                }
            }
            _ => {}
        }
    }

    arena[id.0].text = text;
    arena[id.0].children = children;
    id
}

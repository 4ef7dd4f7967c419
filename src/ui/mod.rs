//! egui helpers shared by the shell panels.
//!
//! Stateless functions that translate the document arena into page widgets
//! and the schema tree into nested colored boxes. The schema renderer also
//! reports which box the pointer is over, which is the input to the
//! highlight state machine in `domscope::schema`.

use domscope::dom::{css, Document, Element, NodeId};
use domscope::schema::{SchemaId, SchemaStyle, SchemaTree};
use eframe::egui;

// ─── Colors ──────────────────────────────────────────────────────────────────

/// CSS color string → `Color32`, black when unparseable.
pub fn css_color(value: &str) -> egui::Color32 {
    match css::parse_css_color(value) {
        Some([r, g, b, a]) => egui::Color32::from_rgba_unmultiplied(
            (r * 255.0) as u8,
            (g * 255.0) as u8,
            (b * 255.0) as u8,
            (a * 255.0) as u8,
        ),
        None => egui::Color32::BLACK,
    }
}

// ─── Page rendering ──────────────────────────────────────────────────────────

/// Render the page content, starting below `id` (normally the body).
pub fn render_page(
    ui: &mut egui::Ui,
    doc: &Document,
    id: NodeId,
    clicked_link: &mut Option<String>,
) {
    let Some(el) = doc.get(id) else { return };
    for &child in &el.children {
        render_page_node(ui, doc, child, clicked_link);
    }
}

/// Render one element. An element with a live inline background gets a
/// filled frame around its subtree, which is how a schema-panel highlight
/// becomes visible in the page view.
pub fn render_page_node(
    ui: &mut egui::Ui,
    doc: &Document,
    id: NodeId,
    clicked_link: &mut Option<String>,
) {
    let Some(el) = doc.get(id) else { return };

    if let Some(ref bg) = el.background {
        let fill = css_color(bg);
        egui::Frame::none()
            .fill(fill)
            .inner_margin(egui::Margin::same(2.0))
            .show(ui, |ui| {
                render_page_element(ui, doc, id, el, clicked_link);
            });
    } else {
        render_page_element(ui, doc, id, el, clicked_link);
    }
}

fn render_page_element(
    ui: &mut egui::Ui,
    doc: &Document,
    id: NodeId,
    el: &Element,
    clicked_link: &mut Option<String>,
) {
    match el.tag.as_str() {
        "h1" => {
            let text = doc.collect_text(id);
            if !text.is_empty() {
                ui.heading(egui::RichText::new(&text).size(28.0).strong());
                ui.add_space(8.0);
            }
        }
        "h2" => {
            let text = doc.collect_text(id);
            if !text.is_empty() {
                ui.heading(egui::RichText::new(&text).size(22.0).strong());
                ui.add_space(6.0);
            }
        }
        "h3" | "h4" | "h5" | "h6" => {
            let text = doc.collect_text(id);
            if !text.is_empty() {
                ui.heading(egui::RichText::new(&text).size(18.0));
                ui.add_space(4.0);
            }
        }
        "p" => {
            let text = doc.collect_text(id);
            if !text.is_empty() {
                ui.label(&text);
                ui.add_space(8.0);
            }
        }
        "a" => {
            let text = doc.collect_text(id);
            if !text.is_empty() {
                let rt = egui::RichText::new(&text)
                    .color(egui::Color32::from_rgb(0, 100, 200))
                    .underline();
                if let Some(href) = el.attr("href") {
                    let link = ui.add(egui::Label::new(rt).sense(egui::Sense::click()));
                    if link.clicked() {
                        *clicked_link = Some(href.to_string());
                    }
                    link.on_hover_cursor(egui::CursorIcon::PointingHand)
                        .on_hover_text(href);
                } else {
                    ui.label(rt);
                }
            }
        }
        "li" => {
            let text = doc.collect_text(id);
            if !text.is_empty() {
                ui.horizontal(|ui| {
                    ui.label("  \u{2022}");
                    ui.label(&text);
                });
            }
        }
        "hr" => {
            ui.separator();
        }
        "img" => {
            ui.colored_label(egui::Color32::GRAY, "[Image]");
        }
        "br" => {
            ui.add_space(4.0);
        }
        _ => {
            // Container elements: direct text, then children
            if !el.text.is_empty() {
                ui.label(el.text.trim());
            }
            for &child in &el.children {
                render_page_node(ui, doc, child, clicked_link);
            }
        }
    }
}

// ─── Schema rendering ────────────────────────────────────────────────────────

/// Render the schema tree as nested boxes and report the innermost box the
/// pointer is over this frame.
pub fn render_schema(
    ui: &mut egui::Ui,
    tree: &SchemaTree,
    style: &SchemaStyle,
) -> Option<SchemaId> {
    let mut hovered = None;
    render_schema_node(ui, tree, tree.root(), style, &mut hovered);
    hovered
}

fn render_schema_node(
    ui: &mut egui::Ui,
    tree: &SchemaTree,
    id: SchemaId,
    style: &SchemaStyle,
    hovered: &mut Option<SchemaId>,
) {
    let Some(node) = tree.get(id) else { return };

    let [r, g, b, a] = style.text_color;
    let label = egui::RichText::new(&node.label)
        .size(style.font_size)
        .color(egui::Color32::from_rgba_unmultiplied(r, g, b, a));

    let response = egui::Frame::none()
        .fill(css_color(&node.color))
        .inner_margin(egui::Margin::same(style.padding))
        .outer_margin(egui::Margin::same(style.margin))
        .show(ui, |ui| {
            ui.label(label);
            for &child in &node.children {
                render_schema_node(ui, tree, child, style, hovered);
            }
        })
        .response;

    // Post-order: a hovered descendant has already claimed the slot, so the
    // first writer is the innermost box under the pointer.
    if hovered.is_none() && response.hovered() {
        *hovered = Some(id);
    }
}

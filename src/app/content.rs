//! Central page view and the schema side panel for `App`.
//!
//! The schema panel is where the component lifecycle lives: the panel being
//! shown attaches the schema (connect), the toggle hiding it detaches it
//! (disconnect, restoring any live highlight first).

use eframe::egui;

use crate::ui::{render_page, render_schema};

use super::navigation::resolve_url;
use super::App;

impl App {
    // ── Main content ─────────────────────────────────────────────────────────

    /// Render the central content panel.
    pub fn draw_content(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if self.loading {
            ui.centered_and_justified(|ui| {
                ui.spinner();
            });
            return;
        }

        if let Some(ref error) = self.error {
            ui.colored_label(egui::Color32::RED, error);
            return;
        }

        if let Some(ref page) = self.page {
            if !page.document.title.is_empty() {
                ui.heading(&page.document.title);
                ui.separator();
            }

            let mut clicked_link: Option<String> = None;
            let base_url = page.document.url.clone();

            egui::ScrollArea::vertical().show(ui, |ui| {
                if let Some(body) = page.document.body() {
                    render_page(ui, &page.document, body, &mut clicked_link);
                }
            });

            if let Some(href) = clicked_link {
                self.url_input = resolve_url(&base_url, &href);
                self.navigate(ctx);
            }
        } else {
            ui.centered_and_justified(|ui| {
                ui.label("Enter a URL and hit Go — the schema panel maps every element of the page.");
            });
        }
    }

    // ── Schema side panel ────────────────────────────────────────────────────

    /// Show the schema panel and drive the hover→highlight wiring.
    pub fn draw_schema_panel(&mut self, ctx: &egui::Context) {
        if !self.show_schema {
            // Detached: restore any live highlight and disarm interaction.
            if let (Some(schema), Some(page)) = (self.schema.as_mut(), self.page.as_mut()) {
                if schema.is_connected() {
                    schema.disconnect(&mut page.document);
                }
            }
            return;
        }

        let fraction = self
            .schema
            .as_ref()
            .map_or(0.25, |s| s.style().panel_fraction);
        let width = ctx.screen_rect().width() * fraction;

        egui::SidePanel::right("schema")
            .exact_width(width)
            .resizable(false)
            .show(ctx, |ui| {
                if let Some(ref err) = self.schema_error {
                    ui.colored_label(egui::Color32::RED, err);
                    return;
                }

                let (Some(schema), Some(page)) = (self.schema.as_mut(), self.page.as_mut())
                else {
                    ui.label("Load a page to see its schema.");
                    return;
                };

                egui::ScrollArea::both().show(ui, |ui| {
                    let hovered = render_schema(ui, schema.tree(), schema.style());

                    // Hover wiring arms only once the built tree is showing.
                    if !schema.is_connected() {
                        schema.connect();
                    }
                    schema.set_hovered(hovered, &mut page.document);
                });
            });
    }
}

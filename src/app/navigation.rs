//! Page loading, history, and the async fetch round-trip for `App`.

use std::sync::mpsc;

use eframe::egui;

use domscope::engine::pipeline::Engine;
use domscope::schema::DomSchema;

use super::App;

/// Resolve an href against the current page URL.
pub fn resolve_url(base: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    if href.starts_with("//") {
        return format!("https:{}", href);
    }
    if let Ok(base_url) = url::Url::parse(base) {
        if let Ok(resolved) = base_url.join(href) {
            return resolved.to_string();
        }
    }
    href.to_string()
}

impl App {
    pub fn go_back(&mut self, ctx: &egui::Context) {
        if self.history_idx > 0 {
            self.history_idx -= 1;
            self.url_input = self.history[self.history_idx].clone();
            self.navigate_no_history(ctx);
        }
    }

    pub fn go_forward(&mut self, ctx: &egui::Context) {
        if self.history_idx + 1 < self.history.len() {
            self.history_idx += 1;
            self.url_input = self.history[self.history_idx].clone();
            self.navigate_no_history(ctx);
        }
    }

    pub fn navigate(&mut self, ctx: &egui::Context) {
        // Push to history
        let url = self.url_input.clone();
        if self.history.is_empty() || self.history[self.history_idx] != url {
            // Truncate forward history
            self.history.truncate(self.history_idx + 1);
            self.history.push(url);
            self.history_idx = self.history.len() - 1;
        }
        self.navigate_no_history(ctx);
    }

    pub fn navigate_no_history(&mut self, ctx: &egui::Context) {
        if self.loading {
            return;
        }
        self.loading = true;
        self.error = None;

        let (tx, rx) = mpsc::channel();
        self.fetch_rx = Some(rx);

        let url = self.url_input.clone();
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let engine = Engine::new();
            let result = engine.load_page(&url);
            let _ = tx.send(result);
            ctx.request_repaint();
        });
    }

    /// Poll the fetch channel; on arrival swap in the new page and build a
    /// fresh schema component for it.
    pub fn check_fetch(&mut self) {
        if let Some(rx) = &self.fetch_rx {
            if let Ok(result) = rx.try_recv() {
                match result {
                    Ok(page) => {
                        match DomSchema::build(&page.document) {
                            Ok(schema) => {
                                self.schema = Some(schema);
                                self.schema_error = None;
                            }
                            Err(e) => {
                                // Page still renders; only the panel is lost.
                                log::warn!("schema build failed: {}", e);
                                self.schema = None;
                                self.schema_error = Some(e.to_string());
                            }
                        }
                        self.page = Some(page);
                        self.error = None;
                    }
                    Err(e) => {
                        self.error = Some(e.to_string());
                        self.page = None;
                        self.schema = None;
                        self.schema_error = None;
                    }
                }
                self.loading = false;
                self.fetch_rx = None;
            }
        }
    }
}

//! `App` — the top-level egui application state.
//!
//! This module declares the `App` struct, its `Default` impl, and the
//! `eframe::App` update loop. The methods are split across the sibling
//! sub-modules:
//!
//! - `navigation` — page loading, history, async fetch
//! - `toolbar`    — address bar and controls
//! - `content`    — central page view and the schema side panel

pub mod navigation;
pub mod toolbar;
pub mod content;

use std::sync::mpsc;

use eframe::egui;

use domscope::engine::pipeline::{PageError, PageResult};
use domscope::schema::DomSchema;

// ─── Application state ───────────────────────────────────────────────────────

pub struct App {
    pub url_input: String,
    pub page: Option<PageResult>,
    /// The schema component for the current page, rebuilt on navigation.
    pub schema: Option<DomSchema>,
    /// Why the schema could not be built, when it couldn't.
    pub schema_error: Option<String>,
    pub error: Option<String>,
    pub loading: bool,
    pub fetch_rx: Option<mpsc::Receiver<Result<PageResult, PageError>>>,
    pub show_schema: bool,
    pub dark_mode: bool,
    // History (back / forward)
    pub history: Vec<String>,
    pub history_idx: usize,
}

impl Default for App {
    fn default() -> Self {
        Self {
            url_input: String::from("https://example.com"),
            page: None,
            schema: None,
            schema_error: None,
            error: None,
            loading: false,
            fetch_rx: None,
            show_schema: true,
            dark_mode: false,
            history: Vec::new(),
            history_idx: 0,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_fetch();

        // Apply dark/light visuals
        if self.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // Top toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui, ctx);
        });

        // Schema side panel (claims its width before the central panel)
        self.draw_schema_panel(ctx);

        // Main content area
        let ctx_clone = ctx.clone();
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_content(ui, &ctx_clone);
        });
    }
}

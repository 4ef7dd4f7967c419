//! Address bar and controls for `App`.

use eframe::egui;

use super::App;

impl App {
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);

            // Back / Forward
            let can_back = self.history_idx > 0;
            let can_fwd = self.history_idx + 1 < self.history.len();
            if ui
                .add_enabled(
                    can_back,
                    egui::Button::new("\u{25C0}").min_size(egui::vec2(28.0, 24.0)),
                )
                .clicked()
            {
                self.go_back(ctx);
            }
            if ui
                .add_enabled(
                    can_fwd,
                    egui::Button::new("\u{25B6}").min_size(egui::vec2(28.0, 24.0)),
                )
                .clicked()
            {
                self.go_forward(ctx);
            }

            // URL bar
            let response = ui.add_sized(
                egui::vec2(ui.available_width() - 180.0, 24.0),
                egui::TextEdit::singleline(&mut self.url_input),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.navigate(ctx);
            }

            if ui.button("Go").clicked() {
                self.navigate(ctx);
            }

            // The schema toggle is the component's lifecycle switch: off
            // detaches the panel (content.rs disconnects it on this frame).
            ui.toggle_value(&mut self.show_schema, "Schema");

            let mode_icon = if self.dark_mode { "\u{263E}" } else { "\u{2600}" };
            if ui.button(mode_icon).clicked() {
                self.dark_mode = !self.dark_mode;
            }
        });
        ui.add_space(2.0);
    }
}

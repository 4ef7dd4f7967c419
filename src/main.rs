use eframe::egui;

mod app;
mod ui;

fn main() {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "domscope — the page, x-rayed",
        options,
        Box::new(|_cc| Ok(Box::new(app::App::default()))),
    )
    .expect("Failed to start domscope");
}

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use timeline_chart::app::TimelineApp;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 640.0])
            .with_min_inner_size([640.0, 360.0])
            .with_title("Rust Timeline Chart"),
        ..Default::default()
    };

    eframe::run_native(
        "Rust Timeline Chart",
        options,
        Box::new(|cc| Ok(Box::new(TimelineApp::new(cc)))),
    )
}

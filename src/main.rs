#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod config;
mod export;
mod schedule;
mod ui;

use eframe::egui;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([900.0, 700.0])
            .with_title("Studybox"),
        ..Default::default()
    };

    eframe::run_native(
        "Studybox",
        options,
        Box::new(|cc| Ok(Box::new(ui::StudyBoxApp::new(cc)))),
    )
}

// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use staff_search::gui;

fn main() {
    staff_search::log::init("info");

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Staff Search")
            .with_inner_size([1200.0, 720.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}

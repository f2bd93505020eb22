// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use flight_scrape::{
    config::consts::APP_TITLE,
    gui,
    log::{self, LogTarget},
};
use eframe::egui::ViewportBuilder;

fn main() {
    log::init(LogTarget::File(log::default_log_file()));

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1100.0, 640.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}

// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use grant_finder::{ config::state::GuiState, gui };
use log::LevelFilter;

fn main() {
    if let Err(e) = grant_finder::log::init(LevelFilter::Info) {
        eprintln!("Logger setup failed: {}", e);
    }

    let defaults = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([defaults.window_w as f32, defaults.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}

// src/gui/actions/copy.rs
use eframe::egui;
use log::{ debug, info };

use crate::{ csv, gui::app::App };

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.grant_ids.is_empty() {
        app.status("Nothing to copy");
        debug!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let export = &app.state.options.export;
    let txt = csv::to_export_string(app.grant_ids.iter(), export.include_headers, export.delim());
    info!("Copy: rows={}, headers={}", app.grant_ids.len(), export.include_headers);

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}

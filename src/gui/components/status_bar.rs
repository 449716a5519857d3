// src/gui/components/status_bar.rs
use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let status = app.status_snapshot();
    ui.horizontal(|ui| {
        if status.is_error {
            let color = ui.visuals().error_fg_color;
            ui.colored_label(color, status.text);
        } else {
            ui.label(status.text);
        }
    });
}

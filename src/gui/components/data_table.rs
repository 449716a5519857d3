// src/gui/components/data_table.rs
//
// Draws the result table: one "Grant ID" column. Purely a view.

use eframe::egui::{ self, RichText };
use egui_extras::{ Column, TableBuilder };

use crate::{ config::consts::GRANT_ID_HEADER, gui::app::App };

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(funder) = &app.funder else { return };
    if app.rows.is_empty() {
        return;
    }

    ui.label(RichText::new(format!("Grant IDs Found: {} ({})", app.rows.len(), funder.display_name)).strong());

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let rows = &app.rows;
    TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .column(Column::remainder().clip(true))
        .header(24.0, |mut header| {
            header.col(|ui| {
                ui.label(RichText::new(GRANT_ID_HEADER).strong());
            });
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let ix = row.index();
                row.col(|ui| {
                    if let Some(id) = rows.get(ix) {
                        ui.label(id.as_str());
                    }
                });
            });
        });
}

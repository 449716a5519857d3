// src/gui/components/search_panel.rs
//
// Query box, funder picker and the fetch trigger.

use eframe::egui::{ self, widgets::Spinner };
use log::info;

use crate::gui::{ actions, app::App };

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Funder Grant ID Finder");
    let running = app.running();

    // --- Search ---
    let mut search_clicked = false;
    ui.horizontal(|ui| {
        ui.label("Search for a funder:");
        let resp = ui.add_enabled(
            !running,
            egui::TextEdit::singleline(&mut app.state.gui.query)
                .hint_text("e.g. Wellcome")
                .desired_width(320.0),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let button = ui.add_enabled(!running, egui::Button::new("Search"));
        search_clicked = enter || button.clicked();
    });
    if search_clicked {
        actions::search(app, ui.ctx());
    }

    if app.candidates.is_empty() {
        return;
    }

    // --- Pick ---
    let before = app.state.gui.selected_funder;
    let mut selected = before;
    let selected_text = app
        .selected_candidate()
        .map(|c| c.label())
        .unwrap_or_else(|| "Select a funder".to_string());

    ui.horizontal(|ui| {
        ui.label("Select a funder:");
        ui.add_enabled_ui(!running, |ui| {
            egui::ComboBox::from_id_salt("funder_picker")
                .selected_text(selected_text)
                .width(420.0)
                .show_ui(ui, |ui| {
                    for (i, c) in app.candidates.iter().enumerate() {
                        ui.selectable_value(&mut selected, Some(i), c.label())
                            .on_hover_text(c.identifier.as_str());
                    }
                });
        });
    });
    if selected != before {
        app.state.gui.selected_funder = selected;
        if let Some(c) = app.selected_candidate() {
            info!("UI: Funder selected → {} ({})", c.display_name, c.identifier);
        }
    }

    // --- Fetch ---
    let has_selection = app.selected_candidate().is_some();
    let fraction = app.status_snapshot().fraction;
    let mut fetch_clicked = false;
    ui.horizontal(|ui| {
        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;
        let button = ui.add_enabled(
            !running && has_selection,
            egui::Button::new(egui::RichText::new("Find Grant IDs").color(black).strong()).fill(red),
        );
        fetch_clicked = button.clicked();

        if running {
            ui.add(Spinner::new().size(16.0));
            if let Some(f) = fraction {
                ui.add(egui::ProgressBar::new(f).show_percentage().desired_width(260.0));
            }
        }
    });
    if fetch_clicked {
        actions::fetch(app, ui.ctx());
    }
}

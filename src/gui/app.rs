// src/gui/app.rs
use std::{ error::Error, sync::Arc };

use eframe::egui;
use log::info;

use crate::{
    collect::GrantIds,
    config::state::AppState,
    openalex::FunderCandidate,
};

use super::{
    actions::{ self, PendingFetch, PendingSearch },
    components,
    progress::{ self, FetchStatus, SharedStatus },
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Funder Grant ID Finder",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // lookup results for the last search
    pub candidates: Vec<FunderCandidate>,

    // funder the table below belongs to
    pub funder: Option<FunderCandidate>,
    pub grant_ids: GrantIds,
    pub rows: Vec<String>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status/progress (the fetch worker writes here)
    pub status: SharedStatus,
    pub searching: Option<PendingSearch>,
    pub pending: Option<PendingFetch>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        info!("Init: api={} out={}", state.options.api.base(), out_path_text);

        Self {
            state,
            candidates: Vec::new(),
            funder: None,
            grant_ids: GrantIds::default(),
            rows: Vec::new(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(std::sync::Mutex::new(FetchStatus::info("Search for a funder"))),
            searching: None,
            pending: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn running(&self) -> bool { self.searching.is_some() || self.pending.is_some() }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *progress::lock(&self.status) = FetchStatus::info(msg);
    }

    #[inline]
    pub fn error<T: Into<String>>(&self, msg: T) {
        *progress::lock(&self.status) = FetchStatus::error(msg);
    }

    #[inline]
    pub fn status_snapshot(&self) -> FetchStatus {
        progress::lock(&self.status).clone()
    }

    pub fn selected_candidate(&self) -> Option<&FunderCandidate> {
        self.state.gui.selected_funder.and_then(|i| self.candidates.get(i))
    }

    /// Replace the table contents.
    pub fn set_results(&mut self, funder: Option<FunderCandidate>, ids: GrantIds) {
        self.rows = ids.iter().map(str::to_string).collect();
        self.grant_ids = ids;
        self.funder = funder;
    }

    /// Sync the output text box into ExportOptions if the user edited it.
    pub fn apply_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_path(&self.out_path_text);
            info!("Export: Out path set → {}", self.state.options.export.out_path().display());
            self.out_path_dirty = false;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_search(self);
        actions::poll_fetch(self);

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::search_panel::draw(ui, self);

            ui.separator();

            components::export_bar::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });
    }
}

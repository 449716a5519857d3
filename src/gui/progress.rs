// src/gui/progress.rs
use std::sync::{ Arc, Mutex, MutexGuard };

use eframe::egui;

use crate::progress::{ self, Progress };

/// What the status line and progress bar show.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FetchStatus {
    pub text: String,
    /// Some while a collection run is in flight.
    pub fraction: Option<f32>,
    pub is_error: bool,
}

impl FetchStatus {
    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), fraction: None, is_error: false }
    }
    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), fraction: None, is_error: true }
    }
}

/// Shared between the UI thread and the fetch worker.
pub type SharedStatus = Arc<Mutex<FetchStatus>>;

/// Lock even if a worker panicked mid-update; the status is plain data.
pub fn lock(status: &SharedStatus) -> MutexGuard<'_, FetchStatus> {
    status.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub struct GuiProgress {
    status: SharedStatus,
    ctx: Option<egui::Context>,
}

impl GuiProgress {
    pub fn new(status: SharedStatus, ctx: Option<egui::Context>) -> Self {
        Self { status, ctx }
    }

    fn update(&self, f: impl FnOnce(&mut FetchStatus)) {
        f(&mut lock(&self.status));
        if let Some(ctx) = &self.ctx {
            ctx.request_repaint();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self) {
        self.update(|s| *s = FetchStatus { text: "Fetching grants...".into(), fraction: Some(0.0), is_error: false });
    }
    fn log(&mut self, msg: &str) {
        self.update(|s| s.text = msg.to_string());
    }
    fn page_done(&mut self, retrieved: u64, total: u64) {
        self.update(|s| {
            s.fraction = Some(progress::fraction(retrieved, total));
            s.text = format!("Fetching grants... {retrieved}/{total}");
        });
    }
    fn finish(&mut self) {
        self.update(|s| s.fraction = None);
    }
}

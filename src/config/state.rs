// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Text in the funder search box
    pub query: String,

    /// Index into the current candidate list
    pub selected_funder: Option<usize>,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            query: String::new(),
            selected_funder: None,
            window_w: 900,
            window_h: 700,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

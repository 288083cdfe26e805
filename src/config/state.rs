// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Open/closed state of the filter sections in the side panel
    pub show_include_filters: bool,
    pub show_exclude_filters: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            show_include_filters: true,
            show_exclude_filters: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: AppOptions::default(),
            gui: GuiState::default(),
        }
    }
}

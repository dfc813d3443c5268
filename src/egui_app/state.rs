//! Shared state types for the egui UI.

mod status;

pub use status::*;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    /// Editable location text in the address bar.
    pub address: String,
    /// Window title for the current page.
    pub title: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            address: "/".into(),
            title: String::new(),
        }
    }
}

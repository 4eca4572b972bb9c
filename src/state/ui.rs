//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of the session model so theming and menu
//! state can change without touching auth.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for theme and navigation chrome.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    /// Whether the collapsible navigation menu is expanded.
    pub nav_open: bool,
}

impl UiState {
    /// Collapse the navigation menu, e.g. after following a link.
    pub fn close_nav(&mut self) {
        self.nav_open = false;
    }
}

//! Local UI chrome state for the composer.
//!
//! Keeps presentation concerns out of the session state (`chat`, `expiry`)
//! so the input panels can evolve independently of protocol data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which input panel the composer shows. Exactly one is visible at a time,
/// selected by the mode radio; nothing here is persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ComposeMode {
    #[default]
    Text,
    Code,
    File,
}

/// UI state for the composer panels.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub mode: ComposeMode,
}

//! Cross-page UI state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI chrome state: theme and realtime-channel connectivity.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    /// Whether the status WebSocket is currently open.
    pub realtime_connected: bool,
}

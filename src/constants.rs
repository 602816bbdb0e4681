//! Application-wide constants.
//!
//! Centralizes magic numbers and default tunables for maintainability.

use std::time::Duration;

/// Redraw and glide interval for the main loop.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Layout dimensions for the main UI structure.
pub mod layout {
    /// Commands bar height (top border + one line).
    pub const COMMANDS_BAR_HEIGHT: u16 = 2;
    /// Target button height (borders + label line).
    pub const TARGET_HEIGHT: u16 = 3;
    /// Horizontal padding inside the target button, per side.
    pub const TARGET_PADDING: u16 = 2;
}

/// Dialog dimensions (percentages of screen size) and button sizes.
pub mod dialog {
    /// Confirm dialog width percentage.
    pub const CONFIRM_WIDTH: u16 = 60;
    /// Confirm dialog height percentage.
    pub const CONFIRM_HEIGHT: u16 = 40;
    /// Success panel width percentage.
    pub const SUCCESS_WIDTH: u16 = 55;
    /// Success panel height percentage.
    pub const SUCCESS_HEIGHT: u16 = 40;
    /// Height of the buttons inside dialogs.
    pub const BUTTON_HEIGHT: u16 = 3;
    /// Width of the retry button on the success panel.
    pub const RETRY_WIDTH: u16 = 22;
}

/// Default tunables, overridable through the config file and CLI.
pub mod defaults {
    /// Pointer distance (columns) under which the target moves away.
    pub const REPULSION_RADIUS: f64 = 12.0;
    /// Largest single displacement, in percent of the viewport.
    pub const MAX_DISPLACEMENT: f64 = 40.0;
    /// Extra margin (percent) kept between the target and the edges.
    pub const EDGE_PADDING: f64 = 5.0;
    /// Height-to-width ratio of a terminal cell.
    pub const CELL_ASPECT: f64 = 2.0;
    /// Time the rendered target takes to reach a new position.
    pub const GLIDE_MS: u64 = 100;
    /// Auto-dismiss timeout of the confirmation dialog.
    pub const COUNTDOWN_MS: u64 = 650;
    /// Progress tick interval while the dialog is open.
    pub const TICK_MS: u64 = 30;
}

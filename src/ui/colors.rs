//! Color theme definitions for the UI.
//!
//! All color constants are defined here for consistency and easy theme changes.

use ratatui::style::Color;

/// Primary accent color (target button, titles)
pub const PRIMARY: Color = Color::Rgb(56, 189, 248); // Bright cyan
/// Muted text color
pub const MUTED: Color = Color::Rgb(148, 163, 184); // Brighter gray
/// Warning color (dialog title)
pub const WARNING: Color = Color::Rgb(251, 191, 36); // Bright amber
/// Success color
pub const SUCCESS: Color = Color::Rgb(74, 222, 128); // Bright green
/// Backdrop of the success view
pub const SUCCESS_BACKDROP: Color = Color::Rgb(20, 83, 45); // Deep green
/// Border color
pub const BORDER: Color = Color::Rgb(129, 140, 248); // Light indigo
/// Key highlight color (for keyboard shortcuts)
pub const KEY: Color = Color::Rgb(244, 114, 182); // Bright pink
/// Background of the decline button
pub const DECLINE_BG: Color = Color::Rgb(55, 65, 81); // Slate
/// Countdown fill drawn over the decline button
pub const COUNTDOWN_FILL: Color = Color::Rgb(17, 24, 39); // Near black

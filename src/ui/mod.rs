//! UI rendering module.
//!
//! This module handles all the terminal UI rendering using Ratatui.
//! Each view is rendered by a separate submodule for clarity.

mod arena;
mod button;
mod colors;
mod dialogs;
mod status;

use ratatui::Frame;

use crate::app::App;
use crate::flow::DialogState;
use crate::layout;
use crate::scheduler::Scheduler;

use arena::draw_target;
use dialogs::{draw_confirm_dialog, draw_success};
use status::draw_commands_bar;

/// Main draw function - dispatches to specific view renderers.
pub fn draw<S: Scheduler>(frame: &mut Frame, app: &App<S>) {
    let (arena, commands_bar) = layout::split_screen(frame.area());

    match app.flow.state() {
        DialogState::Closed => draw_target(frame, app),
        DialogState::Open => {
            // The target stays put underneath the dialog
            draw_target(frame, app);
            draw_confirm_dialog(frame, arena, app);
        }
        DialogState::Succeeded => draw_success(frame, arena, app),
    }

    // Draw the commands bar (shows available actions)
    draw_commands_bar(frame, commands_bar, app);
}

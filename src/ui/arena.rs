//! The evasive target button.

use ratatui::{
    style::{Color, Style, Stylize},
    text::Line,
    Frame,
};

use crate::app::App;
use crate::scheduler::Scheduler;

use super::button::draw_button;
use super::colors;

/// Draws the target at its displayed position.
pub fn draw_target<S: Scheduler>(frame: &mut Frame, app: &App<S>) {
    let area = app.target_rect();
    if area.is_empty() {
        return;
    }

    let label = Line::from(app.strings.target).fg(Color::Black).bold();
    draw_button(
        frame,
        area,
        label,
        Style::default().fg(colors::PRIMARY),
        Style::default().bg(colors::PRIMARY),
    );
}

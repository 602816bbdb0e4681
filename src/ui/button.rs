//! Bordered push button.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    symbols,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draws a rounded button with `label` centered inside `area`.
pub fn draw_button(frame: &mut Frame, area: Rect, label: Line, border: Style, fill: Style) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(symbols::border::ROUNDED)
        .border_style(border)
        .style(fill);

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(button, area);
}

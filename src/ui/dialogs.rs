//! Dialog rendering (confirmation countdown and success panel).

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::layout::{dialog_layout, success_layout};
use crate::scheduler::Scheduler;

use super::button::draw_button;
use super::colors;

/// Retry button icon.
pub(crate) const RETRY_ICON: &str = "↻";

/// Draws the confirmation dialog with the countdown across the decline button.
pub fn draw_confirm_dialog<S: Scheduler>(frame: &mut Frame, arena: Rect, app: &App<S>) {
    let strings = app.strings;
    let layout = dialog_layout(arena);

    // Clear the background
    frame.render_widget(Clear, layout.dialog);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::WARNING))
        .border_set(symbols::border::DOUBLE)
        .title(
            Line::from(vec![
                Span::styled(" ", Style::default()),
                Span::styled(strings.dialog_title, Style::default().fg(colors::WARNING).bold()),
                Span::styled(" ", Style::default()),
            ])
            .centered(),
        )
        .padding(Padding::horizontal(2));
    frame.render_widget(block, layout.dialog);

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(strings.dialog_body, Style::default().fg(Color::White))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(body, layout.body);

    let decline = Line::from(vec![
        Span::styled(strings.decline, Style::default().fg(Color::White).bold()),
        Span::styled(
            format!(" · {}s", app.flow.remaining_secs()),
            Style::default().fg(colors::MUTED),
        ),
    ]);
    draw_button(
        frame,
        layout.decline,
        decline,
        Style::default().fg(colors::MUTED),
        Style::default().bg(colors::DECLINE_BG),
    );

    // Countdown fill, left to right
    let filled = (f64::from(layout.decline.width) * app.flow.progress() / 100.0).round() as u16;
    let fill = Rect {
        width: filled.min(layout.decline.width),
        ..layout.decline
    };
    frame
        .buffer_mut()
        .set_style(fill, Style::default().bg(colors::COUNTDOWN_FILL));

    draw_button(
        frame,
        layout.accept,
        Line::from(strings.accept).fg(colors::SUCCESS).bold(),
        Style::default().fg(colors::SUCCESS),
        Style::default(),
    );
}

/// Draws the success view over the whole arena.
pub fn draw_success<S: Scheduler>(frame: &mut Frame, arena: Rect, app: &App<S>) {
    let strings = app.strings;
    let layout = success_layout(arena);

    frame.render_widget(
        Block::default().style(Style::default().bg(colors::SUCCESS_BACKDROP)),
        arena,
    );
    frame.render_widget(Clear, layout.panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SUCCESS))
        .border_set(symbols::border::DOUBLE)
        .padding(Padding::horizontal(2));
    frame.render_widget(block, layout.panel);

    let title = Paragraph::new(Line::from(strings.success_title).fg(colors::SUCCESS).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    let body = Paragraph::new(Line::from(strings.success_body).fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, layout.body);

    let retry = Line::from(vec![
        Span::styled(RETRY_ICON, Style::default().fg(colors::PRIMARY)),
        Span::styled(" ", Style::default()),
        Span::styled(strings.retry, Style::default().fg(Color::White).bold()),
    ]);
    draw_button(
        frame,
        layout.retry,
        retry,
        Style::default().fg(colors::PRIMARY),
        Style::default(),
    );
}

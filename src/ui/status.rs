//! Commands bar rendering.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::flow::DialogState;
use crate::scheduler::Scheduler;
use crate::text::Strings;

use super::colors;

/// Draws the commands bar showing available actions for the current state.
pub fn draw_commands_bar<S: Scheduler>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let commands = get_commands_for_state(app.flow.state(), app.strings);

    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default())];

    for (i, (key, desc)) in commands.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors::BORDER)));
        }
        spans.push(Span::styled(*key, Style::default().fg(colors::KEY).bold()));
        spans.push(Span::styled(" ", Style::default()));
        spans.push(Span::styled(*desc, Style::default().fg(colors::MUTED)));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER));

    let commands_widget = Paragraph::new(Line::from(spans)).block(block);

    frame.render_widget(commands_widget, area);
}

/// Returns the list of commands available in a given dialog state.
fn get_commands_for_state(
    state: DialogState,
    strings: &'static Strings,
) -> Vec<(&'static str, &'static str)> {
    match state {
        DialogState::Closed => vec![("mouse", strings.cmd_catch), ("q", strings.cmd_quit)],
        DialogState::Open => vec![
            ("y", strings.cmd_accept),
            ("n/Esc", strings.cmd_decline),
            ("q", strings.cmd_quit),
        ],
        DialogState::Succeeded => vec![("r", strings.cmd_retry), ("q", strings.cmd_quit)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Locale;

    #[test]
    fn test_every_state_offers_quit() {
        let strings = Locale::En.strings();
        for state in [DialogState::Closed, DialogState::Open, DialogState::Succeeded] {
            let commands = get_commands_for_state(state, strings);
            assert_eq!(commands.last(), Some(&("q", "quit")));
        }
    }

    #[test]
    fn test_open_state_commands() {
        let commands = get_commands_for_state(DialogState::Open, Locale::Es.strings());
        assert_eq!(commands[0], ("y", "sí"));
        assert_eq!(commands[1], ("n/Esc", "no"));
    }
}

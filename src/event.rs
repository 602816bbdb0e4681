//! Event handling module.
//!
//! This module converts crossterm terminal events (mouse, keyboard and
//! resize) into application actions.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Represents the different actions a user can take in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Pointer moved to a terminal cell
    PointerMoved { col: u16, row: u16 },
    /// Left button pressed on a terminal cell
    PointerDown { col: u16, row: u16 },
    /// Terminal resized
    Resize { width: u16, height: u16 },
    /// Confirm in the dialog
    Accept,
    /// Dismiss the dialog
    Decline,
    /// Start over from the success view
    Reset,
}

/// Converts terminal events to application actions.
///
/// No key activates the target; it can only be caught with the mouse.
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Maps one terminal event. Returns None for events the app ignores.
    pub fn translate(&self, event: Event) -> Option<Action> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.key_to_action(key),
            Event::Mouse(mouse) => self.mouse_to_action(mouse),
            Event::Resize(width, height) => Some(Action::Resize { width, height }),
            _ => None,
        }
    }

    /// Converts a key event to an application action.
    pub(crate) fn key_to_action(&self, key: KeyEvent) -> Option<Action> {
        // Check for Ctrl+C first (quit)
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('y') => Some(Action::Accept),
            KeyCode::Char('n') | KeyCode::Esc => Some(Action::Decline),
            KeyCode::Char('r') | KeyCode::Enter => Some(Action::Reset),
            _ => None,
        }
    }

    /// Converts a mouse event to an application action.
    pub(crate) fn mouse_to_action(&self, mouse: MouseEvent) -> Option<Action> {
        let (col, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                Some(Action::PointerMoved { col, row })
            }
            MouseEventKind::Down(MouseButton::Left) => Some(Action::PointerDown { col, row }),
            _ => None,
        }
    }
}

//! Application state and logic.
//!
//! [`App`] owns the evader and the confirmation flow and routes user
//! actions to them based on the current dialog state.

use std::time::Duration;

use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::config::Config;
use crate::event::Action;
use crate::evasion::{Evader, Point, Viewport};
use crate::flow::{ConfirmationFlow, DialogState, TimerOutcome};
use crate::layout::{self, hit};
use crate::scheduler::{Scheduler, TimerFired};
use crate::text::Strings;

/// Main application state.
pub struct App<S> {
    /// Pointer evasion
    pub evader: Evader,
    /// Dialog state machine
    pub flow: ConfirmationFlow<S>,
    /// Localized copy
    pub strings: &'static Strings,
    /// Whole terminal area
    screen: Rect,
    /// Target button size in cells
    target_size: (u16, u16),
}

impl<S: Scheduler> App<S> {
    /// Creates the application. Call [`App::resize`] before the first draw.
    pub fn new(config: &Config, scheduler: S) -> Self {
        let strings = config.locale.strings();
        Self {
            evader: Evader::new(config.evasion.clone()),
            flow: ConfirmationFlow::new(config.countdown.clone(), scheduler),
            strings,
            screen: Rect::default(),
            target_size: layout::target_size(strings.target),
        }
    }

    /// Area the target moves in and dialogs are centered on.
    pub fn arena(&self) -> Rect {
        layout::split_screen(self.screen).0
    }

    /// Cells the target currently covers.
    pub fn target_rect(&self) -> Rect {
        layout::target_rect(self.arena(), self.evader.displayed(), self.target_size)
    }

    /// Handles an action and returns true if the app should quit.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::PointerMoved { col, row } => self.pointer_moved(col, row),
            Action::PointerDown { col, row } => self.pointer_down(col, row),
            Action::Resize { width, height } => self.resize(width, height),
            Action::Accept => {
                self.flow.accept();
            }
            Action::Decline => {
                self.flow.decline();
            }
            Action::Reset => {
                self.flow.reset();
            }
        }
        false
    }

    /// Applies a terminal size change.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.screen = Rect::new(0, 0, width, height);
        let arena = self.arena();
        self.evader.resize(Viewport {
            width: arena.width,
            height: arena.height,
            target_width: self.target_size.0,
            target_height: self.target_size.1,
        });
    }

    /// Feeds a timer firing to the flow.
    pub fn on_timer(&mut self, fired: TimerFired) {
        if let TimerOutcome::Expired(_) = self.flow.on_timer(fired) {
            info!("dialog timed out");
        }
    }

    /// Advances animations by one frame.
    pub fn advance_frame(&mut self, dt: Duration) {
        self.evader.advance(dt);
    }

    fn pointer_moved(&mut self, col: u16, row: u16) {
        // The target only evades while nothing is on top of it
        if self.flow.state() != DialogState::Closed {
            return;
        }
        let arena = self.arena();
        let pointer = Point::cell_center(col.saturating_sub(arena.x), row.saturating_sub(arena.y));
        self.evader.repel(pointer);
    }

    fn pointer_down(&mut self, col: u16, row: u16) {
        match self.flow.state() {
            DialogState::Closed => {
                if hit(self.target_rect(), col, row) {
                    info!("target caught");
                    self.flow.open();
                }
            }
            DialogState::Open => {
                let dialog = layout::dialog_layout(self.arena());
                if hit(dialog.accept, col, row) {
                    self.flow.accept();
                } else if hit(dialog.decline, col, row) || !hit(dialog.dialog, col, row) {
                    debug!(col, row, "dialog dismissed by click");
                    self.flow.decline();
                }
            }
            DialogState::Succeeded => {
                if hit(layout::success_layout(self.arena()).retry, col, row) {
                    self.flow.reset();
                }
            }
        }
    }
}

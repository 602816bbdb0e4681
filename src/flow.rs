//! Countdown-gated confirmation dialog.
//!
//! ```text
//! Closed --click target--> Open --accept--> Succeeded --reset--> Closed
//!                           |
//!                           +--decline / countdown expired--> Closed
//! ```
//!
//! Every entry into `Open` owns one tick timer and one expiry timer.
//! Both are cancelled on every way out of `Open`, and firings that do
//! not match the live timer ids are dropped.

use tracing::{debug, trace};

use crate::config::CountdownConfig;
use crate::scheduler::{Scheduler, TimerFired, TimerId, TimerKind};

/// Which view the widget is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    /// The target is on screen and evading
    #[default]
    Closed,
    /// The confirmation dialog is counting down
    Open,
    /// The user accepted
    Succeeded,
}

/// Result of feeding a timer firing into the flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerOutcome {
    /// Stale or unrelated firing
    Ignored,
    /// Countdown advanced to the given percentage
    Progressed(f64),
    /// Countdown completed at the given percentage (always 100), then
    /// the dialog closed and its progress was reset
    Expired(f64),
}

#[derive(Debug, Clone, Copy)]
struct OpenTimers {
    tick: TimerId,
    expiry: TimerId,
}

/// The confirmation state machine.
pub struct ConfirmationFlow<S> {
    config: CountdownConfig,
    scheduler: S,
    state: DialogState,
    progress: f64,
    ticks: u32,
    timers: Option<OpenTimers>,
}

impl<S: Scheduler> ConfirmationFlow<S> {
    pub fn new(config: CountdownConfig, scheduler: S) -> Self {
        Self {
            config,
            scheduler,
            state: DialogState::Closed,
            progress: 0.0,
            ticks: 0,
            timers: None,
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    /// Elapsed share of the countdown, 0 to 100.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Whole seconds left before the dialog dismisses itself, rounded up.
    pub fn remaining_secs(&self) -> u64 {
        let remaining_ms = self.config.duration_ms as f64 * (100.0 - self.progress) / 100.0;
        (remaining_ms / 1000.0).ceil() as u64
    }

    /// Opens the dialog. Only valid from `Closed`.
    pub fn open(&mut self) -> bool {
        if self.state != DialogState::Closed {
            return false;
        }

        self.cancel_timers();
        self.progress = 0.0;
        self.ticks = 0;
        let tick = self
            .scheduler
            .every(self.config.tick(), TimerKind::CountdownTick);
        let expiry = self
            .scheduler
            .once(self.config.duration(), TimerKind::CountdownExpired);
        self.timers = Some(OpenTimers { tick, expiry });
        self.state = DialogState::Open;

        debug!(duration_ms = self.config.duration_ms, "dialog opened");
        true
    }

    /// Dismisses the dialog without confirming.
    pub fn decline(&mut self) -> bool {
        if self.state != DialogState::Open {
            return false;
        }
        self.close();
        debug!("dialog declined");
        true
    }

    /// Confirms, whatever the countdown says. Progress freezes where it was.
    pub fn accept(&mut self) -> bool {
        if self.state != DialogState::Open {
            return false;
        }
        self.cancel_timers();
        self.state = DialogState::Succeeded;
        debug!(progress = self.progress, "dialog accepted");
        true
    }

    /// Leaves the success view for a new round.
    pub fn reset(&mut self) -> bool {
        if self.state != DialogState::Succeeded {
            return false;
        }
        self.state = DialogState::Closed;
        self.progress = 0.0;
        self.ticks = 0;
        debug!("flow reset");
        true
    }

    /// Applies a timer firing.
    pub fn on_timer(&mut self, fired: TimerFired) -> TimerOutcome {
        let Some(timers) = self.timers else {
            trace!(?fired, "stale timer ignored");
            return TimerOutcome::Ignored;
        };

        match fired.kind {
            TimerKind::CountdownTick if fired.id == timers.tick => {
                self.ticks += 1;
                let elapsed_ms = f64::from(self.ticks) * self.config.tick_ms as f64;
                let progress = (elapsed_ms * 100.0 / self.config.duration_ms as f64).min(100.0);
                self.progress = self.progress.max(progress);
                TimerOutcome::Progressed(self.progress)
            }
            TimerKind::CountdownExpired if fired.id == timers.expiry => {
                self.progress = 100.0;
                let completed = self.progress;
                self.close();
                debug!("dialog expired");
                TimerOutcome::Expired(completed)
            }
            _ => {
                trace!(?fired, "stale timer ignored");
                TimerOutcome::Ignored
            }
        }
    }

    fn close(&mut self) {
        self.cancel_timers();
        self.state = DialogState::Closed;
        self.progress = 0.0;
        self.ticks = 0;
    }

    fn cancel_timers(&mut self) {
        if let Some(timers) = self.timers.take() {
            self.scheduler.cancel(timers.tick);
            self.scheduler.cancel(timers.expiry);
        }
    }

    #[cfg(test)]
    pub(crate) fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

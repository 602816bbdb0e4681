//! Cancellation-aware timers.
//!
//! The confirmation flow never touches the runtime directly. It asks a
//! [`Scheduler`] for timers and receives [`TimerFired`] notifications
//! back through the main loop, so the same logic runs against tokio in
//! the application and against a manual clock in tests.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::trace;

/// Identifies a scheduled timer. Never reused within a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// What a timer is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Repeating countdown progress update
    CountdownTick,
    /// Single-shot auto-dismiss of the dialog
    CountdownExpired,
}

/// Notification delivered when a timer goes off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    pub id: TimerId,
    pub kind: TimerKind,
}

/// Schedules fixed-delay and repeating timers.
pub trait Scheduler {
    /// Fires `kind` once after `delay`.
    fn once(&mut self, delay: Duration, kind: TimerKind) -> TimerId;
    /// Fires `kind` every `period`, first after one full period.
    fn every(&mut self, period: Duration, kind: TimerKind) -> TimerId;
    /// Stops a timer. Unknown or finished ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

/// Tokio-backed scheduler posting firings into an mpsc channel.
pub struct TokioScheduler {
    tx: UnboundedSender<TimerFired>,
    next_id: u64,
    tasks: HashMap<TimerId, JoinHandle<()>>,
}

impl TokioScheduler {
    pub fn new(tx: UnboundedSender<TimerFired>) -> Self {
        Self {
            tx,
            next_id: 0,
            tasks: HashMap::new(),
        }
    }

    fn allocate(&mut self) -> TimerId {
        self.next_id += 1;
        TimerId(self.next_id)
    }
}

impl Scheduler for TokioScheduler {
    fn once(&mut self, delay: Duration, kind: TimerKind) -> TimerId {
        let id = self.allocate();
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            time::sleep(delay).await;
            // The receiver only disappears on shutdown
            let _ = tx.send(TimerFired { id, kind });
        });
        self.tasks.insert(id, handle);
        id
    }

    fn every(&mut self, period: Duration, kind: TimerKind) -> TimerId {
        let id = self.allocate();
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if tx.send(TimerFired { id, kind }).is_err() {
                    break;
                }
            }
        });
        self.tasks.insert(id, handle);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(handle) = self.tasks.remove(&id) {
            trace!(?id, "cancelling timer");
            handle.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
pub(crate) mod manual {
    //! Deterministic scheduler driven by an explicit clock.

    use super::*;

    #[derive(Debug)]
    struct Pending {
        id: TimerId,
        kind: TimerKind,
        due: Duration,
        period: Option<Duration>,
    }

    /// Scheduler whose time only moves when the test says so.
    #[derive(Debug, Default)]
    pub struct ManualScheduler {
        now: Duration,
        next_id: u64,
        pending: Vec<Pending>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> Duration {
            self.now
        }

        /// Number of live timers.
        pub fn active(&self) -> usize {
            self.pending.len()
        }

        /// Pops the earliest timer due at or before `deadline`, moving the
        /// clock to its due time. Ties fire in scheduling order.
        pub fn pop_due(&mut self, deadline: Duration) -> Option<TimerFired> {
            let index = self
                .pending
                .iter()
                .enumerate()
                .filter(|(_, p)| p.due <= deadline)
                .min_by_key(|(_, p)| (p.due, p.id.0))
                .map(|(index, _)| index)?;

            let pending = &mut self.pending[index];
            self.now = pending.due;
            let fired = TimerFired {
                id: pending.id,
                kind: pending.kind,
            };
            match pending.period {
                Some(period) => pending.due += period,
                None => {
                    self.pending.remove(index);
                }
            }
            Some(fired)
        }

        /// Moves the clock forward without firing anything.
        pub fn set_now(&mut self, now: Duration) {
            self.now = self.now.max(now);
        }

        fn push(&mut self, due: Duration, period: Option<Duration>, kind: TimerKind) -> TimerId {
            self.next_id += 1;
            let id = TimerId(self.next_id);
            self.pending.push(Pending {
                id,
                kind,
                due,
                period,
            });
            id
        }
    }

    impl Scheduler for ManualScheduler {
        fn once(&mut self, delay: Duration, kind: TimerKind) -> TimerId {
            let due = self.now + delay;
            self.push(due, None, kind)
        }

        fn every(&mut self, period: Duration, kind: TimerKind) -> TimerId {
            let due = self.now + period;
            self.push(due, Some(period), kind)
        }

        fn cancel(&mut self, id: TimerId) {
            self.pending.retain(|p| p.id != id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_tokio_once_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(tx);

        let start = Instant::now();
        let id = scheduler.once(Duration::from_millis(650), TimerKind::CountdownExpired);

        let fired = rx.recv().await.unwrap();
        assert_eq!(fired.id, id);
        assert_eq!(fired.kind, TimerKind::CountdownExpired);
        assert!(start.elapsed() >= Duration::from_millis(650));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_cancelled_timer_never_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(tx);

        let cancelled = scheduler.once(Duration::from_millis(50), TimerKind::CountdownExpired);
        scheduler.cancel(cancelled);
        let kept = scheduler.once(Duration::from_millis(100), TimerKind::CountdownTick);

        let fired = rx.recv().await.unwrap();
        assert_eq!(fired.id, kept);
        assert_ne!(fired.id, cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_every_repeats_until_cancelled() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(tx);

        let id = scheduler.every(Duration::from_millis(30), TimerKind::CountdownTick);
        for _ in 0..3 {
            assert_eq!(rx.recv().await.unwrap().id, id);
        }
        scheduler.cancel(id);

        let sentinel = scheduler.once(Duration::from_millis(100), TimerKind::CountdownExpired);
        // Drain anything already queued before the cancel
        loop {
            let fired = rx.recv().await.unwrap();
            if fired.id == sentinel {
                break;
            }
            assert_eq!(fired.id, id);
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_manual_fires_in_due_order() {
        let mut scheduler = ManualScheduler::new();
        let tick = scheduler.every(Duration::from_millis(30), TimerKind::CountdownTick);
        let expiry = scheduler.once(Duration::from_millis(60), TimerKind::CountdownExpired);

        let deadline = Duration::from_millis(60);
        assert_eq!(scheduler.pop_due(deadline).unwrap().id, tick);
        assert_eq!(scheduler.now(), Duration::from_millis(30));
        // Tie at 60ms: the earlier-scheduled tick goes first
        assert_eq!(scheduler.pop_due(deadline).unwrap().id, tick);
        assert_eq!(scheduler.pop_due(deadline).unwrap().id, expiry);
        assert!(scheduler.pop_due(deadline).is_none());
        assert_eq!(scheduler.active(), 1);
    }

    #[test]
    fn test_manual_cancel_removes_timer() {
        let mut scheduler = ManualScheduler::new();
        let id = scheduler.once(Duration::from_millis(10), TimerKind::CountdownExpired);
        scheduler.cancel(id);
        assert_eq!(scheduler.active(), 0);
        assert!(scheduler.pop_due(Duration::from_secs(1)).is_none());
    }
}

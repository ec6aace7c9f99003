//! One-shot timer scheduling.
//!
//! The controller never sleeps or spawns; it asks a [`Scheduler`] for a handle and
//! is told later, by the host, which handles have fired. [`TimerQueue`] is the
//! scheduler used by the application and the tests: it keeps deadlines against a
//! clock the host advances explicitly.

use std::time::Duration;

/// Identifies one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Capability to schedule a one-shot callback and cancel it again.
pub trait Scheduler {
    /// Schedules a timer to fire once after `delay` and returns its handle.
    fn schedule_once(&mut self, delay: Duration) -> TimerHandle;

    /// Cancels a pending timer. Cancelling an unknown or fired handle is a no-op.
    fn cancel(&mut self, handle: TimerHandle);
}

/// A queue of one-shot timers driven by a host-supplied monotonic clock.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    pending: Vec<(Duration, TimerHandle)>,
}

impl TimerQueue {
    /// Creates an empty queue with its clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock to `now` and returns the timers that are due.
    ///
    /// A timer is due when its deadline is at or before `now`. Fired timers are
    /// removed and returned in deadline order. The clock never moves backwards; an
    /// earlier `now` is ignored.
    pub fn advance(&mut self, now: Duration) -> Vec<TimerHandle> {
        if now > self.now {
            self.now = now;
        }

        let current = self.now;
        let (mut due, rest): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|(deadline, _)| *deadline <= current);
        self.pending = rest;

        due.sort();
        due.into_iter().map(|(_, handle)| handle).collect()
    }

    /// Time left until the earliest pending timer, if any.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|(deadline, _)| deadline.saturating_sub(self.now))
            .min()
    }

    /// The clock value after the last [`Self::advance`].
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers that have neither fired nor been cancelled.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl Scheduler for TimerQueue {
    fn schedule_once(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push((self.now + delay, handle));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|(_, pending)| *pending != handle);
    }
}

//! Repeating tick timer.
//!
//! The playback loop is single threaded: it waits for input with a timeout
//! and fires due ticks in between. A `RepeatingTimer` is the handle for
//! one such repeating task. It is owned by exactly one clock and is gone
//! once cancelled.

use std::time::Duration;

/// Handle of a started repeating task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatingTimer {
    interval: Duration,
    next_due: Duration,
}

impl RepeatingTimer {
    /// Start a repeating task at `now`; the first tick is due one interval later.
    pub fn start(now: Duration, interval: Duration) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a tick is due at `now`.
    pub fn is_due(&self, now: Duration) -> bool {
        now >= self.next_due
    }

    /// Time left until the next tick, zero when already due.
    pub fn remaining(&self, now: Duration) -> Duration {
        self.next_due.saturating_sub(now)
    }

    /// Schedule the next tick one interval after `now`.
    ///
    /// Missed ticks are not queued up: the clock measures real deltas, so a
    /// late tick already accounts for the time it missed.
    pub fn rearm(&mut self, now: Duration) {
        self.next_due = now + self.interval;
    }

    /// Cancel the task. Consuming the handle makes a second cancel of the
    /// same task impossible.
    pub fn cancel(self) {}
}

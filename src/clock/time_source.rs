//! Time sources for the playback clock.
//!
//! The clock never reads the system time directly. It asks a [`TimeSource`]
//! for the time elapsed since the source's own origin, which lets tests and
//! replays drive it with [`ManualTimeSource`].

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time since an arbitrary, fixed origin.
pub trait TimeSource {
    fn now(&self) -> Duration;
}

/// Wall-clock time source backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemTimeSource {
    origin: Instant,
}

impl SystemTimeSource {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually advanced time source.
///
/// Clones share the same underlying time, so a test can keep one handle
/// and hand another to the clock.
#[derive(Debug, Clone, Default)]
pub struct ManualTimeSource {
    now: Rc<Cell<Duration>>,
}

impl ManualTimeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Move time forward by whole milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Jump to an absolute time. Going backwards is allowed but the clock
    /// treats a negative delta as zero.
    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_source_clones_share_time() {
        let source = ManualTimeSource::new();
        let handle = source.clone();
        handle.advance_ms(250);
        assert_eq!(source.now(), Duration::from_millis(250));
    }

    #[test]
    fn manual_source_set_is_absolute() {
        let source = ManualTimeSource::new();
        source.advance_ms(100);
        source.set(Duration::from_secs(3));
        assert_eq!(source.now(), Duration::from_secs(3));
    }

    #[test]
    fn system_source_is_monotonic() {
        let source = SystemTimeSource::new();
        let a = source.now();
        let b = source.now();
        assert!(b >= a);
    }
}

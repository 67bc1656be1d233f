//! Elapsed-time playback clock.
//!
//! A resettable, seekable stopwatch with play/pause semantics. While
//! playing, a repeating timer fires every tick interval and the clock adds
//! the measured delta since the previous tick, so scheduler jitter never
//! makes time run backwards or count twice.
//!
//! The clock is polled by its owner's event loop:
//!
//! ```
//! use std::time::Duration;
//! use cuesheet::clock::{Clock, ManualTimeSource};
//!
//! let time = ManualTimeSource::new();
//! let mut clock = Clock::new(time.clone()).with_duration(Some(10.0));
//!
//! clock.play();
//! time.advance(Duration::from_millis(500));
//! assert!(clock.poll());
//! assert_eq!(clock.current_time(), 0.5);
//! ```

mod time_source;
mod timer;

use std::time::Duration;

use tracing::{debug, info, trace};

pub use time_source::{ManualTimeSource, SystemTimeSource, TimeSource};
pub use timer::RepeatingTimer;

/// Default interval between clock ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Snapshot of the clock, as read by the display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockState {
    /// Elapsed time in seconds
    pub current_time: f64,
    /// Whether the clock is advancing
    pub is_playing: bool,
}

/// Playback clock.
///
/// The clock is playing exactly when it holds a tick timer, so there is
/// never more than one timer per clock.
#[derive(Debug)]
pub struct Clock<S: TimeSource = SystemTimeSource> {
    source: S,
    current_time: f64,
    duration: Option<f64>,
    tick_interval: Duration,
    /// Source time of the last tick, or of `play()`/`seek()` while playing
    last_instant: Duration,
    timer: Option<RepeatingTimer>,
}

impl Clock<SystemTimeSource> {
    /// Clock driven by the system's monotonic clock.
    pub fn system() -> Self {
        Self::new(SystemTimeSource::new())
    }
}

impl<S: TimeSource> Clock<S> {
    /// Create a paused clock at zero.
    pub fn new(source: S) -> Self {
        Self {
            source,
            current_time: 0.0,
            duration: None,
            tick_interval: DEFAULT_TICK_INTERVAL,
            last_instant: Duration::ZERO,
            timer: None,
        }
    }

    /// Stop playback automatically once `duration` seconds are reached.
    pub fn with_duration(mut self, duration: Option<f64>) -> Self {
        self.duration = duration.filter(|d| d.is_finite()).map(|d| d.max(0.0));
        self
    }

    /// Override the tick interval. Takes effect on the next `play()`.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval.max(Duration::from_millis(1));
        self
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn state(&self) -> ClockState {
        ClockState {
            current_time: self.current_time,
            is_playing: self.is_playing(),
        }
    }

    /// Start advancing. No-op while already playing.
    pub fn play(&mut self) {
        if self.timer.is_some() {
            return;
        }
        let now = self.source.now();
        self.last_instant = now;
        self.timer = Some(RepeatingTimer::start(now, self.tick_interval));
        debug!(time = self.current_time, "clock play");
    }

    /// Stop advancing. The current time is kept as is.
    pub fn pause(&mut self) {
        if self.cancel_timer() {
            debug!(time = self.current_time, "clock pause");
        }
    }

    /// Flip between playing and paused.
    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Pause and rewind to zero.
    pub fn reset(&mut self) {
        self.cancel_timer();
        self.current_time = 0.0;
        debug!("clock reset");
    }

    /// Jump to `time` seconds, clamped at zero. Play/pause state is kept;
    /// while playing, advancement continues from the new time.
    pub fn seek(&mut self, time: f64) {
        self.current_time = time.max(0.0);
        if self.timer.is_some() {
            self.last_instant = self.source.now();
        }
        debug!(time = self.current_time, "clock seek");
    }

    /// Seek relative to the current time.
    pub fn seek_by(&mut self, delta: f64) {
        self.seek(self.current_time + delta);
    }

    /// Time until the next tick is due, `None` while paused.
    ///
    /// Event loops use this as their wait timeout.
    pub fn next_tick_in(&self) -> Option<Duration> {
        let now = self.source.now();
        self.timer.as_ref().map(|timer| timer.remaining(now))
    }

    /// Fire the tick if it is due. Returns whether the time changed.
    pub fn poll(&mut self) -> bool {
        let now = self.source.now();
        match &self.timer {
            Some(timer) if timer.is_due(now) => {
                self.tick(now);
                true
            }
            _ => false,
        }
    }

    fn tick(&mut self, now: Duration) {
        let delta = now.saturating_sub(self.last_instant);
        self.last_instant = now;
        self.current_time += delta.as_secs_f64();
        trace!(time = self.current_time, delta_ms = delta.as_millis() as u64, "clock tick");

        if let Some(duration) = self.duration {
            if self.current_time >= duration {
                self.current_time = duration;
                self.cancel_timer();
                info!(duration, "reached end of song");
                return;
            }
        }

        if let Some(timer) = self.timer.as_mut() {
            timer.rearm(now);
        }
    }

    /// Cancel any pending tick. Returns whether a timer was cancelled; a
    /// second call is a no-op returning `false`.
    pub fn shutdown(&mut self) -> bool {
        let cancelled = self.cancel_timer();
        if cancelled {
            debug!(time = self.current_time, "clock shut down with pending tick");
        }
        cancelled
    }

    fn cancel_timer(&mut self) -> bool {
        match self.timer.take() {
            Some(timer) => {
                timer.cancel();
                true
            }
            None => false,
        }
    }
}

impl<S: TimeSource> Drop for Clock<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

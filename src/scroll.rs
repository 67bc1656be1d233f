//! Time to scroll-position mapping for the live display.
//!
//! Every lyric line occupies one fixed-height row, so line `i` starts at
//! `i * line_height`. The display holds the active line at `anchor_y`;
//! between two lines the offset moves linearly with time.

use std::time::Duration;

use crate::song::LyricLine;

/// Default minimum interval between offset recomputations (one frame).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Effective times of the lines: an untimed line inherits the time of the
/// line before it, and a leading untimed line starts at zero.
fn effective_times(lines: &[LyricLine]) -> impl Iterator<Item = f64> + '_ {
    lines.iter().scan(0.0, |previous, line| {
        let time = line.time_seconds.unwrap_or(*previous);
        *previous = time;
        Some(time)
    })
}

/// Scroll offset that keeps the line being sung at `anchor_y`.
///
/// - no lines: `0`
/// - at or before the first line's time: the first line sits at the anchor
/// - at or after the last line's time: the last line sits at the anchor
/// - otherwise: interpolated between the latest line whose time does not
///   exceed `current_time` and the line after it
///
/// Two adjacent lines with the same time would make a zero-length interval;
/// the fraction is then taken as 1.
pub fn compute_scroll_offset(
    current_time: f64,
    lines: &[LyricLine],
    line_height: f64,
    anchor_y: f64,
) -> f64 {
    if lines.is_empty() {
        return 0.0;
    }

    let times: Vec<f64> = effective_times(lines).collect();
    let last = times.len() - 1;
    let row_y = |i: usize| i as f64 * line_height;

    if current_time <= times[0] {
        return row_y(0) - anchor_y;
    }
    if current_time >= times[last] {
        return row_y(last) - anchor_y;
    }

    // current_time < times[last], so the match is never the last line
    let i = times[..last]
        .iter()
        .rposition(|&t| t <= current_time)
        .unwrap_or(0);
    let (t0, t1) = (times[i], times[i + 1]);
    let span = t1 - t0;
    let fraction = if span > 0.0 {
        (current_time - t0) / span
    } else {
        1.0
    };

    row_y(i) + (row_y(i + 1) - row_y(i)) * fraction - anchor_y
}

/// Index of the line being sung at `current_time`: the latest line whose
/// time does not exceed it, or the first line before playback reaches it.
pub fn active_line_index(current_time: f64, lines: &[LyricLine]) -> Option<usize> {
    if lines.is_empty() {
        return None;
    }
    let index = effective_times(lines)
        .enumerate()
        .filter(|&(_, t)| t <= current_time)
        .map(|(i, _)| i)
        .last()
        .unwrap_or(0);
    Some(index)
}

/// Anchor point for a display `view_height` tall, `ratio` of the way down.
pub fn anchor_y(view_height: f64, ratio: f64) -> f64 {
    view_height * ratio.clamp(0.0, 1.0)
}

/// Limits how often the offset is recomputed.
///
/// Purely an optimisation: recomputing on every clock tick gives the same
/// picture, just with more work.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    interval: Duration,
    last_frame: Option<Duration>,
}

impl FrameLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_frame: None,
        }
    }

    /// Whether a frame may run at `now`; records the frame if so.
    pub fn ready(&mut self, now: Duration) -> bool {
        match self.last_frame {
            Some(last) if now.saturating_sub(last) < self.interval => false,
            _ => {
                self.last_frame = Some(now);
                true
            }
        }
    }

    /// Let the next call to [`ready`](Self::ready) through regardless of timing.
    pub fn invalidate(&mut self) {
        self.last_frame = None;
    }
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_INTERVAL)
    }
}

//! Input handling for the prompter.
//!
//! This module handles keyboard and mouse input events, applying them to
//! the clock and display state and returning control flow signals.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use crossterm::event::Event;

use crate::clock::{Clock, TimeSource};
use crate::player::state::{InputResult, PrompterState};

/// Handle any input event, dispatching to the appropriate handler.
///
/// `seek_step` is the jump in seconds for the arrow keys. `total_duration`
/// is the length shown on the progress bar: the target of End and the
/// scale for progress-bar clicks. It may be set when the clock has no
/// stop time.
pub fn handle_event<S: TimeSource>(
    event: Event,
    state: &mut PrompterState,
    clock: &mut Clock<S>,
    seek_step: f64,
    total_duration: Option<f64>,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, state, clock, seek_step, total_duration),
        Event::Mouse(mouse) => handle_mouse_event(mouse, state, clock, total_duration),
        Event::Resize(new_cols, new_rows) => {
            state.handle_resize(new_cols, new_rows);
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, etc.
    }
}

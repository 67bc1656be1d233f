//! Mouse input handling for the prompter.
//!
//! Handles click-to-seek on the progress bar.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::clock::{Clock, TimeSource};
use crate::player::render::bar_click_fraction;
use crate::player::state::{InputResult, PrompterState};

/// Handle a mouse event.
///
/// A left click on the progress bar seeks to that position and resumes
/// playback. The bar spans `total_duration`; without one clicks are ignored.
pub fn handle_mouse_event<S: TimeSource>(
    mouse: MouseEvent,
    state: &mut PrompterState,
    clock: &mut Clock<S>,
    total_duration: Option<f64>,
) -> InputResult {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        let progress_row = state.term_rows.saturating_sub(2);
        let duration = total_duration.unwrap_or(0.0);

        if mouse.row == progress_row && duration > 0.0 {
            if let Some(fraction) = bar_click_fraction(mouse.column, state.term_cols) {
                clock.seek((fraction * duration).clamp(0.0, duration));
                clock.play();
                state.needs_render = true;
            }
        }
    }

    InputResult::Continue
}

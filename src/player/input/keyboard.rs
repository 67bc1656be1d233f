//! Keyboard input handling for the prompter.
//!
//! Handles playback controls, seeking, the help overlay and leaving the
//! prompter.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::clock::{Clock, TimeSource};
use crate::player::state::{InputResult, PrompterState};

/// Handle a keyboard event.
///
/// End jumps to `total_duration`, the length shown on the progress bar.
pub fn handle_key_event<S: TimeSource>(
    key: KeyEvent,
    state: &mut PrompterState,
    clock: &mut Clock<S>,
    seek_step: f64,
    total_duration: Option<f64>,
) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    // If help is showing, any key closes it
    if state.show_help {
        state.show_help = false;
        state.needs_render = true;
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,
        KeyCode::Char('n') => InputResult::Next,

        KeyCode::Char('?') => {
            state.toggle_help();
            InputResult::Continue
        }

        // === Playback controls ===
        KeyCode::Char(' ') => {
            clock.toggle();
            state.needs_render = true;
            InputResult::Continue
        }
        KeyCode::Char('r') => {
            clock.reset();
            state.needs_render = true;
            InputResult::Continue
        }

        // === Seeking ===
        KeyCode::Left => {
            clock.seek_by(-seek_step);
            state.needs_render = true;
            InputResult::Continue
        }
        KeyCode::Right => {
            clock.seek_by(seek_step);
            state.needs_render = true;
            InputResult::Continue
        }
        KeyCode::Home => {
            clock.seek(0.0);
            state.needs_render = true;
            InputResult::Continue
        }
        KeyCode::End => {
            if let Some(total) = total_duration {
                clock.pause();
                clock.seek(total);
                state.needs_render = true;
            }
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}

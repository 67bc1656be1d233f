//! Full-screen prompter for a single song.
//!
//! Takes over the terminal (raw mode, alternate screen, mouse capture) and
//! runs the event loop: wait for input or the next clock tick, advance the
//! clock, map its time to a scroll position and redraw when the picture
//! changes. The terminal is restored on every exit path.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::{debug, error, info};

use crate::clock::{Clock, SystemTimeSource, TimeSource};
use crate::config::DisplayConfig;
use crate::player::input::handle_event;
use crate::player::playback::{collect_section_markers, ScrollGeometry};
use crate::player::render::{format_duration, render_frame, FrameContext};
use crate::player::state::{InputResult, PrompterState};
use crate::scroll::FrameLimiter;
use crate::song::Song;
use crate::theme::Theme;

/// Input poll timeout while the clock is paused.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// How a prompter session is displayed and driven.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub geometry: ScrollGeometry,
    pub tick_interval: Duration,
    pub frame_interval: Duration,
    pub seek_step: f64,
    pub show_sections: bool,
    pub autoplay: bool,
    pub theme: Theme,
}

impl PlayOptions {
    pub fn from_config(display: &DisplayConfig) -> Self {
        Self {
            geometry: ScrollGeometry {
                line_height: display.line_height,
                anchor_ratio: display.anchor_ratio,
            },
            tick_interval: display.tick_interval(),
            frame_interval: display.frame_interval(),
            seek_step: display.seek_step_secs.abs(),
            show_sections: display.show_sections,
            autoplay: false,
            theme: Theme::by_name(&display.theme),
        }
    }
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}

/// How a prompter session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackResult {
    /// The user quit; carries the song title and the time reached
    Quit { title: String, time: f64 },
    /// The user asked for the next song
    Next { title: String },
}

impl PlaybackResult {
    pub fn message(&self) -> String {
        match self {
            PlaybackResult::Quit { title, time } => {
                format!("Stopped {} at {}", title, format_duration(*time))
            }
            PlaybackResult::Next { title } => format!("Skipped {}", title),
        }
    }
}

/// Run the prompter for `song` until the user quits or skips.
#[cfg(not(tarpaulin_include))]
pub fn play_song(song: &Song, options: &PlayOptions) -> Result<PlaybackResult> {
    info!(id = %song.id, title = %song.title, lines = song.lines.len(), "prompter start");

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    let setup = execute!(
        stdout,
        EnterAlternateScreen,
        Hide,
        EnableMouseCapture,
        Clear(ClearType::All)
    );

    let result = match setup {
        Ok(()) => run_loop(&mut stdout, song, options),
        Err(e) => Err(e.into()),
    };

    // Restore the terminal whatever happened above
    let _ = execute!(stdout, DisableMouseCapture, Show, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    let _ = stdout.flush();

    match &result {
        Ok(outcome) => info!(outcome = ?outcome, "prompter end"),
        Err(e) => error!(error = %e, "prompter failed"),
    }
    result
}

#[cfg(not(tarpaulin_include))]
fn run_loop(stdout: &mut io::Stdout, song: &Song, options: &PlayOptions) -> Result<PlaybackResult> {
    let source = SystemTimeSource::new();
    // Only a set duration stops the clock; the bar may use the last line time
    let total_duration = song.effective_duration();
    let mut clock = Clock::new(source)
        .with_duration(song.duration_seconds)
        .with_tick_interval(options.tick_interval);
    let mut limiter = FrameLimiter::new(options.frame_interval);

    let markers = collect_section_markers(&song.lines);
    let ctx = FrameContext {
        song,
        markers: &markers,
        theme: &options.theme,
        line_height: options.geometry.line_height,
        show_sections: options.show_sections,
    };

    let (cols, rows) = terminal::size()?;
    let mut state = PrompterState::new(cols, rows);
    let position = options
        .geometry
        .position(0.0, &song.lines, state.view_rows);
    state.update_scroll(position.offset, position.active_line);

    if options.autoplay {
        clock.play();
    }

    // Whole seconds and play state shown in the chrome at the last render
    let mut shown = None;

    loop {
        let timeout = clock.next_tick_in().unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            let event = event::read()?;
            match handle_event(
                event,
                &mut state,
                &mut clock,
                options.seek_step,
                total_duration,
            ) {
                InputResult::Continue => {}
                InputResult::Quit => {
                    return Ok(PlaybackResult::Quit {
                        title: song.title.clone(),
                        time: clock.current_time(),
                    });
                }
                InputResult::Next => {
                    return Ok(PlaybackResult::Next {
                        title: song.title.clone(),
                    });
                }
            }
            // Seeks and resizes show up without waiting for a frame
            limiter.invalidate();
        }

        clock.poll();

        if limiter.ready(source.now()) {
            let position =
                options
                    .geometry
                    .position(clock.current_time(), &song.lines, state.view_rows);
            if state.update_scroll(position.offset, position.active_line) {
                debug!(
                    offset = position.offset,
                    active = ?position.active_line,
                    "scroll"
                );
            }
        }

        let chrome = (clock.current_time() as u64, clock.is_playing());
        if shown != Some(chrome) {
            state.needs_render = true;
        }

        if state.needs_render {
            render_frame(stdout, &state, clock.state(), &ctx)?;
            state.needs_render = false;
            shown = Some(chrome);
        }
    }
}

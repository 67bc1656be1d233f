//! Rendering components for the prompter.
//!
//! This module contains all the UI rendering functions for the prompter:
//! the lyric area, separator, progress bar, status bar and help overlay.

mod help;
mod lyrics;
mod progress;
mod status;

use std::io::{self, Write};

use anyhow::Result;

pub use help::{calc_help_start_col, calc_help_start_row, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use lyrics::{build_lyric_rows, center, fit_width, render_lyrics, LyricLayout, LyricRow, RowKind};
pub use progress::{
    bar_click_fraction, build_progress_bar_chars, format_duration, progress_fraction,
    render_progress_bar, PROGRESS_CHROME_WIDTH,
};
pub use status::{pick_hint, render_separator_line, render_status_bar, status_text};

use crate::clock::ClockState;
use crate::player::playback::section_title_at;
use crate::player::state::{PrompterState, SectionMarker};
use crate::song::Song;
use crate::theme::Theme;

/// Everything about the song a frame needs besides the display state.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    pub song: &'a Song,
    pub markers: &'a [SectionMarker],
    pub theme: &'a Theme,
    pub line_height: u16,
    pub show_sections: bool,
}

/// Draw a full frame: lyrics, separator, progress bar and status bar, or
/// the help overlay when it is open.
pub fn render_frame(
    stdout: &mut io::Stdout,
    state: &PrompterState,
    clock: ClockState,
    ctx: &FrameContext<'_>,
) -> Result<()> {
    if state.show_help {
        render_help(stdout, state.term_cols, state.term_rows)?;
        stdout.flush()?;
        return Ok(());
    }

    let layout = LyricLayout {
        view_rows: state.view_rows,
        view_cols: state.term_cols as usize,
        line_height: ctx.line_height.max(1) as usize,
        show_sections: ctx.show_sections,
    };
    let rows = build_lyric_rows(
        &ctx.song.lines,
        &layout,
        state.scroll_offset,
        state.active_line,
    );
    render_lyrics(stdout, &rows, ctx.theme)?;

    // Terminals too small for the chrome only get lyrics
    if state.term_rows >= PrompterState::STATUS_LINES {
        let separator_row = state.view_rows as u16;
        let section = state
            .active_line
            .and_then(|i| section_title_at(&ctx.song.lines, i));

        render_separator_line(stdout, state.term_cols, separator_row)?;
        render_progress_bar(
            stdout,
            state.term_cols,
            separator_row + 1,
            clock.current_time,
            ctx.song.effective_duration().unwrap_or(0.0),
            ctx.markers,
        )?;
        render_status_bar(
            stdout,
            state.term_cols,
            separator_row + 2,
            clock.is_playing,
            &ctx.song.title,
            section.as_deref(),
        )?;
    }

    stdout.flush()?;
    Ok(())
}

//! Status bar rendering for the prompter.
//!
//! Shows play state, song title, current section and key hints.

use std::io::{self, Write};

use anyhow::Result;
use unicode_width::UnicodeWidthStr;

use crate::player::render::lyrics::fit_width;
use crate::theme::ansi;

/// Key hints, longest first; the first that fits is shown.
const HINTS: &[&str] = &[
    "space:play/pause  ←/→:seek  r:reset  ?:help  q:quit",
    "space ←/→ r ? q",
    "?:help",
];

/// Left part of the status bar: play state, title and section.
pub fn status_text(playing: bool, title: &str, section: Option<&str>) -> String {
    let icon = if playing { "⏸ " } else { "▶ " };
    match section {
        Some(section) => format!(" {} {}  · {}", icon, title, section),
        None => format!(" {} {}", icon, title),
    }
}

/// Pick the longest hint that fits in `available` columns.
pub fn pick_hint(available: usize) -> Option<&'static str> {
    HINTS.iter().copied().find(|hint| hint.width() < available)
}

/// Render a separator line.
pub fn render_separator_line(stdout: &mut io::Stdout, width: u16, row: u16) -> Result<()> {
    let mut output = String::with_capacity(width as usize * 3 + 20);
    output.push_str(&format!("\x1b[{};1H{}", row + 1, ansi::DARK_GREY));
    output.push_str(&"─".repeat(width as usize));
    output.push_str(ansi::RESET);
    write!(stdout, "{}", output)?;
    Ok(())
}

/// Render the status bar.
pub fn render_status_bar(
    stdout: &mut io::Stdout,
    width: u16,
    row: u16,
    playing: bool,
    title: &str,
    section: Option<&str>,
) -> Result<()> {
    let width = width as usize;
    let left = fit_width(&status_text(playing, title, section), width);
    let left_width = left.width();

    let mut output = String::with_capacity(width * 2);
    output.push_str(&format!("\x1b[{};1H", row + 1));
    output.push_str(ansi::WHITE);
    output.push_str(&left);

    let remaining = width.saturating_sub(left_width);
    match pick_hint(remaining) {
        Some(hint) => {
            let gap = remaining - hint.width();
            output.push_str(&" ".repeat(gap));
            output.push_str(ansi::DARK_GREY);
            output.push_str(hint);
        }
        None => output.push_str(&" ".repeat(remaining)),
    }

    output.push_str(ansi::RESET);
    write!(stdout, "{}", output)?;
    Ok(())
}

//! Lyric area rendering for the prompter.
//!
//! Lyric line `i` occupies content rows `i * line_height ..`, with its text
//! on the first row. The remaining rows are spacing; when section titles
//! are enabled, the row just above a section's first line shows its title.
//! The scroll offset picks which content row is at the top of the screen.

use std::io::{self, Write};

use anyhow::Result;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::song::LyricLine;
use crate::theme::{ansi, color_to_ansi, Theme};
use crate::timing::is_first_line_of_section;

/// What a screen row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Blank,
    Lyric,
    /// The line being sung
    Active,
    /// Title of the section starting on the next row
    Section,
}

/// One screen row of the lyric area, text already fitted to the width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricRow {
    pub kind: RowKind,
    pub text: String,
}

impl LyricRow {
    fn blank() -> Self {
        Self {
            kind: RowKind::Blank,
            text: String::new(),
        }
    }
}

/// Geometry of the lyric area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LyricLayout {
    pub view_rows: usize,
    pub view_cols: usize,
    pub line_height: usize,
    pub show_sections: bool,
}

/// Truncate `text` to at most `width` columns, marking the cut with '…'.
pub fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Center `text` in `width` columns (left padding only), truncating first.
pub fn center(text: &str, width: usize) -> String {
    let fitted = fit_width(text, width);
    let pad = (width - fitted.width()) / 2;
    format!("{}{}", " ".repeat(pad), fitted)
}

/// Compute the rows of the lyric area for a scroll offset.
pub fn build_lyric_rows(
    lines: &[LyricLine],
    layout: &LyricLayout,
    offset: f64,
    active_line: Option<usize>,
) -> Vec<LyricRow> {
    let line_height = layout.line_height.max(1) as i64;
    let top = offset.round() as i64;

    (0..layout.view_rows as i64)
        .map(|screen_row| {
            let content_row = top + screen_row;

            if content_row >= 0 && content_row % line_height == 0 {
                let index = (content_row / line_height) as usize;
                if let Some(line) = lines.get(index) {
                    let kind = if active_line == Some(index) {
                        RowKind::Active
                    } else {
                        RowKind::Lyric
                    };
                    return LyricRow {
                        kind,
                        text: center(&line.text, layout.view_cols),
                    };
                }
                return LyricRow::blank();
            }

            // Title goes on the spacing row right above the section
            let next = content_row + 1;
            if layout.show_sections && line_height > 1 && next >= 0 && next % line_height == 0 {
                let index = (next / line_height) as usize;
                if is_first_line_of_section(lines, index) {
                    if let Some(section) = lines[index].section.as_ref() {
                        let title = format!("[{}]", section.title());
                        return LyricRow {
                            kind: RowKind::Section,
                            text: center(&title, layout.view_cols),
                        };
                    }
                }
            }

            LyricRow::blank()
        })
        .collect()
}

/// Write the lyric rows to the terminal.
pub fn render_lyrics(stdout: &mut io::Stdout, rows: &[LyricRow], theme: &Theme) -> Result<()> {
    const CLEAR_TO_EOL: &str = "\x1b[K";

    // Build output string to minimize syscalls
    let mut output = String::with_capacity(rows.len() * 64);

    for (screen_row, row) in rows.iter().enumerate() {
        output.push_str(&format!("\x1b[{};1H", screen_row + 1));
        match row.kind {
            RowKind::Blank => {}
            RowKind::Lyric => {
                output.push_str(color_to_ansi(theme.text_primary));
                output.push_str(&row.text);
            }
            RowKind::Active => {
                output.push_str(ansi::BOLD);
                output.push_str(color_to_ansi(theme.active_line));
                output.push_str(&row.text);
            }
            RowKind::Section => {
                output.push_str(color_to_ansi(theme.accent));
                output.push_str(&row.text);
            }
        }
        output.push_str(ansi::RESET);
        output.push_str(CLEAR_TO_EOL);
    }

    write!(stdout, "{}", output)?;
    Ok(())
}

//! Help overlay rendering for the prompter.
//!
//! Displays a centered help overlay with all available keyboard shortcuts.

use std::io;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

/// Help text lines for the help overlay.
pub const HELP_LINES: &[&str] = &[
    "",
    "  ╔═══════════════════════════════════════════╗",
    "  ║            Cuesheet Prompter Help         ║",
    "  ╠═══════════════════════════════════════════╣",
    "  ║                                           ║",
    "  ║  Playback                                 ║",
    "  ║    Space      Play / Pause                ║",
    "  ║    r          Reset to the top            ║",
    "  ║    <-/->      Seek back / forward         ║",
    "  ║    Home/End   Go to start / end           ║",
    "  ║    Click bar  Seek to position            ║",
    "  ║                                           ║",
    "  ║  Setlist                                  ║",
    "  ║    n          Next song                   ║",
    "  ║                                           ║",
    "  ║  General                                  ║",
    "  ║    ?          Show this help              ║",
    "  ║    q / Esc    Quit                        ║",
    "  ║                                           ║",
    "  ║         Press any key to close            ║",
    "  ╚═══════════════════════════════════════════╝",
    "",
];

/// Width of the help box (for centering calculations).
pub const HELP_BOX_WIDTH: usize = 47;

/// Starting row that vertically centers the help box.
pub fn calc_help_start_row(term_height: u16) -> u16 {
    let box_height = HELP_LINES.len() as u16;
    term_height.saturating_sub(box_height) / 2
}

/// Starting column that horizontally centers the help box.
pub fn calc_help_start_col(term_width: u16) -> u16 {
    ((term_width as usize).saturating_sub(HELP_BOX_WIDTH) / 2) as u16
}

/// Clear the screen and draw the help box.
pub fn render_help(stdout: &mut io::Stdout, width: u16, height: u16) -> Result<()> {
    let start_row = calc_help_start_row(height);
    let col = calc_help_start_col(width);

    execute!(stdout, Clear(ClearType::All))?;

    for (i, line) in HELP_LINES.iter().enumerate() {
        execute!(
            stdout,
            MoveTo(col, start_row + i as u16),
            SetForegroundColor(Color::Green),
            Print(line),
            ResetColor,
        )?;
    }

    Ok(())
}

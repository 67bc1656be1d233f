//! Progress bar rendering for the prompter.
//!
//! Displays song progress with section start markers.

use std::io::{self, Write};

use anyhow::Result;

use crate::player::state::SectionMarker;
use crate::theme::ansi;

/// Width taken by everything on the progress row except the bar itself.
pub const PROGRESS_CHROME_WIDTH: usize = 14;

/// Format a duration in seconds to MM:SS format.
///
/// Fractional seconds are truncated; negative values show as 00:00.
pub fn format_duration(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Fraction of the song played, 1.0 for songs without a duration.
pub fn progress_fraction(current_time: f64, total_duration: f64) -> f64 {
    if total_duration > 0.0 {
        (current_time / total_duration).clamp(0.0, 1.0)
    } else {
        1.0
    }
}

/// Build the progress bar character array.
///
/// Returns the bar and the number of filled positions. The playhead sits
/// right after the filled part and takes precedence over a marker at the
/// same position.
pub fn build_progress_bar_chars(
    bar_width: usize,
    current_time: f64,
    total_duration: f64,
    markers: &[SectionMarker],
) -> (Vec<char>, usize) {
    let filled = (bar_width as f64 * progress_fraction(current_time, total_duration)) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];
    if filled < bar_width {
        bar[filled] = '⏺';
    }

    for marker in markers {
        let position = (bar_width as f64 * progress_fraction(marker.time, total_duration)) as usize;
        if position < bar_width && bar[position] != '⏺' {
            bar[position] = '◆';
        }
    }

    (bar, filled)
}

/// Position along the bar of a click at `column`, if it hit the bar.
pub fn bar_click_fraction(column: u16, term_cols: u16) -> Option<f64> {
    let bar_start = 1u16;
    let bar_width = (term_cols as usize).saturating_sub(PROGRESS_CHROME_WIDTH);
    if bar_width == 0 || column < bar_start || column >= bar_start + bar_width as u16 {
        return None;
    }
    Some((column - bar_start) as f64 / bar_width as f64)
}

/// Render the progress bar with section markers.
pub fn render_progress_bar(
    stdout: &mut io::Stdout,
    width: u16,
    row: u16,
    current_time: f64,
    total_duration: f64,
    markers: &[SectionMarker],
) -> Result<()> {
    let bar_width = (width as usize).saturating_sub(PROGRESS_CHROME_WIDTH);
    let (bar, filled) = build_progress_bar_chars(bar_width, current_time, total_duration, markers);

    let time_display = format!(
        " {}/{}",
        format_duration(current_time),
        format_duration(total_duration)
    );

    let mut output = String::with_capacity(width as usize * 4);
    output.push_str(&format!("\x1b[{};1H", row + 1));
    output.push_str("\x1b[48;5;236m "); // Dark gray background + padding

    output.push_str(ansi::GREEN);
    for (i, &c) in bar.iter().enumerate() {
        if i < filled {
            if c == '◆' {
                output.push_str(ansi::YELLOW);
                output.push(c);
                output.push_str(ansi::GREEN);
            } else {
                output.push('━');
            }
        } else if i == filled {
            output.push_str(ansi::WHITE);
            output.push(c);
        } else if c == '◆' {
            output.push_str(ansi::YELLOW);
            output.push(c);
        } else {
            output.push_str(ansi::DARK_GREY);
            output.push(c);
        }
    }

    output.push_str(ansi::GREY);
    output.push_str(&time_display);

    let used_width = 1 + bar_width + time_display.len();
    output.push_str(&" ".repeat((width as usize).saturating_sub(used_width)));
    output.push_str(ansi::RESET);

    write!(stdout, "{}", output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(time: f64) -> SectionMarker {
        SectionMarker {
            time,
            label: "m".to_string(),
        }
    }

    #[test]
    fn format_duration_formats_correctly() {
        assert_eq!(format_duration(0.0), "00:00");
        assert_eq!(format_duration(65.0), "01:05");
        assert_eq!(format_duration(59.9), "00:59");
        assert_eq!(format_duration(3661.0), "61:01");
    }

    #[test]
    fn format_duration_negative_is_zero() {
        assert_eq!(format_duration(-5.0), "00:00");
    }

    #[test]
    fn playhead_at_start() {
        let (bar, filled) = build_progress_bar_chars(10, 0.0, 10.0, &[]);
        assert_eq!(filled, 0);
        assert_eq!(bar[0], '⏺');
        assert_eq!(bar[1], '─');
    }

    #[test]
    fn full_bar_at_end() {
        let (bar, filled) = build_progress_bar_chars(10, 10.0, 10.0, &[]);
        assert_eq!(filled, 10);
        assert!(bar.iter().all(|&c| c == '─'));
    }

    #[test]
    fn section_markers_placed_by_time() {
        let (bar, _) = build_progress_bar_chars(10, 0.0, 10.0, &[marker(2.0), marker(8.0)]);
        assert_eq!(bar[2], '◆');
        assert_eq!(bar[8], '◆');
    }

    #[test]
    fn playhead_wins_over_marker() {
        let (bar, _) = build_progress_bar_chars(10, 5.0, 10.0, &[marker(5.0)]);
        assert_eq!(bar[5], '⏺');
    }

    #[test]
    fn marker_past_end_is_clamped_off_bar() {
        let (bar, _) = build_progress_bar_chars(10, 0.0, 10.0, &[marker(30.0)]);
        assert!(!bar.contains(&'◆'));
    }

    #[test]
    fn zero_duration_is_full() {
        let (_, filled) = build_progress_bar_chars(10, 5.0, 0.0, &[]);
        assert_eq!(filled, 10);
    }

    #[test]
    fn click_fraction_inside_bar() {
        // 80 columns: bar starts at column 1 and is 66 wide
        assert_eq!(bar_click_fraction(1, 80), Some(0.0));
        assert_eq!(bar_click_fraction(34, 80), Some(0.5));
        assert_eq!(bar_click_fraction(0, 80), None);
        assert_eq!(bar_click_fraction(67, 80), None);
    }

    #[test]
    fn click_fraction_on_narrow_terminal() {
        assert_eq!(bar_click_fraction(3, 10), None);
    }
}

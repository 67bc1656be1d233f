//! Clock time to prompter scroll position.

use crate::scroll::{active_line_index, anchor_y, compute_scroll_offset};
use crate::song::LyricLine;

/// Terminal geometry of the lyric area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGeometry {
    /// Terminal rows per lyric line
    pub line_height: u16,
    /// Active line position as a fraction of the lyric area height
    pub anchor_ratio: f64,
}

/// Where the lyric area is scrolled to at a given time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    /// Content row shown at the top of the lyric area (may be negative)
    pub offset: f64,
    pub active_line: Option<usize>,
}

impl ScrollGeometry {
    /// Rows per line, never zero.
    pub fn rows_per_line(&self) -> usize {
        self.line_height.max(1) as usize
    }

    /// Screen row the active line is held at.
    pub fn anchor_row(&self, view_rows: usize) -> f64 {
        anchor_y(view_rows as f64, self.anchor_ratio).floor()
    }

    pub fn position(&self, time: f64, lines: &[LyricLine], view_rows: usize) -> ScrollPosition {
        ScrollPosition {
            offset: compute_scroll_offset(
                time,
                lines,
                self.rows_per_line() as f64,
                self.anchor_row(view_rows),
            ),
            active_line: active_line_index(time, lines),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines() -> Vec<LyricLine> {
        vec![
            LyricLine::new("a", "one").at(0.0),
            LyricLine::new("b", "two").at(5.0),
            LyricLine::new("c", "three").at(10.0),
        ]
    }

    #[test]
    fn anchor_row_is_whole_row() {
        let geometry = ScrollGeometry {
            line_height: 2,
            anchor_ratio: 0.35,
        };
        assert_eq!(geometry.anchor_row(10), 3.0);
    }

    #[test]
    fn zero_line_height_treated_as_one() {
        let geometry = ScrollGeometry {
            line_height: 0,
            anchor_ratio: 0.0,
        };
        assert_eq!(geometry.rows_per_line(), 1);
    }

    #[test]
    fn position_scrolls_with_time() {
        let geometry = ScrollGeometry {
            line_height: 2,
            anchor_ratio: 0.5,
        };
        let start = geometry.position(0.0, &lines(), 10);
        assert_eq!(start.offset, -5.0);
        assert_eq!(start.active_line, Some(0));

        let middle = geometry.position(7.5, &lines(), 10);
        assert_eq!(middle.offset, -2.0); // row 3 of content at anchor row 5
        assert_eq!(middle.active_line, Some(1));
    }
}

//! Prompter state management
//!
//! Contains the `PrompterState` struct that holds the display state of one
//! playback session, as well as shared types used across player modules.
//! The clock is owned by the playback loop, not by this struct.

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow decisions to the
/// playback loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep the prompter running
    Continue,
    /// Leave the prompter (and the setlist)
    Quit,
    /// Leave this song and move on to the next one in the setlist
    Next,
}

/// A section start shown on the progress bar.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionMarker {
    /// Time the section starts at
    pub time: f64,
    /// Section title, e.g. "Chorus 2"
    pub label: String,
}

/// Display state of the prompter.
#[derive(Debug)]
pub struct PrompterState {
    // === Terminal ===
    /// Current terminal width
    pub term_cols: u16,
    /// Current terminal height
    pub term_rows: u16,
    /// Rows available to lyrics (term_rows - status lines)
    pub view_rows: usize,

    // === Scroll ===
    /// Last computed scroll offset, in rows
    pub scroll_offset: f64,
    /// Line currently being sung
    pub active_line: Option<usize>,

    // === UI ===
    /// Whether the help overlay is visible
    pub show_help: bool,
    /// True when the screen needs to be redrawn
    pub needs_render: bool,
}

impl PrompterState {
    /// Number of status/chrome lines (separator + progress + status bar)
    pub const STATUS_LINES: u16 = 3;

    pub fn new(term_cols: u16, term_rows: u16) -> Self {
        Self {
            term_cols,
            term_rows,
            view_rows: term_rows.saturating_sub(Self::STATUS_LINES) as usize,
            scroll_offset: 0.0,
            active_line: None,
            show_help: false,
            needs_render: true,
        }
    }

    /// Handle terminal resize event.
    pub fn handle_resize(&mut self, new_cols: u16, new_rows: u16) {
        self.term_cols = new_cols;
        self.term_rows = new_rows;
        self.view_rows = new_rows.saturating_sub(Self::STATUS_LINES) as usize;
        self.needs_render = true;
    }

    /// Toggle help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }

    /// Store a freshly mapped scroll position. Returns whether the visible
    /// picture changed (the offset moved to another row or a new line became
    /// active).
    pub fn update_scroll(&mut self, offset: f64, active_line: Option<usize>) -> bool {
        let moved = offset.round() != self.scroll_offset.round();
        let changed = moved || active_line != self.active_line;
        self.scroll_offset = offset;
        self.active_line = active_line;
        if changed {
            self.needs_render = true;
        }
        changed
    }
}

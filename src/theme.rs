//! Colors for the prompter display and CLI output.
//!
//! The prompter draws with crossterm colors; CLI messages use the matching
//! ANSI escape codes.

use crossterm::style::Color;

/// Color theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Lyric text and regular CLI output
    pub text_primary: Color,
    /// Hints and secondary CLI output
    pub text_secondary: Color,
    /// The line being sung
    pub active_line: Color,
    /// Section titles and markers
    pub accent: Color,
    pub error: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::stage()
    }
}

impl Theme {
    /// High contrast theme for dark stages: white lyrics, yellow active line.
    pub fn stage() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGrey,
            active_line: Color::Yellow,
            accent: Color::Green,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Plain terminal colors.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::Grey,
            text_secondary: Color::DarkGrey,
            active_line: Color::White,
            accent: Color::Cyan,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGrey,
            active_line: Color::White,
            accent: Color::Blue,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Theme by config name; unknown names fall back to the default.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "classic" => Self::classic(),
            "ocean" => Self::ocean(),
            _ => Self::stage(),
        }
    }

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

fn paint(color: Color, text: &str) -> String {
    format!("{}{}{}", color_to_ansi(color), text, ansi::RESET)
}

/// Raw ANSI codes for hand-built output.
pub mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const WHITE: &str = "\x1b[97m";
    pub const GREY: &str = "\x1b[37m";
    pub const DARK_GREY: &str = "\x1b[90m";
    pub const BOLD: &str = "\x1b[1m";
}

/// Foreground ANSI code of a crossterm color.
pub fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::DarkRed => "\x1b[31m",
        Color::DarkGreen => "\x1b[32m",
        Color::DarkYellow => "\x1b[33m",
        Color::DarkBlue => "\x1b[34m",
        Color::DarkMagenta => "\x1b[35m",
        Color::DarkCyan => "\x1b[36m",
        Color::Grey => "\x1b[37m",
        Color::DarkGrey => "\x1b[90m",
        Color::Red => "\x1b[91m",
        Color::Green => "\x1b[92m",
        Color::Yellow => "\x1b[93m",
        Color::Blue => "\x1b[94m",
        Color::Magenta => "\x1b[95m",
        Color::Cyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // RGB and indexed colors are left uncolored
        _ => "",
    }
}

/// Theme used for CLI output.
pub fn current_theme() -> Theme {
    Theme::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_stage() {
        assert_eq!(Theme::default(), Theme::stage());
    }

    #[test]
    fn by_name_is_case_insensitive_with_fallback() {
        assert_eq!(Theme::by_name("Ocean"), Theme::ocean());
        assert_eq!(Theme::by_name("classic"), Theme::classic());
        assert_eq!(Theme::by_name("neon"), Theme::stage());
    }

    #[test]
    fn ansi_text_helpers_wrap_with_color_codes() {
        let theme = Theme::stage();
        let primary = theme.primary_text("hello");
        assert!(primary.starts_with("\x1b[97m"));
        assert!(primary.ends_with("\x1b[0m"));
        assert!(primary.contains("hello"));
    }

    #[test]
    fn color_to_ansi_maps_standard_colors() {
        assert_eq!(color_to_ansi(Color::DarkGreen), "\x1b[32m");
        assert_eq!(color_to_ansi(Color::Red), "\x1b[91m");
        assert_eq!(color_to_ansi(Color::DarkGrey), "\x1b[90m");
        assert_eq!(color_to_ansi(Color::Rgb { r: 1, g: 2, b: 3 }), "");
    }
}

//! Accent color themes.

use ratatui::style::Color;

/// Accent color used for the name art, highlights, and key hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorTheme {
    #[default]
    Cyan,
    Green,
    White,
    Magenta,
    Yellow,
    Red,
    Blue,
}

impl ColorTheme {
    /// The terminal color for this theme.
    pub fn color(self) -> Color {
        match self {
            ColorTheme::Cyan => Color::Cyan,
            ColorTheme::Green => Color::Green,
            ColorTheme::White => Color::White,
            ColorTheme::Magenta => Color::Magenta,
            ColorTheme::Yellow => Color::Yellow,
            ColorTheme::Red => Color::Red,
            ColorTheme::Blue => Color::Blue,
        }
    }

    /// The next theme in the cycle.
    pub fn next(self) -> ColorTheme {
        match self {
            ColorTheme::Cyan => ColorTheme::Green,
            ColorTheme::Green => ColorTheme::White,
            ColorTheme::White => ColorTheme::Magenta,
            ColorTheme::Magenta => ColorTheme::Yellow,
            ColorTheme::Yellow => ColorTheme::Red,
            ColorTheme::Red => ColorTheme::Blue,
            ColorTheme::Blue => ColorTheme::Cyan,
        }
    }

    /// Name used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorTheme::Cyan => "cyan",
            ColorTheme::Green => "green",
            ColorTheme::White => "white",
            ColorTheme::Magenta => "magenta",
            ColorTheme::Yellow => "yellow",
            ColorTheme::Red => "red",
            ColorTheme::Blue => "blue",
        }
    }

    /// Parse a configuration name, case-insensitively.
    pub fn parse(name: &str) -> Option<ColorTheme> {
        match name.trim().to_ascii_lowercase().as_str() {
            "cyan" => Some(ColorTheme::Cyan),
            "green" => Some(ColorTheme::Green),
            "white" => Some(ColorTheme::White),
            "magenta" => Some(ColorTheme::Magenta),
            "yellow" => Some(ColorTheme::Yellow),
            "red" => Some(ColorTheme::Red),
            "blue" => Some(ColorTheme::Blue),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cycles_back_to_start() {
        let mut theme = ColorTheme::Cyan;
        for _ in 0..7 {
            theme = theme.next();
        }
        assert_eq!(theme, ColorTheme::Cyan);
    }

    #[test]
    fn test_parse_round_trips_as_str() {
        let mut theme = ColorTheme::Cyan;
        for _ in 0..7 {
            assert_eq!(ColorTheme::parse(theme.as_str()), Some(theme));
            theme = theme.next();
        }
    }
}

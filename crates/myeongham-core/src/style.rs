//! Background style selection.

/// Which background animation decorates the hero section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundStyle {
    /// No background animation at all.
    None,
    /// Drifting, twinkling stars.
    #[default]
    Starfield,
    /// Sparse falling columns of code glyphs.
    CodeRain,
}

impl BackgroundStyle {
    /// The next style, wrapping back to none.
    pub fn next(self) -> BackgroundStyle {
        match self {
            BackgroundStyle::None => BackgroundStyle::Starfield,
            BackgroundStyle::Starfield => BackgroundStyle::CodeRain,
            BackgroundStyle::CodeRain => BackgroundStyle::None,
        }
    }

    /// Name used in configuration and the help line.
    pub fn as_str(self) -> &'static str {
        match self {
            BackgroundStyle::None => "none",
            BackgroundStyle::Starfield => "starfield",
            BackgroundStyle::CodeRain => "code-rain",
        }
    }

    /// Parse a configuration name, case-insensitively.
    pub fn parse(name: &str) -> Option<BackgroundStyle> {
        match name.trim().to_ascii_lowercase().as_str() {
            "none" => Some(BackgroundStyle::None),
            "starfield" => Some(BackgroundStyle::Starfield),
            "code-rain" | "coderain" => Some(BackgroundStyle::CodeRain),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_visits_every_style() {
        let mut style = BackgroundStyle::None;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(style);
            style = style.next();
        }
        assert_eq!(style, BackgroundStyle::None);
        assert!(seen.contains(&BackgroundStyle::Starfield));
        assert!(seen.contains(&BackgroundStyle::CodeRain));
    }

    #[test]
    fn test_parse_round_trips_as_str() {
        for style in [
            BackgroundStyle::None,
            BackgroundStyle::Starfield,
            BackgroundStyle::CodeRain,
        ] {
            assert_eq!(BackgroundStyle::parse(style.as_str()), Some(style));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert_eq!(BackgroundStyle::parse("aurora"), None);
    }
}

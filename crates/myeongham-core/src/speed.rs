//! Animation speed setting.

use std::time::Duration;

/// How fast background animations run.
///
/// The speed controls the main loop's tick interval, so stepped animations
/// advance more often rather than by larger steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Event poll timeout for the main loop; one expiry is one animation tick.
    pub fn tick_interval(self) -> Duration {
        match self {
            AnimationSpeed::Slow => Duration::from_millis(33),
            AnimationSpeed::Medium => Duration::from_millis(16),
            AnimationSpeed::Fast => Duration::from_millis(8),
        }
    }

    /// Fall speed multiplier for the code rain.
    pub fn rain_fall_speed(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Medium => 1.0,
            AnimationSpeed::Fast => 2.0,
        }
    }

    /// The next speed, wrapping back to slow.
    pub fn next(self) -> AnimationSpeed {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Medium,
            AnimationSpeed::Medium => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    /// Name used in configuration and the help line.
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Medium => "medium",
            AnimationSpeed::Fast => "fast",
        }
    }

    /// Parse a configuration name, case-insensitively.
    pub fn parse(name: &str) -> Option<AnimationSpeed> {
        match name.trim().to_ascii_lowercase().as_str() {
            "slow" => Some(AnimationSpeed::Slow),
            "medium" => Some(AnimationSpeed::Medium),
            "fast" => Some(AnimationSpeed::Fast),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faster_speeds_tick_more_often() {
        assert!(AnimationSpeed::Fast.tick_interval() < AnimationSpeed::Medium.tick_interval());
        assert!(AnimationSpeed::Medium.tick_interval() < AnimationSpeed::Slow.tick_interval());
    }

    #[test]
    fn test_parse_round_trips_as_str() {
        for speed in [
            AnimationSpeed::Slow,
            AnimationSpeed::Medium,
            AnimationSpeed::Fast,
        ] {
            assert_eq!(AnimationSpeed::parse(speed.as_str()), Some(speed));
        }
    }

    #[test]
    fn test_parse_ignores_case_and_whitespace() {
        assert_eq!(AnimationSpeed::parse(" Fast "), Some(AnimationSpeed::Fast));
        assert_eq!(AnimationSpeed::parse("warp"), None);
    }
}

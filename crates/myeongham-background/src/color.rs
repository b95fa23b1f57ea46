//! Color helpers for background animations.

use ratatui::style::Color;

/// Star body tint.
pub const STAR_TINT: (u8, u8, u8) = (224, 231, 239);

/// Star halo tint.
pub const HALO_TINT: (u8, u8, u8) = (147, 197, 253);

/// Dim an RGB tint toward black.
///
/// Terminal cells have no alpha channel, so fading over the dark background
/// scales the tint itself instead.
pub fn dim(rgb: (u8, u8, u8), brightness: f32) -> Color {
    let brightness = brightness.clamp(0.0, 1.0);
    Color::Rgb(
        (rgb.0 as f32 * brightness) as u8,
        (rgb.1 as f32 * brightness) as u8,
        (rgb.2 as f32 * brightness) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dim_scales_between_black_and_the_tint() {
        assert_eq!(dim(STAR_TINT, 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(dim(STAR_TINT, 1.0), Color::Rgb(224, 231, 239));
        assert_eq!(dim((100, 200, 50), 0.5), Color::Rgb(50, 100, 25));
    }

    #[test]
    fn test_dim_clamps_out_of_range_brightness() {
        assert_eq!(dim(STAR_TINT, 2.0), dim(STAR_TINT, 1.0));
        assert_eq!(dim(STAR_TINT, -1.0), dim(STAR_TINT, 0.0));
    }
}

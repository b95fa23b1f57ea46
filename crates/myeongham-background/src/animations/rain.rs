//! Sparse code rain animation (stateful).

use myeongham_core::AnimationSpeed;
use ratatui::style::Color;

use crate::chars::CODE_CHARS;
use crate::grid::CellGrid;

/// Number of rain columns on screen.
pub const RAIN_COLUMN_COUNT: usize = 10;

/// State for a single rain column.
#[derive(Debug, Clone)]
pub struct RainColumn {
    /// Horizontal position in fractional cells.
    pub x: f32,
    /// Current y position of the trail head.
    pub y: f32,
    /// Speed multiplier for this column.
    pub speed: f32,
    /// Length of the trail.
    pub trail_length: usize,
    /// Seed for character generation.
    pub char_seed: usize,
}

/// Initialize rain columns at random horizontal positions.
///
/// Heads start staggered above the top edge so the columns trickle in over
/// a few seconds instead of entering in lockstep.
pub fn init_columns(width: u16, height: u16, rng: &mut fastrand::Rng) -> Vec<RainColumn> {
    (0..RAIN_COLUMN_COUNT)
        .map(|_| RainColumn {
            x: rng.f32() * width as f32,
            y: -(rng.f32() * height as f32 * 1.5),
            speed: 0.5 + rng.f32() * 0.5,
            trail_length: 4 + rng.usize(..8),
            char_seed: rng.usize(..10_000),
        })
        .collect()
}

/// Update rain column positions.
pub fn update(
    columns: &mut [RainColumn],
    delta_ms: u64,
    width: u16,
    height: u16,
    speed: AnimationSpeed,
    rng: &mut fastrand::Rng,
) {
    let fall_speed = speed.rain_fall_speed();
    let delta_y = (delta_ms as f32 / 50.0) * fall_speed;

    for col in columns {
        col.y += delta_y * col.speed;
        // Re-enter above the top at a fresh horizontal position once the
        // whole trail has left the screen
        if col.y > height as f32 + col.trail_length as f32 {
            col.y = -(col.trail_length as f32);
            col.x = rng.f32() * width as f32;
            col.char_seed = col.char_seed.wrapping_add(1);
        }
    }
}

/// Stamp the rain trails into the grid.
pub fn render_into(columns: &[RainColumn], grid: &mut CellGrid) {
    for col in columns {
        let cx = col.x.round() as i32;
        let head = col.y.round() as i32;
        for offset in 0..=col.trail_length {
            let cy = head - offset as i32;
            let intensity = 1.0 - offset as f32 / col.trail_length as f32;
            let char_idx =
                col.char_seed.wrapping_add(cy.unsigned_abs() as usize) % CODE_CHARS.len();
            let ch = CODE_CHARS[char_idx];

            // Head is bright white-green, trail fades to dark green
            let (color, brightness) = if offset == 0 {
                (Color::Rgb(200, 255, 200), 1.0)
            } else {
                let g = (80.0 + 120.0 * intensity) as u8;
                (Color::Rgb(0, g, 0), intensity * 0.8)
            };
            grid.stamp(cx, cy, ch, color, brightness);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_staggers_columns_above_the_surface() {
        let mut rng = fastrand::Rng::with_seed(11);
        let columns = init_columns(80, 24, &mut rng);
        assert_eq!(columns.len(), RAIN_COLUMN_COUNT);
        for col in &columns {
            assert!((0.0..80.0).contains(&col.x));
            assert!(col.y <= 0.0);
            assert!((4..12).contains(&col.trail_length));
            assert!((0.5..1.0).contains(&col.speed));
        }
    }

    #[test]
    fn test_update_advances_heads_by_scaled_delta() {
        let mut rng = fastrand::Rng::with_seed(11);
        let mut columns = init_columns(80, 24, &mut rng);
        columns[0].y = 0.0;
        columns[0].speed = 1.0;
        update(&mut columns, 50, 80, 24, AnimationSpeed::Medium, &mut rng);
        assert!((columns[0].y - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_faster_speed_setting_falls_faster() {
        let mut rng = fastrand::Rng::with_seed(11);
        let mut slow = init_columns(80, 24, &mut rng);
        let mut fast = slow.clone();
        slow[0].y = 0.0;
        fast[0].y = 0.0;
        update(&mut slow, 50, 80, 24, AnimationSpeed::Slow, &mut rng);
        update(&mut fast, 50, 80, 24, AnimationSpeed::Fast, &mut rng);
        assert!(fast[0].y > slow[0].y);
    }

    #[test]
    fn test_column_past_the_bottom_reenters_at_the_top() {
        let mut rng = fastrand::Rng::with_seed(11);
        let mut columns = init_columns(80, 24, &mut rng);
        let trail = columns[0].trail_length as f32;
        columns[0].y = 24.0 + trail + 1.0;
        let seed_before = columns[0].char_seed;
        update(&mut columns, 16, 80, 24, AnimationSpeed::Medium, &mut rng);
        assert_eq!(columns[0].y, -trail);
        assert!((0.0..80.0).contains(&columns[0].x));
        assert_eq!(columns[0].char_seed, seed_before.wrapping_add(1));
    }

    #[test]
    fn test_render_stamps_the_trail_head() {
        let column = RainColumn {
            x: 5.2,
            y: 3.0,
            speed: 1.0,
            trail_length: 4,
            char_seed: 42,
        };
        let mut grid = CellGrid::new(10, 8);
        render_into(std::slice::from_ref(&column), &mut grid);
        let lines = grid.into_lines();
        assert_ne!(lines[3].spans[5].content, " ");
        // Cells above the head carry the fading trail
        assert_ne!(lines[2].spans[5].content, " ");
        // Unrelated cells stay empty
        assert_eq!(lines[3].spans[0].content, " ");
    }
}

//! Entry animations for the card's sections.
//!
//! Every effect here is a pure function of the time since the section was
//! entered, so the effects need no stored state and replay identically when
//! a section is revisited.

/// Pause before the tagline starts typing.
const TYPING_DELAY_MS: u64 = 500;

/// Typing rate, one character per interval.
const TYPING_INTERVAL_MS: u64 = 100;

/// Skill bars reach their full level this long after the section opens.
const BAR_FILL_MS: u64 = 600;

/// How long one glitch burst lasts.
const GLITCH_WINDOW_MS: u64 = 200;

/// Share of seconds that contain a glitch burst, in percent.
const GLITCH_PERCENT: u64 = 5;

/// Noise glyphs swapped into the name art during a glitch burst.
const GLITCH_CHARS: &[char] = &['#', '%', '&', '$', '@', '/', '\\'];

/// Number of characters of `text` visible `ms` into the section.
pub fn typed_chars(text: &str, ms: u64) -> usize {
    let ticks = ms.saturating_sub(TYPING_DELAY_MS) / TYPING_INTERVAL_MS;
    (ticks as usize).min(text.chars().count())
}

/// Whether the typing effect has finished.
pub fn typing_done(text: &str, ms: u64) -> bool {
    typed_chars(text, ms) == text.chars().count()
}

/// Cubic ease-out over `[0, 1]`; out-of-range inputs clamp.
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(3)
}

/// Fill fraction of the skill bars `ms` after the section opened.
pub fn bar_fill(ms: u64) -> f32 {
    ease_out_cubic(ms as f32 / BAR_FILL_MS as f32)
}

/// Mix a counter into a pseudo-random value.
fn mix(value: u64) -> u64 {
    value.wrapping_mul(31).wrapping_add(7).wrapping_mul(17)
}

/// Whether a glitch burst is active at this instant.
///
/// Bursts open on a per-second schedule so a burst holds steady for its
/// whole window instead of flickering per frame.
pub fn glitch_active(ms: u64) -> bool {
    mix(ms / 1000) % 100 < GLITCH_PERCENT && ms % 1000 < GLITCH_WINDOW_MS
}

/// Corrupt a few visible characters of the name art during a glitch burst.
///
/// Positions derive from the current second, so the corruption pattern is
/// stable for the burst's duration. Spaces are left alone to keep the
/// letter silhouettes readable.
pub fn glitch_art(lines: &mut [String], ms: u64) {
    if !glitch_active(ms) {
        return;
    }
    let second = ms / 1000;
    for (row, line) in lines.iter_mut().enumerate() {
        let len = line.chars().count();
        if len == 0 {
            continue;
        }
        let seed = mix(second.wrapping_add(row as u64 * 13));
        let column = seed as usize % len;
        let glyph = GLITCH_CHARS[(seed / 100) as usize % GLITCH_CHARS.len()];
        *line = line
            .chars()
            .enumerate()
            .map(|(i, ch)| if i == column && ch != ' ' { glyph } else { ch })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_types_during_the_initial_delay() {
        assert_eq!(typed_chars("hello", 0), 0);
        assert_eq!(typed_chars("hello", TYPING_DELAY_MS - 1), 0);
    }

    #[test]
    fn test_typing_advances_one_character_per_interval() {
        assert_eq!(typed_chars("hello", TYPING_DELAY_MS + TYPING_INTERVAL_MS), 1);
        assert_eq!(
            typed_chars("hello", TYPING_DELAY_MS + 3 * TYPING_INTERVAL_MS),
            3
        );
    }

    #[test]
    fn test_typing_stops_at_the_end_of_the_text() {
        assert_eq!(typed_chars("hi", 60_000), 2);
        assert!(typing_done("hi", 60_000));
        assert!(!typing_done("hi", TYPING_DELAY_MS + TYPING_INTERVAL_MS));
    }

    #[test]
    fn test_typing_counts_characters_not_bytes() {
        assert_eq!(typed_chars("안녕", 60_000), 2);
    }

    #[test]
    fn test_ease_out_cubic_endpoints_and_clamps() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn test_ease_out_cubic_is_monotonic() {
        let mut last = 0.0;
        for step in 0..=20 {
            let value = ease_out_cubic(step as f32 / 20.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn test_bar_fill_completes_after_the_fill_window() {
        assert_eq!(bar_fill(0), 0.0);
        assert_eq!(bar_fill(BAR_FILL_MS), 1.0);
        assert_eq!(bar_fill(10_000), 1.0);
    }

    #[test]
    fn test_glitch_bursts_hit_five_percent_of_seconds() {
        let glitchy = (0..100)
            .filter(|second| glitch_active(second * 1000 + 100))
            .count();
        assert_eq!(glitchy, GLITCH_PERCENT as usize);
    }

    #[test]
    fn test_glitch_bursts_end_within_their_window() {
        for second in 0..100u64 {
            assert!(!glitch_active(second * 1000 + GLITCH_WINDOW_MS));
        }
    }

    fn glitchy_instant() -> u64 {
        (0..100)
            .map(|second| second * 1000 + 100)
            .find(|ms| glitch_active(*ms))
            .unwrap()
    }

    #[test]
    fn test_glitch_art_corrupts_without_changing_shape() {
        let original = vec!["██  ██".to_string(), "██████".to_string()];
        let mut lines = original.clone();
        glitch_art(&mut lines, glitchy_instant());
        assert_ne!(lines, original);
        for (line, orig) in lines.iter().zip(&original) {
            assert_eq!(line.chars().count(), orig.chars().count());
        }
    }

    #[test]
    fn test_glitch_art_is_stable_within_a_burst() {
        let ms = glitchy_instant();
        let mut first = vec!["██████".to_string()];
        let mut second = vec!["██████".to_string()];
        glitch_art(&mut first, ms);
        glitch_art(&mut second, ms + 50);
        assert_eq!(first, second);
    }

    #[test]
    fn test_glitch_art_outside_a_burst_is_a_no_op() {
        let quiet = (0..100)
            .map(|second| second * 1000 + 500)
            .find(|ms| !glitch_active(*ms))
            .unwrap();
        let mut lines = vec!["██████".to_string()];
        glitch_art(&mut lines, quiet);
        assert_eq!(lines, vec!["██████".to_string()]);
    }

    #[test]
    fn test_glitch_art_handles_empty_lines() {
        let mut lines = vec![String::new()];
        glitch_art(&mut lines, glitchy_instant());
        assert_eq!(lines, vec![String::new()]);
    }
}

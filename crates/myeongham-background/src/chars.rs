//! Character constants for background animations.

/// Star glyphs from smallest to largest.
pub const STAR_CHARS: &[char] = &['·', '.', '+', '*', '✧', '✦'];

/// Faint dot stamped around strongly glowing stars.
pub const HALO_CHAR: char = '·';

/// Characters used for the code rain.
pub const CODE_CHARS: &[char] = &[
    '0', '1', '{', '}', '[', ']', '<', '>', '/', ';', '=', '+', '-', '*', '&', '^', '%', '$', '#',
    '@', '!',
];

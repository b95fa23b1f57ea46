//! ASCII art letters for the myeongham name display.

/// Large block letters A-Z (7 lines tall, 6 chars wide; M and W are 7 wide)
pub const LETTERS: [[&str; 7]; 26] = [
    // A
    [
        " ████ ",
        "██  ██",
        "██  ██",
        "██████",
        "██  ██",
        "██  ██",
        "██  ██",
    ],
    // B
    [
        "█████ ",
        "██  ██",
        "██  ██",
        "█████ ",
        "██  ██",
        "██  ██",
        "█████ ",
    ],
    // C
    [
        " ████ ",
        "██  ██",
        "██    ",
        "██    ",
        "██    ",
        "██  ██",
        " ████ ",
    ],
    // D
    [
        "█████ ",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "█████ ",
    ],
    // E
    [
        "██████",
        "██    ",
        "██    ",
        "█████ ",
        "██    ",
        "██    ",
        "██████",
    ],
    // F
    [
        "██████",
        "██    ",
        "██    ",
        "█████ ",
        "██    ",
        "██    ",
        "██    ",
    ],
    // G
    [
        " ████ ",
        "██  ██",
        "██    ",
        "██ ███",
        "██  ██",
        "██  ██",
        " ████ ",
    ],
    // H
    [
        "██  ██",
        "██  ██",
        "██  ██",
        "██████",
        "██  ██",
        "██  ██",
        "██  ██",
    ],
    // I
    [
        " ████ ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        " ████ ",
    ],
    // J
    [
        "  ████",
        "    ██",
        "    ██",
        "    ██",
        "    ██",
        "██  ██",
        " ████ ",
    ],
    // K
    [
        "██  ██",
        "██ ██ ",
        "████  ",
        "███   ",
        "████  ",
        "██ ██ ",
        "██  ██",
    ],
    // L
    [
        "██    ",
        "██    ",
        "██    ",
        "██    ",
        "██    ",
        "██    ",
        "██████",
    ],
    // M
    [
        "██   ██",
        "███ ███",
        "███████",
        "██ █ ██",
        "██   ██",
        "██   ██",
        "██   ██",
    ],
    // N
    [
        "██  ██",
        "███ ██",
        "██████",
        "██ ███",
        "██  ██",
        "██  ██",
        "██  ██",
    ],
    // O
    [
        " ████ ",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        " ████ ",
    ],
    // P
    [
        "█████ ",
        "██  ██",
        "██  ██",
        "█████ ",
        "██    ",
        "██    ",
        "██    ",
    ],
    // Q
    [
        " ████ ",
        "██  ██",
        "██  ██",
        "██  ██",
        "██ ███",
        "██  ██",
        " █████",
    ],
    // R
    [
        "█████ ",
        "██  ██",
        "██  ██",
        "█████ ",
        "████  ",
        "██ ██ ",
        "██  ██",
    ],
    // S
    [
        " █████",
        "██    ",
        "██    ",
        " ████ ",
        "    ██",
        "    ██",
        "█████ ",
    ],
    // T
    [
        "██████",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
    ],
    // U
    [
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        " ████ ",
    ],
    // V
    [
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        " ████ ",
        "  ██  ",
    ],
    // W
    [
        "██   ██",
        "██   ██",
        "██   ██",
        "██ █ ██",
        "███████",
        "███ ███",
        "██   ██",
    ],
    // X
    [
        "██  ██",
        "██  ██",
        " ████ ",
        "  ██  ",
        " ████ ",
        "██  ██",
        "██  ██",
    ],
    // Y
    [
        "██  ██",
        "██  ██",
        " ████ ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
    ],
    // Z
    [
        "██████",
        "    ██",
        "   ██ ",
        "  ██  ",
        " ██   ",
        "██    ",
        "██████",
    ],
];

/// Word gap (7 lines tall, 3 chars wide)
pub const SPACE: [&str; 7] = ["   ", "   ", "   ", "   ", "   ", "   ", "   "];

/// Full stop (7 lines tall, 2 chars wide)
pub const DOT: [&str; 7] = ["  ", "  ", "  ", "  ", "  ", "  ", "██"];

/// Hyphen (7 lines tall, 4 chars wide)
pub const HYPHEN: [&str; 7] = ["    ", "    ", "    ", "████", "    ", "    ", "    "];

/// Look up the glyph for a character, if the font covers it.
///
/// Letters are matched case-insensitively. Characters outside the font
/// return `None` and are skipped by [`build_title_art`].
pub fn glyph(ch: char) -> Option<&'static [&'static str; 7]> {
    let ch = ch.to_ascii_uppercase();
    match ch {
        'A'..='Z' => Some(&LETTERS[(ch as u8 - b'A') as usize]),
        ' ' => Some(&SPACE),
        '.' => Some(&DOT),
        '-' => Some(&HYPHEN),
        _ => None,
    }
}

/// Build large ASCII art for a title string.
///
/// # Returns
/// A vector of 7 strings, each representing one line of the ASCII art.
/// Characters the font does not cover are skipped.
pub fn build_title_art(text: &str) -> Vec<String> {
    let glyphs: Vec<&[&str; 7]> = text.chars().filter_map(glyph).collect();

    let mut lines = Vec::with_capacity(7);

    for row in 0..7 {
        let mut line = String::new();
        for (i, glyph) in glyphs.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(glyph[row]);
        }
        lines.push(line);
    }

    lines
}

/// Display width in terminal cells of the art [`build_title_art`] produces.
pub fn art_width(text: &str) -> usize {
    let glyphs: Vec<&[&str; 7]> = text.chars().filter_map(glyph).collect();
    let gaps = glyphs.len().saturating_sub(1);
    glyphs.iter().map(|g| g[0].chars().count()).sum::<usize>() + gaps
}

//! Core types shared across the myeongham crates.
//!
//! This crate holds the small vocabulary the binary, configuration, and
//! background crates agree on: which section is on screen, which background
//! animation is active, how fast it runs, and the accent color theme.

mod section;
mod speed;
mod style;
mod theme;

pub use section::Section;
pub use speed::AnimationSpeed;
pub use style::BackgroundStyle;
pub use theme::ColorTheme;

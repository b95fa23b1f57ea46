//! Background animation rendering for the myeongham terminal card.
//!
//! This crate provides the animated backgrounds behind the hero view: a
//! drifting starfield with per-star twinkle, and a sparse code rain. Both
//! stamp glyphs into a [`CellGrid`] compositor and are driven through
//! [`BackgroundState`], which handles style selection, resize detection,
//! and teardown.

mod animations;
mod chars;
mod color;
mod grid;
mod state;

pub use animations::starfield::{STAR_COUNT, Star, Starfield};
pub use grid::CellGrid;
pub use state::BackgroundState;

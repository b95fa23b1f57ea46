//! Background animations.

pub mod rain;
pub mod starfield;

//! Drifting starfield animation (stateful).

use crate::chars::{HALO_CHAR, STAR_CHARS};
use crate::color;
use crate::grid::CellGrid;

/// Number of stars in the field.
pub const STAR_COUNT: usize = 120;

/// Stars respawn this far above the top edge and retire this far below the
/// bottom, so they enter and leave off screen.
const EDGE_MARGIN: f32 = 2.0;

/// Largest effective star size; `radius * twinkle` never exceeds this.
const MAX_STAR_SIZE: f32 = 1.8;

/// Halo glow strength per unit of twinkle.
const GLOW_STRENGTH: f32 = 8.0;

/// Glow strength past which the halo reaches the neighbouring cells.
const GLOW_SPILL: f32 = 4.0;

/// A single star.
#[derive(Debug, Clone)]
pub struct Star {
    /// Horizontal position in fractional cells.
    pub x: f32,
    /// Vertical position in fractional cells.
    pub y: f32,
    /// Depth scalar sampled at creation and kept across respawns; the flat
    /// projection never reads it.
    pub z: f32,
    /// Base alpha of the star.
    pub opacity: f32,
    /// Base size of the star.
    pub radius: f32,
    /// Phase offset into the shared twinkle wave.
    pub twinkle_phase: f32,
    /// Downward drift per tick.
    pub speed: f32,
}

impl Star {
    /// Sample a fresh star anywhere on the surface.
    fn spawn(rng: &mut fastrand::Rng, width: f32, height: f32) -> Self {
        Self {
            x: rng.f32() * width,
            y: rng.f32() * height,
            z: rng.f32() * width,
            opacity: 0.7 + rng.f32() * 0.3,
            radius: 0.6 + rng.f32() * 1.2,
            twinkle_phase: rng.f32() * std::f32::consts::TAU,
            speed: 0.1 + rng.f32() * 0.2,
        }
    }

    /// Re-enter just above the top edge with fresh attributes; depth keeps
    /// its original sample.
    fn respawn(&mut self, rng: &mut fastrand::Rng, width: f32) {
        self.x = rng.f32() * width;
        self.y = -EDGE_MARGIN;
        self.radius = 0.6 + rng.f32() * 1.2;
        self.opacity = 0.7 + rng.f32() * 0.3;
        self.twinkle_phase = rng.f32() * std::f32::consts::TAU;
        self.speed = 0.1 + rng.f32() * 0.2;
    }
}

/// The starfield animator.
///
/// An explicit component instance: it owns its stars, surface dimensions,
/// and randomness, and does per-frame work only between [`Starfield::start`]
/// and [`Starfield::stop`]. While running the field always holds exactly
/// [`STAR_COUNT`] stars; drifting off the bottom recycles a star rather
/// than removing it.
#[derive(Debug)]
pub struct Starfield {
    stars: Vec<Star>,
    width: f32,
    height: f32,
    rng: fastrand::Rng,
    running: bool,
}

impl Default for Starfield {
    fn default() -> Self {
        Self::new()
    }
}

impl Starfield {
    /// Create a stopped starfield.
    pub fn new() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }

    /// Create a stopped starfield with seeded randomness.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(fastrand::Rng::with_seed(seed))
    }

    fn with_rng(rng: fastrand::Rng) -> Self {
        Self {
            stars: Vec::new(),
            width: 0.0,
            height: 0.0,
            rng,
            running: false,
        }
    }

    /// Populate the field for the given surface and begin animating.
    ///
    /// Starting an already-running field is a no-op, so repeated mounts
    /// never stack animation work.
    pub fn start(&mut self, width: u16, height: u16) {
        if self.running {
            return;
        }
        self.width = width as f32;
        self.height = height as f32;
        self.populate();
        self.running = true;
    }

    /// Throw away the current stars and regenerate for new dimensions.
    ///
    /// Ignored while stopped.
    pub fn resize(&mut self, width: u16, height: u16) {
        if !self.running {
            return;
        }
        self.width = width as f32;
        self.height = height as f32;
        self.populate();
    }

    /// Drop all per-frame state and stop animating.
    pub fn stop(&mut self) {
        self.stars.clear();
        self.running = false;
    }

    /// Whether the field is between [`Starfield::start`] and
    /// [`Starfield::stop`].
    pub fn is_running(&self) -> bool {
        self.running
    }

    fn populate(&mut self) {
        let (width, height) = (self.width, self.height);
        let rng = &mut self.rng;
        self.stars = (0..STAR_COUNT)
            .map(|_| Star::spawn(rng, width, height))
            .collect();
    }

    /// Advance one tick: every star drifts down by its speed, and stars
    /// past the bottom margin re-enter at the top in the same tick.
    pub fn update(&mut self) {
        if !self.running {
            return;
        }
        let respawn_line = self.height + EDGE_MARGIN;
        let width = self.width;
        let rng = &mut self.rng;
        for star in &mut self.stars {
            star.y += star.speed;
            if star.y > respawn_line {
                star.respawn(rng, width);
            }
        }
    }

    /// Stamp the current frame into the grid.
    ///
    /// Twinkle scales each star's alpha, size, and glow; the grid's
    /// brightest-wins rule composes overlapping stars and halos.
    pub fn render_into(&self, grid: &mut CellGrid, elapsed_ms: u64) {
        if !self.running {
            return;
        }
        for star in &self.stars {
            let tw = twinkle(elapsed_ms, star.twinkle_phase);
            let brightness = star.opacity * tw;
            let size = star.radius * tw;
            let cx = star.x.round() as i32;
            let cy = star.y.round() as i32;
            grid.stamp(
                cx,
                cy,
                star_glyph(size),
                color::dim(color::STAR_TINT, brightness),
                brightness,
            );

            // A strong glow reaches into the four neighbouring cells
            if GLOW_STRENGTH * tw > GLOW_SPILL {
                let halo = brightness * 0.35;
                let halo_color = color::dim(color::HALO_TINT, halo);
                for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                    grid.stamp(cx + dx, cy + dy, HALO_CHAR, halo_color, halo);
                }
            }
        }
    }
}

/// Shared twinkle wave, always in `[0, 1]`.
pub fn twinkle(elapsed_ms: u64, phase: f32) -> f32 {
    let t = elapsed_ms as f64 * 0.002;
    (0.5 + 0.5 * (t + phase as f64).sin()) as f32
}

/// Pick a star glyph for the effective size.
fn star_glyph(size: f32) -> char {
    let idx = ((size / MAX_STAR_SIZE) * STAR_CHARS.len() as f32) as usize;
    STAR_CHARS[idx.min(STAR_CHARS.len() - 1)]
}

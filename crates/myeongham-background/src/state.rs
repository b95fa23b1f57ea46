//! Background animation state management.

use myeongham_core::{AnimationSpeed, BackgroundStyle};
use ratatui::{Frame, widgets::Paragraph};

use crate::animations::{rain, starfield::Starfield};
use crate::grid::CellGrid;

/// Background animation state.
///
/// Owns the per-style animation state and handles initialization on first
/// sight of a style, regeneration when the terminal is resized, and full
/// teardown via [`BackgroundState::stop`].
#[derive(Debug)]
pub struct BackgroundState {
    /// The starfield animator.
    starfield: Starfield,
    /// Code rain column states.
    rain_columns: Vec<rain::RainColumn>,
    /// Randomness for the rain columns.
    rng: fastrand::Rng,
    /// Last known terminal width.
    last_width: u16,
    /// Last known terminal height.
    last_height: u16,
    /// Last update time in milliseconds.
    last_update_ms: u64,
}

impl Default for BackgroundState {
    fn default() -> Self {
        Self::new()
    }
}

impl BackgroundState {
    /// Create a new background state.
    pub fn new() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        // Capture system time as seed for randomness
        let init_seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);

        Self::with_seed(init_seed)
    }

    /// Create a background state with seeded randomness.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            starfield: Starfield::with_seed(seed),
            rain_columns: Vec::new(),
            rng: fastrand::Rng::with_seed(seed.wrapping_add(1)),
            last_width: 0,
            last_height: 0,
            last_update_ms: 0,
        }
    }

    /// Render the background to the frame.
    ///
    /// A [`BackgroundStyle::None`] style or a zero-area frame leaves the
    /// frame untouched and builds no animation state.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        style: BackgroundStyle,
        elapsed_ms: u64,
        speed: AnimationSpeed,
    ) {
        if style == BackgroundStyle::None {
            return;
        }

        let area = frame.area();
        let width = area.width;
        let height = area.height;
        if width == 0 || height == 0 {
            return;
        }

        // Reinitialize if dimensions changed or state not yet built
        let dimensions_changed = width != self.last_width || height != self.last_height;

        if style == BackgroundStyle::Starfield {
            if !self.starfield.is_running() {
                self.starfield.start(width, height);
            } else if dimensions_changed {
                self.starfield.resize(width, height);
            }
        }
        if style == BackgroundStyle::CodeRain && (dimensions_changed || self.rain_columns.is_empty())
        {
            self.rain_columns = rain::init_columns(width, height, &mut self.rng);
        }

        if dimensions_changed {
            self.last_width = width;
            self.last_height = height;
        }

        // Calculate delta time for the wall-clock driven rain
        let delta_ms = elapsed_ms.saturating_sub(self.last_update_ms);
        self.last_update_ms = elapsed_ms;

        // Advance animation states; the starfield steps exactly once per tick
        if style == BackgroundStyle::Starfield {
            self.starfield.update();
        }
        if style == BackgroundStyle::CodeRain {
            rain::update(
                &mut self.rain_columns,
                delta_ms,
                width,
                height,
                speed,
                &mut self.rng,
            );
        }

        let mut grid = CellGrid::new(width, height);
        match style {
            BackgroundStyle::Starfield => self.starfield.render_into(&mut grid, elapsed_ms),
            BackgroundStyle::CodeRain => rain::render_into(&self.rain_columns, &mut grid),
            BackgroundStyle::None => {}
        }

        frame.render_widget(Paragraph::new(grid.into_lines()), area);
    }

    /// Whether any animation currently holds per-frame state.
    pub fn is_active(&self) -> bool {
        self.starfield.is_running() || !self.rain_columns.is_empty()
    }

    /// Tear down all animation state. The next render starts fresh.
    pub fn stop(&mut self) {
        self.starfield.stop();
        self.rain_columns.clear();
        self.last_width = 0;
        self.last_height = 0;
    }
}

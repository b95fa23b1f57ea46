//! Cell compositing for stamped background animations.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// A single stamped cell.
#[derive(Debug, Clone, Copy)]
struct Cell {
    ch: char,
    color: Color,
    brightness: f32,
}

/// A frame-sized buffer that animations stamp glyphs into.
///
/// The grid starts empty every frame. Stamps outside the bounds are
/// ignored, and each cell keeps only its brightest stamp, so overlapping
/// stars and halos compose without leaving draw state behind.
#[derive(Debug)]
pub struct CellGrid {
    width: u16,
    height: u16,
    cells: Vec<Option<Cell>>,
}

impl CellGrid {
    /// Create an empty grid for the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Stamp a glyph at the given cell, keeping the brighter of two stamps.
    pub fn stamp(&mut self, x: i32, y: i32, ch: char, color: Color, brightness: f32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width as usize + x as usize;
        match self.cells[idx] {
            Some(cell) if cell.brightness >= brightness => {}
            _ => {
                self.cells[idx] = Some(Cell {
                    ch,
                    color,
                    brightness,
                })
            }
        }
    }

    /// Convert the grid into renderable lines; empty cells become spaces.
    pub fn into_lines(self) -> Vec<Line<'static>> {
        let width = self.width as usize;
        (0..self.height as usize)
            .map(|y| {
                let spans: Vec<Span> = (0..width)
                    .map(|x| match self.cells[y * width + x] {
                        Some(cell) => {
                            Span::styled(cell.ch.to_string(), Style::new().fg(cell.color))
                        }
                        None => Span::raw(" "),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

//! Pixel canvas implementing the core [`Renderer`].
//!
//! The core draws in logical canvas units (1024x512 by default). The canvas
//! scales those uniformly onto a small RGB pixel grid; each terminal cell
//! later shows two stacked pixels with the upper-half-block glyph, which
//! keeps pixels roughly square on common terminal fonts.

use crate::core::Renderer;
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::{palette, Color, Rgb, CANVAS_HEIGHT, CANVAS_WIDTH};

/// Glyph whose foreground paints the top pixel and background the bottom one.
const HALF_BLOCK: char = '▀';

#[derive(Debug, Clone)]
pub struct Canvas {
    width: u16,
    height: u16,
    logical_width: f64,
    logical_height: f64,
    scale: f64,
    background: Rgb,
    pixels: Vec<Rgb>,
}

impl Canvas {
    /// Canvas for the default logical size.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_logical_size(width, height, CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    pub fn with_logical_size(
        width: u16,
        height: u16,
        logical_width: f64,
        logical_height: f64,
    ) -> Self {
        let mut canvas = Self {
            width: 0,
            height: 0,
            logical_width,
            logical_height,
            scale: 0.0,
            background: palette::BACKGROUND,
            pixels: Vec::new(),
        };
        canvas.resize(width, height);
        canvas
    }

    /// Resize the pixel grid and recompute the scale. Clears to background.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.scale = (width as f64 / self.logical_width).min(height as f64 / self.logical_height);
        if !self.scale.is_finite() || self.scale < 0.0 {
            self.scale = 0.0;
        }
        self.pixels.clear();
        self.pixels
            .resize(width as usize * height as usize, self.background);
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Pixels per logical unit.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn pixel(&self, x: u16, y: u16) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    fn put(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let i = y as usize * self.width as usize + x as usize;
        if let Some(p) = self.pixels.get_mut(i) {
            *p = color;
        }
    }

    /// Fill the pixel span covering logical `[x0, x1) x [y0, y1)`.
    fn fill_logical(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgb) {
        if !(x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite()) {
            return;
        }
        let s = self.scale;
        let w = self.width as f64;
        let h = self.height as f64;
        let px0 = (x0 * s).floor().clamp(0.0, w) as i64;
        let py0 = (y0 * s).floor().clamp(0.0, h) as i64;
        // Anything with positive area covers at least one pixel.
        let px1 = ((x1 * s).ceil().clamp(0.0, w) as i64).max(px0 + 1);
        let py1 = ((y1 * s).ceil().clamp(0.0, h) as i64).max(py0 + 1);
        for py in py0..py1 {
            for px in px0..px1 {
                self.put(px, py, color);
            }
        }
    }

    /// Clip a pixel-space segment to the canvas (Liang–Barsky).
    fn clip(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> Option<(f64, f64, f64, f64)> {
        let (xmax, ymax) = (self.width as f64 - 1.0, self.height as f64 - 1.0);
        if xmax < 0.0 || ymax < 0.0 {
            return None;
        }
        let dx = x1 - x0;
        let dy = y1 - y0;
        let mut t0: f64 = 0.0;
        let mut t1: f64 = 1.0;
        for (p, q) in [(-dx, x0), (dx, xmax - x0), (-dy, y0), (dy, ymax - y0)] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 > t1 {
                return None;
            }
        }
        Some((x0 + t0 * dx, y0 + t0 * dy, x0 + t1 * dx, y0 + t1 * dy))
    }

    /// Paint the canvas into `fb` with its top-left cell at `(x, y)`.
    pub fn present_into(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        for row in 0..self.height.div_ceil(2) {
            for col in 0..self.width {
                let top = self.pixel(col, row * 2).unwrap_or(self.background);
                let bottom = self.pixel(col, row * 2 + 1).unwrap_or(self.background);
                let cell = Cell {
                    ch: HALF_BLOCK,
                    style: CellStyle { fg: top, bg: bottom },
                };
                fb.set(x.saturating_add(col), y.saturating_add(row), cell);
            }
        }
    }
}

impl Renderer for Canvas {
    fn draw_point(&mut self, x: f64, y: f64, size: f64, color: Color) {
        let half = size / 2.0;
        self.fill_logical(x - half, y - half, x + half, y + half, color);
    }

    fn draw_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        self.fill_logical(x, y, x + w, y + h, color);
    }

    fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Color) {
        if !(x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite()) {
            return;
        }
        let s = self.scale;
        let Some((ax, ay, bx, by)) = self.clip(x0 * s, y0 * s, x1 * s, y1 * s) else {
            return;
        };
        let steps = (bx - ax).abs().max((by - ay).abs()).ceil().max(1.0);
        let (sx, sy) = ((bx - ax) / steps, (by - ay) / steps);
        for i in 0..=steps as i64 {
            let t = i as f64;
            self.put(
                (ax + sx * t).floor() as i64,
                (ay + sy * t).floor() as i64,
                color,
            );
        }
    }

    fn clear(&mut self) {
        self.pixels.fill(self.background);
    }
}

//! Drawing capabilities shared by the map, the observer and the camera.
//!
//! The core never rasterizes anything itself. Entities describe what they
//! look like through [`Renderer`]; the terminal crate provides the real
//! implementation and [`DrawList`] records commands for tests.

use crate::types::Color;

/// Drawing surface consumed by the core.
pub trait Renderer {
    /// Square of side `size` centered on `(x, y)`.
    fn draw_point(&mut self, x: f64, y: f64, size: f64, color: Color);
    fn draw_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color);
    fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Color);
    /// Reset the surface to its background before a new frame.
    fn clear(&mut self);
}

/// Anything that can describe itself to a [`Renderer`].
pub trait Drawable {
    fn draw(&self, gfx: &mut dyn Renderer);
}

/// A recorded renderer call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Point {
        x: f64,
        y: f64,
        size: f64,
        color: Color,
    },
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Color,
    },
    Line {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        color: Color,
    },
    Clear,
}

impl DrawCommand {
    /// True when every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        match *self {
            DrawCommand::Point { x, y, size, .. } => {
                x.is_finite() && y.is_finite() && size.is_finite()
            }
            DrawCommand::Rect { x, y, w, h, .. } => {
                x.is_finite() && y.is_finite() && w.is_finite() && h.is_finite()
            }
            DrawCommand::Line { x0, y0, x1, y1, .. } => {
                x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite()
            }
            DrawCommand::Clear => true,
        }
    }
}

/// Renderer that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forget recorded commands, keeping the allocation.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Order-sensitive FNV-1a hash over the recorded commands.
    ///
    /// Two frames with the same fingerprint drew the same thing.
    pub fn fingerprint(&self) -> u64 {
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0100_0000_01b3;

        let mut h = OFFSET;
        let mut mix = |bytes: &[u8]| {
            for &b in bytes {
                h ^= b as u64;
                h = h.wrapping_mul(PRIME);
            }
        };
        for cmd in &self.commands {
            match *cmd {
                DrawCommand::Point { x, y, size, color } => {
                    mix(&[0]);
                    for v in [x, y, size] {
                        mix(&v.to_bits().to_le_bytes());
                    }
                    mix(&[color.r, color.g, color.b]);
                }
                DrawCommand::Rect { x, y, w, h: hh, color } => {
                    mix(&[1]);
                    for v in [x, y, w, hh] {
                        mix(&v.to_bits().to_le_bytes());
                    }
                    mix(&[color.r, color.g, color.b]);
                }
                DrawCommand::Line {
                    x0,
                    y0,
                    x1,
                    y1,
                    color,
                } => {
                    mix(&[2]);
                    for v in [x0, y0, x1, y1] {
                        mix(&v.to_bits().to_le_bytes());
                    }
                    mix(&[color.r, color.g, color.b]);
                }
                DrawCommand::Clear => mix(&[3]),
            }
        }
        h
    }
}

impl Renderer for DrawList {
    fn draw_point(&mut self, x: f64, y: f64, size: f64, color: Color) {
        self.commands.push(DrawCommand::Point { x, y, size, color });
    }

    fn draw_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }

    fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Color) {
        self.commands.push(DrawCommand::Line {
            x0,
            y0,
            x1,
            y1,
            color,
        });
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }
}

//! FrameView: composes the scene canvas and a status row into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::Canvas;
use crate::core::{Observer, Scene};
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::{palette, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const HELP: &str = "arrows/wasd move+turn  q quit";

/// Lays out the canvas above a single status row.
#[derive(Debug, Clone)]
pub struct FrameView {
    show_status: bool,
}

impl Default for FrameView {
    fn default() -> Self {
        Self { show_status: true }
    }
}

impl FrameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, show_status: bool) -> Self {
        self.show_status = show_status;
        self
    }

    fn status_rows(&self, viewport: Viewport) -> u16 {
        u16::from(self.show_status && viewport.height > 1)
    }

    /// Pixel size the canvas should have for this viewport.
    pub fn canvas_size(&self, viewport: Viewport) -> (u16, u16) {
        let rows = viewport.height.saturating_sub(self.status_rows(viewport));
        (viewport.width, rows.saturating_mul(2))
    }

    /// Draw `scene` into `canvas`, resizing it to fit `viewport` first.
    pub fn paint(&self, scene: &Scene, viewport: Viewport, canvas: &mut Canvas) {
        let (w, h) = self.canvas_size(viewport);
        if canvas.width() != w || canvas.height() != h {
            canvas.resize(w, h);
        }
        scene.render(canvas);
    }

    /// Compose a painted canvas and the status row into `fb`.
    pub fn render_into(
        &self,
        canvas: &Canvas,
        observer: &Observer,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle {
                fg: palette::BACKGROUND,
                bg: palette::BACKGROUND,
            },
        });
        canvas.present_into(fb, 0, 0);

        if self.status_rows(viewport) == 1 {
            let style = CellStyle {
                fg: Rgb::new(220, 220, 220),
                bg: Rgb::new(0, 0, 0),
            };
            let y = viewport.height - 1;
            fb.put_str(0, y, &" ".repeat(viewport.width as usize), style);
            fb.put_str(0, y, &status_line(observer), style);
        }
    }

    pub fn render(&self, canvas: &Canvas, observer: &Observer, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(canvas, observer, viewport, &mut fb);
        fb
    }
}

/// Position, heading in degrees and key help.
pub fn status_line(observer: &Observer) -> String {
    format!(
        "x {:>6.1}  y {:>6.1}  heading {:>5.1}°  |  {}",
        observer.x(),
        observer.y(),
        observer.heading().to_degrees(),
        HELP
    )
}

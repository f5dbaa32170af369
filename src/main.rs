//! Terminal ray caster runner (default binary).
//!
//! The grid is drawn on the left half of the canvas, the projected view on
//! the right. Arrow keys or WASD move and turn; `q` quits.

use std::time::Instant;

use anyhow::Result;

use tui_raycaster::core::Scene;
use tui_raycaster::input::poll_batch;
use tui_raycaster::term::{Canvas, FramePacer, FrameBuffer, FrameView, Terminal, Viewport};
use tui_raycaster::types::FRAME_INTERVAL_MS;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut term = Terminal::new();
    term.enter()?;
    tracing::info!("ray caster starting");

    let result = run(&mut term);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        tracing::warn!("failed to restore terminal: {}", e);
    }
    tracing::info!("ray caster exiting");
    result
}

fn run(term: &mut Terminal) -> Result<()> {
    let mut scene = Scene::default();
    let view = FrameView::default();
    let mut pacer = FramePacer::new(FRAME_INTERVAL_MS);

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let (cw, ch) = view.canvas_size(viewport);
    let mut canvas = Canvas::new(cw, ch);
    let mut fb = FrameBuffer::new(w, h);

    let start = Instant::now();
    let now_ms = || start.elapsed().as_millis() as u64;

    loop {
        // Render.
        if pacer.is_due(now_ms()) {
            pacer.mark(now_ms());
            view.paint(&scene, viewport, &mut canvas);
            view.render_into(&canvas, &scene.observer, viewport, &mut fb);
            term.present(&mut fb)?;
        }

        // Input until the next frame is due.
        let batch = poll_batch(pacer.timeout(now_ms()))?;
        if batch.quit {
            return Ok(());
        }
        if batch.resized {
            let (w, h) = crossterm::terminal::size().unwrap_or((viewport.width, viewport.height));
            viewport = Viewport::new(w, h);
            term.invalidate();
        }
        for command in batch.commands {
            scene.apply(command);
        }
    }
}

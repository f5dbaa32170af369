use tui_raycaster::core::Scene;
use tui_raycaster::term::{Canvas, FrameView, Viewport};
use tui_raycaster::types::palette;

fn frame(viewport: Viewport) -> (Canvas, tui_raycaster::term::FrameBuffer) {
    let scene = Scene::default();
    let view = FrameView::default();
    let (w, h) = view.canvas_size(viewport);
    let mut canvas = Canvas::new(w, h);
    view.paint(&scene, viewport, &mut canvas);
    let fb = view.render(&canvas, &scene.observer, viewport);
    (canvas, fb)
}

#[test]
fn status_row_is_last_line() {
    let vp = Viewport::new(120, 40);
    let (_, fb) = frame(vp);
    let text = fb.row_text(39);
    assert!(text.contains("heading 180.0"), "status row: {text:?}");
    assert!(text.contains("q quit"));
}

#[test]
fn projection_half_shows_wall_shades() {
    let vp = Viewport::new(128, 33);
    let (canvas, _) = frame(vp);
    // Canvas is 128x64 pixels; the plane covers x in [64, 128).
    let mid_y = canvas.height() / 2;
    let mut shaded = 0;
    for x in 64..128 {
        let p = canvas.pixel(x, mid_y).unwrap();
        if p == palette::WALL_VERTICAL || p == palette::WALL_HORIZONTAL {
            shaded += 1;
        }
    }
    assert!(shaded > 48, "only {shaded} shaded columns");
}

#[test]
fn map_half_shows_tiles_and_observer() {
    // 256x128 pixels, a quarter pixel per world unit.
    let vp = Viewport::new(256, 65);
    let (canvas, _) = frame(vp);
    assert_eq!(canvas.scale(), 0.25);
    // Top-left wall tile.
    assert_eq!(canvas.pixel(3, 3), Some(palette::WALL_TILE));
    // Observer marker spans world 296..304 -> pixels 74..76.
    assert_eq!(canvas.pixel(74, 74), Some(palette::OBSERVER));
}

#[test]
fn framebuffer_matches_viewport() {
    let vp = Viewport::new(90, 30);
    let (_, fb) = frame(vp);
    assert_eq!((fb.width(), fb.height()), (90, 30));
}

//! Angle and distance helpers.

use std::f64::consts::{PI, TAU};

/// Normalize an angle into `[0, 2π)`.
///
/// Angles within one turn of the range are corrected with a single add or
/// subtract. Anything further out falls back to a Euclidean remainder, and a
/// result that rounds up to exactly `2π` collapses to `0`.
///
/// ```
/// use std::f64::consts::PI;
/// use tui_raycaster_core::math::normalize;
///
/// assert_eq!(normalize(-PI / 2.0), 3.0 * PI / 2.0);
/// assert_eq!(normalize(PI), PI);
/// assert_eq!(normalize(2.0 * PI), 0.0);
/// ```
pub fn normalize(a: f64) -> f64 {
    if !a.is_finite() {
        return 0.0;
    }

    let mut r = if a < 0.0 {
        a + TAU
    } else if a >= TAU {
        a - TAU
    } else {
        a
    };

    if !(0.0..TAU).contains(&r) {
        r = r.rem_euclid(TAU);
    }
    if r >= TAU {
        r = 0.0;
    }
    r
}

/// Length of the segment from `(x0, y0)` to `(x1, y1)`.
pub fn line_length(x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    (x0 - x1).hypot(y0 - y1)
}

/// Rays pointing to screen-up (negative y); angles grow clockwise.
pub fn is_looking_up(angle: f64) -> bool {
    angle > PI
}

pub fn is_looking_right(angle: f64) -> bool {
    angle < PI / 2.0 || angle > 3.0 * PI / 2.0
}

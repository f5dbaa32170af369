//! Camera - ray casting and wall projection
//!
//! Every frame the camera sweeps `ray_count` rays left to right across the
//! field of view. Each ray is tested against horizontal and vertical grid
//! lines separately; the nearer wall hit wins and is projected onto a flat
//! plane as a single vertical segment.
//!
//! # Angles
//!
//! Angles grow clockwise from the positive x-axis because screen y grows
//! downwards. A ray with `angle > π` therefore points "up" the screen.
//!
//! # Singular angles
//!
//! A ray parallel to the horizontal grid lines (`sin ≈ 0`) never crosses
//! one, and a ray parallel to the vertical grid lines (`cos ≈ 0`) never
//! crosses those. Within [`PARALLEL_EPSILON`] of such an angle the affected
//! search is skipped and reports no hit, so `tan`/`cot` blow-ups never reach
//! the renderer.
//!
//! # Example
//!
//! ```
//! use std::f64::consts::PI;
//! use tui_raycaster_core::{Axis, Camera, GridMap, Observer};
//!
//! let map = GridMap::default();
//! let observer = Observer::new(300.0, 300.0, PI);
//! let camera = Camera::default();
//!
//! let hit = camera.cast_ray(&map, &observer, observer.heading()).unwrap();
//! assert_eq!(hit.axis, Axis::Vertical);
//! assert!((hit.x - 64.0).abs() < 1e-9);
//! assert!((hit.distance - 236.0).abs() < 1e-9);
//! ```

use crate::draw::{Drawable, Renderer};
use crate::map::GridMap;
use crate::math::{is_looking_right, is_looking_up, line_length, normalize};
use crate::observer::Observer;
use crate::types::{
    palette, Color, Tile, CAMERA_HEIGHT, FIELD_OF_VIEW, PROJECTION_PLANE_HEIGHT,
    PROJECTION_PLANE_WIDTH, PROJECTION_PLANE_X, RAY_COUNT,
};

/// Below this `|sin|` (horizontal) or `|cos|` (vertical) a ray counts as
/// parallel to the grid lines it would be searched against.
pub const PARALLEL_EPSILON: f64 = 1e-9;

/// Smallest distance fed into the projection.
const MIN_DISTANCE: f64 = 1e-6;

/// Projection plane and ray fan settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub plane_width: f64,
    pub plane_height: f64,
    /// Left edge of the plane on the canvas.
    pub plane_x: f64,
    pub field_of_view: f64,
    pub ray_count: usize,
    /// Eye height above the floor.
    pub height: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            plane_width: PROJECTION_PLANE_WIDTH,
            plane_height: PROJECTION_PLANE_HEIGHT,
            plane_x: PROJECTION_PLANE_X,
            field_of_view: FIELD_OF_VIEW,
            ray_count: RAY_COUNT,
            height: CAMERA_HEIGHT,
        }
    }
}

/// Which family of grid lines a ray hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Vertical hits are lit, horizontal hits are shaded.
    pub fn shade(self) -> Color {
        match self {
            Axis::Vertical => palette::WALL_VERTICAL,
            Axis::Horizontal => palette::WALL_HORIZONTAL,
        }
    }
}

/// Nearest wall intersection of one ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub x: f64,
    pub y: f64,
    /// Euclidean distance from the observer, before fisheye correction.
    pub distance: f64,
    pub axis: Axis,
}

/// One projected screen column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub index: usize,
    /// Horizontal canvas position.
    pub x: f64,
    pub angle: f64,
    pub hit: Option<Hit>,
    /// Perpendicular distance to the wall plane, `None` without a hit.
    pub corrected_distance: Option<f64>,
    pub top: f64,
    pub bottom: f64,
}

impl Column {
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Ray caster over a grid for a given observer.
///
/// The camera owns only its configuration and the values derived from it;
/// the grid and the observer are borrowed per call.
#[derive(Debug, Clone)]
pub struct Camera {
    config: CameraConfig,
    distance_to_plane: f64,
    delta_angle: f64,
    column_width: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

impl Camera {
    pub fn new(config: CameraConfig) -> Self {
        let rays = config.ray_count.max(1) as f64;
        let distance_to_plane = (config.plane_width / 2.0) / (config.field_of_view / 2.0).tan();
        let camera = Self {
            config,
            distance_to_plane,
            delta_angle: config.field_of_view / rays,
            column_width: config.plane_width / rays,
        };
        tracing::debug!(
            rays = config.ray_count,
            distance_to_plane,
            delta_angle = camera.delta_angle,
            "camera configured"
        );
        camera
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn distance_to_plane(&self) -> f64 {
        self.distance_to_plane
    }

    pub fn delta_angle(&self) -> f64 {
        self.delta_angle
    }

    pub fn column_width(&self) -> f64 {
        self.column_width
    }

    /// Angle of the ray for column `index`, swept left to right.
    ///
    /// The angle is advanced and normalized one column at a time so the fan
    /// wraps through zero exactly the way a frame sweep does.
    pub fn ray_angle(&self, heading: f64, index: usize) -> f64 {
        let mut angle = normalize(heading - self.config.field_of_view / 2.0);
        for _ in 0..index {
            angle = normalize(angle + self.delta_angle);
        }
        angle
    }

    /// Nearest wall hit on a horizontal grid line.
    pub fn horizontal_intersection(
        &self,
        map: &GridMap,
        observer: &Observer,
        angle: f64,
    ) -> Option<(f64, f64)> {
        if angle.sin().abs() < PARALLEL_EPSILON {
            return None;
        }

        let tile = map.tile_size();
        let cot = 1.0 / angle.tan();
        let up = is_looking_up(angle);
        let (px, py) = observer.position();

        // Snap to the grid line above the observer, then below if looking down.
        let mut iy = py - py.rem_euclid(tile);
        if !up {
            iy += tile;
        }
        let mut ix = px + (iy - py) * cot;

        for _ in 0..map.height() {
            // Looking up, the wall owning the line is the cell above it.
            let probe_y = if up { iy - tile } else { iy };
            match map.tile_at(ix, probe_y)? {
                Tile::Wall => return Some((ix, iy)),
                Tile::Empty => {}
            }
            iy += if up { -tile } else { tile };
            ix = px + (iy - py) * cot;
        }
        None
    }

    /// Nearest wall hit on a vertical grid line.
    pub fn vertical_intersection(
        &self,
        map: &GridMap,
        observer: &Observer,
        angle: f64,
    ) -> Option<(f64, f64)> {
        if angle.cos().abs() < PARALLEL_EPSILON {
            return None;
        }

        let tile = map.tile_size();
        let tan = angle.tan();
        let right = is_looking_right(angle);
        let (px, py) = observer.position();

        let mut ix = px - px.rem_euclid(tile);
        if right {
            ix += tile;
        }
        let mut iy = py + (ix - px) * tan;

        for _ in 0..map.width() {
            let probe_x = if right { ix } else { ix - tile };
            match map.tile_at(probe_x, iy)? {
                Tile::Wall => return Some((ix, iy)),
                Tile::Empty => {}
            }
            ix += if right { tile } else { -tile };
            iy = py + (ix - px) * tan;
        }
        None
    }

    /// Resolve one ray to its nearest wall.
    ///
    /// The vertical hit only replaces the horizontal one when strictly
    /// closer, so ties keep the horizontal hit.
    pub fn cast_ray(&self, map: &GridMap, observer: &Observer, angle: f64) -> Option<Hit> {
        let (px, py) = observer.position();
        let to_hit = |(x, y): (f64, f64), axis| Hit {
            x,
            y,
            distance: line_length(px, py, x, y),
            axis,
        };

        let horizontal = self
            .horizontal_intersection(map, observer, angle)
            .map(|p| to_hit(p, Axis::Horizontal));
        let vertical = self
            .vertical_intersection(map, observer, angle)
            .map(|p| to_hit(p, Axis::Vertical));

        match (horizontal, vertical) {
            (Some(h), Some(v)) if v.distance < h.distance => Some(v),
            (Some(h), _) => Some(h),
            (None, v) => v,
        }
    }

    /// Multiply the raw distance by `cos(heading - angle)` to flatten the
    /// arc of equal distances onto the projection plane.
    pub fn fisheye_correct(heading: f64, angle: f64, distance: f64) -> f64 {
        distance * (heading - angle).cos()
    }

    /// Vertical extent `(top, bottom)` of a wall at corrected distance `d`.
    ///
    /// Similar triangles split the segment at the plane's mid-height:
    /// `(wall - eye) * D / d` above it and `eye * D / d` below it. The
    /// result is clamped to the plane.
    pub fn project(&self, wall_height: f64, distance: f64) -> (f64, f64) {
        let center = self.config.plane_height / 2.0;
        if distance.is_nan() {
            return (center, center);
        }
        let d = distance.max(MIN_DISTANCE);
        let top_half = (wall_height - self.config.height) * self.distance_to_plane / d;
        let bottom_half = self.config.height * self.distance_to_plane / d;
        let top_offset = center - top_half;
        let bottom = top_offset + top_half + bottom_half;

        let clamp = |v: f64| {
            if v.is_finite() {
                v.clamp(0.0, self.config.plane_height)
            } else {
                center
            }
        };
        (clamp(top_offset), clamp(bottom))
    }

    fn column(&self, map: &GridMap, observer: &Observer, index: usize, angle: f64) -> Column {
        let x = self.config.plane_x + index as f64 * self.column_width;
        let hit = self.cast_ray(map, observer, angle);
        let corrected_distance =
            hit.map(|h| Self::fisheye_correct(observer.heading(), angle, h.distance));
        let (top, bottom) = match corrected_distance {
            Some(d) => self.project(map.wall_height(), d),
            None => {
                let center = self.config.plane_height / 2.0;
                (center, center)
            }
        };
        Column {
            index,
            x,
            angle,
            hit,
            corrected_distance,
            top,
            bottom,
        }
    }

    /// Cast every column of a frame into `out`, reusing its allocation.
    pub fn cast_into(&self, map: &GridMap, observer: &Observer, out: &mut Vec<Column>) {
        out.clear();
        out.reserve(self.config.ray_count);

        let mut angle = normalize(observer.heading() - self.config.field_of_view / 2.0);
        for index in 0..self.config.ray_count {
            out.push(self.column(map, observer, index, angle));
            angle = normalize(angle + self.delta_angle);
        }

        tracing::trace!(
            columns = out.len(),
            misses = out.iter().filter(|c| c.hit.is_none()).count(),
            "frame cast"
        );
    }

    pub fn cast(&self, map: &GridMap, observer: &Observer) -> Vec<Column> {
        let mut out = Vec::with_capacity(self.config.ray_count);
        self.cast_into(map, observer, &mut out);
        out
    }

    /// Borrow the camera with a map and observer as something drawable.
    pub fn view<'a>(&'a self, map: &'a GridMap, observer: &'a Observer) -> CameraView<'a> {
        CameraView {
            camera: self,
            map,
            observer,
        }
    }
}

/// A camera bound to a map and an observer for one frame.
#[derive(Debug, Clone, Copy)]
pub struct CameraView<'a> {
    camera: &'a Camera,
    map: &'a GridMap,
    observer: &'a Observer,
}

impl Drawable for CameraView<'_> {
    /// Each hit draws its ray on the grid and its column on the plane.
    /// Columns without a hit contribute nothing.
    fn draw(&self, gfx: &mut dyn Renderer) {
        let (px, py) = self.observer.position();
        let mut angle = normalize(self.observer.heading() - self.camera.config.field_of_view / 2.0);
        for index in 0..self.camera.config.ray_count {
            let column = self.camera.column(self.map, self.observer, index, angle);
            angle = normalize(angle + self.camera.delta_angle);

            let Some(hit) = column.hit else {
                continue;
            };
            gfx.draw_line(px, py, hit.x, hit.y, palette::RAY);
            if column.height() > 0.0 {
                gfx.draw_line(column.x, column.top, column.x, column.bottom, hit.axis.shade());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPS: f64 = 1e-9;

    fn arena() -> GridMap {
        GridMap::from_rows(
            64.0,
            &[
                "########",
                "#......#",
                "#......#",
                "#......#",
                "#......#",
                "#....#.#",
                "#......#",
                "########",
            ],
        )
        .unwrap()
    }

    #[test]
    fn derived_constants() {
        let camera = Camera::default();
        let expected = 256.0 / (PI / 6.0).tan();
        assert!((camera.distance_to_plane() - expected).abs() < EPS);
        assert!((camera.column_width() - 1.0).abs() < EPS);
        assert!((camera.delta_angle() - FIELD_OF_VIEW / RAY_COUNT as f64).abs() < EPS);
    }

    #[test]
    fn looking_left_hits_left_border() {
        let map = arena();
        let o = Observer::new(300.0, 300.0, PI);
        let camera = Camera::default();

        assert_eq!(camera.horizontal_intersection(&map, &o, PI), None);
        let (x, y) = camera.vertical_intersection(&map, &o, PI).unwrap();
        assert!((x - 64.0).abs() < EPS);
        assert!((y - 300.0).abs() < EPS);

        let hit = camera.cast_ray(&map, &o, PI).unwrap();
        assert_eq!(hit.axis, Axis::Vertical);
        assert!((hit.distance - 236.0).abs() < EPS);
    }

    #[test]
    fn looking_down_hits_bottom_border() {
        let map = arena();
        let o = Observer::new(100.0, 100.0, FRAC_PI_2);
        let camera = Camera::default();

        assert_eq!(camera.vertical_intersection(&map, &o, FRAC_PI_2), None);
        let hit = camera.cast_ray(&map, &o, FRAC_PI_2).unwrap();
        assert_eq!(hit.axis, Axis::Horizontal);
        assert!((hit.x - 100.0).abs() < 1e-6);
        assert!((hit.y - 448.0).abs() < EPS);
    }

    #[test]
    fn looking_up_probes_the_cell_above_the_line() {
        let map = arena();
        let o = Observer::new(100.0, 300.0, 3.0 * FRAC_PI_2);
        let camera = Camera::default();
        let hit = camera.cast_ray(&map, &o, 3.0 * FRAC_PI_2).unwrap();
        assert_eq!(hit.axis, Axis::Horizontal);
        assert!((hit.y - 64.0).abs() < EPS);
        assert!((hit.distance - 236.0).abs() < 1e-6);
    }

    #[test]
    fn diagonal_ray_finds_interior_wall() {
        // Down-right from (200, 200) towards the isolated wall at (5, 5).
        let map = arena();
        let o = Observer::new(200.0, 200.0, FRAC_PI_4);
        let camera = Camera::default();
        let hit = camera.cast_ray(&map, &o, FRAC_PI_4).unwrap();
        // Corner of cell (5, 5) sits at (320, 320).
        assert!((hit.x - 320.0).abs() < 1e-6);
        assert!((hit.y - 320.0).abs() < 1e-6);
    }

    #[test]
    fn ties_prefer_horizontal() {
        let map = arena();
        let o = Observer::new(200.0, 200.0, FRAC_PI_4);
        let camera = Camera::default();
        let h = camera.horizontal_intersection(&map, &o, FRAC_PI_4);
        let v = camera.vertical_intersection(&map, &o, FRAC_PI_4);
        let hit = camera.cast_ray(&map, &o, FRAC_PI_4).unwrap();
        if let (Some(h), Some(v)) = (h, v) {
            let hd = line_length(200.0, 200.0, h.0, h.1);
            let vd = line_length(200.0, 200.0, v.0, v.1);
            let expected = if vd < hd { Axis::Vertical } else { Axis::Horizontal };
            assert_eq!(hit.axis, expected);
        }
    }

    #[test]
    fn observer_outside_grid_misses() {
        let map = arena();
        let o = Observer::new(-100.0, 300.0, PI);
        let camera = Camera::default();
        assert_eq!(camera.horizontal_intersection(&map, &o, 2.5), None);
        assert_eq!(camera.vertical_intersection(&map, &o, 2.5), None);
        assert_eq!(camera.cast_ray(&map, &o, PI), None);
    }

    #[test]
    fn fisheye_is_identity_along_heading() {
        assert_eq!(Camera::fisheye_correct(1.3, 1.3, 236.0), 236.0);
        let side = Camera::fisheye_correct(PI, PI - FIELD_OF_VIEW / 2.0, 100.0);
        assert!(side < 100.0);
        assert!((side - 100.0 * (FIELD_OF_VIEW / 2.0).cos()).abs() < EPS);
    }

    #[test]
    fn projection_uses_similar_triangles() {
        let camera = Camera::default();
        let dpp = camera.distance_to_plane();
        let (top, bottom) = camera.project(64.0, 236.0);
        let top_half = 32.0 * dpp / 236.0;
        let bottom_half = 32.0 * dpp / 236.0;
        assert!((top - (256.0 - top_half)).abs() < EPS);
        assert!((bottom - (256.0 + bottom_half)).abs() < EPS);
    }

    #[test]
    fn projection_is_asymmetric_for_low_camera() {
        let camera = Camera::new(CameraConfig {
            height: 16.0,
            ..CameraConfig::default()
        });
        let (top, bottom) = camera.project(64.0, 500.0);
        assert!(256.0 - top > bottom - 256.0);
    }

    #[test]
    fn projection_clamps_to_plane() {
        let camera = Camera::default();
        assert_eq!(camera.project(64.0, 0.0), (0.0, 512.0));
        assert_eq!(camera.project(64.0, -5.0), (0.0, 512.0));
        assert_eq!(camera.project(64.0, f64::NAN), (256.0, 256.0));
        let (top, bottom) = camera.project(64.0, f64::INFINITY);
        assert_eq!((top, bottom), (256.0, 256.0));
    }

    #[test]
    fn ray_angles_sweep_left_to_right() {
        let camera = Camera::default();
        let first = camera.ray_angle(PI, 0);
        assert!((first - (PI - FIELD_OF_VIEW / 2.0)).abs() < EPS);
        let mid = camera.ray_angle(PI, RAY_COUNT / 2);
        assert!((mid - PI).abs() < 1e-9);
    }

    #[test]
    fn ray_fan_wraps_through_zero() {
        let camera = Camera::default();
        let first = camera.ray_angle(0.0, 0);
        assert!((first - (2.0 * PI - FIELD_OF_VIEW / 2.0)).abs() < EPS);
        let last = camera.ray_angle(0.0, RAY_COUNT - 1);
        assert!(last < FIELD_OF_VIEW / 2.0);
    }

    #[test]
    fn cast_produces_one_column_per_ray() {
        let map = arena();
        let o = Observer::new(300.0, 300.0, PI);
        let camera = Camera::default();
        let columns = camera.cast(&map, &o);
        assert_eq!(columns.len(), RAY_COUNT);
        for (i, c) in columns.iter().enumerate() {
            assert_eq!(c.index, i);
            assert!((c.x - (PROJECTION_PLANE_X + i as f64)).abs() < EPS);
            assert!(c.hit.is_some());
            assert!(c.top.is_finite() && c.bottom.is_finite());
            assert!(c.top <= c.bottom);
        }
    }

    #[test]
    fn cast_into_reuses_buffer() {
        let map = arena();
        let o = Observer::new(300.0, 300.0, PI);
        let camera = Camera::default();
        let mut out = Vec::new();
        camera.cast_into(&map, &o, &mut out);
        let cap = out.capacity();
        camera.cast_into(&map, &o, &mut out);
        assert_eq!(out.len(), RAY_COUNT);
        assert_eq!(out.capacity(), cap);
    }

    #[test]
    fn missing_hits_collapse_to_center() {
        let map = arena();
        let o = Observer::new(-100.0, 300.0, PI);
        let camera = Camera::default();
        for c in camera.cast(&map, &o) {
            assert_eq!(c.hit, None);
            assert_eq!(c.corrected_distance, None);
            assert_eq!(c.top, 256.0);
            assert_eq!(c.bottom, 256.0);
        }
    }
}

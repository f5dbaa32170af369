//! Shared types module - plain data and constants
//!
//! Everything here is dependency-free and usable from the core ray caster,
//! the terminal renderer and the input layer alike.
//!
//! # World Dimensions
//!
//! The default world is an 8x8 grid of 64-unit tiles:
//!
//! - **Tile size**: 64 world units per cell
//! - **Grid**: 8 columns by 8 rows (512x512 world units)
//! - **Wall height**: 64 world units
//!
//! # Camera Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PROJECTION_PLANE_WIDTH` | 512 | Plane width, one ray per unit |
//! | `PROJECTION_PLANE_HEIGHT` | 512 | Plane height |
//! | `PROJECTION_PLANE_X` | 512 | Left edge of the plane on the canvas |
//! | `FIELD_OF_VIEW` | π/3 | Total angular span of the view |
//! | `RAY_COUNT` | 512 | Columns cast per frame |
//! | `CAMERA_HEIGHT` | 32 | Eye height above the floor |
//!
//! # Examples
//!
//! ```
//! use tui_raycaster_types::{Command, Tile, RAY_COUNT, PROJECTION_PLANE_WIDTH};
//!
//! assert_eq!(Command::from_str("turnLeft"), Some(Command::TurnLeft));
//! assert!(Tile::Wall.is_wall());
//! assert_eq!(RAY_COUNT as f64, PROJECTION_PLANE_WIDTH);
//! ```

use std::f64::consts::PI;

/// World units per grid cell.
pub const TILE_SIZE: f64 = 64.0;

/// Default grid width in cells.
pub const MAP_WIDTH: usize = 8;

/// Default grid height in cells.
pub const MAP_HEIGHT: usize = 8;

/// Height of every wall in world units.
pub const WALL_HEIGHT: f64 = 64.0;

/// Gap between tiles when the grid is drawn, in world units.
pub const TILE_GAP: f64 = 2.0;

/// World units travelled per movement step.
pub const STEP_LENGTH: f64 = 10.0;

/// Radians turned per turn step.
pub const TURN_ANGLE: f64 = 0.1;

/// Projection plane width (one column per unit).
pub const PROJECTION_PLANE_WIDTH: f64 = 512.0;

/// Projection plane height.
pub const PROJECTION_PLANE_HEIGHT: f64 = 512.0;

/// Horizontal position of the projection plane on the canvas.
pub const PROJECTION_PLANE_X: f64 = 512.0;

/// Total angular span covered by one frame of rays.
pub const FIELD_OF_VIEW: f64 = PI / 3.0;

/// Rays cast per frame.
pub const RAY_COUNT: usize = 512;

/// Eye height above the floor.
pub const CAMERA_HEIGHT: f64 = 32.0;

/// Logical canvas width: grid on the left, projection on the right.
pub const CANVAS_WIDTH: f64 = 1024.0;

/// Logical canvas height.
pub const CANVAS_HEIGHT: f64 = 512.0;

/// Target interval between frames (~30 FPS).
pub const FRAME_INTERVAL_MS: u64 = 33;

/// Upper bound on commands applied in a single frame.
pub const MAX_COMMANDS_PER_FRAME: usize = 32;

/// Initial observer position and heading.
pub const START_X: f64 = 300.0;
pub const START_Y: f64 = 300.0;
pub const START_HEADING: f64 = PI;

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Wall,
    Empty,
}

impl Tile {
    pub fn is_wall(self) -> bool {
        matches!(self, Tile::Wall)
    }

    /// Parse a map glyph: `#` is a wall, `.` is empty.
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Tile::Wall),
            '.' => Some(Tile::Empty),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Empty => '.',
        }
    }
}

/// Commands produced by the input layer and consumed by the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveForward,
    MoveBackward,
    TurnLeft,
    TurnRight,
}

impl Command {
    /// Parse a command name (camelCase or snake_case, case-insensitive).
    ///
    /// ```
    /// use tui_raycaster_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveForward"), Some(Command::MoveForward));
    /// assert_eq!(Command::from_str("move_backward"), Some(Command::MoveBackward));
    /// assert_eq!(Command::from_str("jump"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "").as_str() {
            "moveforward" => Some(Command::MoveForward),
            "movebackward" => Some(Command::MoveBackward),
            "turnleft" => Some(Command::TurnLeft),
            "turnright" => Some(Command::TurnRight),
            _ => None,
        }
    }

    /// Signed step count: `(move, turn)`.
    pub fn steps(self) -> (f64, f64) {
        match self {
            Command::MoveForward => (1.0, 0.0),
            Command::MoveBackward => (-1.0, 0.0),
            Command::TurnLeft => (0.0, -1.0),
            Command::TurnRight => (0.0, 1.0),
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors are opaque to the core; it only passes these fixed values along.
pub type Color = Rgb;

/// Fixed palette used by the drawable entities.
pub mod palette {
    use super::Rgb;

    pub const BACKGROUND: Rgb = Rgb::new(0x55, 0x55, 0x55);
    pub const EMPTY_TILE: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WALL_TILE: Rgb = Rgb::new(0xfa, 0xfa, 0xfa);
    pub const RAY: Rgb = Rgb::new(0x00, 0xff, 0x00);
    /// Columns whose nearest hit is on a vertical grid line.
    pub const WALL_VERTICAL: Rgb = Rgb::new(0x00, 0xff, 0x00);
    /// Columns whose nearest hit is on a horizontal grid line.
    pub const WALL_HORIZONTAL: Rgb = Rgb::new(0x00, 0xaa, 0x11);
    pub const OBSERVER: Rgb = Rgb::new(0xff, 0x00, 0x00);
    pub const HEADING: Rgb = Rgb::new(0xee, 0xcc, 0x11);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_ray_per_plane_column() {
        assert_eq!(RAY_COUNT as f64, PROJECTION_PLANE_WIDTH);
        assert_eq!(PROJECTION_PLANE_X + PROJECTION_PLANE_WIDTH, CANVAS_WIDTH);
        assert_eq!(MAP_WIDTH as f64 * TILE_SIZE, PROJECTION_PLANE_X);
    }

    #[test]
    fn tile_glyph_round_trip() {
        for tile in [Tile::Wall, Tile::Empty] {
            assert_eq!(Tile::from_glyph(tile.glyph()), Some(tile));
        }
        assert_eq!(Tile::from_glyph('x'), None);
    }

    #[test]
    fn command_steps_are_unit() {
        assert_eq!(Command::MoveForward.steps(), (1.0, 0.0));
        assert_eq!(Command::MoveBackward.steps(), (-1.0, 0.0));
        assert_eq!(Command::TurnLeft.steps(), (0.0, -1.0));
        assert_eq!(Command::TurnRight.steps(), (0.0, 1.0));
    }

    #[test]
    fn vertical_shade_is_lighter() {
        let sum = |c: Rgb| c.r as u32 + c.g as u32 + c.b as u32;
        assert!(sum(palette::WALL_VERTICAL) > sum(palette::WALL_HORIZONTAL));
    }
}

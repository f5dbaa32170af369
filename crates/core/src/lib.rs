//! Ray casting core - pure, deterministic, and testable
//!
//! This crate holds the geometric part of the renderer: the tile grid, the
//! observer moving through it, and the camera that casts one ray per screen
//! column and projects the nearest wall. It performs no I/O; everything it
//! draws goes through the [`Renderer`] capability.
//!
//! # Module Structure
//!
//! - [`math`]: angle normalization and distances
//! - [`map`]: immutable tile grid with world-coordinate lookups
//! - [`observer`]: position, heading and the derived step vector
//! - [`camera`]: horizontal/vertical grid-line intersection, fisheye
//!   correction and wall projection
//! - [`draw`]: `Renderer` / `Drawable` capabilities and a recording renderer
//! - [`scene`]: draws one frame in order
//!
//! # Example
//!
//! ```
//! use tui_raycaster_core::{DrawList, Scene};
//! use tui_raycaster_core::types::Command;
//!
//! let mut scene = Scene::default();
//! scene.apply(Command::MoveForward);
//! scene.apply(Command::TurnRight);
//!
//! let mut frame = DrawList::new();
//! scene.render(&mut frame);
//! assert!(!frame.is_empty());
//! ```
//!
//! # Timing
//!
//! Nothing here depends on elapsed time. Movement is measured in steps, so
//! the same commands always produce the same frame regardless of frame rate.

pub mod camera;
pub mod draw;
pub mod map;
pub mod math;
pub mod observer;
pub mod scene;

pub use tui_raycaster_types as types;

pub use camera::{Axis, Camera, CameraConfig, CameraView, Column, Hit};
pub use draw::{DrawCommand, DrawList, Drawable, Renderer};
pub use map::{GridMap, MapError};
pub use observer::Observer;
pub use scene::Scene;

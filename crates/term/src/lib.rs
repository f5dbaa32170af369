//! Terminal rendering module.
//!
//! Provides the drawing surface the core renders into and the plumbing that
//! gets it onto a terminal. It avoids ratatui widgets/layout: the scene is
//! rasterized onto a small pixel [`Canvas`], composed into a character
//! [`FrameBuffer`], and flushed by [`Terminal`] as full frames or diffs.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Treat the terminal as a low-resolution pixel display
//! - Redraw only what changed between frames

pub mod canvas;
pub mod fb;
pub mod pacing;
pub mod renderer;
pub mod view;

pub use tui_raycaster_core as core;
pub use tui_raycaster_types as types;

pub use canvas::Canvas;
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use pacing::FramePacer;
pub use renderer::{changed_runs, encode_changes, encode_frame, Terminal};
pub use view::{status_line, FrameView, Viewport};

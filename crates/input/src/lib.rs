//! Terminal input module.
//!
//! Maps `crossterm` key events onto the four observer [`Command`]s and drains
//! pending terminal events once per frame.
//!
//! [`Command`]: crate::types::Command

pub mod events;
pub mod map;

pub use tui_raycaster_types as types;

pub use events::{poll_batch, InputBatch};
pub use map::{command_for_key, should_quit};

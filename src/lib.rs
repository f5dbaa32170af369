//! TUI ray caster (workspace facade crate).
//!
//! Re-exports the workspace crates under short paths so callers can write
//! `tui_raycaster::{core, input, term, types}` while the implementation lives
//! in dedicated crates under `crates/`.

pub use tui_raycaster_core as core;
pub use tui_raycaster_input as input;
pub use tui_raycaster_term as term;
pub use tui_raycaster_types as types;

//! Per-frame event draining.
//!
//! The frame loop waits for input until the next frame is due, then drains
//! whatever else is already queued without blocking. Commands are collected
//! into a fixed-capacity batch so the hot path does not allocate.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::{command_for_key, should_quit};
use crate::types::{Command, MAX_COMMANDS_PER_FRAME};

/// Everything the input layer observed during one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBatch {
    pub commands: ArrayVec<Command, MAX_COMMANDS_PER_FRAME>,
    pub quit: bool,
    pub resized: bool,
}

impl InputBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one terminal event into the batch.
    ///
    /// Returns `false` once the batch cannot take more input (quit requested
    /// or command capacity reached).
    pub fn push_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => self.push_key(key),
            Event::Resize(_, _) => {
                self.resized = true;
                true
            }
            _ => true,
        }
    }

    /// Key presses and auto-repeats become commands; releases are ignored.
    pub fn push_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return !self.is_full();
        }
        if should_quit(key) {
            self.quit = true;
            return false;
        }
        if let Some(command) = command_for_key(key) {
            // Extra commands past capacity are dropped.
            let _ = self.commands.try_push(command);
        }
        !self.is_full()
    }

    pub fn is_full(&self) -> bool {
        self.quit || self.commands.is_full()
    }
}

/// Wait up to `timeout` for input, then drain queued events without blocking.
pub fn poll_batch(timeout: Duration) -> io::Result<InputBatch> {
    let mut batch = InputBatch::new();
    if !event::poll(timeout)? {
        return Ok(batch);
    }
    loop {
        if !batch.push_event(event::read()?) {
            break;
        }
        if !event::poll(Duration::ZERO)? {
            break;
        }
    }
    Ok(batch)
}

//! Frame pacing.
//!
//! Frames are spaced at least `interval_ms` apart. The pacer only answers how
//! long to wait; the caller spends that time blocked on input.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FramePacer {
    interval_ms: u64,
    last_frame_ms: Option<u64>,
}

impl FramePacer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_frame_ms: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Record that a frame started at `now_ms`.
    pub fn mark(&mut self, now_ms: u64) {
        self.last_frame_ms = Some(now_ms);
    }

    /// Whether the next frame should be drawn at `now_ms`.
    pub fn is_due(&self, now_ms: u64) -> bool {
        match self.last_frame_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms,
        }
    }

    /// Time left until the next frame is due, `max(interval - elapsed, 0)`.
    pub fn timeout(&self, now_ms: u64) -> Duration {
        let remaining = match self.last_frame_ms {
            None => 0,
            Some(last) => self
                .interval_ms
                .saturating_sub(now_ms.saturating_sub(last)),
        };
        Duration::from_millis(remaining)
    }
}

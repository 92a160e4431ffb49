//! Rate limiting against a caller-supplied monotonic clock.
//!
//! The browser binding feeds `performance.now()`; tests feed plain numbers.

/// Allows an action at most once per `interval_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throttle {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl Throttle {
    pub const fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// True if the action has never run or `interval_ms` has elapsed since it last did.
    pub fn ready(&self, now_ms: f64) -> bool {
        match self.last_ms {
            None => true,
            Some(last) => now_ms - last >= self.interval_ms,
        }
    }

    /// Record that the action ran at `now_ms`.
    pub fn stamp(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
    }
}

// src/exec/retry.rs

//! Exponential backoff schedule for retried commands.

use std::time::Duration;

/// Backoff between failed attempts: a fixed initial delay grown by a constant
/// factor after every retry. No jitter, no cap.
///
/// The delay slept before attempt `i` (1-indexed, `i >= 2`) is
/// `initial_delay * factor^(i - 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Multiplier applied after each retry.
    pub factor: u32,
}

impl Default for RetryPolicy {
    /// 5 seconds, doubling: 5s, 10s, 20s, ...
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(5),
            factor: 2,
        }
    }
}

impl RetryPolicy {
    /// Iterator over the sleeps inserted before the 2nd, 3rd, ... attempt.
    ///
    /// The sequence is unbounded; the caller decides how many attempts to
    /// make, so the schedule itself is testable without sleeping.
    pub fn delays(&self) -> Delays {
        Delays {
            next: self.initial_delay,
            factor: self.factor,
        }
    }
}

/// See [`RetryPolicy::delays`].
#[derive(Debug, Clone)]
pub struct Delays {
    next: Duration,
    factor: u32,
}

impl Iterator for Delays {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        let current = self.next;
        self.next = current * self.factor;
        Some(current)
    }
}

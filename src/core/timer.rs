//! # Countdown Timer
//!
//! A small state machine with three states:
//!
//! ```text
//! Stopped ⇄ Running ──(remaining hits zero)──▶ TimedOut
//! ```
//!
//! `TimedOut` is terminal: no toggle, tick, or reset touches the timer again.
//! Ticks are delivered by the host loop at one-second granularity; a tick only
//! advances time while the timer is running. There is no wall-clock drift
//! compensation — if the loop stalls, time simply does not advance.

use std::time::Duration;

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct Timer {
    remaining: Duration,
    configured: Duration,
    running: bool,
    timed_out: bool,
}

impl Timer {
    /// Creates a stopped timer with the full configured duration remaining.
    ///
    /// A zero duration has nothing to count down and is born timed out,
    /// keeping `timed_out` equivalent to `remaining == 0` at all times.
    pub fn new(timeout: Duration) -> Self {
        Self {
            remaining: timeout,
            configured: timeout,
            running: false,
            timed_out: timeout.is_zero(),
        }
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// Advances the countdown by one second. Returns `true` exactly once, on
    /// the tick that drives `remaining` to zero.
    ///
    /// No-op while stopped or after timeout.
    pub fn tick(&mut self) -> bool {
        if !self.running || self.timed_out {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(TICK);
        if self.remaining.is_zero() {
            self.timed_out = true;
            return true;
        }
        false
    }

    /// Flips between Stopped and Running. No-op once timed out.
    pub fn toggle(&mut self) {
        if !self.timed_out {
            self.running = !self.running;
        }
    }

    /// Restores the full configured duration. Running state is untouched.
    /// No-op once timed out — `TimedOut` is terminal.
    pub fn reset(&mut self) {
        if !self.timed_out {
            self.remaining = self.configured;
        }
    }
}

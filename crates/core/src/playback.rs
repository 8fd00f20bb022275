//! Preview playback progress counter.
//!
//! A simulated preview loop: every 100 ms tick advances the progress bar by
//! `100 / (duration * 10)` percent. Reaching 100 wraps back to 0 and the loop
//! continues. It never stops on its own and never advances to the next slide.
//!
//! This module holds the pure counter; the timer that drives it lives with
//! the editor sessions in the API crate.

use std::time::Duration;

use serde::Serialize;

use crate::error::CoreError;
use crate::slide::validate_slide_duration;

/// Wall-clock interval between ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Ticks per second of slide duration at [`TICK_INTERVAL`].
pub const TICKS_PER_SECOND: f64 = 10.0;

/// Progress value of a completed loop.
pub const FULL_PROGRESS: f64 = 100.0;

/// Tolerance absorbing float drift when `100 / (d * 10)` is not exact.
const WRAP_EPSILON: f64 = 1e-9;

/// Outcome of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tick {
    pub progress: f64,
    /// `true` when this tick completed a loop and progress wrapped to 0.
    pub wrapped: bool,
}

/// Looping percentage counter for one slide.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressCounter {
    increment: f64,
    ticks_in_loop: u64,
    loops_completed: u64,
}

/// Per-tick increment for a slide of `duration_secs`.
pub fn increment_for(duration_secs: f64) -> Result<f64, CoreError> {
    validate_slide_duration(duration_secs)?;
    Ok(FULL_PROGRESS / (duration_secs * TICKS_PER_SECOND))
}

impl ProgressCounter {
    /// Create a counter at 0 for a slide of `duration_secs`.
    ///
    /// Fails for durations that are not positive and finite.
    pub fn new(duration_secs: f64) -> Result<Self, CoreError> {
        Ok(Self {
            increment: increment_for(duration_secs)?,
            ticks_in_loop: 0,
            loops_completed: 0,
        })
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Current progress in percent, `0.0..100.0`.
    pub fn progress(&self) -> f64 {
        (self.ticks_in_loop as f64 * self.increment).min(FULL_PROGRESS)
    }

    pub fn loops_completed(&self) -> u64 {
        self.loops_completed
    }

    /// Advance by one tick.
    pub fn tick(&mut self) -> Tick {
        self.ticks_in_loop += 1;
        let raw = self.ticks_in_loop as f64 * self.increment;
        if raw >= FULL_PROGRESS - WRAP_EPSILON {
            self.ticks_in_loop = 0;
            self.loops_completed += 1;
            Tick {
                progress: 0.0,
                wrapped: true,
            }
        } else {
            Tick {
                progress: raw,
                wrapped: false,
            }
        }
    }

    /// Back to 0 without changing the duration.
    pub fn reset(&mut self) {
        self.ticks_in_loop = 0;
        self.loops_completed = 0;
    }
}

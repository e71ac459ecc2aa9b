//! Fixed timestep accumulator
//!
//! Wall time is fed in once per rendered frame. It is converted into a whole
//! number of simulation steps of `dt`, and the leftover fraction becomes the
//! interpolation alpha for rendering. The simulation only ever sees whole steps,
//! so frame boundaries never leak into simulation state.

use serde::{Deserialize, Serialize};

/// Slack for float round-off when the backlog is exactly a whole number of steps
const STEP_EPSILON: f64 = 1e-9;

/// Steps to run for one frame, plus the render blend factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSteps {
    /// Number of fixed steps to simulate this frame
    pub steps: u32,
    /// Fraction of a step left in the accumulator, in [0, 1)
    pub alpha: f32,
    /// True if the catch-up cap discarded part of the backlog
    pub clamped: bool,
}

/// Converts wall-clock readings into fixed simulation steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedStepClock {
    dt: f64,
    accumulator: f64,
    last_reading: Option<f64>,
    /// `None` lets a stalled frame catch up without limit
    max_steps_per_frame: Option<u32>,
    total_steps: u64,
}

impl FixedStepClock {
    pub fn new(dt: f32, max_steps_per_frame: Option<u32>) -> Self {
        debug_assert!(dt > 0.0, "fixed step must be positive");
        Self {
            dt: dt as f64,
            accumulator: 0.0,
            last_reading: None,
            max_steps_per_frame,
            total_steps: 0,
        }
    }

    pub fn dt(&self) -> f32 {
        self.dt as f32
    }

    /// Total steps handed out since creation
    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    /// Feed a monotonic wall-clock reading (seconds).
    ///
    /// The first reading only establishes the baseline and yields no steps.
    pub fn advance_to(&mut self, now: f64) -> FrameSteps {
        let elapsed = match self.last_reading {
            Some(last) => (now - last).max(0.0),
            None => 0.0,
        };
        self.last_reading = Some(now);
        self.advance_by(elapsed)
    }

    /// Feed an elapsed real-time interval (seconds)
    pub fn advance_by(&mut self, elapsed: f64) -> FrameSteps {
        self.accumulator += elapsed.max(0.0);

        let mut steps = 0u32;
        let mut clamped = false;
        while self.accumulator + STEP_EPSILON >= self.dt {
            if self.max_steps_per_frame.is_some_and(|cap| steps >= cap) {
                let backlog = self.accumulator;
                self.accumulator = self.accumulator.rem_euclid(self.dt);
                log::warn!(
                    "Catch-up capped at {} steps, dropped {:.1}ms of backlog",
                    steps,
                    (backlog - self.accumulator) * 1000.0
                );
                clamped = true;
                break;
            }
            self.accumulator = (self.accumulator - self.dt).max(0.0);
            steps += 1;
        }
        self.total_steps += steps as u64;

        FrameSteps {
            steps,
            alpha: self.alpha(),
            clamped,
        }
    }

    /// Current interpolation fraction
    pub fn alpha(&self) -> f32 {
        ((self.accumulator / self.dt) as f32).clamp(0.0, 1.0 - f32::EPSILON)
    }

    /// Forget the baseline so the next reading starts fresh (after a pause)
    pub fn rebase(&mut self) {
        self.last_reading = None;
    }
}

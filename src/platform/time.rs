//! Pausable wall clock
//!
//! Time spent paused is excluded from readings, so a resumed match doesn't
//! try to catch up on the pause.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Stopwatch {
    started: Instant,
    /// Total time spent paused before the current pause (if any)
    paused_total: Duration,
    paused_at: Option<Instant>,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            paused_total: Duration::ZERO,
            paused_at: None,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    pub fn pause(&mut self) {
        if self.paused_at.is_none() {
            self.paused_at = Some(Instant::now());
            log::debug!("clock paused at {:.3}s", self.elapsed_secs());
        }
    }

    pub fn resume(&mut self) {
        if let Some(at) = self.paused_at.take() {
            self.paused_total += at.elapsed();
            log::debug!("clock resumed at {:.3}s", self.elapsed_secs());
        }
    }

    /// Running (unpaused) seconds since creation
    pub fn elapsed_secs(&self) -> f64 {
        let now = self.paused_at.unwrap_or_else(Instant::now);
        now.saturating_duration_since(self.started)
            .saturating_sub(self.paused_total)
            .as_secs_f64()
    }
}

//! Platform abstraction layer
//!
//! Host-side boundary for:
//! - Wall-clock time (with pause support)
//! - Paddle input intent

pub mod input;
pub mod time;

pub use input::PaddleInput;
pub use time::Stopwatch;

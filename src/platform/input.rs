//! Paddle input intent

use serde::{Deserialize, Serialize};

/// Up/down intent for one paddle, sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

impl PaddleInput {
    pub const IDLE: Self = Self {
        up: false,
        down: false,
    };

    /// Map a signed axis reading (keys, stick) to intent
    pub fn from_axis(axis: f32) -> Self {
        Self {
            up: axis > 0.5,
            down: axis < -0.5,
        }
    }
}

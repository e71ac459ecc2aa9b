//! Reaction-time model for autonomous paddles
//!
//! The delay is derived from table geometry: how far the ball travels
//! horizontally while the paddle covers a given vertical distance. The
//! returned value is clamped so a paddle can always still intercept a
//! fresh return, and never reacts faster than a minimum meaningful travel.
//!
//! The speed ratio divides the ball's diagonal serve speed by the reacting
//! paddle's top speed (`paddle_max_speed`), not by the ball's top speed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Inputs to the reaction-time model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactionGeometry {
    /// Paddle center x
    pub paddle_x: f32,
    /// Paddle full width/height
    pub paddle_size: Vec2,
    /// Top vertical speed of the reacting paddle
    pub paddle_max_speed: f32,
    /// Ball speed at serve
    pub ball_start_speed: f32,
    /// Table edge margin
    pub edge_margin: f32,
}

/// Baseline delay and the clamp window around it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactionBounds {
    pub baseline: f32,
    /// Largest delay that still guarantees interception across the whole table
    pub min: f32,
    /// Delay that leaves only the minimum meaningful travel
    pub max: f32,
}

impl ReactionBounds {
    pub fn width(&self) -> f32 {
        self.max - self.min
    }

    pub fn contains(&self, delay: f32) -> bool {
        delay >= self.min && delay <= self.max
    }
}

impl ReactionGeometry {
    /// Geometry for a paddle at `paddle_x` with the default table constants
    pub fn standard(paddle_x: f32) -> Self {
        Self {
            paddle_x,
            paddle_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            paddle_max_speed: PADDLE_MAX_SPEED,
            ball_start_speed: BALL_START_SPEED,
            edge_margin: EDGE_MARGIN,
        }
    }

    pub fn bounds(&self) -> ReactionBounds {
        debug_assert!(self.paddle_max_speed > 0.0, "paddle speed must be positive");
        let ball_vx = self.ball_start_speed.abs() * std::f32::consts::FRAC_1_SQRT_2;
        if ball_vx <= f32::EPSILON || self.paddle_max_speed <= f32::EPSILON {
            return ReactionBounds {
                baseline: 0.0,
                min: 0.0,
                max: 0.0,
            };
        }

        // Horizontal ball travel per unit of vertical paddle travel, for a
        // serve-speed return at 45 degrees.
        let speed_ratio = ball_vx / self.paddle_max_speed;

        let half_height = 0.5 * self.paddle_size.y;
        let centre_to_edge = 1.0 - self.edge_margin - half_height;
        let edge_to_edge = 2.0 - 2.0 * self.edge_margin - self.paddle_size.y;

        // Horizontal run from the opposing face to ours
        let run = 2.0 * self.paddle_x.abs() - self.paddle_size.x;

        let baseline = (run - speed_ratio * centre_to_edge) / ball_vx;
        let a = (run - speed_ratio * edge_to_edge) / ball_vx;
        let b = (run - MIN_REACTION_TRAVEL) / ball_vx;

        ReactionBounds {
            baseline,
            min: a.min(b).max(0.0),
            max: a.max(b).max(0.0),
        }
    }
}

/// Allowed reaction delay (seconds) for the given difficulty multiplier.
///
/// Small multipliers give tighter (harder) opponents; the result always lies
/// inside [`ReactionGeometry::bounds`].
pub fn reaction_delay(geometry: &ReactionGeometry, multiplier: f32) -> f32 {
    let bounds = geometry.bounds();
    let delay = (multiplier.max(0.0) * bounds.baseline).clamp(bounds.min, bounds.max);
    log::debug!(
        "reaction delay x={:.2} mult={:.2} -> {:.3}s [{:.3}, {:.3}]",
        geometry.paddle_x,
        multiplier,
        delay,
        bounds.min,
        bounds.max
    );
    delay
}

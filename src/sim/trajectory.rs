//! Open-loop ball trajectory prediction
//!
//! Steps a copy of the ball forward with the same `dt` and edge planes the
//! live simulation uses, so the prediction matches what will actually happen
//! as long as nothing touches the ball on the way.

use glam::Vec2;

use crate::{hits_lower_edge, hits_upper_edge};

/// Hard stop for the forward simulation (a minute of play at 60 Hz)
const MAX_PREDICTION_STEPS: u32 = 3600;

/// Predict the ball's y when it reaches the plane `|x| = face_x`.
///
/// `half_extent` is the ball's half size used for the edge test. If the ball
/// has no horizontal motion the current y is returned.
pub fn predict_intercept(pos: Vec2, vel: Vec2, half_extent: f32, face_x: f32, dt: f32) -> f32 {
    if vel.x == 0.0 || dt <= 0.0 {
        return pos.y;
    }

    let target = face_x.abs();
    let mut x = pos.x;
    let mut y = pos.y;
    let mut vy = vel.y;
    let mut steps = 0;

    while x.abs() < target {
        x += vel.x * dt;

        if hits_upper_edge(y, half_extent, vy) || hits_lower_edge(y, half_extent, vy) {
            vy = -vy;
        }
        y += vy * dt;

        steps += 1;
        if steps >= MAX_PREDICTION_STEPS {
            log::debug!("trajectory prediction gave up after {} steps", steps);
            break;
        }
    }
    y
}

//! Ball entity
//!
//! Free flight is a straight line at constant speed. Speed only changes at a
//! paddle face, where part of the paddle's vertical motion is handed to the
//! ball as long as that keeps it under its speed cap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, Contact, classify_contact};
use super::paddle::Paddle;
use super::state::{GameEvent, Side, SimContext};
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::{hits_lower_edge, hits_upper_edge};

/// Where parked balls wait between points
const PARKED_POSITION: Vec2 = Vec2::new(0.0, 2.0);

/// Serve lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum ServeState {
    #[default]
    InPlay,
    /// Off the table since `since` (sim seconds), waiting to be re-served
    Parked { since: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Position at the start of the last step (for interpolation)
    pub prev_pos: Vec2,
    pub vel: Vec2,
    /// Half extent of the (square) ball
    pub radius: f32,
    pub start_speed: f32,
    pub max_speed: f32,
    pub serve: ServeState,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            prev_pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            start_speed: BALL_START_SPEED,
            max_speed: BALL_MAX_SPEED,
            serve: ServeState::InPlay,
        }
    }

    /// Serve spot near the upper edge
    pub fn serve_position() -> Vec2 {
        Vec2::new(0.0, 1.0 - EDGE_MARGIN)
    }

    fn diagonal_speed(&self) -> f32 {
        self.start_speed * std::f32::consts::FRAC_1_SQRT_2
    }

    /// Full reset at match start: serve immediately toward the left
    pub fn reset(&mut self) {
        let component = self.diagonal_speed();
        self.place(Self::serve_position());
        self.vel = Vec2::new(-component, -component);
        self.serve = ServeState::InPlay;
    }

    /// Park the ball after a point and re-serve once `pause` seconds of sim
    /// time have passed. Called every step while the ball is off the table.
    ///
    /// Horizontal direction is kept across the re-serve. Returns true on the
    /// step the ball is served.
    pub fn soft_reset(&mut self, now: f64, pause: f64) -> bool {
        match self.serve {
            ServeState::Parked { since } if now - since >= pause => {
                self.place(Self::serve_position());
                self.vel.y = -self.diagonal_speed();
                if self.vel.x == 0.0 {
                    self.vel.x = -self.diagonal_speed();
                }
                self.serve = ServeState::InPlay;
                log::debug!("ball served, vel {:?}", self.vel);
                true
            }
            ServeState::Parked { .. } => {
                self.park();
                false
            }
            ServeState::InPlay => {
                self.serve = ServeState::Parked { since: now };
                self.park();
                false
            }
        }
    }

    fn park(&mut self) {
        self.place(PARKED_POSITION);
        self.vel.y = 0.0;
    }

    fn place(&mut self, pos: Vec2) {
        self.pos = pos;
        self.prev_pos = pos;
    }

    pub fn is_in_play(&self) -> bool {
        self.serve == ServeState::InPlay
    }

    /// Ball is outside the playable band (parked or escaping vertically)
    pub fn is_off_table(&self) -> bool {
        self.pos.y.abs() >= 1.0
    }

    pub fn speed_squared(&self) -> f32 {
        self.vel.length_squared()
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(self.radius))
    }

    /// Blend of the last two step positions (render only)
    pub fn interpolated_position(&self, alpha: f32) -> Vec2 {
        self.prev_pos.lerp(self.pos, alpha)
    }

    /// Resolve contact with one paddle, pushing the matching sound cue
    pub fn collide_with_paddle(
        &mut self,
        paddle: &Paddle,
        events: &mut Vec<GameEvent>,
    ) -> Option<Contact> {
        let paddle_box = Aabb::new(paddle.pos, paddle.half_size());
        let contact = classify_contact(&self.bounds(), self.vel, &paddle_box)?;

        match contact {
            Contact::Face => {
                self.vel.x = -self.vel.x;
                let boosted = self.vel.y + PADDLE_MOMENTUM_DAMPING * paddle.vel_y;
                if self.vel.x * self.vel.x + boosted * boosted <= self.max_speed * self.max_speed {
                    self.vel.y = boosted;
                }
            }
            Contact::Cap => {
                self.vel.y = -self.vel.y;
            }
        }

        let cue = match paddle.side {
            Side::Left => SoundEffect::PlayerHit,
            Side::Right => SoundEffect::OpponentHit,
        };
        events.push(GameEvent::Sound(cue));
        Some(contact)
    }

    /// Advance one fixed step: edges, goal line, paddles, then motion.
    ///
    /// Returns the side that scored, if the ball crossed a goal line.
    pub fn integrate(
        &mut self,
        ctx: &SimContext,
        paddles: [&Paddle; 2],
        events: &mut Vec<GameEvent>,
    ) -> Option<Side> {
        self.prev_pos = self.pos;

        if hits_upper_edge(self.pos.y, self.radius, self.vel.y) {
            self.vel.y = -self.vel.y;
            events.push(GameEvent::Sound(SoundEffect::UpperEdgeHit));
        } else if hits_lower_edge(self.pos.y, self.radius, self.vel.y) {
            self.vel.y = -self.vel.y;
            events.push(GameEvent::Sound(SoundEffect::LowerEdgeHit));
        }

        let mut scorer = None;
        if self.pos.x.abs() >= 1.0 || self.pos.y.abs() >= 1.0 || self.vel.x == 0.0 {
            if self.pos.x <= -1.0 {
                scorer = Some(Side::Right);
            } else if self.pos.x >= 1.0 {
                scorer = Some(Side::Left);
            }
            if let Some(side) = scorer {
                events.push(GameEvent::Goal { scorer: side });
            }
            self.soft_reset(ctx.now(), ctx.serve_pause);
        }

        for paddle in paddles {
            self.collide_with_paddle(paddle, events);
        }

        self.pos += self.vel * ctx.dt;
        scorer
    }
}

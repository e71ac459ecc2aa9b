//! Match state and core simulation types
//!
//! Everything the coordinator owns lives here, including the simulation
//! clock. Entities never read wall time.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::paddle::{Paddle, Personality, SkillTier};
use crate::audio::SoundEffect;
use crate::consts::*;

/// Table half a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Player side (x < 0)
    Left,
    /// Opponent side (x > 0)
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Half of the table containing `x`, `None` on the centre line
    pub fn of_x(x: f32) -> Option<Self> {
        if x < 0.0 {
            Some(Side::Left)
        } else if x > 0.0 {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn paddle_x(self) -> f32 {
        match self {
            Side::Left => LEFT_PADDLE_X,
            Side::Right => RIGHT_PADDLE_X,
        }
    }
}

/// Points per side for the current round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A sound cue to play
    Sound(SoundEffect),
    /// The ball left the table; `scorer` gets the point
    Goal { scorer: Side },
    /// A paddle ran into a table edge
    PaddleEdge { side: Side },
}

/// Simulation clock and timing parameters shared with every entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimContext {
    /// Fixed step length (seconds)
    pub dt: f32,
    /// Steps simulated so far
    pub ticks: u64,
    /// Time the ball stays parked after a goal (seconds)
    pub serve_pause: f64,
}

impl Default for SimContext {
    fn default() -> Self {
        Self {
            dt: SIM_DT,
            ticks: 0,
            serve_pause: SERVE_PAUSE_SECS,
        }
    }
}

impl SimContext {
    /// Simulation time in seconds
    pub fn now(&self) -> f64 {
        self.ticks as f64 * self.dt as f64
    }
}

/// Positions blended between the last two steps, for rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub player: Vec2,
    pub opponent: Vec2,
    /// Full paddle width/height (both paddles share it)
    pub paddle_size: Vec2,
    pub ball: Vec2,
    pub ball_radius: f32,
    pub score: Score,
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub ctx: SimContext,
    /// Left paddle
    pub player: Paddle,
    /// Right paddle
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Events raised since the last drain. Hosts drain once per frame;
    /// nothing else bounds this buffer.
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Human on the left against an autonomous opponent on the right
    pub fn new(personality: Personality, skill: SkillTier, reaction_multiplier: f32) -> Self {
        Self::with_paddles(
            Paddle::human(Side::Left),
            Paddle::autonomous(Side::Right, personality, skill, reaction_multiplier),
        )
    }

    pub fn with_paddles(player: Paddle, opponent: Paddle) -> Self {
        let mut ball = Ball::new();
        ball.reset();
        Self {
            ctx: SimContext::default(),
            player,
            opponent,
            ball,
            score: Score::default(),
            events: Vec::new(),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.player,
            Side::Right => &self.opponent,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.player,
            Side::Right => &mut self.opponent,
        }
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Render view for blend factor `alpha` in [0, 1)
    pub fn snapshot(&self, alpha: f32) -> Snapshot {
        Snapshot {
            player: self.player.interpolated_position(alpha),
            opponent: self.opponent.interpolated_position(alpha),
            paddle_size: self.player.size,
            ball: self.ball.interpolated_position(alpha),
            ball_radius: self.ball.radius,
            score: self.score,
        }
    }
}

//! Duel Pong - a two-paddle table game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (clock, paddles, ball, opponent AI, scoring)
//! - `platform`: Host clock and input boundary
//! - `audio`: Sound cue boundary
//! - `settings`: Runtime configuration
//! - `flow`: Tournament / endless match progression

pub mod audio;
pub mod flow;
pub mod platform;
pub mod settings;
pub mod sim;

pub use audio::{AudioSink, SoundEffect};
pub use flow::{MatchFlow, MatchMode};
pub use settings::Settings;

/// Game configuration constants
///
/// The table is a normalized space: x and y both span [-1, 1].
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Distance from the table edge to the plane where things reflect.
    /// Shared by every entity that performs edge collision.
    pub const EDGE_MARGIN: f32 = 0.1;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 0.05;
    pub const PADDLE_HEIGHT: f32 = 4.5 * PADDLE_WIDTH;
    pub const PADDLE_MAX_SPEED: f32 = 2.0;
    pub const LEFT_PADDLE_X: f32 = -0.8;
    pub const RIGHT_PADDLE_X: f32 = 0.8;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.02;
    pub const BALL_START_SPEED: f32 = 1.0;
    pub const BALL_MAX_SPEED: f32 = 3.0 * BALL_START_SPEED;

    /// Fraction of paddle velocity handed to the ball on a face hit
    pub const PADDLE_MOMENTUM_DAMPING: f32 = 0.5;
    /// The ball sinks this far into a paddle before a contact registers
    pub const CONTACT_SINK: f32 = 0.01;

    /// Real time the ball stays parked after a point before re-serving
    pub const SERVE_PAUSE_SECS: f64 = 0.5;
    /// Reaction delay an opponent gets while waiting to return the next serve
    pub const LOSER_RETURN_DELAY_SECS: f32 = 0.5;
    /// Smallest vertical travel that still counts as a real reaction
    pub const MIN_REACTION_TRAVEL: f32 = 0.2;
}

/// Upper reflection plane for an object of the given half height
#[inline]
pub fn hits_upper_edge(y: f32, half_height: f32, vy: f32) -> bool {
    y + half_height >= 1.0 - consts::EDGE_MARGIN && vy > 0.0
}

/// Lower reflection plane for an object of the given half height
#[inline]
pub fn hits_lower_edge(y: f32, half_height: f32, vy: f32) -> bool {
    y - half_height <= -1.0 + consts::EDGE_MARGIN && vy < 0.0
}

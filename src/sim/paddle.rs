//! Paddle entity and the autonomous opponent's decision engine
//!
//! A paddle is either driven by the player's up/down intent or by a `Brain`.
//! The brain's behaviour depends on two independent knobs:
//! - `Personality` picks the qualitative style (idle and closing behaviour),
//!   looked up from a small strategy table (`Temperament`).
//! - `SkillTier` picks whether the paddle predicts the intercept or chases
//!   the ball's current height.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::reaction::{ReactionGeometry, reaction_delay};
use super::state::Side;
use super::trajectory::predict_intercept;
use crate::consts::*;
use crate::platform::PaddleInput;
use crate::{hits_lower_edge, hits_upper_edge};

/// Behavioural archetype of an autonomous paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Personality {
    #[default]
    Calm,
    Aggressive,
    Strategic,
}

impl Personality {
    pub const ALL: [Personality; 3] = [Self::Calm, Self::Aggressive, Self::Strategic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Personality::Calm => "Calm",
            Personality::Aggressive => "Aggressive",
            Personality::Strategic => "Strategic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "calm" => Some(Personality::Calm),
            "aggressive" => Some(Personality::Aggressive),
            "strategic" => Some(Personality::Strategic),
            _ => None,
        }
    }

    /// Strategy table entry for this personality
    pub const fn temperament(self) -> Temperament {
        match self {
            Personality::Calm => Temperament {
                idle: IdleStyle::Hold,
                closing: ClosingStyle::Decelerate,
            },
            Personality::Aggressive => Temperament {
                idle: IdleStyle::Wiggle,
                closing: ClosingStyle::Accelerate,
            },
            Personality::Strategic => Temperament {
                idle: IdleStyle::Centre,
                closing: ClosingStyle::SpeedDependent,
            },
        }
    }
}

/// Whether the paddle predicts the ball or merely follows it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SkillTier {
    /// Chases the ball's current height
    #[default]
    Dumb,
    /// Forward-simulates the ball to its intercept point
    Smart,
}

/// What a paddle does when it is not chasing the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleStyle {
    /// Stand still
    Hold,
    /// Oscillate around the centre
    Wiggle,
    /// Drift slowly back to the centre
    Centre,
}

/// What a paddle does when the ball is right at its face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosingStyle {
    /// Move against the ball's vertical direction to take speed off it
    Decelerate,
    /// Move with the ball's vertical direction to add speed
    Accelerate,
    /// Decelerate fast balls, accelerate slow ones
    SpeedDependent,
}

/// Personality-specific behaviour, as data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Temperament {
    pub idle: IdleStyle,
    pub closing: ClosingStyle,
}

/// Oscillation parameters, relative to the paddle's max speed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wiggle {
    pub speed_factor: f32,
    pub amplitude: f32,
}

/// Wiggle used between points (ball off the table)
pub const WIGGLE_BETWEEN_POINTS: Wiggle = Wiggle {
    speed_factor: 4.0,
    amplitude: 0.2,
};

/// Wiggle used while waiting during play
pub const WIGGLE_IN_PLAY: Wiggle = Wiggle {
    speed_factor: 1.0,
    amplitude: 0.5,
};

/// Fraction of max speed used when drifting to the centre
const CENTRE_DRIFT_FACTOR: f32 = 0.2;
/// Close enough to the centre to stop drifting
const CENTRE_TOLERANCE: f32 = 0.001;
/// Stop chasing once the target is within this fraction of paddle height
const PURSUIT_TOLERANCE_FACTOR: f32 = 0.3;
/// Horizontal gap between ball and paddle face inside which the paddle
/// switches from chasing to its closing move
const PURSUIT_WINDOW: f32 = 0.01;

/// Decision phase of an autonomous paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum AiPhase {
    /// Ball is between points or moving away
    #[default]
    Idle,
    /// Ball is incoming; hesitating until the reaction delay runs out
    Tracking { since: f64 },
    /// Reaction delay elapsed; chasing the target height
    Pursuing,
}

/// Decision state owned by an autonomous paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brain {
    pub personality: Personality,
    pub skill: SkillTier,
    pub phase: AiPhase,
    /// Difficulty multiplier the current delay was computed from
    pub reaction_multiplier: f32,
    /// Allowed decision latency (seconds)
    pub reaction_delay: f32,
    /// Cached intercept height (smart) or last chased height (dumb)
    pub target_y: f32,
}

impl Brain {
    pub fn new(personality: Personality, skill: SkillTier) -> Self {
        Self {
            personality,
            skill,
            phase: AiPhase::Idle,
            reaction_multiplier: 1.0,
            reaction_delay: 0.0,
            target_y: 0.0,
        }
    }
}

/// Who moves the paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Control {
    Human,
    Autonomous(Brain),
}

/// A paddle on one side of the table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    /// Position at the start of the last step (for interpolation)
    pub prev_pos: Vec2,
    pub vel_y: f32,
    /// Full width/height
    pub size: Vec2,
    pub max_speed: f32,
    pub control: Control,
    /// This paddle's side conceded the last exchange
    pub lost_last_exchange: bool,
    /// Pressed against an edge on the last step
    pub at_edge: bool,
}

impl Paddle {
    fn new(side: Side, control: Control) -> Self {
        let pos = Vec2::new(side.paddle_x(), 0.0);
        Self {
            side,
            pos,
            prev_pos: pos,
            vel_y: 0.0,
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            max_speed: PADDLE_MAX_SPEED,
            control,
            lost_last_exchange: false,
            at_edge: false,
        }
    }

    pub fn human(side: Side) -> Self {
        Self::new(side, Control::Human)
    }

    /// Autonomous paddle with its reaction delay computed from `multiplier`
    pub fn autonomous(
        side: Side,
        personality: Personality,
        skill: SkillTier,
        multiplier: f32,
    ) -> Self {
        let mut paddle = Self::new(side, Control::Autonomous(Brain::new(personality, skill)));
        paddle.compute_reaction_delay(multiplier);
        paddle
    }

    pub fn is_human(&self) -> bool {
        matches!(self.control, Control::Human)
    }

    pub fn brain(&self) -> Option<&Brain> {
        match &self.control {
            Control::Autonomous(brain) => Some(brain),
            Control::Human => None,
        }
    }

    pub fn half_size(&self) -> Vec2 {
        self.size * 0.5
    }

    /// Change the personality, keeping the rest of the decision state
    pub fn set_personality(&mut self, personality: Personality) {
        if let Control::Autonomous(brain) = &mut self.control {
            brain.personality = personality;
        }
    }

    pub fn set_skill(&mut self, skill: SkillTier) {
        if let Control::Autonomous(brain) = &mut self.control {
            brain.skill = skill;
        }
    }

    /// Back to table centre for a new round
    pub fn reset_position(&mut self) {
        self.pos.y = 0.0;
        self.prev_pos = self.pos;
        self.vel_y = 0.0;
        self.at_edge = false;
        if let Control::Autonomous(brain) = &mut self.control {
            brain.phase = AiPhase::Idle;
        }
    }

    /// Human control: full speed up, full speed down, or stop
    pub fn set_velocity_from_input(&mut self, input: PaddleInput) {
        self.vel_y = if input.up {
            self.max_speed
        } else if input.down {
            -self.max_speed
        } else {
            0.0
        };
    }

    /// Advance one fixed step.
    ///
    /// Returns the table half the paddle occupies on every step it pushes
    /// into an edge (its velocity is zeroed). The caller records that as a
    /// lost exchange. `at_edge` holds the contact for the next step, so a
    /// held contact can be told apart from a fresh one.
    pub fn integrate(&mut self, dt: f32) -> Option<Side> {
        self.prev_pos = self.pos;

        let half_height = 0.5 * self.size.y;
        self.at_edge = hits_upper_edge(self.pos.y, half_height, self.vel_y)
            || hits_lower_edge(self.pos.y, half_height, self.vel_y);
        let mut edge_half = None;
        if self.at_edge {
            self.vel_y = 0.0;
            edge_half = Side::of_x(self.pos.x);
        }

        self.pos.y += self.vel_y * dt;
        edge_half
    }

    /// Blend of the last two step positions (render only)
    pub fn interpolated_position(&self, alpha: f32) -> Vec2 {
        self.prev_pos.lerp(self.pos, alpha)
    }

    /// Recompute (and store, if autonomous) the allowed reaction delay
    pub fn compute_reaction_delay(&mut self, multiplier: f32) -> f32 {
        let geometry = ReactionGeometry {
            paddle_x: self.pos.x,
            paddle_size: self.size,
            paddle_max_speed: self.max_speed,
            ball_start_speed: BALL_START_SPEED,
            edge_margin: EDGE_MARGIN,
        };
        let delay = reaction_delay(&geometry, multiplier);
        if let Control::Autonomous(brain) = &mut self.control {
            brain.reaction_multiplier = multiplier;
            brain.reaction_delay = delay;
        }
        delay
    }

    /// Run the decision engine for one step (no-op for human paddles).
    ///
    /// `now` is simulation time in seconds, `dt` the fixed step used for
    /// trajectory prediction.
    pub fn decide(&mut self, ball: &Ball, now: f64, dt: f32) {
        let y = self.pos.y;
        let x = self.pos.x;
        let max_speed = self.max_speed;
        let size = self.size;
        let lost = self.lost_last_exchange;

        let Control::Autonomous(brain) = &mut self.control else {
            return;
        };
        let temperament = brain.personality.temperament();

        // Between points: the ball is parked off the table
        if ball.is_off_table() {
            if lost {
                brain.reaction_delay = LOSER_RETURN_DELAY_SECS;
            }
            brain.phase = AiPhase::Idle;
            self.vel_y = idle_velocity(temperament.idle, WIGGLE_BETWEEN_POINTS, y, max_speed, now);
            return;
        }

        let approaching =
            (ball.pos.x < x && ball.vel.x > 0.0) || (ball.pos.x > x && ball.vel.x < 0.0);

        if !approaching {
            if brain.phase != AiPhase::Idle {
                log::debug!("{:?} paddle: ball receding, back to idle", self.side);
            }
            brain.phase = AiPhase::Idle;
            if lost {
                let geometry = ReactionGeometry {
                    paddle_x: x,
                    paddle_size: size,
                    paddle_max_speed: max_speed,
                    ball_start_speed: BALL_START_SPEED,
                    edge_margin: EDGE_MARGIN,
                };
                brain.reaction_delay = reaction_delay(&geometry, brain.reaction_multiplier);
                self.lost_last_exchange = false;
            }
            self.vel_y = idle_velocity(temperament.idle, WIGGLE_IN_PLAY, y, max_speed, now);
            return;
        }

        if brain.phase == AiPhase::Idle {
            if brain.skill == SkillTier::Smart {
                let face_x = x.abs() - 0.5 * size.x;
                brain.target_y = predict_intercept(ball.pos, ball.vel, ball.radius, face_x, dt);
            }
            brain.phase = AiPhase::Tracking { since: now };
            log::debug!(
                "{:?} paddle: tracking, delay {:.3}s, target {:.3}",
                self.side,
                brain.reaction_delay,
                brain.target_y
            );
        }

        if let AiPhase::Tracking { since } = brain.phase
            && now - since >= brain.reaction_delay as f64
        {
            brain.phase = AiPhase::Pursuing;
            log::debug!("{:?} paddle: pursuing", self.side);
        }

        self.vel_y = match brain.phase {
            AiPhase::Pursuing => {
                if (x - ball.pos.x).abs() > PURSUIT_WINDOW + 0.5 * size.x {
                    if brain.skill == SkillTier::Dumb {
                        brain.target_y = ball.pos.y;
                    }
                    chase_velocity(y, brain.target_y, size.y, max_speed)
                } else {
                    closing_velocity(temperament.closing, ball, max_speed)
                }
            }
            _ => idle_velocity(temperament.idle, WIGGLE_IN_PLAY, y, max_speed, now),
        };
    }
}

/// Velocity that moves toward the centre, or `None` once there
fn centre_velocity(y: f32, speed: f32, tolerance: f32) -> Option<f32> {
    if y < -tolerance {
        Some(speed)
    } else if y > tolerance {
        Some(-speed)
    } else {
        None
    }
}

fn idle_velocity(style: IdleStyle, wiggle: Wiggle, y: f32, max_speed: f32, now: f64) -> f32 {
    match style {
        IdleStyle::Hold => 0.0,
        IdleStyle::Centre => {
            let speed = CENTRE_DRIFT_FACTOR * max_speed;
            centre_velocity(y, speed, CENTRE_TOLERANCE).unwrap_or(0.0)
        }
        IdleStyle::Wiggle => {
            // Get back near the centre at full speed first, then oscillate
            let amplitude = wiggle.amplitude;
            let omega = wiggle.speed_factor * max_speed / amplitude;
            let wave = -amplitude * omega * (omega as f64 * now).sin() as f32;
            centre_velocity(y, max_speed, amplitude + 0.1).unwrap_or(wave)
        }
    }
}

fn chase_velocity(y: f32, target_y: f32, height: f32, max_speed: f32) -> f32 {
    let tolerance = PURSUIT_TOLERANCE_FACTOR * height;
    if y + tolerance < target_y {
        max_speed
    } else if y - tolerance > target_y {
        -max_speed
    } else {
        0.0
    }
}

/// Vertical velocity for the last moment before contact.
///
/// `SpeedDependent` compares the magnitude `|vy|` with the midpoint of the
/// ball's speed range, so fast balls are slowed whichever way they travel.
fn closing_velocity(style: ClosingStyle, ball: &Ball, max_speed: f32) -> f32 {
    let sign = if ball.vel.y == 0.0 {
        0.0
    } else {
        ball.vel.y.signum()
    };
    let decelerate = -sign * max_speed;
    let accelerate = sign * max_speed;
    match style {
        ClosingStyle::Decelerate => decelerate,
        ClosingStyle::Accelerate => accelerate,
        ClosingStyle::SpeedDependent => {
            let midpoint = 0.5 * (ball.start_speed + ball.max_speed);
            if ball.vel.y.abs() > midpoint {
                decelerate
            } else {
                accelerate
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opponent(personality: Personality, skill: SkillTier) -> Paddle {
        Paddle::autonomous(Side::Right, personality, skill, 1.0)
    }

    fn ball(pos: Vec2, vel: Vec2) -> Ball {
        let mut ball = Ball::new();
        ball.pos = pos;
        ball.prev_pos = pos;
        ball.vel = vel;
        ball
    }

    fn phase(paddle: &Paddle) -> AiPhase {
        paddle.brain().map(|b| b.phase).unwrap_or_default()
    }

    #[test]
    fn test_input_sets_full_speed() {
        let mut paddle = Paddle::human(Side::Left);
        paddle.set_velocity_from_input(PaddleInput {
            up: true,
            down: false,
        });
        assert_eq!(paddle.vel_y, PADDLE_MAX_SPEED);
        paddle.set_velocity_from_input(PaddleInput {
            up: false,
            down: true,
        });
        assert_eq!(paddle.vel_y, -PADDLE_MAX_SPEED);
        paddle.set_velocity_from_input(PaddleInput::default());
        assert_eq!(paddle.vel_y, 0.0);
    }

    #[test]
    fn test_integrate_moves_and_records_previous() {
        let mut paddle = Paddle::human(Side::Left);
        paddle.vel_y = 1.0;
        assert_eq!(paddle.integrate(0.1), None);
        assert!((paddle.pos.y - 0.1).abs() < 1e-6);
        assert_eq!(paddle.prev_pos.y, 0.0);
    }

    #[test]
    fn test_upper_edge_stops_and_reports_right_half() {
        let mut paddle = Paddle::human(Side::Right);
        paddle.pos.y = 0.95;
        paddle.vel_y = 1.0;
        assert_eq!(paddle.integrate(SIM_DT), Some(Side::Right));
        assert_eq!(paddle.vel_y, 0.0);
        assert_eq!(paddle.pos.y, 0.95);
    }

    #[test]
    fn test_lower_edge_stops_and_reports_left_half() {
        let mut paddle = Paddle::human(Side::Left);
        paddle.pos.y = -0.95;
        paddle.vel_y = -1.0;
        assert_eq!(paddle.integrate(SIM_DT), Some(Side::Left));
        assert_eq!(paddle.vel_y, 0.0);
    }

    #[test]
    fn test_edge_contact_is_held_until_released() {
        let mut paddle = Paddle::human(Side::Left);
        paddle.pos.y = 0.95;
        paddle.vel_y = 1.0;
        paddle.integrate(SIM_DT);
        assert!(paddle.at_edge);

        paddle.vel_y = 0.0;
        assert_eq!(paddle.integrate(SIM_DT), None);
        assert!(!paddle.at_edge);
    }

    #[test]
    fn test_edge_releases_when_moving_inward() {
        let mut paddle = Paddle::human(Side::Left);
        paddle.pos.y = 0.95;
        paddle.vel_y = -1.0;
        assert_eq!(paddle.integrate(SIM_DT), None);
        assert!(paddle.pos.y < 0.95);
    }

    #[test]
    fn test_interpolated_position() {
        let mut paddle = Paddle::human(Side::Left);
        paddle.vel_y = 1.0;
        paddle.integrate(0.1);
        let mid = paddle.interpolated_position(0.5);
        assert!((mid.y - 0.05).abs() < 1e-6);
        assert_eq!(paddle.interpolated_position(0.0), paddle.prev_pos);
        assert_eq!(paddle.interpolated_position(1.0), paddle.pos);
    }

    #[test]
    fn test_temperament_table() {
        assert_eq!(Personality::Calm.temperament().idle, IdleStyle::Hold);
        assert_eq!(
            Personality::Aggressive.temperament().idle,
            IdleStyle::Wiggle
        );
        assert_eq!(Personality::Strategic.temperament().idle, IdleStyle::Centre);
        assert_eq!(
            Personality::Strategic.temperament().closing,
            ClosingStyle::SpeedDependent
        );
    }

    #[test]
    fn test_personality_round_trip_names() {
        for p in Personality::ALL {
            assert_eq!(Personality::from_str(p.as_str()), Some(p));
        }
        assert_eq!(Personality::from_str("sleepy"), None);
    }

    #[test]
    fn test_human_ignores_decide() {
        let mut paddle = Paddle::human(Side::Left);
        paddle.vel_y = 1.5;
        paddle.decide(&ball(Vec2::ZERO, Vec2::new(-1.0, 0.0)), 3.0, SIM_DT);
        assert_eq!(paddle.vel_y, 1.5);
    }

    #[test]
    fn test_off_table_idle_styles() {
        let parked = ball(Vec2::new(0.0, 2.0), Vec2::new(1.0, 0.0));

        let mut calm = opponent(Personality::Calm, SkillTier::Dumb);
        calm.vel_y = 1.0;
        calm.decide(&parked, 0.0, SIM_DT);
        assert_eq!(calm.vel_y, 0.0);

        let mut strategic = opponent(Personality::Strategic, SkillTier::Dumb);
        strategic.pos.y = 0.5;
        strategic.decide(&parked, 0.0, SIM_DT);
        assert!((strategic.vel_y + 0.2 * PADDLE_MAX_SPEED).abs() < 1e-6);

        // Aggressive far from centre rushes back at full speed
        let mut aggressive = opponent(Personality::Aggressive, SkillTier::Dumb);
        aggressive.pos.y = 0.6;
        aggressive.decide(&parked, 0.0, SIM_DT);
        assert_eq!(aggressive.vel_y, -PADDLE_MAX_SPEED);

        // ...and oscillates once near it
        aggressive.pos.y = 0.0;
        aggressive.decide(&parked, 0.05, SIM_DT);
        assert!(aggressive.vel_y != 0.0);
        assert!(aggressive.vel_y.abs() <= 0.2 * (4.0 * PADDLE_MAX_SPEED / 0.2) + 1e-4);
    }

    #[test]
    fn test_loser_gets_short_delay_between_points() {
        let mut paddle = opponent(Personality::Calm, SkillTier::Dumb);
        paddle.lost_last_exchange = true;
        paddle.decide(&ball(Vec2::new(0.0, 2.0), Vec2::new(1.0, 0.0)), 0.0, SIM_DT);
        assert_eq!(
            paddle.brain().unwrap().reaction_delay,
            LOSER_RETURN_DELAY_SECS
        );
        assert!(paddle.lost_last_exchange, "flag is only cleared once the ball recedes");
    }

    #[test]
    fn test_receding_restores_delay_and_clears_flag() {
        let mut paddle = opponent(Personality::Calm, SkillTier::Dumb);
        let normal = paddle.brain().unwrap().reaction_delay;
        paddle.lost_last_exchange = true;
        paddle.decide(&ball(Vec2::new(0.0, 2.0), Vec2::new(1.0, 0.0)), 0.0, SIM_DT);

        let receding = ball(Vec2::new(0.0, 0.0), Vec2::new(-1.0, 0.0));
        paddle.decide(&receding, 0.1, SIM_DT);
        assert!(!paddle.lost_last_exchange);
        assert_eq!(paddle.brain().unwrap().reaction_delay, normal);
        assert_eq!(phase(&paddle), AiPhase::Idle);
    }

    #[test]
    fn test_tracking_hesitates_then_pursues() {
        let mut paddle = opponent(Personality::Calm, SkillTier::Dumb);
        let delay = paddle.brain().unwrap().reaction_delay as f64;
        let incoming = ball(Vec2::new(0.0, 0.6), Vec2::new(0.7, 0.0));

        paddle.decide(&incoming, 10.0, SIM_DT);
        assert_eq!(phase(&paddle), AiPhase::Tracking { since: 10.0 });
        assert_eq!(paddle.vel_y, 0.0, "calm paddle hesitates in place");

        paddle.decide(&incoming, 10.0 + delay * 0.5, SIM_DT);
        assert!(matches!(phase(&paddle), AiPhase::Tracking { .. }));

        paddle.decide(&incoming, 10.0 + delay + 1e-3, SIM_DT);
        assert_eq!(phase(&paddle), AiPhase::Pursuing);
        assert_eq!(paddle.vel_y, PADDLE_MAX_SPEED);
    }

    #[test]
    fn test_smart_predicts_intercept_on_latch() {
        let mut paddle = opponent(Personality::Calm, SkillTier::Smart);
        let pos = Vec2::new(0.0, 0.0);
        let vel = Vec2::new(0.7, 0.7);
        paddle.decide(&ball(pos, vel), 1.0, SIM_DT);
        let face_x = RIGHT_PADDLE_X - 0.5 * PADDLE_WIDTH;
        let expected = predict_intercept(pos, vel, BALL_RADIUS, face_x, SIM_DT);
        assert_eq!(paddle.brain().unwrap().target_y, expected);
    }

    #[test]
    fn test_dumb_chases_current_height() {
        let mut paddle = opponent(Personality::Calm, SkillTier::Dumb);
        paddle.compute_reaction_delay(0.0);
        let incoming = ball(Vec2::new(0.0, -0.5), Vec2::new(0.7, 0.3));
        paddle.decide(&incoming, 0.0, SIM_DT);
        paddle.decide(&incoming, 100.0, SIM_DT);
        assert_eq!(paddle.brain().unwrap().target_y, -0.5);
        assert_eq!(paddle.vel_y, -PADDLE_MAX_SPEED);
    }

    #[test]
    fn test_chase_stops_within_tolerance() {
        assert_eq!(chase_velocity(0.0, 0.05, PADDLE_HEIGHT, 2.0), 0.0);
        assert_eq!(chase_velocity(0.0, 0.5, PADDLE_HEIGHT, 2.0), 2.0);
        assert_eq!(chase_velocity(0.0, -0.5, PADDLE_HEIGHT, 2.0), -2.0);
    }

    #[test]
    fn test_closing_styles() {
        let b = ball(Vec2::new(RIGHT_PADDLE_X, 0.0), Vec2::new(0.7, 0.5));
        assert_eq!(closing_velocity(ClosingStyle::Decelerate, &b, 2.0), -2.0);
        assert_eq!(closing_velocity(ClosingStyle::Accelerate, &b, 2.0), 2.0);
        // Slow ball: strategic adds speed
        assert_eq!(closing_velocity(ClosingStyle::SpeedDependent, &b, 2.0), 2.0);

        let fast = ball(Vec2::new(RIGHT_PADDLE_X, 0.0), Vec2::new(0.7, -2.5));
        assert_eq!(
            closing_velocity(ClosingStyle::SpeedDependent, &fast, 2.0),
            2.0
        );
        assert_eq!(closing_velocity(ClosingStyle::Decelerate, &fast, 2.0), 2.0);

        let flat = ball(Vec2::new(RIGHT_PADDLE_X, 0.0), Vec2::new(0.7, 0.0));
        assert_eq!(closing_velocity(ClosingStyle::Accelerate, &flat, 2.0), 0.0);
    }

    #[test]
    fn test_pursuit_switches_to_closing_at_the_face() {
        let mut paddle = opponent(Personality::Aggressive, SkillTier::Dumb);
        paddle.compute_reaction_delay(0.0);
        let at_face = ball(Vec2::new(RIGHT_PADDLE_X - 0.02, 0.0), Vec2::new(0.7, -0.4));
        paddle.decide(&at_face, 0.0, SIM_DT);
        paddle.decide(&at_face, 50.0, SIM_DT);
        assert_eq!(phase(&paddle), AiPhase::Pursuing);
        assert_eq!(paddle.vel_y, -PADDLE_MAX_SPEED);
    }

    #[test]
    fn test_reset_position_returns_to_idle() {
        let mut paddle = opponent(Personality::Calm, SkillTier::Dumb);
        paddle.pos.y = 0.4;
        paddle.decide(&ball(Vec2::ZERO, Vec2::new(1.0, 0.0)), 0.0, SIM_DT);
        paddle.reset_position();
        assert_eq!(paddle.pos.y, 0.0);
        assert_eq!(paddle.prev_pos.y, 0.0);
        assert_eq!(phase(&paddle), AiPhase::Idle);
    }
}

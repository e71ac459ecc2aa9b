//! Deterministic simulation module
//!
//! All match logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Time comes from the tick counter, never the wall clock
//! - Fixed paddle order (player, then opponent)
//! - No rendering or platform dependencies

pub mod ball;
pub mod clock;
pub mod collision;
pub mod paddle;
pub mod reaction;
pub mod scoring;
pub mod state;
pub mod tick;
pub mod trajectory;

pub use ball::{Ball, ServeState};
pub use clock::{FixedStepClock, FrameSteps};
pub use collision::{Aabb, Contact, ContactSides, classify_contact};
pub use paddle::{AiPhase, Brain, Control, Paddle, Personality, SkillTier};
pub use reaction::{ReactionBounds, ReactionGeometry, reaction_delay};
pub use state::{GameEvent, GameState, Score, Side, SimContext, Snapshot};
pub use tick::{TickInput, run_frame, tick};
pub use trajectory::predict_intercept;

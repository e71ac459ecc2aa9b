//! Match progression policy
//!
//! Reads the score after each frame and decides whether a round is over.
//! Tournament: three rounds against Calm, Aggressive, then Strategic
//! opponents; a lost round is replayed from 0-0. Endless: one opponent,
//! never ends.

use crate::sim::{GameState, Personality, SkillTier};

/// Opponent order in a tournament
pub const TOURNAMENT_ROUNDS: [Personality; 3] = [
    Personality::Calm,
    Personality::Aggressive,
    Personality::Strategic,
];

/// Endless-mode slider at its midpoint maps to this multiplier spread
const SLIDER_SPREAD: f32 = 1.23;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchMode {
    Tournament {
        skill: SkillTier,
        points_to_win: u32,
    },
    Endless {
        personality: Personality,
        skill: SkillTier,
        reaction_multiplier: f32,
    },
}

/// Result of checking the score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Keep playing
    Continue,
    /// Player took the round; `next_round` has been set up
    RoundWon { next_round: usize },
    /// Opponent took the round; it has been restarted
    RoundLost { round: usize },
    /// Player won the final round
    TournamentWon,
}

/// Reaction multiplier a tournament opponent plays with
pub fn tournament_multiplier(skill: SkillTier) -> f32 {
    match skill {
        SkillTier::Dumb => 1.0,
        SkillTier::Smart => 0.9,
    }
}

/// Map an endless-mode difficulty slider position in [0, 1] to a multiplier
pub fn slider_to_multiplier(position: f32) -> f32 {
    let p = position.clamp(0.0, 1.0);
    2.0 * (SLIDER_SPREAD - 1.0) * p + 2.0 - SLIDER_SPREAD
}

#[derive(Debug, Clone)]
pub struct MatchFlow {
    mode: MatchMode,
    round: usize,
    finished: bool,
}

impl MatchFlow {
    pub fn new(mode: MatchMode) -> Self {
        Self {
            mode,
            round: 0,
            finished: false,
        }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Current tournament round (0-based; always 0 in endless)
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Personality, skill and reaction multiplier for the current round
    pub fn opponent(&self) -> (Personality, SkillTier, f32) {
        match self.mode {
            MatchMode::Tournament { skill, .. } => {
                let idx = self.round.min(TOURNAMENT_ROUNDS.len() - 1);
                (TOURNAMENT_ROUNDS[idx], skill, tournament_multiplier(skill))
            }
            MatchMode::Endless {
                personality,
                skill,
                reaction_multiplier,
            } => (personality, skill, reaction_multiplier),
        }
    }

    /// Fresh match state for the current round
    pub fn new_state(&self) -> GameState {
        let (personality, skill, multiplier) = self.opponent();
        GameState::new(personality, skill, multiplier)
    }

    /// Set `state` up for the current round: opponent, positions, score, serve
    pub fn start_round(&self, state: &mut GameState) {
        let (personality, skill, multiplier) = self.opponent();
        state.opponent.set_personality(personality);
        state.opponent.set_skill(skill);
        state.opponent.compute_reaction_delay(multiplier);

        for paddle in [&mut state.player, &mut state.opponent] {
            paddle.reset_position();
            paddle.lost_last_exchange = false;
        }
        state.score.reset();
        state.ball.reset();
        log::info!(
            "Round {} vs {} ({:?}, x{:.2})",
            self.round + 1,
            personality.as_str(),
            skill,
            multiplier
        );
    }

    /// Check the score and advance the match if a round ended
    pub fn evaluate(&mut self, state: &mut GameState) -> FlowOutcome {
        let points_to_win = match self.mode {
            MatchMode::Endless { .. } => return FlowOutcome::Continue,
            MatchMode::Tournament { points_to_win, .. } => points_to_win.max(1),
        };
        if self.finished {
            return FlowOutcome::TournamentWon;
        }

        if state.score.left >= points_to_win {
            self.round += 1;
            if self.round >= TOURNAMENT_ROUNDS.len() {
                self.finished = true;
                log::info!("Tournament won");
                return FlowOutcome::TournamentWon;
            }
            log::info!("Round won");
            self.start_round(state);
            FlowOutcome::RoundWon {
                next_round: self.round,
            }
        } else if state.score.right >= points_to_win {
            log::info!("Round lost, replaying");
            self.start_round(state);
            FlowOutcome::RoundLost { round: self.round }
        } else {
            FlowOutcome::Continue
        }
    }
}

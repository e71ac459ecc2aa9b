//! Point and exchange bookkeeping
//!
//! The ball only reports who scored; the coordinator turns that into score
//! and the "lost last exchange" flags the autonomous paddles read.

use super::state::{GameState, Side};

/// Credit `scorer` with a point and mark the conceding side
pub fn award_point(state: &mut GameState, scorer: Side) {
    state.score.increment(scorer);
    state.paddle_mut(scorer).lost_last_exchange = false;
    state.paddle_mut(scorer.opposite()).lost_last_exchange = true;
    log::info!(
        "{:?} scores ({} - {})",
        scorer,
        state.score.left,
        state.score.right
    );
}

/// A paddle on `loser`'s half ran into a table edge
pub fn record_exchange_loss(state: &mut GameState, loser: Side) {
    state.paddle_mut(loser).lost_last_exchange = true;
    state.paddle_mut(loser.opposite()).lost_last_exchange = false;
    log::debug!("{:?} paddle hit the table edge", loser);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::paddle::{Personality, SkillTier};

    fn setup() -> GameState {
        GameState::new(Personality::Calm, SkillTier::Dumb, 1.0)
    }

    #[test]
    fn test_left_scores() {
        let mut state = setup();
        award_point(&mut state, Side::Left);
        assert_eq!(state.score.left, 1, "Left should score");
        assert_eq!(state.score.right, 0);
        assert!(state.opponent.lost_last_exchange);
        assert!(!state.player.lost_last_exchange);
    }

    #[test]
    fn test_right_scores_clears_previous_loss() {
        let mut state = setup();
        state.opponent.lost_last_exchange = true;
        award_point(&mut state, Side::Right);
        assert_eq!(state.score.right, 1);
        assert!(!state.opponent.lost_last_exchange);
        assert!(state.player.lost_last_exchange);
    }

    #[test]
    fn test_points_accumulate() {
        let mut state = setup();
        for _ in 0..3 {
            award_point(&mut state, Side::Left);
        }
        award_point(&mut state, Side::Right);
        assert_eq!(state.score.left, 3);
        assert_eq!(state.score.right, 1);
    }

    #[test]
    fn test_exchange_loss_does_not_score() {
        let mut state = setup();
        record_exchange_loss(&mut state, Side::Right);
        assert!(state.opponent.lost_last_exchange);
        assert!(!state.player.lost_last_exchange);
        assert_eq!(state.score.left + state.score.right, 0);
    }
}

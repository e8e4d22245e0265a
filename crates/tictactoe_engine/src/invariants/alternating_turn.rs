//! Alternating turn invariant: players alternate within a round.

use super::Invariant;
use crate::types::GameState;

/// Invariant: Players alternate turns.
///
/// Consecutive history entries belong to different players. While the round
/// is in progress the player to move is the opponent of the last mover; once
/// it is over the last mover stays current.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        match history.last() {
            None => true,
            Some(last) if state.status().is_terminal() => state.current_player() == last.player,
            Some(last) => state.current_player() == last.player.opponent(),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}

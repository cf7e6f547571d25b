//! Structural consistency checking.
//!
//! A collaborator reconciling a remote `GameState` (network sync, storage
//! restore) runs it through [`validate_game_state`] before adopting it. The
//! checks are the structural invariants of the data model; they do not replay
//! the move log.

use crate::core::{GameState, GameStatus, PlayerId, TokenId, TOKENS_PER_PLAYER};

use super::machine::MAX_CONSECUTIVE_SIXES;

/// Whether a state of unknown provenance is structurally well-formed.
///
/// Checks:
/// - 2-4 players with distinct colors, ids matching list order
/// - four tokens per player, correctly owned and identified
/// - current player index in range
/// - `consecutive_sixes <= 3`
/// - no two same-color tokens on one square (home and terminal excepted)
/// - winner, when set, actually has four finished tokens and the game is
///   `Finished`; a `Finished` state without a winner is a cancelled game
/// - no pending die outside `Playing`/`Paused`
#[must_use]
pub fn validate_game_state(state: &GameState) -> bool {
    if !(2..=4).contains(&state.player_count()) {
        return false;
    }

    for (i, player) in state.players.iter().enumerate() {
        if player.id != PlayerId::new(i as u8) {
            return false;
        }
        if state.players[..i].iter().any(|p| p.color == player.color) {
            return false;
        }
        if player.tokens.len() != TOKENS_PER_PLAYER as usize {
            return false;
        }
        for (j, token) in player.tokens.iter().enumerate() {
            if token.color != player.color || token.id != TokenId::new(player.color, j as u8) {
                return false;
            }
            if token.home_slot >= TOKENS_PER_PLAYER {
                return false;
            }
        }
        // Two tokens of one color can share home (distinct slots) or the
        // terminal square, but never any square in between.
        for (j, a) in player.tokens.iter().enumerate() {
            for b in &player.tokens[j + 1..] {
                if a.distance == b.distance && !a.distance.is_home() && !a.distance.is_terminal() {
                    return false;
                }
                if a.distance.is_home() && b.distance.is_home() && a.home_slot == b.home_slot {
                    return false;
                }
            }
        }
    }

    if state.current_player.index() >= state.player_count() {
        return false;
    }

    if state.consecutive_sixes > MAX_CONSECUTIVE_SIXES {
        return false;
    }

    match state.winner {
        Some(winner) => {
            if winner.index() >= state.player_count() {
                return false;
            }
            if !state.player(winner).has_won() {
                return false;
            }
            if state.status != GameStatus::Finished {
                return false;
            }
        }
        None => {
            // Without a declared winner nobody may have four finished tokens.
            if state.players.iter().any(|p| p.has_won()) {
                return false;
            }
        }
    }

    // A pending die only makes sense mid-play (a pause preserves it).
    if state.dice.is_some()
        && !matches!(state.status, GameStatus::Playing | GameStatus::Paused)
    {
        return false;
    }

    true
}

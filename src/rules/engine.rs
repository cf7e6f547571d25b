//! Move legality and capture detection.
//!
//! `legal_check` is the single source of truth for whether a token may move:
//! the turn machine re-validates through it before mutating anything, and the
//! AI only ever picks from `legal_moves_for` output.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::topology;
use crate::core::{Dice, Distance, GameState, PlayerId, Token, TokenId};

use super::scoring::{classify, MoveKind};

/// Why a move is illegal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum IllegalReason {
    /// Leaving the home yard requires a six.
    #[error("leaving home requires a six")]
    WrongDiceForHomeExit,
    /// The roll would carry the token past the terminal square.
    #[error("move overshoots the terminal square")]
    Overshoot,
    /// The destination holds a token of the same color.
    #[error("destination blocked by a same-color token")]
    BlockedBySameColor,
    /// The token already reached the terminal square.
    #[error("token has already finished")]
    TokenAlreadyFinished,
}

/// A validated legal move, ready to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalMove {
    /// Where the token ends up.
    pub destination: Distance,

    /// Classification of the move (drives scoring and AI heuristics).
    pub kind: MoveKind,

    /// Opposing token on the destination square that would be sent home.
    pub captured: Option<TokenId>,
}

/// Outcome of a legality check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveCheck {
    Illegal(IllegalReason),
    Legal(LegalMove),
}

impl MoveCheck {
    /// Whether the move may be applied.
    #[must_use]
    pub const fn is_legal(&self) -> bool {
        matches!(self, MoveCheck::Legal(_))
    }

    /// The legal move, if any.
    #[must_use]
    pub fn legal(self) -> Option<LegalMove> {
        match self {
            MoveCheck::Legal(mv) => Some(mv),
            MoveCheck::Illegal(_) => None,
        }
    }
}

/// Check whether `token` may move by `dice` in `state`.
///
/// The dice range is guaranteed by the `Dice` type; ownership and turn order
/// are the turn machine's checks. This function answers the board question
/// only: can this token take these steps, and does anything get captured.
#[must_use]
pub fn legal_check(state: &GameState, token: &Token, dice: Dice) -> MoveCheck {
    if token.distance.is_terminal() {
        return MoveCheck::Illegal(IllegalReason::TokenAlreadyFinished);
    }

    let destination = match topology::advance(token.distance, dice) {
        Some(d) => d,
        None if token.distance.is_home() => {
            return MoveCheck::Illegal(IllegalReason::WrongDiceForHomeExit)
        }
        None => return MoveCheck::Illegal(IllegalReason::Overshoot),
    };

    // Same-color occupancy blocks everywhere except the terminal square,
    // which holds any number of finished tokens. Same color means same entry
    // offset, so equal distances are equal squares.
    if !destination.is_terminal() {
        let blocked = state
            .tokens()
            .any(|t| t.color == token.color && t.id != token.id && t.distance == destination);
        if blocked {
            return MoveCheck::Illegal(IllegalReason::BlockedBySameColor);
        }
    }

    // Captures only happen on non-safe shared-ring squares. The first
    // opposing occupant in player order is the candidate; legal play never
    // stacks more than one there.
    let mut captured = None;
    if let Some(absolute) = topology::to_absolute_ring(token.color, destination) {
        if !topology::is_safe_ring_square(absolute) {
            captured = state
                .tokens()
                .find(|t| {
                    t.color != token.color
                        && topology::to_absolute_ring(t.color, t.distance) == Some(absolute)
                })
                .map(|t| t.id);
        }
    }

    MoveCheck::Legal(LegalMove {
        destination,
        kind: classify(token.distance, destination),
        captured,
    })
}

/// All legal moves for a player with the given roll.
///
/// An empty map means "no legal move": the caller must hand the turn over via
/// `turn::skip_turn`.
#[must_use]
pub fn legal_moves_for(
    state: &GameState,
    player: PlayerId,
    dice: Dice,
) -> FxHashMap<TokenId, LegalMove> {
    state
        .player(player)
        .tokens
        .iter()
        .filter_map(|token| legal_check(state, token, dice).legal().map(|mv| (token.id, mv)))
        .collect()
}

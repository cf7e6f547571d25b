//! Opponent threat analysis.
//!
//! Used by the Hard and Expert tiers to avoid parking a token where an
//! opponent can land next turn.

use crate::board::topology;
use crate::core::{Color, Dice, Distance, GameState};

/// How threatened a destination square is for `mover`.
///
/// Sums, over every opposing token that could reach the square next turn,
/// `1/d` for each die value `d` that gets it there: a token one step away
/// contributes `1`, a token six steps away `1/6`. Home tokens threaten their
/// entry square via a six; lane and finished tokens threaten nothing. Off-ring
/// destinations (home, lane, terminal) are unreachable by opponents and score
/// `0`.
#[must_use]
pub fn threat_level(state: &GameState, mover: Color, destination: Distance) -> f64 {
    let target = match topology::to_absolute_ring(mover, destination) {
        Some(absolute) => absolute,
        None => return 0.0,
    };

    let mut threat = 0.0;
    for token in state.tokens() {
        if token.color == mover {
            continue;
        }
        for dice in Dice::all() {
            let reaches = if token.distance.is_home() {
                dice.is_six() && topology::entry_offset(token.color) == target
            } else if token.distance.is_on_ring() {
                topology::advance(token.distance, dice)
                    .and_then(|next| topology::to_absolute_ring(token.color, next))
                    == Some(target)
            } else {
                false
            };
            if reaches {
                threat += 1.0 / f64::from(dice.get());
            }
        }
    }
    threat
}

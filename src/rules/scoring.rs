//! Move classification and point values.
//!
//! Points feed two consumers: player score accounting in `turn::machine` and
//! the heuristic terms in `ai`. Values are fixed rule constants, not runtime
//! configuration.

use serde::{Deserialize, Serialize};

use crate::core::Distance;

/// What a move does, derived from its endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Plain advance along ring or lane.
    Advance,
    /// Leaving the home yard onto the entry square (requires a six).
    HomeExit,
    /// Crossing from the shared ring into the private finish lane.
    LaneEntry,
    /// Reaching the terminal center square.
    Finish,
}

/// Points for a plain advance. Home exit scores the same.
pub const ADVANCE_POINTS: u32 = 1;
/// Points for entering the finish lane.
pub const LANE_ENTRY_POINTS: u32 = 10;
/// Points for bringing a token to the terminal square.
pub const FINISH_POINTS: u32 = 25;
/// Points for a move that sends an opposing token home.
pub const CAPTURE_POINTS: u32 = 20;

/// Classify a move by its endpoints.
#[must_use]
pub fn classify(from: Distance, to: Distance) -> MoveKind {
    if to.is_terminal() {
        MoveKind::Finish
    } else if from.is_home() {
        MoveKind::HomeExit
    } else if from.is_on_ring() && to.is_in_lane() {
        MoveKind::LaneEntry
    } else {
        MoveKind::Advance
    }
}

/// Points awarded for a move.
///
/// A capturing move scores exactly the capture value. No overlap is lost:
/// captures only happen on non-safe ring squares, so a capturing move is
/// always otherwise a plain advance (entry squares are safe, lanes and the
/// terminal are private).
#[must_use]
pub fn score_for_move(kind: MoveKind, captured: bool) -> u32 {
    if captured {
        return CAPTURE_POINTS;
    }
    match kind {
        MoveKind::Advance | MoveKind::HomeExit => ADVANCE_POINTS,
        MoveKind::LaneEntry => LANE_ENTRY_POINTS,
        MoveKind::Finish => FINISH_POINTS,
    }
}

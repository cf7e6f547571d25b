//! Rules engine: move legality, capture detection, scoring.
//!
//! Built directly on `board::topology`. The turn machine and the AI both
//! consume this module and never re-derive legality themselves.

pub mod engine;
pub mod scoring;

pub use engine::{legal_check, legal_moves_for, IllegalReason, LegalMove, MoveCheck};
pub use scoring::{
    classify, score_for_move, MoveKind, ADVANCE_POINTS, CAPTURE_POINTS, FINISH_POINTS,
    LANE_ENTRY_POINTS,
};

//! Turn state machine: lifecycle transitions, dice application, win logic.
//!
//! Top-level lifecycle: `Waiting -> Playing <-> Paused`, `Playing -> Finished`
//! (terminal). Inside `Playing` the per-turn phase is carried by the data:
//! `dice == None` awaits a roll, `dice == Some(_)` awaits a move or a skip.

pub mod machine;
pub mod validate;

pub use machine::{
    apply_move, cancel, pause, resume, roll_dice, skip_turn, start, MoveError, MoveResult, Roll,
    TurnContinuation, MAX_CONSECUTIVE_SIXES,
};
pub use validate::validate_game_state;

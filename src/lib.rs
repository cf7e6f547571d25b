//! # ludo-core
//!
//! Deterministic rules and AI core for a four-color race-board game.
//!
//! ## Design Principles
//!
//! 1. **Pure state machine**: every operation takes an immutable `GameState`
//!    plus small scalar arguments and returns a new value. Nothing mutates in
//!    place, so states are trivially diffable, loggable, and replayable by
//!    collaborators (network sync, persistence, undo).
//!
//! 2. **Rules as values**: illegal moves come back as `MoveError`/`MoveCheck`
//!    values, never panics. Panics are reserved for collaborator protocol
//!    violations.
//!
//! 3. **Injected randomness**: dice and AI tie-breaking draw from an explicit
//!    `GameRng` threaded through `roll_dice`/`decide`. Same seed, same game.
//!
//! 4. **Coordinate-free board**: the authoritative model is the per-color
//!    `Distance` (-1 home, 0..=50 ring, 51..=56 lane, 57 terminal). Pixel and
//!    grid geometry belong to presentation collaborators.
//!
//! ## Modules
//!
//! - `core`: colors, dice, distances, tokens, players, game state, RNG
//! - `board`: path algebra for the 52-square ring and private finish lanes
//! - `rules`: move legality, capture detection, scoring
//! - `turn`: turn lifecycle, win detection, state validation
//! - `ai`: tiered move selection (Easy/Medium/Hard/Expert)
//!
//! ## Driving a game
//!
//! ```
//! use ludo_core::core::{Color, Difficulty, GameBuilder, GameRng};
//! use ludo_core::turn::{apply_move, roll_dice, skip_turn, start};
//! use ludo_core::ai::{decide, Decision};
//!
//! let state = GameBuilder::new()
//!     .human("Ada", Color::Red)
//!     .ai("Bot", Color::Blue, Difficulty::Medium)
//!     .build();
//! let state = start(&state).unwrap();
//!
//! let mut rng = GameRng::new(42);
//! let roll = roll_dice(&state, &mut rng).unwrap();
//!
//! let state = match decide(&roll.state, roll.state.current_player, roll.dice,
//!                          Difficulty::Medium, &mut rng) {
//!     Decision::Move(token) => {
//!         apply_move(&roll.state, token, roll.dice.get()).unwrap().state
//!     }
//!     Decision::Skip => skip_turn(&roll.state).unwrap(),
//! };
//! assert!(ludo_core::turn::validate_game_state(&state));
//! ```

pub mod ai;
pub mod board;
pub mod core;
pub mod rules;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    Color, Dice, DiceOutOfRange, Difficulty, Distance, GameBuilder, GameRng, GameRngState,
    GameState, GameStatus, MoveRecord, Player, PlayerId, PlayerKind, Token, TokenId, TokenState,
    TOKENS_PER_PLAYER,
};

pub use crate::board::{
    advance, entry_offset, is_safe_ring_square, to_absolute_ring, ENTRY_SPACING, RING_LEN,
    SAFE_SQUARES,
};

pub use crate::rules::{
    legal_check, legal_moves_for, score_for_move, IllegalReason, LegalMove, MoveCheck, MoveKind,
};

pub use crate::turn::{
    apply_move, cancel, pause, resume, roll_dice, skip_turn, start, validate_game_state, MoveError,
    MoveResult, Roll, TurnContinuation, MAX_CONSECUTIVE_SIXES,
};

pub use crate::ai::{decide, threat_level, Decision, EASY_CAPTURE_BIAS};

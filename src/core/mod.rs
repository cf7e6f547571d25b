//! Core value types: colors, dice, distances, tokens, players, game state, RNG.
//!
//! Everything here is plain serializable data. Behavior lives in `board`
//! (path algebra), `rules` (legality), `turn` (lifecycle), and `ai`.

pub mod color;
pub mod dice;
pub mod distance;
pub mod player;
pub mod rng;
pub mod state;
pub mod token;

pub use color::Color;
pub use dice::{Dice, DiceOutOfRange};
pub use distance::Distance;
pub use player::{Difficulty, Player, PlayerId, PlayerKind};
pub use rng::{GameRng, GameRngState};
pub use state::{GameBuilder, GameState, GameStatus, MoveRecord};
pub use token::{Token, TokenId, TokenState, TOKENS_PER_PLAYER};

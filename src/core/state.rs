//! Whole-game state and the move log.
//!
//! `GameState` is a plain value: every mutating operation in `turn::machine`
//! clones it, edits the clone, and returns it. Collaborators (network sync,
//! persistence, undo) only ever read or replace whole states, which makes
//! replay, rollback, and speculative application trivial. The move log uses
//! `im::Vector` so those clones stay cheap as games grow long.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::dice::Dice;
use super::distance::Distance;
use super::player::{Player, PlayerId, PlayerKind};
use super::token::{Token, TokenId};

/// Top-level game lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Created, not yet started.
    Waiting,
    /// In progress.
    Playing,
    /// Temporarily suspended; all mutating calls reject.
    Paused,
    /// Over. A winner is set when won, absent when cancelled.
    Finished,
}

/// One applied move, as appended to the log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who moved.
    pub player: PlayerId,

    /// Which token.
    pub token: TokenId,

    /// The die it consumed.
    pub dice: Dice,

    /// Coordinate before the move.
    pub from: Distance,

    /// Coordinate after the move.
    pub to: Distance,

    /// Opposing token sent home, if any.
    pub captured: Option<TokenId>,

    /// Turn counter when the move was applied.
    pub turn: u32,
}

/// Complete game state.
///
/// Fields are public: the engine hands out whole values and collaborators are
/// expected to replace, not patch, them. `turn::validate_game_state` checks a
/// state of unknown provenance before it is adopted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Seated players in turn order (2-4).
    pub players: Vec<Player>,

    /// Whose turn it is.
    pub current_player: PlayerId,

    /// Last rolled die; `None` means the current player must roll.
    pub dice: Option<Dice>,

    /// Lifecycle status.
    pub status: GameStatus,

    /// Turn counter, starts at 1, advances on turn handoff.
    pub turn_number: u32,

    /// Sixes rolled in a row by the current player, `0..=3`.
    pub consecutive_sixes: u8,

    /// Set exactly once, when a player gets all four tokens to the terminal.
    pub winner: Option<PlayerId>,

    /// Append-only move log.
    pub moves: Vector<MoveRecord>,
}

impl GameState {
    /// Create a fresh `Waiting` state from a seated player list.
    ///
    /// Panics when the roster is malformed (wrong count, duplicate colors,
    /// ids out of order) - roster construction is the caller's contract,
    /// normally discharged via [`GameBuilder`].
    #[must_use]
    pub fn new(players: Vec<Player>) -> Self {
        assert!(
            (2..=4).contains(&players.len()),
            "a game seats 2-4 players"
        );
        for (i, player) in players.iter().enumerate() {
            assert!(
                player.id == PlayerId::new(i as u8),
                "player ids must match list order"
            );
            assert!(
                players[..i].iter().all(|p| p.color != player.color),
                "each player races a distinct color"
            );
        }

        Self {
            players,
            current_player: PlayerId::new(0),
            dice: None,
            status: GameStatus::Waiting,
            turn_number: 1,
            consecutive_sixes: 0,
            winner: None,
            moves: Vector::new(),
        }
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Look up a player. Panics on an out-of-range id (caller contract).
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        self.player(self.current_player)
    }

    /// The player racing a color, if seated.
    #[must_use]
    pub fn player_by_color(&self, color: Color) -> Option<&Player> {
        self.players.iter().find(|p| p.color == color)
    }

    /// Look up a token anywhere on the board.
    ///
    /// Returns `None` when no seated player owns the token.
    #[must_use]
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.players.iter().find_map(|p| p.token(id))
    }

    pub(crate) fn token_mut(&mut self, id: TokenId) -> Option<&mut Token> {
        self.players.iter_mut().find_map(|p| p.token_mut(id))
    }

    /// Iterate over every token in player order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.players.iter().flat_map(|p| p.tokens.iter())
    }
}

/// Roster builder, the one place game setup is validated.
///
/// ```
/// use ludo_core::core::{Color, Difficulty, GameBuilder, GameStatus};
///
/// let state = GameBuilder::new()
///     .human("Ada", Color::Red)
///     .ai("Bot", Color::Yellow, Difficulty::Expert)
///     .build();
///
/// assert_eq!(state.status, GameStatus::Waiting);
/// assert_eq!(state.player_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct GameBuilder {
    seats: Vec<(String, Color, PlayerKind)>,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a human player.
    #[must_use]
    pub fn human(mut self, name: impl Into<String>, color: Color) -> Self {
        self.seats.push((name.into(), color, PlayerKind::Human));
        self
    }

    /// Seat an AI player at the given tier.
    #[must_use]
    pub fn ai(
        mut self,
        name: impl Into<String>,
        color: Color,
        difficulty: super::player::Difficulty,
    ) -> Self {
        self.seats
            .push((name.into(), color, PlayerKind::Ai(difficulty)));
        self
    }

    /// Build the initial `Waiting` state.
    ///
    /// Panics unless 2-4 seats with distinct colors were added.
    #[must_use]
    pub fn build(self) -> GameState {
        let players = self
            .seats
            .into_iter()
            .enumerate()
            .map(|(i, (name, color, kind))| {
                Player::new(PlayerId::new(i as u8), name, color, kind)
            })
            .collect();
        GameState::new(players)
    }
}

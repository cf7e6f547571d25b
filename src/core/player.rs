//! Players: identity, kind, and per-player tokens.
//!
//! `PlayerId` is a 0-based index into the game's ordered player list, which
//! also defines turn order. Display metadata (name) and lobby flags
//! (ready/connected) are carried for collaborators but never read by rules.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::token::{Token, TokenId, TOKENS_PER_PLAYER};

/// Player identifier: 0-based position in the ordered player list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// The raw 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// AI strength tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

/// Whether a seat is controlled by a human or the AI decision engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Ai(Difficulty),
}

impl PlayerKind {
    /// Whether this seat is AI-controlled.
    #[must_use]
    pub const fn is_ai(self) -> bool {
        matches!(self, PlayerKind::Ai(_))
    }

    /// The AI tier, if this seat is AI-controlled.
    #[must_use]
    pub const fn difficulty(self) -> Option<Difficulty> {
        match self {
            PlayerKind::Ai(tier) => Some(tier),
            PlayerKind::Human => None,
        }
    }
}

/// One seated player with exactly four tokens of their color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Position in the ordered player list.
    pub id: PlayerId,

    /// Display name. Opaque to the core.
    pub name: String,

    /// The color this player races.
    pub color: Color,

    /// Human or AI seat.
    pub kind: PlayerKind,

    /// The player's four tokens, in token-index order.
    pub tokens: [Token; 4],

    /// Accumulated move points.
    pub score: u32,

    /// Lobby flag, collaborator concern.
    pub ready: bool,

    /// Connection flag, collaborator concern.
    pub connected: bool,
}

impl Player {
    /// Create a player with all four tokens parked at home.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, color: Color, kind: PlayerKind) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            kind,
            tokens: std::array::from_fn(|i| Token::new(color, i as u8)),
            score: 0,
            ready: false,
            connected: true,
        }
    }

    /// Look up one of this player's tokens by ID.
    ///
    /// Matches on the stored ID rather than decoding it, so an arbitrary
    /// caller-supplied ID resolves to `None` instead of a panic.
    #[must_use]
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.iter().find(|t| t.id == id)
    }

    pub(crate) fn token_mut(&mut self, id: TokenId) -> Option<&mut Token> {
        self.tokens.iter_mut().find(|t| t.id == id)
    }

    /// Whether all four tokens have reached the terminal square.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.tokens.iter().all(|t| t.distance.is_terminal())
    }

    /// First home-yard slot not occupied by an at-home token.
    ///
    /// Where a freshly captured token parks. Callers invoke this *before*
    /// resetting the victim, so the victim's old slot may be reused.
    #[must_use]
    pub fn free_home_slot(&self) -> u8 {
        (0..TOKENS_PER_PLAYER)
            .find(|slot| {
                !self
                    .tokens
                    .iter()
                    .any(|t| t.distance.is_home() && t.home_slot == *slot)
            })
            .expect("at most 3 tokens can be at home when a capture lands")
    }
}

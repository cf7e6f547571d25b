//! Tokens and token identity.
//!
//! ## TokenId
//!
//! Packed identifier: `color_index * 4 + token_index`. The owning color is
//! recoverable from the ID alone, which keeps capture bookkeeping free of
//! lookups.
//!
//! ## Token
//!
//! A token stores only its path coordinate plus presentation extras (home-yard
//! slot, bounded trail). Its lifecycle state is *derived* from the coordinate,
//! never stored, so the two cannot drift apart.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::topology;
use super::color::Color;
use super::distance::Distance;

/// Tokens per player.
pub const TOKENS_PER_PLAYER: u8 = 4;

/// Most recent positions kept in a token's trail.
const TRAIL_LEN: usize = 8;

/// Unique token identifier, packed as `color_index * 4 + token_index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId(pub u8);

impl TokenId {
    /// Create a token ID for a color's nth token.
    #[must_use]
    pub fn new(color: Color, index: u8) -> Self {
        assert!(index < TOKENS_PER_PLAYER, "token index must be 0..4");
        Self(color.index() as u8 * TOKENS_PER_PLAYER + index)
    }

    /// The owning color.
    #[must_use]
    pub fn color(self) -> Color {
        Color::from_index((self.0 / TOKENS_PER_PLAYER) as usize)
            .expect("token id encodes a valid color")
    }

    /// The token's index within its color (0..4).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0 % TOKENS_PER_PLAYER
    }

    /// All four token IDs of a color, in index order.
    pub fn all_for(color: Color) -> impl Iterator<Item = TokenId> {
        (0..TOKENS_PER_PLAYER).map(move |i| TokenId::new(color, i))
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.color(), self.index())
    }
}

/// Lifecycle state derived from a token's position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenState {
    /// In the home yard, not yet entered.
    AtHome,
    /// On the shared ring, capturable.
    Active,
    /// On a safe ring square or in the finish lane.
    Safe,
    /// At the terminal center square.
    Finished,
}

/// A single race token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Packed identity.
    pub id: TokenId,

    /// Owning color.
    pub color: Color,

    /// Path coordinate, `-1..=57`.
    pub distance: Distance,

    /// Home-yard parking slot (0..4). Meaningful while at home; kept so a
    /// captured token lands in a deterministic free slot.
    pub home_slot: u8,

    /// Recent positions, newest last. UI trail data only; never read by rules.
    trail: SmallVec<[Distance; TRAIL_LEN]>,
}

impl Token {
    /// Create a token parked in its home yard.
    #[must_use]
    pub fn new(color: Color, index: u8) -> Self {
        Self {
            id: TokenId::new(color, index),
            color,
            distance: Distance::HOME,
            home_slot: index,
            trail: SmallVec::new(),
        }
    }

    /// Derive the lifecycle state from the current position.
    #[must_use]
    pub fn state(&self) -> TokenState {
        if self.distance.is_home() {
            return TokenState::AtHome;
        }
        if self.distance.is_terminal() {
            return TokenState::Finished;
        }
        if self.distance.is_in_lane() {
            return TokenState::Safe;
        }
        match topology::to_absolute_ring(self.color, self.distance) {
            Some(absolute) if topology::is_safe_ring_square(absolute) => TokenState::Safe,
            _ => TokenState::Active,
        }
    }

    /// Recent positions, oldest first.
    #[must_use]
    pub fn trail(&self) -> &[Distance] {
        &self.trail
    }

    /// Move the token to a new coordinate, recording it in the trail.
    pub(crate) fn move_to(&mut self, destination: Distance) {
        self.distance = destination;
        if self.trail.len() == TRAIL_LEN {
            self.trail.remove(0);
        }
        self.trail.push(destination);
    }

    /// Send the token back to its home yard after a capture.
    ///
    /// The trail is cleared; a captured token does not animate back along it.
    pub(crate) fn send_home(&mut self, slot: u8) {
        debug_assert!(slot < TOKENS_PER_PLAYER);
        self.distance = Distance::HOME;
        self.home_slot = slot;
        self.trail.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dice;

    #[test]
    fn test_token_id_packing() {
        let id = TokenId::new(Color::Yellow, 2);
        assert_eq!(id.0, 10);
        assert_eq!(id.color(), Color::Yellow);
        assert_eq!(id.index(), 2);
    }

    #[test]
    fn test_token_id_all_for() {
        let ids: Vec<TokenId> = TokenId::all_for(Color::Blue).collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(ids[0], TokenId::new(Color::Blue, 0));
        assert_eq!(ids[3], TokenId::new(Color::Blue, 3));
    }

    #[test]
    fn test_token_id_display() {
        assert_eq!(format!("{}", TokenId::new(Color::Red, 1)), "Red#1");
    }

    #[test]
    fn test_new_token_is_home() {
        let token = Token::new(Color::Green, 3);
        assert_eq!(token.distance, Distance::HOME);
        assert_eq!(token.home_slot, 3);
        assert_eq!(token.state(), TokenState::AtHome);
    }

    #[test]
    fn test_state_active_on_plain_ring_square() {
        let mut token = Token::new(Color::Red, 0);
        token.move_to(Distance::new(12).unwrap());
        assert_eq!(token.state(), TokenState::Active);
    }

    #[test]
    fn test_state_safe_on_entry_square() {
        let mut token = Token::new(Color::Red, 0);
        token.move_to(Distance::ENTRY);
        assert_eq!(token.state(), TokenState::Safe);
    }

    #[test]
    fn test_state_safe_in_lane() {
        let mut token = Token::new(Color::Blue, 0);
        token.move_to(Distance::new(54).unwrap());
        assert_eq!(token.state(), TokenState::Safe);
    }

    #[test]
    fn test_state_finished_only_at_terminal() {
        let mut token = Token::new(Color::Blue, 0);
        token.move_to(Distance::new(56).unwrap());
        assert_ne!(token.state(), TokenState::Finished);
        token.move_to(Distance::TERMINAL);
        assert_eq!(token.state(), TokenState::Finished);
    }

    #[test]
    fn test_trail_is_bounded() {
        let mut token = Token::new(Color::Red, 0);
        token.move_to(Distance::ENTRY);
        let one = Dice::new(1).unwrap();
        for _ in 0..20 {
            let next = crate::board::advance(token.distance, one).unwrap();
            token.move_to(next);
        }
        assert_eq!(token.trail().len(), TRAIL_LEN);
        // Newest entry is the current position.
        assert_eq!(*token.trail().last().unwrap(), token.distance);
    }

    #[test]
    fn test_send_home_clears_trail() {
        let mut token = Token::new(Color::Red, 2);
        token.move_to(Distance::new(10).unwrap());
        token.send_home(0);

        assert_eq!(token.distance, Distance::HOME);
        assert_eq!(token.home_slot, 0);
        assert!(token.trail().is_empty());
        assert_eq!(token.state(), TokenState::AtHome);
    }

    #[test]
    fn test_serialization() {
        let mut token = Token::new(Color::Green, 1);
        token.move_to(Distance::new(7).unwrap());

        let json = serde_json::to_string(&token).unwrap();
        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token);
    }
}

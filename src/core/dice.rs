//! Validated die values.
//!
//! A `Dice` can only hold `1..=6`, including after deserialization: serde
//! round-trips through `u8` with validation, so a remote or stored state can
//! never smuggle an out-of-range roll into the engine.

use serde::{Deserialize, Serialize};

/// A rolled die value in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Dice(u8);

/// Raised when a raw value outside `1..=6` is converted to a `Dice`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("dice value {0} outside 1..=6")]
pub struct DiceOutOfRange(pub u8);

impl Dice {
    /// Create a die value, returning `None` outside `1..=6`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Dice> {
        if value >= 1 && value <= 6 {
            Some(Dice(value))
        } else {
            None
        }
    }

    /// The raw pip count.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Whether this roll grants home exit and a bonus turn.
    #[must_use]
    pub const fn is_six(self) -> bool {
        self.0 == 6
    }

    /// All six die faces, ascending.
    pub fn all() -> impl Iterator<Item = Dice> {
        (1..=6).map(Dice)
    }
}

impl TryFrom<u8> for Dice {
    type Error = DiceOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Dice::new(value).ok_or(DiceOutOfRange(value))
    }
}

impl From<Dice> for u8 {
    fn from(dice: Dice) -> u8 {
        dice.0
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

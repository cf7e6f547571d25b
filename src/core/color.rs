//! The four token colors.
//!
//! Colors are ordered: declaration order defines turn order and each color's
//! ring entry offset (see `board::topology`). All per-color math in the crate
//! goes through `Color::index` so nothing else hardcodes the ordering.

use serde::{Deserialize, Serialize};

/// One of the four fixed token colors, in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    /// All colors in turn order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Yellow, Color::Blue];

    /// Position of this color in turn order (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a color by its turn-order position.
    ///
    /// Returns `None` for indices outside `0..4`.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Color> {
        match index {
            0 => Some(Color::Red),
            1 => Some(Color::Green),
            2 => Some(Color::Yellow),
            3 => Some(Color::Blue),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Blue => "Blue",
        };
        write!(f, "{}", name)
    }
}

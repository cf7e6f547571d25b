//! Per-color path coordinate.
//!
//! A `Distance` tracks how far a token has traveled along *its own color's*
//! path:
//!
//! - `-1`: home yard, not yet entered
//! - `0..=50`: the 51 shared-ring squares relative to the color's entry
//! - `51..=56`: the 6 private finish-lane squares
//! - `57`: terminal center, finished
//!
//! Distances of different colors are not comparable directly; convert to an
//! absolute ring index first (`board::topology::to_absolute_ring`).

use serde::{Deserialize, Serialize};

/// A token's progress coordinate, `-1..=57`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Distance(i8);

impl Distance {
    /// In the home yard, not yet entered.
    pub const HOME: Distance = Distance(-1);
    /// The color's entry square on the shared ring.
    pub const ENTRY: Distance = Distance(0);
    /// Last shared-ring square before the finish lane.
    pub const RING_END: Distance = Distance(50);
    /// First finish-lane square.
    pub const LANE_START: Distance = Distance(51);
    /// Terminal center square.
    pub const TERMINAL: Distance = Distance(57);

    /// Create a distance, returning `None` outside `-1..=57`.
    #[must_use]
    pub const fn new(value: i8) -> Option<Distance> {
        if value >= -1 && value <= 57 {
            Some(Distance(value))
        } else {
            None
        }
    }

    /// The raw coordinate.
    #[must_use]
    pub const fn get(self) -> i8 {
        self.0
    }

    /// Still in the home yard.
    #[must_use]
    pub const fn is_home(self) -> bool {
        self.0 == -1
    }

    /// On one of the 51 shared-ring squares.
    #[must_use]
    pub const fn is_on_ring(self) -> bool {
        self.0 >= 0 && self.0 <= 50
    }

    /// On one of the 6 private finish-lane squares.
    #[must_use]
    pub const fn is_in_lane(self) -> bool {
        self.0 >= 51 && self.0 <= 56
    }

    /// At the terminal center square.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.0 == 57
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

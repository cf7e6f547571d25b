//! Coordinate-free path algebra for the board.
//!
//! The board is a 52-square shared ring with a private 6-square finish lane
//! per color. Everything here is a pure function over `Color` and `Distance`;
//! pixel/grid geometry is a presentation concern and never appears in this
//! crate.

use crate::core::{Color, Dice, Distance};

/// Number of squares on the shared ring.
pub const RING_LEN: u8 = 52;

/// Ring squares between consecutive colors' entry points.
pub const ENTRY_SPACING: u8 = 13;

/// Absolute ring indices on which tokens cannot be captured: the four entry
/// squares plus four symmetric mid-ring squares.
pub const SAFE_SQUARES: [u8; 8] = [0, 8, 13, 21, 26, 34, 39, 47];

/// Absolute ring index where a color's tokens enter the ring.
#[must_use]
pub fn entry_offset(color: Color) -> u8 {
    color.index() as u8 * ENTRY_SPACING
}

/// Whether an absolute ring index is a safe square.
#[must_use]
pub fn is_safe_ring_square(absolute: u8) -> bool {
    debug_assert!(absolute < RING_LEN);
    SAFE_SQUARES.contains(&absolute)
}

/// Advance a distance by a die roll.
///
/// Returns `None` for the two illegal cases: leaving home on anything but a
/// six, and overshooting the terminal square. Ring-to-lane and lane-to-terminal
/// crossings fall out of plain addition, so callers never special-case them.
#[must_use]
pub fn advance(distance: Distance, dice: Dice) -> Option<Distance> {
    if distance.is_home() {
        return if dice.is_six() { Some(Distance::ENTRY) } else { None };
    }
    Distance::new(distance.get() + dice.get() as i8)
}

/// Convert a per-color distance to an absolute ring index.
///
/// Defined only while the token is on the shared ring (`0..=50`); home, lane,
/// and terminal positions have no absolute coordinate. Two different colors'
/// distances are only comparable after this conversion.
#[must_use]
pub fn to_absolute_ring(color: Color, distance: Distance) -> Option<u8> {
    if !distance.is_on_ring() {
        return None;
    }
    Some((entry_offset(color) + distance.get() as u8) % RING_LEN)
}

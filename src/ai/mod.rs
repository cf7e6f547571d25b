//! AI decision engine: tiered move selection over Rules Engine output.
//!
//! Read-only consumer of `GameState`; it never mutates anything and never
//! invents a move outside `rules::legal_moves_for`.

pub mod decide;
pub mod threat;

pub use decide::{decide, Decision, EASY_CAPTURE_BIAS};
pub use threat::threat_level;

//! Tiered move selection.
//!
//! `decide` only ever picks from the Rules Engine's legal-move set; no tier
//! can invent a move. Easy/Medium/Hard may consume the injected RNG; Expert is
//! a pure function of the state and roll, so repeated calls with identical
//! inputs always choose the same token.

use serde::{Deserialize, Serialize};

use crate::board::topology;
use crate::core::{Color, Dice, Difficulty, Distance, GameRng, GameState, PlayerId, TokenId};
use crate::rules::engine::{legal_moves_for, LegalMove};
use crate::rules::scoring::MoveKind;

use super::threat::threat_level;

/// Probability that the Easy tier takes a capture when one is on the board.
pub const EASY_CAPTURE_BIAS: f64 = 0.5;

/// An AI's answer for the current roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Move this token.
    Move(TokenId),
    /// No legal move exists; the caller must `skip_turn`.
    Skip,
}

/// Choose a move for `player` holding `dice`.
///
/// Candidates are enumerated in `TokenId` order so hash-map iteration order
/// never leaks into the choice.
pub fn decide(
    state: &GameState,
    player: PlayerId,
    dice: Dice,
    difficulty: Difficulty,
    rng: &mut GameRng,
) -> Decision {
    let moves = legal_moves_for(state, player, dice);
    if moves.is_empty() {
        return Decision::Skip;
    }

    let mut candidates: Vec<(TokenId, LegalMove)> = moves.into_iter().collect();
    candidates.sort_by_key(|(id, _)| *id);

    let color = state.player(player).color;
    let chosen = match difficulty {
        Difficulty::Easy => easy(&candidates, rng),
        Difficulty::Medium => medium(state, &candidates, rng),
        Difficulty::Hard => hard(state, color, &candidates, rng),
        Difficulty::Expert => expert(state, color, &candidates),
    };
    Decision::Move(chosen)
}

/// Mostly uniform-random, but takes a capture half the time one exists.
fn easy(candidates: &[(TokenId, LegalMove)], rng: &mut GameRng) -> TokenId {
    let captures: Vec<TokenId> = candidates
        .iter()
        .filter(|(_, mv)| mv.captured.is_some())
        .map(|(id, _)| *id)
        .collect();

    if !captures.is_empty() && rng.gen_bool(EASY_CAPTURE_BIAS) {
        return *rng.choose(&captures).expect("captures is non-empty");
    }
    rng.choose(candidates).expect("candidates are non-empty").0
}

/// Fixed priority: capture, then home exit, then the most advanced token.
fn medium(
    state: &GameState,
    candidates: &[(TokenId, LegalMove)],
    rng: &mut GameRng,
) -> TokenId {
    let capture = candidates.iter().find(|(_, mv)| mv.captured.is_some());
    let home_exit = candidates
        .iter()
        .find(|(_, mv)| mv.kind == MoveKind::HomeExit);
    let farthest = candidates
        .iter()
        .max_by_key(|(id, _)| token_distance(state, *id));

    capture
        .or(home_exit)
        .or(farthest)
        .map(|(id, _)| *id)
        .unwrap_or_else(|| rng.choose(candidates).expect("candidates are non-empty").0)
}

/// Capture (best victim first), dodge threats, grab safe squares, get tokens
/// out, then fall back to Medium.
fn hard(
    state: &GameState,
    color: Color,
    candidates: &[(TokenId, LegalMove)],
    rng: &mut GameRng,
) -> TokenId {
    let best_capture = candidates
        .iter()
        .filter(|(_, mv)| mv.captured.is_some())
        .max_by_key(|(_, mv)| {
            token_distance(state, mv.captured.expect("filtered on captures"))
        });
    if let Some((id, _)) = best_capture {
        return *id;
    }

    if let Some((id, _)) = candidates
        .iter()
        .find(|(_, mv)| threat_level(state, color, mv.destination) == 0.0)
    {
        return *id;
    }

    if let Some((id, _)) = candidates
        .iter()
        .find(|(_, mv)| is_safe_destination(color, mv.destination))
    {
        return *id;
    }

    if let Some((id, _)) = candidates
        .iter()
        .find(|(_, mv)| mv.kind == MoveKind::HomeExit)
    {
        return *id;
    }

    medium(state, candidates, rng)
}

/// Score every candidate and take the maximum; ties keep the first-enumerated
/// token. No randomness anywhere on this path.
fn expert(state: &GameState, color: Color, candidates: &[(TokenId, LegalMove)]) -> TokenId {
    let mut best = candidates[0].0;
    let mut best_score = f64::NEG_INFINITY;

    for (id, mv) in candidates {
        let score = expert_score(state, color, mv);
        if score > best_score {
            best = *id;
            best_score = score;
        }
    }
    best
}

fn expert_score(state: &GameState, color: Color, mv: &LegalMove) -> f64 {
    let mut score = 0.0;

    if let Some(victim) = mv.captured {
        score += 100.0;
        // Value the progress the victim is knocked back from.
        let victim_distance = f64::from(token_distance(state, victim).get());
        score += 2.0 * (57.0 - victim_distance);
    }

    score += 1.5 * (57.0 - f64::from(mv.destination.get()));

    if mv.kind == MoveKind::HomeExit {
        score += 50.0;
    }
    if mv.destination.is_terminal() {
        score += 200.0;
    }
    if is_safe_destination(color, mv.destination) {
        score += 20.0;
    }

    score - 30.0 * threat_level(state, color, mv.destination)
}

fn token_distance(state: &GameState, id: TokenId) -> Distance {
    state
        .token(id)
        .expect("legal moves only reference seated tokens")
        .distance
}

fn is_safe_destination(color: Color, destination: Distance) -> bool {
    destination.is_in_lane()
        || topology::to_absolute_ring(color, destination)
            .is_some_and(topology::is_safe_ring_square)
}

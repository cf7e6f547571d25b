//! Turn lifecycle: rolling, applying moves, bonus turns, win detection.
//!
//! Every operation takes an immutable `GameState` and returns a new value;
//! nothing here mutates in place or blocks. Within `Playing` the per-turn
//! phase is implicit in the data: `dice == None` means the current player must
//! roll, `dice == Some(_)` means a move (or skip, when nothing is legal) is
//! owed.

use rustc_hash::FxHashMap;

use crate::core::{Dice, GameRng, GameState, GameStatus, MoveRecord, PlayerId, TokenId};
use crate::rules::engine::{legal_check, legal_moves_for, IllegalReason, LegalMove, MoveCheck};
use crate::rules::scoring::score_for_move;

/// Sixes a player may chain before the turn is forced over.
pub const MAX_CONSECUTIVE_SIXES: u8 = 3;

/// A recoverable rule violation. Always returned, never thrown; callers
/// surface these to the user ("that move isn't allowed") or to a desynced
/// peer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Dice value outside `1..=6`.
    #[error("dice value outside 1..=6")]
    InvalidDice,

    /// Supplied dice value does not match the state's current roll.
    #[error("dice value does not match the current roll")]
    StaleDice,

    /// Token id not owned by the current player.
    #[error("token not owned by the current player")]
    UnknownToken,

    /// The move breaks a board rule.
    #[error("illegal move: {0}")]
    Illegal(IllegalReason),

    /// Mutating call while the game is not in the `Playing` state.
    #[error("game is not in progress")]
    GameNotInProgress,

    /// `roll_dice` while a roll is already awaiting its move.
    #[error("a roll is already pending")]
    RollPending,

    /// `start` on a game that already left the `Waiting` state.
    #[error("game has already started")]
    GameAlreadyStarted,
}

/// Result of a dice roll: the updated state plus what the roller may do.
#[derive(Clone, Debug)]
pub struct Roll {
    /// State with the die recorded.
    pub state: GameState,

    /// The rolled value.
    pub dice: Dice,

    /// Legal moves for the current player. Empty means the caller must
    /// follow up with [`skip_turn`].
    pub legal_moves: FxHashMap<TokenId, LegalMove>,
}

/// How the turn proceeds after a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnContinuation {
    /// Same player rolls again (six chain or capture reward).
    BonusRoll,
    /// Turn handed to the next player.
    NextPlayer,
    /// The mover just won; the game is over.
    GameOver,
}

/// Result of a successfully applied move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveResult {
    /// State after the move.
    pub state: GameState,

    /// The log entry that was appended.
    pub record: MoveRecord,

    /// What happens next.
    pub continuation: TurnContinuation,
}

/// Start a `Waiting` game.
pub fn start(state: &GameState) -> Result<GameState, MoveError> {
    if state.status != GameStatus::Waiting {
        return Err(MoveError::GameAlreadyStarted);
    }
    let mut next = state.clone();
    next.status = GameStatus::Playing;
    Ok(next)
}

/// Roll the die for the current player.
///
/// Draws uniformly from `1..=6` using the injected RNG, records the value,
/// and reports the legal moves it enables. Rejects with [`MoveError::RollPending`]
/// when an unconsumed roll exists.
pub fn roll_dice(state: &GameState, rng: &mut GameRng) -> Result<Roll, MoveError> {
    if state.status != GameStatus::Playing {
        return Err(MoveError::GameNotInProgress);
    }
    if state.dice.is_some() {
        return Err(MoveError::RollPending);
    }

    let dice = rng.roll_die();
    let mut next = state.clone();
    next.dice = Some(dice);

    let legal_moves = legal_moves_for(&next, next.current_player, dice);
    Ok(Roll {
        state: next,
        dice,
        legal_moves,
    })
}

/// Apply a move for the current player.
///
/// Re-validates everything (defense in depth against desynced callers): the
/// raw dice value, that it matches the pending roll, token ownership, and
/// board legality. On success the token moves, any victim goes home, the score
/// and move log update, and the turn either continues (bonus roll) or hands
/// over.
///
/// # Panics
///
/// Panics when called while no die has ever been rolled for this turn. That is
/// a collaborator protocol violation, not a game-rule violation.
pub fn apply_move(
    state: &GameState,
    token_id: TokenId,
    dice: u8,
) -> Result<MoveResult, MoveError> {
    if state.status != GameStatus::Playing {
        return Err(MoveError::GameNotInProgress);
    }

    let rolled = state
        .dice
        .expect("apply_move called with no pending roll; roll_dice first");
    let dice = Dice::new(dice).ok_or(MoveError::InvalidDice)?;
    if dice != rolled {
        return Err(MoveError::StaleDice);
    }

    let mover = state.current_player;
    let token = state
        .current()
        .token(token_id)
        .ok_or(MoveError::UnknownToken)?;

    let mv = match legal_check(state, token, dice) {
        MoveCheck::Legal(mv) => mv,
        MoveCheck::Illegal(reason) => return Err(MoveError::Illegal(reason)),
    };

    let from = token.distance;
    let mut next = state.clone();

    if let Some(victim_id) = mv.captured {
        let slot = next
            .player_by_color(victim_id.color())
            .expect("capture victim has a seated owner")
            .free_home_slot();
        next.token_mut(victim_id)
            .expect("capture victim exists")
            .send_home(slot);
    }

    next.token_mut(token_id)
        .expect("mover checked above")
        .move_to(mv.destination);
    next.player_mut(mover).score += score_for_move(mv.kind, mv.captured.is_some());

    let record = MoveRecord {
        player: mover,
        token: token_id,
        dice,
        from,
        to: mv.destination,
        captured: mv.captured,
        turn: next.turn_number,
    };
    next.moves.push_back(record.clone());

    // Win check: only the mover can complete on this call, so the first
    // player in list order with four finished tokens is simply the mover.
    if next.player(mover).has_won() {
        next.status = GameStatus::Finished;
        next.winner = Some(mover);
        next.dice = None;
        return Ok(MoveResult {
            state: next,
            record,
            continuation: TurnContinuation::GameOver,
        });
    }

    // Any non-six roll breaks the six chain, even when a capture extends the
    // turn below.
    if !dice.is_six() {
        next.consecutive_sixes = 0;
    }

    let continuation = if dice.is_six() && next.consecutive_sixes < MAX_CONSECUTIVE_SIXES {
        next.consecutive_sixes += 1;
        next.dice = None;
        TurnContinuation::BonusRoll
    } else if mv.captured.is_some() {
        next.dice = None;
        TurnContinuation::BonusRoll
    } else {
        hand_off(&mut next);
        TurnContinuation::NextPlayer
    };

    Ok(MoveResult {
        state: next,
        record,
        continuation,
    })
}

/// Hand the turn over without moving.
///
/// Used when a roll produced no legal move, or when a collaborator forfeits
/// the turn of an absent player. Performs the same end-of-turn bookkeeping as
/// the hand-over branch of [`apply_move`].
pub fn skip_turn(state: &GameState) -> Result<GameState, MoveError> {
    if state.status != GameStatus::Playing {
        return Err(MoveError::GameNotInProgress);
    }
    let mut next = state.clone();
    hand_off(&mut next);
    Ok(next)
}

/// Suspend a `Playing` game.
pub fn pause(state: &GameState) -> Result<GameState, MoveError> {
    if state.status != GameStatus::Playing {
        return Err(MoveError::GameNotInProgress);
    }
    let mut next = state.clone();
    next.status = GameStatus::Paused;
    Ok(next)
}

/// Resume a `Paused` game. A pending roll survives the pause.
pub fn resume(state: &GameState) -> Result<GameState, MoveError> {
    if state.status != GameStatus::Paused {
        return Err(MoveError::GameNotInProgress);
    }
    let mut next = state.clone();
    next.status = GameStatus::Playing;
    Ok(next)
}

/// Force-terminate without declaring a winner.
///
/// The state becomes `Finished` with `winner == None`; whether to record the
/// game as abandoned is the collaborator's call.
pub fn cancel(state: &GameState) -> Result<GameState, MoveError> {
    if state.status == GameStatus::Finished {
        return Err(MoveError::GameNotInProgress);
    }
    let mut next = state.clone();
    next.status = GameStatus::Finished;
    next.dice = None;
    Ok(next)
}

fn hand_off(state: &mut GameState) {
    let count = state.player_count() as u8;
    state.current_player = PlayerId::new((state.current_player.0 + 1) % count);
    state.dice = None;
    state.consecutive_sixes = 0;
    state.turn_number += 1;
}

//! Turn lifecycle integration tests.
//!
//! Covers the full roll/move/skip cycle, bonus-turn chaining, the
//! consecutive-six cap, win detection, and the Waiting/Playing/Paused/Finished
//! transitions.

use ludo_core::core::{
    Color, Dice, Difficulty, Distance, GameBuilder, GameRng, GameState, GameStatus, PlayerId,
    TokenId,
};
use ludo_core::turn::{
    apply_move, cancel, pause, resume, roll_dice, skip_turn, start, validate_game_state,
    MoveError, TurnContinuation,
};

fn two_player_game() -> GameState {
    let state = GameBuilder::new()
        .human("Red", Color::Red)
        .ai("Blue", Color::Blue, Difficulty::Medium)
        .build();
    start(&state).unwrap()
}

fn place(state: &mut GameState, color: Color, index: u8, value: i8) {
    let player = state
        .players
        .iter_mut()
        .find(|p| p.color == color)
        .expect("color is seated");
    player.tokens[index as usize].distance = Distance::new(value).unwrap();
}

fn with_dice(state: &GameState, value: u8) -> GameState {
    let mut next = state.clone();
    next.dice = Some(Dice::new(value).unwrap());
    next
}

/// Scenario 1: home exit on a six enters at distance 0 with a bonus roll.
#[test]
fn test_home_exit_on_six() {
    let state = with_dice(&two_player_game(), 6);
    let token = TokenId::new(Color::Red, 0);

    let result = apply_move(&state, token, 6).unwrap();

    assert_eq!(
        result.state.token(token).unwrap().distance,
        Distance::ENTRY
    );
    assert_eq!(result.continuation, TurnContinuation::BonusRoll);
    assert_eq!(result.state.consecutive_sixes, 1);
    assert_eq!(result.state.current_player, PlayerId::new(0));
    assert!(validate_game_state(&result.state));
}

/// Scenario 3: an overshooting roll with no other movable token forces a skip.
#[test]
fn test_overshoot_forces_skip() {
    let mut state = two_player_game();
    place(&mut state, Color::Red, 0, 55);
    // Remaining red tokens stay home; a 3 moves nothing.
    let state = with_dice(&state, 3);

    let legal = ludo_core::rules::legal_moves_for(&state, PlayerId::new(0), Dice::new(3).unwrap());
    assert!(legal.is_empty());

    assert_eq!(
        apply_move(&state, TokenId::new(Color::Red, 0), 3),
        Err(MoveError::Illegal(ludo_core::rules::IllegalReason::Overshoot))
    );

    let next = skip_turn(&state).unwrap();
    assert_eq!(next.current_player, PlayerId::new(1));
    assert_eq!(next.dice, None);
}

/// Scenario 4: three chained sixes are the limit; the fourth ends the turn.
#[test]
fn test_consecutive_six_chain_caps_at_three() {
    let mut state = two_player_game();
    place(&mut state, Color::Red, 0, 2);

    for expected in 1..=3u8 {
        let rolled = with_dice(&state, 6);
        let result = apply_move(&rolled, TokenId::new(Color::Red, 0), 6).unwrap();
        assert_eq!(result.continuation, TurnContinuation::BonusRoll);
        assert_eq!(result.state.consecutive_sixes, expected);
        state = result.state;
    }

    // Fourth six: turn ends despite the six.
    let rolled = with_dice(&state, 6);
    let result = apply_move(&rolled, TokenId::new(Color::Red, 0), 6).unwrap();
    assert_eq!(result.continuation, TurnContinuation::NextPlayer);
    assert_eq!(result.state.consecutive_sixes, 0);
    assert_eq!(result.state.current_player, PlayerId::new(1));
}

/// Scenario 5: completing the fourth token finishes the game and freezes it.
#[test]
fn test_win_finishes_game() {
    let mut state = two_player_game();
    for i in 0..3 {
        place(&mut state, Color::Red, i, 57);
    }
    place(&mut state, Color::Red, 3, 55);
    let state = with_dice(&state, 2);

    let result = apply_move(&state, TokenId::new(Color::Red, 3), 2).unwrap();

    assert_eq!(result.continuation, TurnContinuation::GameOver);
    assert_eq!(result.state.status, GameStatus::Finished);
    assert_eq!(result.state.winner, Some(PlayerId::new(0)));
    assert!(result.state.player(PlayerId::new(0)).has_won());
    assert!(validate_game_state(&result.state));

    // Every further mutating call rejects.
    let mut rng = GameRng::new(0);
    assert!(matches!(
        roll_dice(&result.state, &mut rng),
        Err(MoveError::GameNotInProgress)
    ));
    assert_eq!(
        apply_move(&result.state, TokenId::new(Color::Blue, 0), 2),
        Err(MoveError::GameNotInProgress)
    );
    assert!(matches!(
        skip_turn(&result.state),
        Err(MoveError::GameNotInProgress)
    ));
}

#[test]
fn test_pause_blocks_mutations_until_resume() {
    let state = two_player_game();
    let paused = pause(&state).unwrap();

    let mut rng = GameRng::new(5);
    assert!(matches!(
        roll_dice(&paused, &mut rng),
        Err(MoveError::GameNotInProgress)
    ));

    let resumed = resume(&paused).unwrap();
    assert_eq!(resumed.status, GameStatus::Playing);
    assert!(roll_dice(&resumed, &mut rng).is_ok());
}

#[test]
fn test_pause_preserves_pending_roll() {
    let state = with_dice(&two_player_game(), 6);
    let resumed = resume(&pause(&state).unwrap()).unwrap();

    assert_eq!(resumed.dice, Some(Dice::new(6).unwrap()));
    let result = apply_move(&resumed, TokenId::new(Color::Red, 0), 6).unwrap();
    assert_eq!(result.continuation, TurnContinuation::BonusRoll);
}

#[test]
fn test_cancel_from_any_live_state() {
    let waiting = GameBuilder::new()
        .human("Red", Color::Red)
        .human("Blue", Color::Blue)
        .build();
    assert_eq!(cancel(&waiting).unwrap().status, GameStatus::Finished);

    let playing = two_player_game();
    let cancelled = cancel(&playing).unwrap();
    assert_eq!(cancelled.status, GameStatus::Finished);
    assert_eq!(cancelled.winner, None);
    assert!(validate_game_state(&cancelled));

    let paused = pause(&playing).unwrap();
    assert_eq!(cancel(&paused).unwrap().status, GameStatus::Finished);
}

/// Drive a full seeded game with AI seats and check invariants every step.
#[test]
fn test_seeded_game_stays_consistent() {
    let state = GameBuilder::new()
        .ai("A", Color::Red, Difficulty::Expert)
        .ai("B", Color::Green, Difficulty::Hard)
        .ai("C", Color::Yellow, Difficulty::Medium)
        .ai("D", Color::Blue, Difficulty::Easy)
        .build();
    let mut state = start(&state).unwrap();
    let mut rng = GameRng::new(2024);

    for _ in 0..3000 {
        if state.status != GameStatus::Playing {
            break;
        }

        let roll = roll_dice(&state, &mut rng).unwrap();
        let player = roll.state.current_player;
        let difficulty = roll.state.player(player).kind.difficulty().unwrap();

        state = match ludo_core::ai::decide(&roll.state, player, roll.dice, difficulty, &mut rng)
        {
            ludo_core::ai::Decision::Move(token) => {
                apply_move(&roll.state, token, roll.dice.get()).unwrap().state
            }
            ludo_core::ai::Decision::Skip => {
                assert!(roll.legal_moves.is_empty());
                skip_turn(&roll.state).unwrap()
            }
        };

        assert!(validate_game_state(&state));
        assert!(state.consecutive_sixes <= 3);
    }

    if state.status == GameStatus::Finished {
        let winner = state.winner.expect("a finished (non-cancelled) game has a winner");
        assert!(state.player(winner).has_won());
    }
}

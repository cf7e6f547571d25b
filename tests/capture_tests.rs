//! Capture rule integration tests.
//!
//! Scenario: two colors meeting on the shared ring, capture immunity on safe
//! squares and in lanes, home-yard slot assignment, and score accounting.

use ludo_core::core::{
    Color, Dice, Difficulty, Distance, GameBuilder, GameState, GameStatus, PlayerId, TokenId,
    TokenState,
};
use ludo_core::rules::{legal_check, legal_moves_for, MoveCheck, CAPTURE_POINTS};
use ludo_core::turn::{apply_move, start, validate_game_state, TurnContinuation};

fn game() -> GameState {
    let state = GameBuilder::new()
        .human("Red", Color::Red)
        .ai("Blue", Color::Blue, Difficulty::Hard)
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

/// Scenario 2 from end to end: red lands on blue at absolute ring index 12.
#[test]
fn test_capture_on_shared_ring_square() {
    let mut state = game();
    place(&mut state, Color::Red, 0, 10); // absolute 10
    place(&mut state, Color::Blue, 1, 25); // absolute (39 + 25) % 52 = 12
    let state = with_dice(&state, 2);

    let mover = TokenId::new(Color::Red, 0);
    let victim = TokenId::new(Color::Blue, 1);
    let result = apply_move(&state, mover, 2).unwrap();

    // Mover advanced onto the square.
    assert_eq!(
        result.state.token(mover).unwrap().distance,
        Distance::new(12).unwrap()
    );

    // Victim reset to home in a free slot.
    let victim_token = result.state.token(victim).unwrap();
    assert_eq!(victim_token.distance, Distance::HOME);
    assert_eq!(victim_token.state(), TokenState::AtHome);

    // Score and log reflect the capture.
    let red_score = result.state.player(PlayerId::new(0)).score;
    assert_eq!(red_score, CAPTURE_POINTS);
    assert_eq!(result.record.captured, Some(victim));

    // Capture grants a bonus roll without touching the six chain.
    assert_eq!(result.continuation, TurnContinuation::BonusRoll);
    assert_eq!(result.state.consecutive_sixes, 0);
    assert_eq!(result.state.current_player, PlayerId::new(0));

    assert!(validate_game_state(&result.state));
}

#[test]
fn test_captured_token_parks_in_first_free_slot() {
    let mut state = game();
    // Blue tokens 0 and 1 are out; slots 0 and 1 are free at home.
    place(&mut state, Color::Blue, 0, 20);
    place(&mut state, Color::Blue, 1, 25); // absolute 12
    place(&mut state, Color::Red, 0, 10);
    let state = with_dice(&state, 2);

    let result = apply_move(&state, TokenId::new(Color::Red, 0), 2).unwrap();
    let victim = result.state.token(TokenId::new(Color::Blue, 1)).unwrap();

    assert_eq!(victim.home_slot, 0);
    assert!(validate_game_state(&result.state));
}

#[test]
fn test_no_capture_on_safe_entry_square() {
    let mut state = game();
    // Blue sits on red's entry square (absolute 0, safe).
    place(&mut state, Color::Blue, 0, 13); // (39 + 13) % 52 = 0
    place(&mut state, Color::Red, 0, 50); // can't reach; use a fresh token via six

    // Red exits home onto its entry square where blue is parked: legal, no
    // capture, the two coexist.
    let fresh = state.token(TokenId::new(Color::Red, 1)).unwrap();
    let check = legal_check(&state, fresh, Dice::new(6).unwrap());
    match check {
        MoveCheck::Legal(mv) => {
            assert_eq!(mv.destination, Distance::ENTRY);
            assert_eq!(mv.captured, None);
        }
        MoveCheck::Illegal(reason) => panic!("expected legal entry, got {reason}"),
    }

    let state = with_dice(&state, 6);
    let result = apply_move(&state, TokenId::new(Color::Red, 1), 6).unwrap();
    let blue = result.state.token(TokenId::new(Color::Blue, 0)).unwrap();
    assert_eq!(blue.distance, Distance::new(13).unwrap());
    assert!(validate_game_state(&result.state));
}

#[test]
fn test_no_capture_on_safe_mid_ring_square() {
    let mut state = game();
    // Absolute 21 is safe. Red reaches it from 18 with a 3.
    place(&mut state, Color::Red, 0, 18);
    place(&mut state, Color::Blue, 0, 34); // (39 + 34) % 52 = 21

    let mover = state.token(TokenId::new(Color::Red, 0)).unwrap();
    let mv = legal_check(&state, mover, Dice::new(3).unwrap())
        .legal()
        .unwrap();
    assert_eq!(mv.captured, None);
}

#[test]
fn test_lane_tokens_are_untouchable() {
    let mut state = game();
    place(&mut state, Color::Red, 0, 30);
    place(&mut state, Color::Blue, 0, 52); // inside blue's lane

    // No red roll can produce a capture of a lane token.
    for v in 1..=6 {
        let mover = state.token(TokenId::new(Color::Red, 0)).unwrap();
        if let MoveCheck::Legal(mv) = legal_check(&state, mover, Dice::new(v).unwrap()) {
            assert_eq!(mv.captured, None);
        }
    }
}

#[test]
fn test_capture_does_not_end_game_for_victim() {
    let mut state = game();
    place(&mut state, Color::Red, 0, 10);
    place(&mut state, Color::Blue, 1, 25);
    let state = with_dice(&state, 2);

    let result = apply_move(&state, TokenId::new(Color::Red, 0), 2).unwrap();
    assert_eq!(result.state.status, GameStatus::Playing);
    assert_eq!(result.state.winner, None);
}

#[test]
fn test_same_color_block_is_not_a_capture() {
    let mut state = game();
    place(&mut state, Color::Red, 0, 10);
    place(&mut state, Color::Red, 1, 12);

    let moves = legal_moves_for(&state, PlayerId::new(0), Dice::new(2).unwrap());
    // Token 0 is blocked by its sibling; only token 1 may advance.
    assert!(!moves.contains_key(&TokenId::new(Color::Red, 0)));
    assert!(moves.contains_key(&TokenId::new(Color::Red, 1)));
}

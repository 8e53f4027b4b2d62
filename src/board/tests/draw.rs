//! Repetition tracking and clock tests.

use crate::board::{Game, GameStatus, Position};

const KNIGHT_SHUFFLE: [&str; 4] = ["Nf3", "Nf6", "Ng1", "Ng8"];

fn play(position: &mut Position, token: &str) {
    let mv = position.parse_move(token).expect("legal move");
    position.play(mv);
}

#[test]
fn test_threefold_set_on_third_occurrence() {
    let mut position = Position::new();
    let start_key = position.key();

    for (ply, token) in KNIGHT_SHUFFLE.iter().cycle().take(8).enumerate() {
        assert!(!position.notes().is_threefold(), "flag set early at ply {ply}");
        play(&mut position, token);
    }

    assert_eq!(position.notes().ply(), 8);
    assert_eq!(position.key(), start_key);
    assert_eq!(position.notes().repetition_count(&start_key), 3);
    assert!(position.notes().is_threefold());
}

#[test]
fn test_threefold_flag_is_sticky() {
    let mut position = Position::new();
    for token in KNIGHT_SHUFFLE.iter().cycle().take(8) {
        play(&mut position, token);
    }
    play(&mut position, "e4");
    play(&mut position, "e5");
    assert!(position.notes().is_threefold());
}

#[test]
fn test_second_occurrence_is_not_threefold() {
    let mut position = Position::new();
    for token in KNIGHT_SHUFFLE {
        play(&mut position, token);
    }
    assert_eq!(position.notes().repetition_count(&position.key()), 2);
    assert!(!position.notes().is_threefold());
}

#[test]
fn test_game_reports_repetition() {
    let mut game = Game::new();
    for token in KNIGHT_SHUFFLE.iter().cycle().take(8) {
        game.play_token(token).unwrap();
    }
    assert_eq!(game.outcome(), GameStatus::ThreefoldRepetition);
    assert!(game.to_pgn().ends_with("1/2-1/2"));
}

#[test]
fn test_fen_load_resets_repetitions() {
    let mut position = Position::new();
    for token in KNIGHT_SHUFFLE {
        play(&mut position, token);
    }
    let reloaded = Position::from_fen(&position.to_fen()).unwrap();
    assert_eq!(reloaded.notes().repetition_count(&reloaded.key()), 1);
}

#[test]
fn test_halfmove_clock_tracked_but_never_draws() {
    let mut position = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 99 60").unwrap();
    play(&mut position, "Ra2");
    assert_eq!(position.notes().halfmove_clock(), 100);
    assert!(!position.legal_moves().is_empty());

    let game = Game::from_fen(&position.to_fen()).unwrap();
    assert_eq!(game.outcome(), GameStatus::Ongoing);
}

#[test]
fn test_halfmove_resets_on_pawn_move_and_capture() {
    let mut position = Position::from_fen("4k3/8/8/3p4/8/8/4P3/R3K3 w - - 10 30").unwrap();
    play(&mut position, "e4");
    assert_eq!(position.notes().halfmove_clock(), 0);
    play(&mut position, "Kd7");
    assert_eq!(position.notes().halfmove_clock(), 1);
    play(&mut position, "exd5");
    assert_eq!(position.notes().halfmove_clock(), 0);
    assert_eq!(position.notes().fullmove_number(), 31);
}

#[test]
fn test_transpositions_share_a_key() {
    let mut first = Position::new();
    for token in ["Nf3", "Nf6", "Nc3"] {
        play(&mut first, token);
    }
    let mut second = Position::new();
    for token in ["Nc3", "Nf6", "Nf3"] {
        play(&mut second, token);
    }
    assert_eq!(first.key(), second.key());
}

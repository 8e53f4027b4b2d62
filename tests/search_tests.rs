//! Search tests to verify the engine finds sensible moves in various positions.

use chess_rules::board::{
    best_move, find_best_move, Color, Game, GameStatus, Legality, Position, SearchConfig,
    SearchError,
};

fn best_uci(fen: &str, depth: u32) -> String {
    let position = Position::from_fen(fen).unwrap();
    let result = best_move(&position, &SearchConfig::with_depth(depth)).unwrap();
    result.best_move.expect("should find a move").to_string()
}

/// Test that the engine takes a free piece
#[test]
fn takes_undefended_rook() {
    assert_eq!(best_uci("4k3/8/8/8/8/8/1r6/1Q2K3 w - - 0 1", 2), "b1b2");
}

/// Test that the engine does not grab a defended pawn with its queen
#[test]
fn avoids_poisoned_pawn() {
    let mv = best_uci("4k3/8/2p5/3p4/8/8/8/3QK3 w - - 0 1", 2);
    assert_ne!(mv, "d1d5", "Qxd5 loses the queen to cxd5");
}

/// Test that the engine recaptures rather than staying a piece down
#[test]
fn recaptures_knight() {
    // Black just played ...Nxe4 against a pawn-guarded square.
    assert_eq!(best_uci("4k3/8/8/8/4n3/3P4/8/4K3 w - - 0 1", 2), "d3e4");
}

/// Test that Black, the minimizing side, also takes free material
#[test]
fn black_takes_hanging_queen() {
    assert_eq!(best_uci("4k3/8/8/q7/8/8/8/Q5K1 b - - 0 1", 2), "a5a1");
}

#[test]
fn engine_prefers_development_from_start() {
    let position = Position::new();
    let result = best_move(&position, &SearchConfig::with_depth(1)).unwrap();
    let mv = result.best_move.unwrap();
    // With a one-ply look every first move is scored on its own merits; a
    // centre pawn push or a knight development scores highest.
    assert!(result.score > 0);
    assert!(["e2e4", "d2d4", "e2e3", "d2d3", "b1c3", "g1f3"].contains(&mv.to_string().as_str()));
}

#[test]
fn missing_king_is_rejected() {
    let position = Position::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    assert_eq!(
        find_best_move(position.board(), Color::White, position.notes(), 2),
        Err(SearchError::MissingKing(Color::Black))
    );
}

#[test]
fn checkmated_side_has_no_move() {
    let position =
        Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .unwrap();
    let result = best_move(&position, &SearchConfig::default()).unwrap();
    assert_eq!(result.best_move, None);
}

#[test]
fn self_play_stays_legal() {
    let mut game = Game::new();
    let config = SearchConfig::with_depth(2);
    for _ in 0..12 {
        if game.outcome() != GameStatus::Ongoing {
            break;
        }
        let before = game.position().clone();
        let record = game.engine_move(&config).unwrap().expect("a move to play");
        let mv = *game.moves().last().unwrap();
        assert!(before.is_legal(mv), "{} is not legal", record.coordinate);
    }
    assert!(!game.history().is_empty());
}

#[test]
fn reference_and_strict_agree_on_quiet_position() {
    let position = Position::new();
    let strict = best_move(&position, &SearchConfig::with_depth(2)).unwrap();
    let reference = best_move(
        &position,
        &SearchConfig {
            depth: 2,
            legality: Legality::Reference,
            ..SearchConfig::default()
        },
    )
    .unwrap();
    assert_eq!(strict, reference);
}

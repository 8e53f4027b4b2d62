//! FEN, SAN and PGN tests against the shared position fixtures.

use serde::Deserialize;

use chess_rules::board::{
    build_pgn_text, pgn_move_tokens, replay_pgn, Color, FenError, Game, GameStatus, MoveParseError,
    PgnError, Position, STARTING_FEN,
};

#[derive(Deserialize)]
struct Fixtures {
    perft: Vec<PerftCase>,
    mates: Vec<MateCase>,
    san: Vec<SanCase>,
}

#[derive(Deserialize)]
struct PerftCase {
    name: String,
    fen: String,
    depth: u32,
    nodes: u64,
}

#[derive(Deserialize)]
struct MateCase {
    name: String,
    fen: String,
    san: String,
}

#[derive(Deserialize)]
struct SanCase {
    fen: String,
    coordinate: String,
    san: String,
}

fn fixtures() -> Fixtures {
    let data = include_str!("data/positions.json");
    serde_json::from_str(data).expect("invalid positions.json")
}

const OPERA_GAME: &str = r#"[Event "Paris"]
[White "Paul Morphy"]
[Black "Duke Karl / Count Isouard"]
[Result "1-0"]

1. e4 e5 2. Nf3 d6 3. d4 Bg4 {This is a weak move already.} 4. dxe5 Bxf3
5. Qxf3 dxe5 6. Bc4 Nf6 7. Qb3 Qe7 8. Nc3 c6 9. Bg5 b5 (9... Qb4 10. Qxb4)
10. Nxb5 cxb5 11. Bxb5+ Nbd7 12. O-O-O Rd8 13. Rxd7 Rxd7 14. Rd1 Qe6
15. Bxd7+ Nxd7 16. Qb8+ Nxb8 17. Rd8# 1-0"#;

const OPERA_MOVETEXT: &str = "1. e4 e5 2. Nf3 d6 3. d4 Bg4 4. dxe5 Bxf3 5. Qxf3 dxe5 \
6. Bc4 Nf6 7. Qb3 Qe7 8. Nc3 c6 9. Bg5 b5 10. Nxb5 cxb5 11. Bxb5+ Nbd7 \
12. O-O-O Rd8 13. Rxd7 Rxd7 14. Rd1 Qe6 15. Bxd7+ Nxd7 16. Qb8+ Nxb8 17. Rd8# 1-0";

#[test]
fn perft_suite() {
    for case in fixtures().perft {
        let position = Position::from_fen(&case.fen).unwrap();
        assert_eq!(
            position.perft(case.depth),
            case.nodes,
            "perft mismatch for {}",
            case.name
        );
    }
}

#[test]
fn mate_in_one_suite() {
    for case in fixtures().mates {
        let mut position = Position::from_fen(&case.fen).unwrap();
        let mv = position
            .parse_move(&case.san)
            .unwrap_or_else(|e| panic!("{}: {e}", case.name));
        assert_eq!(position.san(mv), case.san, "SAN for {}", case.name);
        position.play(mv);
        assert!(position.is_checkmate(), "{} is not mate", case.name);
    }
}

#[test]
fn san_suite() {
    for case in fixtures().san {
        let position = Position::from_fen(&case.fen).unwrap();
        let mv = position.parse_move(&case.coordinate).unwrap();
        assert_eq!(position.san(mv), case.san, "SAN in {}", case.fen);
        assert_eq!(position.parse_move(&case.san).unwrap(), mv);
        assert_eq!(mv.to_string(), case.coordinate);
    }
}

#[test]
fn fen_round_trip_of_fixtures() {
    let data = fixtures();
    let fens = data
        .perft
        .iter()
        .map(|c| &c.fen)
        .chain(data.mates.iter().map(|c| &c.fen))
        .chain(data.san.iter().map(|c| &c.fen));
    for fen in fens {
        assert_eq!(&Position::from_fen(fen).unwrap().to_fen(), fen);
    }
}

#[test]
fn starting_position_facts() {
    let position = Position::new();
    assert_eq!(position.to_fen(), STARTING_FEN);
    assert_eq!(position.legal_moves().len(), 20);
}

#[test]
fn fen_errors_are_reported() {
    assert_eq!(
        Position::from_fen(""),
        Err(FenError::TooFewParts { found: 0 })
    );
    assert!(matches!(
        Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR z KQkq - 0 1"),
        Err(FenError::InvalidSideToMove { .. })
    ));
}

#[test]
fn opera_game_replays_to_mate() {
    let replay = replay_pgn(OPERA_GAME).unwrap();
    assert_eq!(replay.moves.len(), 33);
    assert_eq!(replay.result, "1-0");
    assert_eq!(replay.tags.get("White").map(String::as_str), Some("Paul Morphy"));
    assert!(replay.position.is_checkmate());
    assert_eq!(
        build_pgn_text(&replay.records, Color::White, Some(&replay.result)),
        OPERA_MOVETEXT
    );
}

#[test]
fn opera_game_loads_into_game() {
    let mut game = Game::new();
    game.load_pgn(OPERA_GAME).unwrap();
    assert_eq!(
        game.outcome(),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
    assert_eq!(game.to_pgn(), OPERA_MOVETEXT);
}

#[test]
fn variations_and_comments_are_skipped() {
    let tokens = pgn_move_tokens(OPERA_GAME);
    assert_eq!(tokens.len(), 33);
    assert!(!tokens.iter().any(|t| t == "Qb4" || t.contains('{')));
}

#[test]
fn replay_reports_first_bad_token() {
    let err = replay_pgn("1. e4 e5 2. Nf3 Nf6 3. Bb5 Bb4 4. Ke3").unwrap_err();
    match err {
        PgnError::UnmatchedToken { ply, token, source } => {
            assert_eq!(ply, 6);
            assert_eq!(token, "Ke3");
            assert!(matches!(source, MoveParseError::NoMatchingMove { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn coordinate_moves_in_pgn() {
    let replay = replay_pgn("1. e2e4 e7e5 2. g1f3").unwrap();
    assert_eq!(
        build_pgn_text(&replay.records, Color::White, None),
        "1. e4 e5 2. Nf3"
    );
}

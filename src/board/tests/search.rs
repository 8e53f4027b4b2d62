//! Search algorithm tests.
//!
//! Alpha-beta must choose the same move and score as an exhaustive minimax
//! over the same ordered move lists.

use crate::board::search::{order_moves, search, SearchConfig};
use crate::board::{Board, Color, GameNotes, Legality, Move, Position};

const FIXTURES: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
    "4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1",
    "4k3/8/8/3r4/8/8/3Q4/4K3 b - - 0 1",
    "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1",
];

/// Plain minimax, no pruning. Returns the root's first best move.
fn minimax(
    board: &Board,
    side: Color,
    notes: &GameNotes,
    depth: u32,
    config: &SearchConfig,
) -> (Option<Move>, i32) {
    let static_eval = || board.evaluate(notes, &config.weights);
    if depth == 0 {
        return (None, static_eval());
    }
    let mut moves = board.moves_for(side, notes, config.legality);
    if moves.is_empty() {
        return (None, static_eval());
    }
    order_moves(board, &mut moves);

    let mut best: Option<(Move, i32)> = None;
    for mv in moves {
        let mut child_notes = notes.clone();
        let child = board.apply_move(mv, &mut child_notes);
        let (_, score) = minimax(&child, side.opponent(), &child_notes, depth - 1, config);
        let better = match best {
            None => true,
            Some((_, b)) if side == Color::White => score > b,
            Some((_, b)) => score < b,
        };
        if better {
            best = Some((mv, score));
        }
    }
    match best {
        Some((mv, score)) => (Some(mv), score),
        None => (None, static_eval()),
    }
}

fn assert_matches_minimax(fen: &str, config: &SearchConfig) {
    let position = Position::from_fen(fen).unwrap();
    let pruned = search(
        position.board(),
        position.side_to_move(),
        position.notes(),
        config,
    )
    .unwrap();
    let (mv, score) = minimax(
        position.board(),
        position.side_to_move(),
        position.notes(),
        config.depth,
        config,
    );
    assert_eq!(pruned.best_move, mv, "move differs for {fen} at depth {}", config.depth);
    assert_eq!(pruned.score, score, "score differs for {fen} at depth {}", config.depth);
}

#[test]
fn alphabeta_matches_minimax() {
    for fen in FIXTURES {
        for depth in 1..=3 {
            assert_matches_minimax(fen, &SearchConfig::with_depth(depth));
        }
    }
}

#[test]
fn alphabeta_matches_minimax_with_reference_generator() {
    for fen in FIXTURES.iter().take(4) {
        for depth in 1..=2 {
            let config = SearchConfig {
                depth,
                legality: Legality::Reference,
                ..SearchConfig::default()
            };
            assert_matches_minimax(fen, &config);
        }
    }
}

#[test]
fn alphabeta_prunes() {
    let position = Position::new();
    let result = search(
        position.board(),
        position.side_to_move(),
        position.notes(),
        &SearchConfig::with_depth(3),
    )
    .unwrap();
    // Full tree is 1 + 20 + 400 + 8902 nodes.
    assert!(result.cutoffs > 0);
    assert!(result.nodes < 1 + 20 + 400 + 8902);
}

#[test]
fn search_is_deterministic() {
    let position = Position::new();
    let config = SearchConfig::with_depth(2);
    let first = search(position.board(), Color::White, position.notes(), &config).unwrap();
    let second = search(position.board(), Color::White, position.notes(), &config).unwrap();
    assert_eq!(first, second);
}

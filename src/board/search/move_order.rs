//! Static move ordering for alpha-beta.

use std::cmp::Reverse;

use super::super::{Board, Move, MoveKind, Piece};

/// Flat bonus that lifts castling above quiet moves.
const CASTLE_SCORE: i32 = 2;

/// Ordering score in pawn units: victim value times ten for captures (en
/// passant counts as a pawn), plus the promoted piece's value, or a flat
/// castling bonus.
pub fn move_score(board: &Board, mv: Move) -> i32 {
    match mv.kind() {
        MoveKind::Castle(_) => CASTLE_SCORE,
        MoveKind::EnPassant => Piece::Pawn.value() * 10,
        MoveKind::Normal | MoveKind::Promotion(_) => {
            let capture = board.piece_at(mv.to()).map_or(0, |victim| victim.piece.value() * 10);
            capture + mv.promotion_piece().map_or(0, Piece::value)
        }
    }
}

/// Sort `moves` best first. Equal scores keep generation order.
pub fn order_moves(board: &Board, moves: &mut [Move]) {
    moves.sort_by_cached_key(|&mv| Reverse(move_score(board, mv)));
}

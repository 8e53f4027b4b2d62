use super::super::attacks::KNIGHT_TARGETS;
use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, side: Color, moves: &mut MoveList) {
        for &to in &KNIGHT_TARGETS[from.index()] {
            if self.piece_at(to).map_or(true, |p| p.color != side) {
                moves.push(Move::quiet(from, to));
            }
        }
    }
}

use super::super::{Board, Color, GameNotes, Move, MoveList, Piece, Square, PROMOTION_PIECES};

impl Board {
    pub(crate) fn generate_pawn_moves(
        &self,
        from: Square,
        side: Color,
        notes: &GameNotes,
        moves: &mut MoveList,
    ) {
        let dir = side.pawn_direction();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                push_pawn_move(moves, from, forward, side);
                if from.rank() == side.pawn_start_rank() {
                    if let Some(double) = forward.offset(dir, 0) {
                        if self.is_empty(double) {
                            moves.push(Move::quiet(from, double));
                        }
                    }
                }
            }
        }

        for df in [1, -1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(target) {
                Some(occupant) if occupant.color != side => {
                    push_pawn_move(moves, from, target, side);
                }
                Some(_) => {}
                None if notes.en_passant == Some(target) => {
                    let victim = target.offset(-dir, 0);
                    if victim.is_some_and(|sq| self.holds(sq, side.opponent(), Piece::Pawn)) {
                        moves.push(Move::en_passant(from, target));
                    }
                }
                None => {}
            }
        }
    }
}

/// Push a pawn move, branching into one move per promotion piece on the last rank.
fn push_pawn_move(moves: &mut MoveList, from: Square, to: Square, side: Color) {
    if to.rank() == side.pawn_promotion_rank() {
        for piece in PROMOTION_PIECES {
            moves.push(Move::promotion(from, to, piece));
        }
    } else {
        moves.push(Move::quiet(from, to));
    }
}

use super::super::attacks::{ray, KING_TARGETS};
use super::super::{Board, CastleSide, Color, GameNotes, Move, MoveList, Piece, Square};

impl Board {
    /// King steps onto squares that are not attacked on the current board.
    ///
    /// The king is not lifted before the test, so a slider it was shielding
    /// itself from still looks blocked. The strict generator catches those.
    pub(crate) fn generate_king_steps(&self, side: Color, king: Square, moves: &mut MoveList) {
        for &to in &KING_TARGETS[king.index()] {
            let friendly = self.piece_at(to).is_some_and(|p| p.color == side);
            if !friendly && self.attacker_count(side, to) == 0 {
                moves.push(Move::quiet(king, to));
            }
        }
    }

    pub(crate) fn generate_castles(
        &self,
        side: Color,
        king: Square,
        notes: &GameNotes,
        moves: &mut MoveList,
    ) {
        for castle in CastleSide::BOTH {
            if !self.can_castle(side, king, castle, notes) {
                continue;
            }
            if let Some(to) = Square::new(side.back_rank(), castle.king_target_file()) {
                moves.push(Move::castle(king, to, castle));
            }
        }
    }

    fn can_castle(&self, side: Color, king: Square, castle: CastleSide, notes: &GameNotes) -> bool {
        let rank = side.back_rank();
        if Square::new(rank, 4) != Some(king) || !notes.castling.has(side, castle) {
            return false;
        }

        let Some(rook) = Square::new(rank, castle.rook_file()) else {
            return false;
        };
        if !self.holds(rook, side, Piece::Rook) {
            return false;
        }

        let step = (0, castle.step());
        let path_clear = ray(king, step)
            .take_while(|&sq| sq != rook)
            .all(|sq| self.is_empty(sq));
        if !path_clear {
            return false;
        }

        // The king may not start on, cross, or land on an attacked square.
        std::iter::once(king)
            .chain(ray(king, step).take(2))
            .all(|sq| self.attacker_count(side, sq) == 0)
    }
}

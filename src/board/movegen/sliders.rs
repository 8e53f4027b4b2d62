use super::super::attacks::{ray, DIAGONALS, ORTHOGONALS};
use super::super::{Board, Color, Move, MoveList, Piece, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    pub(crate) fn of(piece: Piece) -> Option<SliderType> {
        match piece {
            Piece::Bishop => Some(SliderType::Bishop),
            Piece::Rook => Some(SliderType::Rook),
            Piece::Queen => Some(SliderType::Queen),
            _ => None,
        }
    }

    fn directions(self) -> &'static [(i8, i8)] {
        const QUEEN: [(i8, i8); 8] = [
            DIAGONALS[0],
            DIAGONALS[1],
            DIAGONALS[2],
            DIAGONALS[3],
            ORTHOGONALS[0],
            ORTHOGONALS[1],
            ORTHOGONALS[2],
            ORTHOGONALS[3],
        ];
        match self {
            SliderType::Bishop => &DIAGONALS,
            SliderType::Rook => &ORTHOGONALS,
            SliderType::Queen => &QUEEN,
        }
    }
}

impl Board {
    /// Every empty square along each ray, plus the first blocker if it is an enemy.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        side: Color,
        slider: SliderType,
        moves: &mut MoveList,
    ) {
        for &direction in slider.directions() {
            for to in ray(from, direction) {
                match self.piece_at(to) {
                    None => moves.push(Move::quiet(from, to)),
                    Some(occupant) => {
                        if occupant.color != side {
                            moves.push(Move::quiet(from, to));
                        }
                        break;
                    }
                }
            }
        }
    }
}

//! Static evaluation in centipawns, positive when White stands better.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, GameNotes, Piece, Square};

/// Scale from [`Piece::value`] (pawn units) to centipawns.
pub const CENTIPAWNS_PER_PAWN: i32 = 100;

/// Positional weights, in centipawns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvalWeights {
    /// Per knight or bishop that has left its home square.
    pub development: i32,
    /// Per non-king piece on d4, e4, d5 or e5.
    pub center: i32,
    /// Per non-king piece on the ring of squares around the centre.
    pub extended_center: i32,
    /// King on g- or c-file of its home rank with its castling rights spent.
    pub castled_king: i32,
    /// Per castling right given up without castling.
    pub forfeited_right: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            development: 10,
            center: 20,
            extended_center: 5,
            castled_king: 40,
            forfeited_right: 25,
        }
    }
}

fn on_home_square(color: Color, piece: Piece, square: Square) -> bool {
    if square.rank() != color.back_rank() {
        return false;
    }
    match piece {
        Piece::Knight => matches!(square.file(), 1 | 6),
        Piece::Bishop => matches!(square.file(), 2 | 5),
        _ => false,
    }
}

#[inline]
fn in_center(square: Square) -> bool {
    (3..=4).contains(&square.rank()) && (3..=4).contains(&square.file())
}

#[inline]
fn in_extended_center(square: Square) -> bool {
    (2..=5).contains(&square.rank()) && (2..=5).contains(&square.file()) && !in_center(square)
}

impl Board {
    /// Material balance in centipawns.
    pub fn material(&self) -> i32 {
        self.pieces()
            .map(|(_, p)| p.color.sign() * p.piece.value() * CENTIPAWNS_PER_PAWN)
            .sum()
    }

    /// True if `color`'s king sits on a castled square and no rights remain.
    pub fn has_castled(&self, color: Color, notes: &GameNotes) -> bool {
        self.king_square(color).is_some_and(|king| {
            king.rank() == color.back_rank()
                && matches!(king.file(), 2 | 6)
                && notes.castling.count(color) == 0
        })
    }

    fn king_safety(&self, color: Color, notes: &GameNotes, weights: &EvalWeights) -> i32 {
        if self.has_castled(color, notes) {
            weights.castled_king
        } else {
            let forfeited = 2 - notes.castling.count(color) as i32;
            -weights.forfeited_right * forfeited
        }
    }

    /// Material plus development, centre occupancy and king safety.
    pub fn evaluate(&self, notes: &GameNotes, weights: &EvalWeights) -> i32 {
        let mut score = 0;

        for (square, occupant) in self.pieces() {
            let piece = occupant.piece;
            let mut term = piece.value() * CENTIPAWNS_PER_PAWN;

            if matches!(piece, Piece::Knight | Piece::Bishop)
                && !on_home_square(occupant.color, piece, square)
            {
                term += weights.development;
            }

            if piece != Piece::King {
                if in_center(square) {
                    term += weights.center;
                } else if in_extended_center(square) {
                    term += weights.extended_center;
                }
            }

            score += occupant.color.sign() * term;
        }

        for color in Color::BOTH {
            score += color.sign() * self.king_safety(color, notes, weights);
        }

        score
    }
}

/// Evaluate with the default weights.
pub fn evaluate(board: &Board, notes: &GameNotes) -> i32 {
    board.evaluate(notes, &EvalWeights::default())
}

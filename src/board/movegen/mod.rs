//! Move generation.
//!
//! Moves come out in a fixed order: king steps, castles, then every other
//! piece from a1 to h8. Search relies on that order for tie-breaking.

mod kings;
mod knights;
mod pawns;
mod sliders;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use sliders::SliderType;

use super::{Board, Color, GameNotes, Move, MoveList, Piece, Position};

/// Which move generator to use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Legality {
    /// Every move that does not leave the mover's own king attacked.
    #[default]
    Strict,
    /// The lighter generator: king steps are checked against the current
    /// board and other pieces are only gated on double check, so pinned
    /// pieces may still move.
    Reference,
}

impl Board {
    /// Candidate moves for `side` without the final self-check filter.
    ///
    /// King destinations are tested with the king still on its square, and a
    /// double check restricts the list to king moves. Pinned pieces are not
    /// detected.
    pub fn pseudo_legal_moves(&self, side: Color, notes: &GameNotes) -> MoveList {
        let mut moves = MoveList::new();
        let king = self.king_square(side);

        if let Some(king) = king {
            self.generate_king_steps(side, king, &mut moves);
            self.generate_castles(side, king, notes, &mut moves);
            if self.attacker_count(side, king) >= 2 {
                return moves;
            }
        }

        for (from, piece) in self.pieces_of(side) {
            match piece {
                Piece::Pawn => self.generate_pawn_moves(from, side, notes, &mut moves),
                Piece::Knight => self.generate_knight_moves(from, side, &mut moves),
                Piece::King => {}
                _ => {
                    if let Some(slider) = SliderType::of(piece) {
                        self.generate_slider_moves(from, side, slider, &mut moves);
                    }
                }
            }
        }
        moves
    }

    /// Fully legal moves for `side`: the candidates that leave its king unattacked.
    pub fn legal_moves(&self, side: Color, notes: &GameNotes) -> MoveList {
        let mut moves = self.pseudo_legal_moves(side, notes);
        moves.retain(|&mv| self.leaves_king_safe(side, mv));
        moves
    }

    /// Moves for `side` under the chosen generator.
    pub fn moves_for(&self, side: Color, notes: &GameNotes, legality: Legality) -> MoveList {
        match legality {
            Legality::Strict => self.legal_moves(side, notes),
            Legality::Reference => self.pseudo_legal_moves(side, notes),
        }
    }

    fn leaves_king_safe(&self, side: Color, mv: Move) -> bool {
        let mut scratch = self.clone();
        scratch.relocate(mv).is_some() && !scratch.in_check(side)
    }
}

impl Position {
    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> MoveList {
        self.board.legal_moves(self.side_to_move, &self.notes)
    }

    pub fn pseudo_legal_moves(&self) -> MoveList {
        self.board.pseudo_legal_moves(self.side_to_move, &self.notes)
    }

    pub fn moves_for(&self, legality: Legality) -> MoveList {
        self.board
            .moves_for(self.side_to_move, &self.notes, legality)
    }

    /// True if `mv` is one of the legal moves here.
    pub fn is_legal(&self, mv: Move) -> bool {
        self.legal_moves().contains(&mv)
    }

    pub fn is_check(&self) -> bool {
        self.board.in_check(self.side_to_move)
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_check() && self.legal_moves().is_empty()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && self.legal_moves().is_empty()
    }

    /// Count leaf nodes of the legal move tree `depth` plies deep.
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .iter()
            .map(|&mv| self.child(mv).perft(depth - 1))
            .sum()
    }
}

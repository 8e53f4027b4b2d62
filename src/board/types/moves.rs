//! Move types and move list.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::Piece;
use super::square::Square;

/// What a move does beyond relocating one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Normal,
    /// Pawn capture of a pawn that just advanced two squares
    EnPassant,
    /// King move that also relocates the rook
    Castle(CastleSide),
    /// Pawn reaching the last rank, replaced by the given piece
    Promotion(Piece),
}

/// A move: origin, destination and its special-move tag.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    kind: MoveKind,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Move { from, to, kind }
    }

    /// Create a plain move (quiet or capture)
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move::new(from, to, MoveKind::Normal)
    }

    /// Create an en passant capture
    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move::new(from, to, MoveKind::EnPassant)
    }

    /// Create a castle move; `from`/`to` are the king's squares
    #[inline]
    #[must_use]
    pub const fn castle(from: Square, to: Square, side: CastleSide) -> Self {
        Move::new(from, to, MoveKind::Castle(side))
    }

    /// Create a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(from: Square, to: Square, piece: Piece) -> Self {
        Move::new(from, to, MoveKind::Promotion(piece))
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    /// Returns true if this move is en passant
    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    /// Returns true if this move is castling (kingside or queenside)
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }

    #[inline]
    #[must_use]
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self.kind {
            MoveKind::Castle(side) => Some(side),
            _ => None,
        }
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion_piece(self) -> Option<Piece> {
        match self.kind {
            MoveKind::Promotion(piece) => Some(piece),
            _ => None,
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        match self.kind {
            MoveKind::Normal => {}
            MoveKind::EnPassant => write!(f, " ep")?,
            MoveKind::Castle(CastleSide::Kingside) => write!(f, " O-O")?,
            MoveKind::Castle(CastleSide::Queenside) => write!(f, " O-O-O")?,
            MoveKind::Promotion(piece) => write!(f, "={}", piece.to_char().to_ascii_uppercase())?,
        }
        write!(f, ")")
    }
}

/// Coordinate text: `e2e4`, `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion_piece() {
            write!(f, "{}", piece.to_char())?;
        }
        Ok(())
    }
}

/// Moves produced by the generator, in generation order.
pub type MoveList = Vec<Move>;

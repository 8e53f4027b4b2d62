//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Which wing a castle goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// File of the rook's home corner
    #[inline]
    #[must_use]
    pub const fn rook_file(self) -> usize {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// File the rook lands on after castling
    #[inline]
    #[must_use]
    pub const fn rook_target_file(self) -> usize {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// File the king lands on after castling
    #[inline]
    #[must_use]
    pub const fn king_target_file(self) -> usize {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// Step from the king towards the rook along the back rank
    #[inline]
    #[must_use]
    pub(crate) const fn step(self) -> i8 {
        match self {
            CastleSide::Kingside => 1,
            CastleSide::Queenside => -1,
        }
    }
}

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & castle_bit(color, side) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, side: CastleSide) {
        self.0 |= castle_bit(color, side);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !castle_bit(color, side);
    }

    /// Remove both rights of one color (its king moved)
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, CastleSide::Kingside);
        self.remove(color, CastleSide::Queenside);
    }

    /// Remove the right tied to a rook home corner. Other squares are ignored.
    pub fn remove_corner(&mut self, square: Square) {
        if let Some((color, side)) = corner_owner(square) {
            self.remove(color, side);
        }
    }

    /// Number of rights still held by `color` (0-2)
    #[inline]
    #[must_use]
    pub const fn count(self, color: Color) -> u32 {
        self.has(color, CastleSide::Kingside) as u32 + self.has(color, CastleSide::Queenside) as u32
    }

    /// Get the raw bitmask value
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

pub(crate) const fn castle_bit(color: Color, side: CastleSide) -> u8 {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => CASTLE_WHITE_K,
        (Color::White, CastleSide::Queenside) => CASTLE_WHITE_Q,
        (Color::Black, CastleSide::Kingside) => CASTLE_BLACK_K,
        (Color::Black, CastleSide::Queenside) => CASTLE_BLACK_Q,
    }
}

/// The castling right whose rook starts on `square`.
fn corner_owner(square: Square) -> Option<(Color, CastleSide)> {
    match square {
        Square::A1 => Some((Color::White, CastleSide::Queenside)),
        Square::H1 => Some((Color::White, CastleSide::Kingside)),
        Square::A8 => Some((Color::Black, CastleSide::Queenside)),
        Square::H8 => Some((Color::Black, CastleSide::Kingside)),
        _ => None,
    }
}

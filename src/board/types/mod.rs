//! Core chess types.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Piece`, `Color` and `ColoredPiece` - piece kinds, sides, and a piece on a square
//! - `Square` - board square stored as its 0-63 index
//! - `Move`, `MoveKind` and `MoveList` - move representation
//! - `CastlingRights` and `CastleSide` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveKind, MoveList};
pub use piece::{Color, ColoredPiece, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;

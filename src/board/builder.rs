//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Piece, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square::E1, Color::White, Piece::King)
//!     .piece(Square::E8, Color::Black, Piece::King)
//!     .piece("a2".parse().unwrap(), Color::White, Piece::Pawn)
//!     .side_to_move(Color::Black)
//!     .build();
//! assert_eq!(position.to_fen(), "4k3/8/8/8/8/8/P7/4K3 b - - 0 1");
//! ```

use super::{Board, CastleSide, CastlingRights, Color, GameNotes, Piece, Position, Square};

/// A fluent builder for [`Position`] values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    board: Board,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// An empty board, White to move, no castling rights.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The standard initial position with all castling rights.
    #[must_use]
    pub fn starting_position() -> Self {
        PositionBuilder {
            board: Board::new(),
            castling: CastlingRights::all(),
            ..Self::new()
        }
    }

    /// Place a piece, replacing whatever stood on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.set_piece(square, color, piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.take(square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Grant one castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, side: CastleSide) -> Self {
        self.castling.set(color, side);
        self
    }

    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling = CastlingRights::none();
        self
    }

    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant = Some(target);
        self
    }

    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Set the fullmove number; values below 1 are raised to 1.
    #[must_use]
    pub fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number.max(1);
        self
    }

    /// Build the position, seeding its repetition table.
    #[must_use]
    pub fn build(self) -> Position {
        let mut notes = GameNotes::new();
        notes.castling = self.castling;
        notes.en_passant = self.en_passant;
        notes.halfmove_clock = self.halfmove_clock;
        notes.fullmove_number = self.fullmove_number;
        notes.ply =
            (self.fullmove_number - 1) * 2 + u32::from(self.side_to_move == Color::Black);
        Position::from_parts(self.board, self.side_to_move, notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::STARTING_FEN;

    #[test]
    fn test_starting_position() {
        let built = PositionBuilder::starting_position().build();
        assert_eq!(built.to_fen(), STARTING_FEN);
        assert_eq!(built, Position::new());
    }

    #[test]
    fn test_castling_rights() {
        let position = PositionBuilder::starting_position()
            .no_castling_rights()
            .castle(Color::White, CastleSide::Kingside)
            .build();
        let rights = position.notes().castling();
        assert!(rights.has(Color::White, CastleSide::Kingside));
        assert!(!rights.has(Color::White, CastleSide::Queenside));
        assert_eq!(rights.count(Color::Black), 0);
    }

    #[test]
    fn test_clocks_and_ply() {
        let position = PositionBuilder::new()
            .piece(Square::E1, Color::White, Piece::King)
            .piece(Square::E8, Color::Black, Piece::King)
            .side_to_move(Color::Black)
            .halfmove_clock(7)
            .fullmove_number(12)
            .build();
        assert_eq!(position.notes().ply(), 23);
        assert_eq!(position.to_fen(), "4k3/8/8/8/8/8/8/4K3 b - - 7 12");
    }

    #[test]
    fn test_clear_square() {
        let position = PositionBuilder::starting_position().clear(Square::A1).build();
        assert!(position.board().is_empty(Square::A1));
        assert!(!position.board().is_empty("b1".parse().unwrap()));
    }
}

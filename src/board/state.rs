use std::fmt;

use super::fen::position_key;
use super::history::RepetitionTable;
use super::{CastlingRights, Color, ColoredPiece, Piece, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Piece placement: 64 squares in index order, a1 first.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<ColoredPiece>; 64],
}

impl Board {
    /// The standard starting placement.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            for color in Color::BOTH {
                if let Some(sq) = Square::new(color.back_rank(), file) {
                    board.set_piece(sq, color, *piece);
                }
                if let Some(sq) = Square::new(color.pawn_start_rank(), file) {
                    board.set_piece(sq, color, Piece::Pawn);
                }
            }
        }
        board
    }

    /// A board with no pieces.
    pub fn empty() -> Self {
        Board { squares: [None; 64] }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<ColoredPiece> {
        self.squares[square.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    /// True if `square` holds `color`'s `piece`.
    #[inline]
    #[must_use]
    pub fn holds(&self, square: Square, color: Color, piece: Piece) -> bool {
        self.piece_at(square) == Some(ColoredPiece::new(color, piece))
    }

    pub fn set_piece(&mut self, square: Square, color: Color, piece: Piece) {
        self.squares[square.index()] = Some(ColoredPiece::new(color, piece));
    }

    pub(crate) fn put(&mut self, square: Square, occupant: Option<ColoredPiece>) {
        self.squares[square.index()] = occupant;
    }

    /// Remove and return whatever stands on `square`.
    pub fn take(&mut self, square: Square) -> Option<ColoredPiece> {
        self.squares[square.index()].take()
    }

    /// Occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Squares holding `color`'s pieces, in index order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces()
            .filter(move |(_, p)| p.color == color)
            .map(|(sq, p)| (sq, p.piece))
    }

    /// Location of `color`'s king. With several kings the last one in index order wins.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .filter(|(_, piece)| *piece == Piece::King)
            .map(|(sq, _)| sq)
            .last()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagram with rank 8 at the top, FEN letters for pieces and `.` for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = Square::new(rank, file)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', ColoredPiece::to_fen_char);
                write!(f, "{c}")?;
                if file < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", super::fen::placement(self))
    }
}

/// Everything about a position besides placement and side to move.
///
/// Notes are plain values: search branches and notation lookahead clone them
/// before applying a move so the live game is never touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameNotes {
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) ply: u32,
    pub(crate) repetitions: RepetitionTable,
    pub(crate) last_key: String,
    pub(crate) threefold: bool,
}

impl GameNotes {
    /// Notes for a fresh game: all castling rights, no en passant target.
    pub fn new() -> Self {
        GameNotes {
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            ply: 0,
            repetitions: RepetitionTable::new(),
            last_key: String::new(),
            threefold: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[inline]
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Key of the most recently recorded position.
    pub fn last_key(&self) -> &str {
        &self.last_key
    }

    /// How often the position with this key has been recorded.
    pub fn repetition_count(&self, key: &str) -> u32 {
        self.repetitions.get(key)
    }

    /// Set once any position has been recorded three times. Never clears.
    #[inline]
    #[must_use]
    pub fn is_threefold(&self) -> bool {
        self.threefold
    }

    /// Count the position `board` with `side_to_move` in the repetition table.
    pub(crate) fn record_position(&mut self, board: &Board, side_to_move: Color, reset: bool) {
        if reset {
            self.repetitions.clear();
        }
        let key = position_key(board, side_to_move, self);
        let count = self.repetitions.increment(&key);
        self.last_key = key;
        if count >= 3 {
            self.threefold = true;
        }
    }
}

impl Default for GameNotes {
    fn default() -> Self {
        Self::new()
    }
}

/// A board, the side to move, and the notes that go with them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) notes: GameNotes,
}

impl Position {
    /// The standard starting position, recorded once in its repetition table.
    pub fn new() -> Self {
        Position::from_parts(Board::new(), Color::White, GameNotes::new())
    }

    /// Assemble a position and seed a fresh repetition table with it.
    pub fn from_parts(board: Board, side_to_move: Color, mut notes: GameNotes) -> Self {
        notes.record_position(&board, side_to_move, true);
        Position {
            board,
            side_to_move,
            notes,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn notes(&self) -> &GameNotes {
        &self.notes
    }

    /// Repetition key of the current position.
    pub fn key(&self) -> String {
        position_key(&self.board, self.side_to_move, &self.notes)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

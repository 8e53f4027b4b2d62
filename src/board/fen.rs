use std::fmt;
use std::str::FromStr;

use log::debug;

use super::error::FenError;
use super::{
    Board, CastleSide, CastlingRights, Color, ColoredPiece, GameNotes, Position, Square,
};

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// First FEN field: ranks 8 to 1, runs of empty squares as digits.
pub(crate) fn placement(board: &Board) -> String {
    let mut rows: Vec<String> = Vec::with_capacity(8);
    for rank in (0..8).rev() {
        let mut row = String::new();
        let mut empty = 0;
        for file in 0..8 {
            match Square::new(rank, file).and_then(|sq| board.piece_at(sq)) {
                Some(occupant) => {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(occupant.to_fen_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            row.push_str(&empty.to_string());
        }
        rows.push(row);
    }
    rows.join("/")
}

fn castling_field(rights: CastlingRights) -> String {
    let mut field = String::new();
    for (color, side, letter) in [
        (Color::White, CastleSide::Kingside, 'K'),
        (Color::White, CastleSide::Queenside, 'Q'),
        (Color::Black, CastleSide::Kingside, 'k'),
        (Color::Black, CastleSide::Queenside, 'q'),
    ] {
        if rights.has(color, side) {
            field.push(letter);
        }
    }
    if field.is_empty() {
        field.push('-');
    }
    field
}

/// The first four FEN fields: placement, side to move, castling, en passant.
///
/// Clocks are left out so that transpositions share a key.
pub fn position_key(board: &Board, side_to_move: Color, notes: &GameNotes) -> String {
    let en_passant = notes
        .en_passant
        .map_or_else(|| "-".to_string(), |sq| sq.to_string());
    format!(
        "{} {} {} {}",
        placement(board),
        side_to_move.to_fen_char(),
        castling_field(notes.castling),
        en_passant
    )
}

/// Full six-field FEN.
pub fn to_fen(board: &Board, side_to_move: Color, notes: &GameNotes) -> String {
    format!(
        "{} {} {}",
        position_key(board, side_to_move, notes),
        notes.halfmove_clock,
        notes.fullmove_number
    )
}

fn parse_placement(field: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx;
        let mut file = 0;
        for c in rank_str.chars() {
            if let Some(run) = c.to_digit(10) {
                file += run as usize;
                continue;
            }
            let occupant =
                ColoredPiece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            let square = Square::new(rank, file).ok_or(FenError::BadRankWidth {
                rank: rank + 1,
                files: file + 1,
            })?;
            board.put(square, Some(occupant));
            file += 1;
        }
        if file != 8 {
            return Err(FenError::BadRankWidth {
                rank: rank + 1,
                files: file,
            });
        }
    }
    Ok(board)
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        match c {
            'K' => rights.set(Color::White, CastleSide::Kingside),
            'Q' => rights.set(Color::White, CastleSide::Queenside),
            'k' => rights.set(Color::Black, CastleSide::Kingside),
            'q' => rights.set(Color::Black, CastleSide::Queenside),
            _ => return Err(FenError::InvalidCastling { char: c }),
        }
    }
    Ok(rights)
}

impl Position {
    /// Parse a position from FEN.
    ///
    /// Only placement and side to move are required; missing castling,
    /// en passant and clock fields default to `-`, `-`, `0` and `1`. The
    /// result carries a fresh repetition table holding just this position.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::{Color, Position};
    ///
    /// let position = Position::from_fen("4k3/8/8/8/8/8/8/4K2R b K").unwrap();
    /// assert_eq!(position.side_to_move(), Color::Black);
    /// assert_eq!(position.to_fen(), "4k3/8/8/8/8/8/8/4K2R b K - 0 1");
    /// ```
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let board = parse_placement(parts[0])?;

        let side_to_move = match parts[1].to_ascii_lowercase().as_str() {
            "w" => Color::White,
            "b" => Color::Black,
            _ => {
                return Err(FenError::InvalidSideToMove {
                    found: parts[1].to_string(),
                })
            }
        };

        let mut notes = GameNotes::new();
        notes.castling = parse_castling(parts.get(2).copied().unwrap_or("-"))?;

        notes.en_passant = match parts.get(3).copied().unwrap_or("-") {
            "-" => None,
            text => Some(text.parse::<Square>().map_err(|_| {
                FenError::InvalidEnPassant {
                    found: text.to_string(),
                }
            })?),
        };

        if let Some(text) = parts.get(4) {
            notes.halfmove_clock =
                text.parse()
                    .map_err(|_| FenError::InvalidHalfmoveClock {
                        found: text.to_string(),
                    })?;
        }

        let black_to_move = u32::from(side_to_move == Color::Black);
        if let Some(text) = parts.get(5) {
            let invalid = || FenError::InvalidFullmoveNumber {
                found: text.to_string(),
            };
            let fullmove: u32 = text.parse().ok().filter(|&n| n >= 1).ok_or_else(invalid)?;
            // The ply counter must fit as well.
            notes.ply = (fullmove - 1)
                .checked_mul(2)
                .and_then(|ply| ply.checked_add(black_to_move))
                .ok_or_else(invalid)?;
            notes.fullmove_number = fullmove;
        } else {
            notes.ply = black_to_move;
        }

        let position = Position::from_parts(board, side_to_move, notes);
        debug!("loaded position {}", position.to_fen());
        Ok(position)
    }

    /// Six-field FEN of this position.
    #[must_use]
    pub fn to_fen(&self) -> String {
        to_fen(&self.board, self.side_to_move, &self.notes)
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

/// Displays as FEN.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    #[test]
    fn test_starting_fen_round_trip() {
        assert_eq!(Position::new().to_fen(), STARTING_FEN);
        let parsed: Position = STARTING_FEN.parse().unwrap();
        assert_eq!(parsed, Position::new());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let position = Position::from_fen("8/8/8/8/8/8/8/K6k B").unwrap();
        assert_eq!(position.side_to_move(), Color::Black);
        assert_eq!(position.notes().castling(), CastlingRights::none());
        assert_eq!(position.notes().en_passant(), None);
        assert_eq!(position.notes().halfmove_clock(), 0);
        assert_eq!(position.notes().fullmove_number(), 1);
        assert_eq!(position.notes().ply(), 1);
    }

    #[test]
    fn test_huge_clocks() {
        let err = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 4294967295").unwrap_err();
        assert_eq!(
            err,
            FenError::InvalidFullmoveNumber {
                found: "4294967295".to_string()
            }
        );

        let largest = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 2147483648").unwrap();
        assert_eq!(largest.notes().ply(), u32::MAX - 1);
        assert!(Position::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 2147483649").is_err());

        let clock = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 4294967295 1").unwrap();
        assert_eq!(clock.notes().halfmove_clock(), u32::MAX);
    }

    #[test]
    fn test_ply_from_fullmove_number() {
        let position =
            Position::from_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2")
                .unwrap();
        assert_eq!(position.notes().ply(), 2);
        assert_eq!(position.notes().en_passant(), "e6".parse().ok());
    }

    #[test]
    fn test_placement_errors() {
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8 w"),
            Err(FenError::WrongRankCount { found: 7 })
        );
        assert_eq!(
            Position::from_fen("9/8/8/8/8/8/8/8 w"),
            Err(FenError::BadRankWidth { rank: 8, files: 9 })
        );
        assert_eq!(
            Position::from_fen("7/8/8/8/8/8/8/8 w"),
            Err(FenError::BadRankWidth { rank: 8, files: 7 })
        );
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8/KKKKKKKKK w"),
            Err(FenError::BadRankWidth { rank: 1, files: 9 })
        );
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8/7x w"),
            Err(FenError::InvalidPiece { char: 'x' })
        );
    }

    #[test]
    fn test_field_errors() {
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8/8"),
            Err(FenError::TooFewParts { found: 1 })
        );
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/8 x"),
            Err(FenError::InvalidSideToMove { .. })
        ));
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8/8 w KX"),
            Err(FenError::InvalidCastling { char: 'X' })
        );
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/8 w - e9"),
            Err(FenError::InvalidEnPassant { .. })
        ));
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/8 w - - -1 1"),
            Err(FenError::InvalidHalfmoveClock { .. })
        ));
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/8 w - - 0 0"),
            Err(FenError::InvalidFullmoveNumber { .. })
        ));
    }

    #[test]
    fn test_key_drops_clocks() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 12 40").unwrap();
        assert_eq!(position.key(), "4k3/8/8/8/8/8/8/4K2R w K -");
        assert_eq!(position.to_string(), "4k3/8/8/8/8/8/8/4K2R w K - 12 40");
        assert!(position
            .board()
            .holds(Square::H1, Color::White, Piece::Rook));
    }
}

//! Standard Algebraic Notation and coordinate move text.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::MoveParseError;
use super::{
    Board, CastleSide, Color, GameNotes, Move, MoveKind, Piece, Position, Square, PROMOTION_PIECES,
};

/// How a committed move is shown to callers: coordinate text and SAN.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub coordinate: String,
    pub san: String,
}

impl MoveRecord {
    /// SAN when available, coordinate text otherwise.
    pub fn display_text(&self) -> &str {
        if self.san.is_empty() {
            &self.coordinate
        } else {
            &self.san
        }
    }
}

/// Coordinate text of a move: `e2e4`, `e7e8q`.
pub fn move_to_coordinate(mv: Move) -> String {
    mv.to_string()
}

fn san_letter(piece: Piece) -> char {
    piece.to_char().to_ascii_uppercase()
}

fn file_letter(square: Square) -> char {
    (b'a' + square.file() as u8) as char
}

/// Origin qualifier for a piece move whose destination another piece of the
/// same kind can also reach: file if that is unique, else rank, else square.
fn disambiguation(board: &Board, mv: Move, legal: &[Move]) -> String {
    let Some(moving) = board.piece_at(mv.from()) else {
        return String::new();
    };
    if moving.piece == Piece::Pawn {
        return String::new();
    }

    let rivals: Vec<Square> = legal
        .iter()
        .filter(|other| other.from() != mv.from() && other.to() == mv.to())
        .filter(|other| board.piece_at(other.from()).map(|p| p.piece) == Some(moving.piece))
        .map(|other| other.from())
        .collect();

    if rivals.is_empty() {
        return String::new();
    }

    let from = mv.from();
    if rivals.iter().all(|sq| sq.file() != from.file()) {
        file_letter(from).to_string()
    } else if rivals.iter().all(|sq| sq.rank() != from.rank()) {
        (from.rank() + 1).to_string()
    } else {
        from.to_string()
    }
}

/// SAN for `mv` played by `side`. `legal` is the full legal move list of the
/// position, used for disambiguation.
///
/// The check suffix comes from playing the move on a scratch copy: `#` if the
/// opponent is in check with no legal reply, `+` if merely in check.
pub fn move_to_san(
    board: &Board,
    side: Color,
    notes: &GameNotes,
    mv: Move,
    legal: &[Move],
) -> String {
    let mut san = match mv.kind() {
        MoveKind::Castle(CastleSide::Kingside) => "O-O".to_string(),
        MoveKind::Castle(CastleSide::Queenside) => "O-O-O".to_string(),
        _ => {
            let piece = board.piece_at(mv.from()).map_or(Piece::Pawn, |p| p.piece);
            let capture = mv.is_en_passant()
                || board.piece_at(mv.to()).is_some_and(|p| p.color != side);

            let mut text = String::new();
            if piece == Piece::Pawn {
                if capture {
                    text.push(file_letter(mv.from()));
                }
            } else {
                text.push(san_letter(piece));
                text.push_str(&disambiguation(board, mv, legal));
            }
            if capture {
                text.push('x');
            }
            text.push_str(&mv.to().to_string());
            if let Some(promoted) = mv.promotion_piece() {
                text.push('=');
                text.push(san_letter(promoted));
            }
            text
        }
    };

    let mut notes_after = notes.clone();
    let board_after = board.apply_move(mv, &mut notes_after);
    let opponent = side.opponent();
    if board_after.in_check(opponent) {
        if board_after.legal_moves(opponent, &notes_after).is_empty() {
            san.push('#');
        } else {
            san.push('+');
        }
    }
    san
}

/// Canonical form used to compare SAN tokens: `0` read as `O`, trailing
/// `+#?!` stripped, `e.p.` removed.
pub fn normalize_san(token: &str) -> String {
    let mut normalized = token
        .trim()
        .replace('0', "O")
        .trim_end_matches(|c: char| matches!(c, '+' | '#' | '?' | '!'))
        .to_string();
    while let Some(at) = normalized.to_ascii_lowercase().find("e.p.") {
        normalized.replace_range(at..at + 4, "");
    }
    normalized
}

impl Position {
    /// SAN of `mv` in this position.
    pub fn san(&self, mv: Move) -> String {
        let legal = self.legal_moves();
        move_to_san(&self.board, self.side_to_move, &self.notes, mv, &legal)
    }

    /// The record shown for `mv`: coordinate text plus SAN.
    pub fn record(&self, mv: Move) -> MoveRecord {
        MoveRecord {
            coordinate: move_to_coordinate(mv),
            san: self.san(mv),
        }
    }

    /// Resolve move text to a legal move.
    ///
    /// SAN is tried first against every legal move. Failing that the token
    /// is read as coordinates (`e2e4`, `e7e8q`); without a promotion letter
    /// the first matching move is taken.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Position;
    ///
    /// let position = Position::new();
    /// let by_san = position.parse_move("Nf3").unwrap();
    /// let by_coordinates = position.parse_move("g1f3").unwrap();
    /// assert_eq!(by_san, by_coordinates);
    /// ```
    pub fn parse_move(&self, token: &str) -> Result<Move, MoveParseError> {
        let cleaned = token.trim().replace('0', "O");
        if cleaned.is_empty() {
            return Err(MoveParseError::Empty);
        }

        let legal = self.legal_moves();
        let wanted = normalize_san(&cleaned);
        for &mv in &legal {
            let san = move_to_san(&self.board, self.side_to_move, &self.notes, mv, &legal);
            if normalize_san(&san) == wanted {
                return Ok(mv);
            }
        }

        self.parse_coordinate(&cleaned, &legal)
    }

    fn parse_coordinate(&self, cleaned: &str, legal: &[Move]) -> Result<Move, MoveParseError> {
        let chars: Vec<char> = cleaned
            .to_ascii_lowercase()
            .chars()
            .filter(|&c| !matches!(c, '+' | '#' | '?' | '!'))
            .collect();
        let no_match = || MoveParseError::NoMatchingMove {
            token: cleaned.to_string(),
        };
        if !(4..=5).contains(&chars.len()) {
            return Err(no_match());
        }

        let square = |pair: &[char]| pair.iter().collect::<String>().parse::<Square>().ok();
        let (Some(from), Some(to)) = (square(&chars[0..2]), square(&chars[2..4])) else {
            return Err(no_match());
        };

        let promotion = match chars.get(4) {
            None => None,
            Some(&c) => match Piece::from_char(c) {
                Some(piece) if PROMOTION_PIECES.contains(&piece) => Some(piece),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        let mut candidates = legal.iter().filter(|m| m.from() == from && m.to() == to);
        let found = match promotion {
            None => candidates.next(),
            Some(piece) => candidates.find(|m| m.promotion_piece() == Some(piece)),
        };
        found.copied().ok_or_else(|| MoveParseError::IllegalMove {
            notation: chars.iter().collect(),
        })
    }
}

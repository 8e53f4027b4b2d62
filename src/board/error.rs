//! Error types for chess board operations.

use std::fmt;

use super::Color;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least placement and side to move)
    TooFewParts { found: usize },
    /// Placement field does not have 8 ranks
    WrongRankCount { found: usize },
    /// A rank does not describe exactly 8 files
    BadRankWidth { rank: usize, files: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove clock is not a non-negative integer
    InvalidHalfmoveClock { found: String },
    /// Fullmove number is not a positive integer
    InvalidFullmoveNumber { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(
                    f,
                    "FEN needs at least piece placement and side to move, found {found} part(s)"
                )
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN piece placement must have 8 ranks, found {found}")
            }
            FenError::BadRankWidth { rank, files } => {
                write!(f, "FEN rank {rank} covers {files} files, expected 8")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidHalfmoveClock { found } => {
                write!(f, "Invalid halfmove clock '{found}'")
            }
            FenError::InvalidFullmoveNumber { found } => {
                write!(f, "Invalid fullmove number '{found}'")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Empty move token
    Empty,
    /// Invalid promotion piece
    InvalidPromotion { char: char },
    /// Neither SAN nor coordinate text matches a legal move
    NoMatchingMove { token: String },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::Empty => write!(f, "Empty move text"),
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveParseError::NoMatchingMove { token } => {
                write!(f, "No legal move matches '{token}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for PGN import failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PgnError {
    /// A movetext token did not match any legal move; `ply` counts from 0
    UnmatchedToken {
        ply: usize,
        token: String,
        source: MoveParseError,
    },
    /// The `[FEN "..."]` tag does not hold a valid position
    InvalidFenTag(FenError),
}

impl fmt::Display for PgnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PgnError::UnmatchedToken { ply, token, source } => {
                write!(f, "PGN move {} '{token}' could not be played: {source}", ply + 1)
            }
            PgnError::InvalidFenTag(err) => write!(f, "Invalid FEN tag in PGN: {err}"),
        }
    }
}

impl std::error::Error for PgnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PgnError::UnmatchedToken { source, .. } => Some(source),
            PgnError::InvalidFenTag(err) => Some(err),
        }
    }
}

impl From<FenError> for PgnError {
    fn from(err: FenError) -> Self {
        PgnError::InvalidFenTag(err)
    }
}

/// Error type for search preconditions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The given side has no king on the board
    MissingKing(Color),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::MissingKing(color) => write!(f, "{color} has no king on the board"),
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_error_too_few_parts() {
        let err = FenError::TooFewParts { found: 1 };
        assert!(err.to_string().contains('1'));
    }

    #[test]
    fn test_fen_error_rank_width() {
        let err = FenError::BadRankWidth { rank: 3, files: 9 };
        let text = err.to_string();
        assert!(text.contains('3'));
        assert!(text.contains('9'));
    }

    #[test]
    fn test_fen_error_invalid_side() {
        let err = FenError::InvalidSideToMove {
            found: "X".to_string(),
        };
        assert!(err.to_string().contains("'X'"));
    }

    #[test]
    fn test_move_error_no_match() {
        let err = MoveParseError::NoMatchingMove {
            token: "Qh7".to_string(),
        };
        assert!(err.to_string().contains("Qh7"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_pgn_error_reports_one_based_move() {
        let err = PgnError::UnmatchedToken {
            ply: 2,
            token: "Nf9".to_string(),
            source: MoveParseError::NoMatchingMove {
                token: "Nf9".to_string(),
            },
        };
        let text = err.to_string();
        assert!(text.contains("move 3"));
        assert!(text.contains("Nf9"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_pgn_error_from_fen_error() {
        let err: PgnError = FenError::TooFewParts { found: 1 }.into();
        assert!(matches!(err, PgnError::InvalidFenTag(_)));
    }

    #[test]
    fn test_search_error_names_color() {
        assert_eq!(
            SearchError::MissingKing(Color::Black).to_string(),
            "Black has no king on the board"
        );
    }
}

//! Chess rules, notation and search.
//!
//! A [`Position`] bundles the piece placement ([`Board`]), the side to move
//! and the [`GameNotes`] that go with them (castling rights, en passant
//! target, clocks, repetition history). Move generation, move application,
//! FEN/SAN/PGN text and the alpha-beta search all work on those three values.
//!
//! # Example
//! ```
//! use chess_rules::board::{best_move, Position, SearchConfig};
//!
//! let mut position = Position::new();
//! assert_eq!(position.legal_moves().len(), 20);
//!
//! let e4 = position.parse_move("e4").unwrap();
//! position.play(e4);
//! let reply = best_move(&position, &SearchConfig::with_depth(2)).unwrap();
//! assert!(reply.best_move.is_some());
//! ```

mod attacks;
mod builder;
mod error;
mod eval;
mod fen;
mod game;
mod history;
mod make_move;
mod movegen;
mod pgn;
pub mod prelude;
mod san;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, MoveParseError, PgnError, SearchError, SquareError};
pub use eval::{evaluate, EvalWeights, CENTIPAWNS_PER_PAWN};
pub use fen::{position_key, to_fen, STARTING_FEN};
pub use game::{Game, GameStatus};
pub use movegen::Legality;
pub use pgn::{
    build_pgn_text, pgn_move_tokens, pgn_result, pgn_tags, replay_pgn, replay_pgn_from,
    write_pgn, PgnReplay,
};
pub use san::{move_to_coordinate, move_to_san, normalize_san, MoveRecord};
pub use search::{
    best_move, find_best_move, move_score, order_moves, search, SearchConfig, SearchResult,
};
pub use state::{Board, GameNotes, Position};
pub use types::{
    CastleSide, CastlingRights, Color, ColoredPiece, Move, MoveKind, MoveList, Piece, Square,
};

pub(crate) use types::PROMOTION_PIECES;

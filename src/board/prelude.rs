//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let game = Game::new();
//! assert_eq!(game.position().side_to_move(), Color::White);
//! ```

pub use super::{
    best_move, Board, CastleSide, Color, FenError, Game, GameStatus, Move, MoveKind,
    MoveParseError, MoveRecord, Piece, Position, PositionBuilder, SearchConfig, SearchError,
    Square,
};

pub mod board;
pub mod console;

pub use board::{Board, Color, Game, Move, Piece, Position, Square};

//! A game in progress: starting position, current position and the record
//! of every committed move.

use std::fmt;

use log::{debug, info};

use super::error::{FenError, MoveParseError, PgnError, SearchError};
use super::pgn::{replay_pgn, write_pgn};
use super::search::{best_move, SearchConfig};
use super::{Color, Move, MoveRecord, Position};

/// Where a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    /// Some position has occurred three times.
    ThreefoldRepetition,
}

impl GameStatus {
    /// PGN result token for this status.
    pub fn result_token(self) -> &'static str {
        match self {
            GameStatus::Ongoing => "*",
            GameStatus::Checkmate {
                winner: Color::White,
            } => "1-0",
            GameStatus::Checkmate {
                winner: Color::Black,
            } => "0-1",
            GameStatus::Stalemate | GameStatus::ThreefoldRepetition => "1/2-1/2",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "in progress"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::ThreefoldRepetition => write!(f, "draw by threefold repetition"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Game {
    start: Position,
    position: Position,
    moves: Vec<Move>,
    history: Vec<MoveRecord>,
}

impl Game {
    /// A game from the standard starting position.
    pub fn new() -> Self {
        Game::from_position(Position::new())
    }

    pub fn from_position(start: Position) -> Self {
        Game {
            position: start.clone(),
            start,
            moves: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Position::from_fen(fen).map(Game::from_position)
    }

    #[inline]
    #[must_use]
    pub fn start(&self) -> &Position {
        &self.start
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Committed moves, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Notation records of the committed moves, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Commit `mv` if it is legal and return its record.
    pub fn play(&mut self, mv: Move) -> Result<MoveRecord, MoveParseError> {
        if !self.position.is_legal(mv) {
            return Err(MoveParseError::IllegalMove {
                notation: mv.to_string(),
            });
        }
        let record = self.position.record(mv);
        self.position.play(mv);
        self.moves.push(mv);
        self.history.push(record.clone());
        Ok(record)
    }

    /// Parse SAN or coordinate text and commit the move.
    pub fn play_token(&mut self, token: &str) -> Result<MoveRecord, MoveParseError> {
        let mv = self.position.parse_move(token)?;
        self.play(mv)
    }

    /// Restart from a FEN position. On error the game is left as it was.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        *self = Game::from_fen(fen)?;
        Ok(())
    }

    /// Replace the game with a replayed PGN. On error the game is left as it was.
    pub fn load_pgn(&mut self, text: &str) -> Result<(), PgnError> {
        let replay = replay_pgn(text)?;
        info!(
            "loaded PGN game of {} moves, result {}",
            replay.moves.len(),
            replay.result
        );
        *self = Game {
            start: replay.start,
            position: replay.position,
            moves: replay.moves,
            history: replay.records,
        };
        Ok(())
    }

    pub fn outcome(&self) -> GameStatus {
        if self.position.legal_moves().is_empty() {
            if self.position.is_check() {
                GameStatus::Checkmate {
                    winner: self.position.side_to_move().opponent(),
                }
            } else {
                GameStatus::Stalemate
            }
        } else if self.position.notes().is_threefold() {
            GameStatus::ThreefoldRepetition
        } else {
            GameStatus::Ongoing
        }
    }

    /// PGN of the game so far, with its result token.
    pub fn to_pgn(&self) -> String {
        write_pgn(
            &self.start,
            &self.history,
            Some(self.outcome().result_token()),
        )
    }

    /// Let the engine pick a move for the side to move and commit it.
    ///
    /// Returns `Ok(None)` when there is nothing to play.
    pub fn engine_move(&mut self, config: &SearchConfig) -> Result<Option<MoveRecord>, SearchError> {
        let result = best_move(&self.position, config)?;
        let Some(mv) = result.best_move else {
            return Ok(None);
        };
        debug!("engine plays {mv} (score {})", result.score);
        let record = self.position.record(mv);
        self.position.play(mv);
        self.moves.push(mv);
        self.history.push(record.clone());
        Ok(Some(record))
    }
}

//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! White maximizes and Black minimizes the static evaluation. Moves are
//! ordered by [`order_moves`] before recursion; cutoffs are fail-hard. Each
//! branch works on its own clone of the board and notes, so the caller's
//! position is never touched.

mod move_order;
mod params;

use log::{debug, trace};

pub use move_order::{move_score, order_moves};
pub use params::SearchConfig;

use super::error::SearchError;
use super::{Board, Color, GameNotes, Move, Position};

/// Window bound; stays well clear of overflow when negated.
pub(crate) const INFINITY: i32 = i32::MAX / 2;

/// Outcome of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` at depth zero or when the side to move has no moves.
    pub best_move: Option<Move>,
    /// Score of the chosen line, positive for White.
    pub score: i32,
    /// Positions visited, root included.
    pub nodes: u64,
    /// Sibling lists abandoned on a cutoff.
    pub cutoffs: u64,
}

struct Searcher<'a> {
    config: &'a SearchConfig,
    nodes: u64,
    cutoffs: u64,
}

impl<'a> Searcher<'a> {
    fn new(config: &'a SearchConfig) -> Self {
        Searcher {
            config,
            nodes: 0,
            cutoffs: 0,
        }
    }

    fn ordered_moves(&self, board: &Board, side: Color, notes: &GameNotes) -> Vec<Move> {
        let mut moves = board.moves_for(side, notes, self.config.legality);
        order_moves(board, &mut moves);
        moves
    }

    fn alpha_beta(
        &mut self,
        board: &Board,
        side: Color,
        notes: &GameNotes,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;
        if depth == 0 {
            return board.evaluate(notes, &self.config.weights);
        }

        let moves = self.ordered_moves(board, side, notes);
        if moves.is_empty() {
            return board.evaluate(notes, &self.config.weights);
        }

        for mv in moves {
            let mut child_notes = notes.clone();
            let child = board.apply_move(mv, &mut child_notes);
            let score =
                self.alpha_beta(&child, side.opponent(), &child_notes, depth - 1, alpha, beta);

            match side {
                Color::White => {
                    if score >= beta {
                        self.cutoffs += 1;
                        return beta;
                    }
                    alpha = alpha.max(score);
                }
                Color::Black => {
                    if score <= alpha {
                        self.cutoffs += 1;
                        return alpha;
                    }
                    beta = beta.min(score);
                }
            }
        }

        match side {
            Color::White => alpha,
            Color::Black => beta,
        }
    }

    fn root(&mut self, board: &Board, side: Color, notes: &GameNotes) -> SearchResult {
        self.nodes += 1;
        let depth = self.config.depth;
        let moves = if depth == 0 {
            Vec::new()
        } else {
            self.ordered_moves(board, side, notes)
        };

        if moves.is_empty() {
            return SearchResult {
                best_move: None,
                score: board.evaluate(notes, &self.config.weights),
                nodes: self.nodes,
                cutoffs: self.cutoffs,
            };
        }

        let (mut alpha, mut beta) = (-INFINITY, INFINITY);
        let mut best: Option<(Move, i32)> = None;

        for mv in moves {
            let mut child_notes = notes.clone();
            let child = board.apply_move(mv, &mut child_notes);
            let score =
                self.alpha_beta(&child, side.opponent(), &child_notes, depth - 1, alpha, beta);
            trace!("root {mv}: {score}");

            // Strict comparison: the first of equally scored moves stays.
            let improves = best.map_or(true, |(_, best_score)| match side {
                Color::White => score > best_score,
                Color::Black => score < best_score,
            });
            if improves {
                best = Some((mv, score));
                match side {
                    Color::White => alpha = alpha.max(score),
                    Color::Black => beta = beta.min(score),
                }
            }
        }

        SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score: best.map_or(0, |(_, score)| score),
            nodes: self.nodes,
            cutoffs: self.cutoffs,
        }
    }
}

fn require_kings(board: &Board) -> Result<(), SearchError> {
    match Color::BOTH
        .into_iter()
        .find(|&color| board.king_square(color).is_none())
    {
        Some(color) => Err(SearchError::MissingKing(color)),
        None => Ok(()),
    }
}

/// Search `side`'s moves on `board` to `config.depth` plies.
pub fn search(
    board: &Board,
    side: Color,
    notes: &GameNotes,
    config: &SearchConfig,
) -> Result<SearchResult, SearchError> {
    require_kings(board)?;
    debug!(
        "search start: {side} to move, depth {}, {:?}",
        config.depth, config.legality
    );

    let mut searcher = Searcher::new(config);
    let result = searcher.root(board, side, notes);

    debug!(
        "search done: best {:?} score {} nodes {} cutoffs {}",
        result.best_move.map(|mv| mv.to_string()),
        result.score,
        result.nodes,
        result.cutoffs
    );
    Ok(result)
}

/// Best move for the side to move in `position`.
///
/// # Example
/// ```
/// use chess_rules::board::{best_move, Position, SearchConfig};
///
/// let position: Position = "4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1".parse().unwrap();
/// let result = best_move(&position, &SearchConfig::with_depth(2)).unwrap();
/// assert_eq!(result.best_move.unwrap().to_string(), "d2d5");
/// ```
pub fn best_move(position: &Position, config: &SearchConfig) -> Result<SearchResult, SearchError> {
    search(&position.board, position.side_to_move, &position.notes, config)
}

/// Best move for `side` at `depth` with default settings otherwise.
pub fn find_best_move(
    board: &Board,
    side: Color,
    notes: &GameNotes,
    depth: u32,
) -> Result<Option<Move>, SearchError> {
    search(board, side, notes, &SearchConfig::with_depth(depth)).map(|result| result.best_move)
}

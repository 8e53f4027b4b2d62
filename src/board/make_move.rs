//! Applying moves to boards and positions.

use log::warn;

use super::{Board, Color, ColoredPiece, GameNotes, Move, MoveKind, Piece, Position, Square};

/// What a relocation did: the piece that moved and what it took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct MoveEffects {
    pub(crate) moved: ColoredPiece,
    pub(crate) captured: Option<ColoredPiece>,
}

impl Board {
    /// Move the pieces only: origin to destination, plus the en passant
    /// victim, the castling rook, or the promoted piece. Returns `None` and
    /// leaves the board untouched if the origin is empty.
    pub(crate) fn relocate(&mut self, mv: Move) -> Option<MoveEffects> {
        let moved = self.take(mv.from())?;
        let mut captured = self.take(mv.to());

        let placed = match mv.kind() {
            MoveKind::Promotion(piece) => ColoredPiece::new(moved.color, piece),
            _ => moved,
        };
        self.put(mv.to(), Some(placed));

        match mv.kind() {
            MoveKind::EnPassant => {
                if let Some(victim) = mv.to().offset(-moved.color.pawn_direction(), 0) {
                    captured = self.take(victim).or(captured);
                }
            }
            MoveKind::Castle(side) => {
                let rank = moved.color.back_rank();
                let corners = (
                    Square::new(rank, side.rook_file()),
                    Square::new(rank, side.rook_target_file()),
                );
                if let (Some(rook_from), Some(rook_to)) = corners {
                    let rook = self.take(rook_from);
                    self.put(rook_to, rook);
                }
            }
            MoveKind::Normal | MoveKind::Promotion(_) => {}
        }

        Some(MoveEffects { moved, captured })
    }

    /// Apply `mv` to this board and update `notes` to match.
    ///
    /// Updates the ply counter, en passant target, castling rights, clocks,
    /// and finally records the resulting position (opponent to move) in the
    /// repetition table.
    pub fn apply_move_in_place(&mut self, mv: Move, notes: &mut GameNotes) {
        let Some(MoveEffects { moved, captured }) = self.relocate(mv) else {
            warn!("ignoring move {mv} from empty square");
            return;
        };
        let mover = moved.color;

        notes.ply = notes.ply.saturating_add(1);
        notes.en_passant = None;

        match moved.piece {
            Piece::King => notes.castling.remove_color(mover),
            Piece::Rook => notes.castling.remove_corner(mv.from()),
            _ => {}
        }
        if captured.is_some() {
            notes.castling.remove_corner(mv.to());
        }

        let is_double_push =
            moved.piece == Piece::Pawn && mv.from().rank().abs_diff(mv.to().rank()) == 2;
        if is_double_push {
            notes.en_passant = mv.from().offset(mover.pawn_direction(), 0);
        }

        if moved.piece == Piece::Pawn || captured.is_some() {
            notes.halfmove_clock = 0;
        } else {
            notes.halfmove_clock = notes.halfmove_clock.saturating_add(1);
        }

        if mover == Color::Black {
            notes.fullmove_number = notes.fullmove_number.saturating_add(1);
        }

        notes.record_position(self, mover.opponent(), false);
    }

    /// Return a new board with `mv` applied; `self` is unchanged.
    #[must_use]
    pub fn apply_move(&self, mv: Move, notes: &mut GameNotes) -> Board {
        let mut next = self.clone();
        next.apply_move_in_place(mv, notes);
        next
    }
}

impl Position {
    /// Play `mv` on this position and hand the turn to the opponent.
    ///
    /// The move is not validated; callers check it against
    /// [`Position::legal_moves`] first. A move from an empty square is
    /// ignored.
    pub fn play(&mut self, mv: Move) {
        if self.board.piece_at(mv.from()).is_none() {
            warn!("ignoring move {mv} from empty square");
            return;
        }
        self.board.apply_move_in_place(mv, &mut self.notes);
        self.side_to_move = self.side_to_move.opponent();
    }

    /// The position after `mv`, leaving this one untouched.
    #[must_use]
    pub fn child(&self, mv: Move) -> Position {
        let mut next = self.clone();
        next.play(mv);
        next
    }
}

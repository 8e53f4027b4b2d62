//! Attack detection.
//!
//! Counts how many enemy pieces hit a square. The count doubles as a boolean
//! ("is this square attacked?") and as the double-check signal (two or more
//! attackers on the king).

use once_cell::sync::Lazy;

use super::{Board, Color, Piece, Square};

/// Knight jumps as (rank, file) steps, counter-clockwise from "two right, one up".
pub(crate) const KNIGHT_STEPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(crate) const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

fn neighbours(steps: &[(i8, i8)]) -> Vec<Vec<Square>> {
    Square::all()
        .map(|sq| {
            steps
                .iter()
                .filter_map(|&(dr, df)| sq.offset(dr, df))
                .collect()
        })
        .collect()
}

pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| neighbours(&KNIGHT_STEPS));
pub(crate) static KING_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| neighbours(&KING_STEPS));

/// Squares along one direction from `from`, excluding `from`, up to the board edge.
pub(crate) fn ray(from: Square, (dr, df): (i8, i8)) -> impl Iterator<Item = Square> {
    std::iter::successors(from.offset(dr, df), move |sq| sq.offset(dr, df))
}

impl Board {
    /// First occupied square along a ray, if any.
    pub(crate) fn first_blocker(&self, from: Square, direction: (i8, i8)) -> Option<Square> {
        ray(from, direction).find(|&sq| !self.is_empty(sq))
    }

    /// Number of `defending`'s opponents attacking `square`.
    ///
    /// Computed on the board as it stands: a piece of the defender standing
    /// on a ray (including its own king) blocks that ray.
    #[must_use]
    pub fn attacker_count(&self, defending: Color, square: Square) -> u32 {
        let enemy = defending.opponent();
        let mut count = 0;

        count += KNIGHT_TARGETS[square.index()]
            .iter()
            .filter(|&&sq| self.holds(sq, enemy, Piece::Knight))
            .count() as u32;

        for (directions, diagonal) in [(&DIAGONALS, true), (&ORTHOGONALS, false)] {
            for &direction in directions.iter() {
                let Some(blocker) = self.first_blocker(square, direction) else {
                    continue;
                };
                let Some(occupant) = self.piece_at(blocker) else {
                    continue;
                };
                let slides_here = if diagonal {
                    occupant.piece.attacks_diagonally()
                } else {
                    occupant.piece.attacks_straight()
                };
                if occupant.color == enemy && slides_here {
                    count += 1;
                }
            }
        }

        // Enemy pawns capture towards the defender, so they sit one rank ahead.
        for df in [-1, 1] {
            if let Some(sq) = square.offset(defending.pawn_direction(), df) {
                if self.holds(sq, enemy, Piece::Pawn) {
                    count += 1;
                }
            }
        }

        count += KING_TARGETS[square.index()]
            .iter()
            .filter(|&&sq| self.holds(sq, enemy, Piece::King))
            .count() as u32;

        count
    }

    /// True if any piece of `attacker` attacks `square`.
    #[inline]
    #[must_use]
    pub fn is_attacked_by(&self, square: Square, attacker: Color) -> bool {
        self.attacker_count(attacker.opponent(), square) > 0
    }

    /// True if `color`'s king stands on an attacked square. A board without
    /// that king is never in check.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_attacked_by(king, color.opponent()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn board(fen: &str) -> Board {
        fen.parse::<Position>().unwrap().board().clone()
    }

    #[test]
    fn test_tables_respect_edges() {
        assert_eq!(KNIGHT_TARGETS[Square::A1.index()].len(), 2);
        assert_eq!(KNIGHT_TARGETS[sq("d4").index()].len(), 8);
        assert_eq!(KING_TARGETS[Square::H8.index()].len(), 3);
    }

    #[test]
    fn test_start_position_attacks() {
        let board = Board::new();
        // e3 is covered by the d2 and f2 pawns
        assert_eq!(board.attacker_count(Color::Black, sq("e3")), 2);
        // f3 by e2, g2 and the g1 knight
        assert_eq!(board.attacker_count(Color::Black, sq("f3")), 3);
        assert!(!board.is_attacked_by(sq("e4"), Color::White));
        assert!(board.is_attacked_by(sq("f6"), Color::Black));
    }

    #[test]
    fn test_sliders_stop_at_first_blocker() {
        let board = board("4k3/8/8/8/r2P3K/8/8/8 w - - 0 1");
        assert!(board.is_attacked_by(sq("c4"), Color::Black));
        assert!(!board.is_attacked_by(sq("e4"), Color::Black));
    }

    #[test]
    fn test_double_check_counts_two() {
        let board = board("4k3/8/8/8/8/5n2/8/4K2r w - - 0 1");
        assert_eq!(board.attacker_count(Color::White, Square::E1), 2);
        assert!(board.in_check(Color::White));
        assert!(!board.in_check(Color::Black));
    }

    #[test]
    fn test_pawn_attacks_point_forward() {
        let board = board("4k3/8/8/3p4/8/8/8/4K3 w - - 0 1");
        assert!(board.is_attacked_by(sq("c4"), Color::Black));
        assert!(board.is_attacked_by(sq("e4"), Color::Black));
        assert!(!board.is_attacked_by(sq("c6"), Color::Black));
    }

    #[test]
    fn test_missing_king_is_not_in_check() {
        let board = board("8/8/8/8/8/8/8/r3K3 w - - 0 1");
        assert!(!board.in_check(Color::Black));
        assert!(board.in_check(Color::White));
    }
}

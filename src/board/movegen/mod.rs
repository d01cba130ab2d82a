//! Move legality.
//!
//! Each piece family checks its own geometry in a sibling module; this module
//! holds the shared entry point and the ray walk used by the sliders and by
//! castling.
//!
//! Checks, attacked squares, en passant and promotion are not considered.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::castling_rook_cols;

use log::trace;

use super::{Board, Color, Piece, Square};

/// Signed (row, col) distance from `start` to `end`.
#[inline]
pub(crate) fn delta(start: Square, end: Square) -> (isize, isize) {
    (
        end.0 as isize - start.0 as isize,
        end.1 as isize - start.1 as isize,
    )
}

impl Board {
    /// Decide whether `color` may move the piece on `start` to `end`.
    ///
    /// Returns false when `start` holds no piece of `color`, when `end` holds
    /// one of `color`'s own pieces, or for a zero-length move.
    #[must_use]
    pub fn is_legal(&self, color: Color, start: Square, end: Square) -> bool {
        let Some(mover) = self.occupant(start) else {
            return false;
        };
        if mover.color != color || start == end {
            return false;
        }
        if self.occupant(end).is_some_and(|target| target.color == color) {
            return false;
        }

        let legal = match mover.piece {
            Piece::Pawn => self.pawn_move_legal(color, start, end),
            Piece::Knight => Self::knight_move_legal(start, end),
            Piece::Bishop => self.bishop_move_legal(start, end),
            Piece::Rook => self.rook_move_legal(start, end),
            Piece::Queen => self.queen_move_legal(start, end),
            Piece::King => self.king_move_legal(mover, start, end),
        };
        trace!("{:?} {start}{end} legal={legal}", mover.piece);
        legal
    }

    /// Walk from the square after `start` towards `end` in unit steps of
    /// `step`, stopping before `end`. True when every square walked is empty.
    ///
    /// `step` must lead from `start` to `end`; a walk that leaves the board
    /// counts as obstructed.
    #[must_use]
    pub fn path_clear(&self, start: Square, end: Square, step: (isize, isize)) -> bool {
        if step == (0, 0) {
            return false;
        }
        let mut current = start;
        loop {
            let Some(next) = current.offset(step.0, step.1) else {
                return false;
            };
            if next == end {
                return true;
            }
            if !self.is_empty(next) {
                return false;
            }
            current = next;
        }
    }

    /// Every (start, end) pair `color` may play.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<(Square, Square)> {
        self.occupants()
            .filter(|(_, occ)| occ.color == color)
            .flat_map(|(start, _)| {
                Square::all()
                    .filter(move |&end| self.is_legal(color, start, end))
                    .map(move |end| (start, end))
            })
            .collect()
    }
}

/// Free-function form of [`Board::is_legal`].
#[must_use]
pub fn is_legal(board: &Board, side_to_move: Color, start: Square, end: Square) -> bool {
    board.is_legal(side_to_move, start, end)
}

/// Free-function form of [`Board::path_clear`].
#[must_use]
pub fn path_clear(board: &Board, start: Square, end: Square, step: (isize, isize)) -> bool {
    board.path_clear(start, end, step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;

    #[test]
    fn test_path_clear_adjacent_is_clear() {
        let board = Board::new();
        assert!(board.path_clear(Square(7, 0), Square(6, 0), (-1, 0)));
    }

    #[test]
    fn test_path_clear_blocked() {
        let board = Board::new();
        // a1 rook to a3 through the a2 pawn
        assert!(!board.path_clear(Square(7, 0), Square(5, 0), (-1, 0)));
    }

    #[test]
    fn test_path_clear_ignores_endpoints() {
        let board = BoardBuilder::new()
            .piece(Square(4, 0), Color::White, Piece::Rook)
            .piece(Square(4, 7), Color::Black, Piece::Rook)
            .build();
        assert!(board.path_clear(Square(4, 0), Square(4, 7), (0, 1)));
        assert!(board.path_clear(Square(4, 7), Square(4, 0), (0, -1)));
    }

    #[test]
    fn test_path_clear_off_board_is_blocked() {
        let board = Board::empty();
        assert!(!board.path_clear(Square(0, 0), Square(3, 3), (-1, -1)));
    }

    #[test]
    fn test_empty_start_is_illegal() {
        assert!(!Board::new().is_legal(Color::White, Square(4, 4), Square(3, 4)));
    }

    #[test]
    fn test_wrong_side_is_illegal() {
        assert!(!Board::new().is_legal(Color::White, Square(1, 4), Square(2, 4)));
    }

    #[test]
    fn test_zero_length_move_is_illegal() {
        let board = BoardBuilder::new()
            .piece(Square(4, 4), Color::White, Piece::King)
            .build();
        assert!(!board.is_legal(Color::White, Square(4, 4), Square(4, 4)));
    }

    #[test]
    fn test_initial_legal_moves() {
        // 16 pawn moves plus 4 knight moves, as in standard chess.
        assert_eq!(Board::new().legal_moves(Color::White).len(), 20);
        assert_eq!(Board::new().legal_moves(Color::Black).len(), 20);
    }
}

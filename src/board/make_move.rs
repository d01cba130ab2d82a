use log::debug;

use super::movegen::castling_rook_cols;
use super::{Board, Piece, Square};

impl Board {
    /// Play `start` -> `end` on a copy of this board and return the copy.
    ///
    /// No legality check is made. A king travelling two columns also moves
    /// its own rook, if one stands in the corner, to the square the king
    /// passed over. The moved
    /// piece (and the castling rook) come out with `has_moved` set. An empty
    /// `start` leaves the board unchanged.
    #[must_use]
    pub fn apply(&self, start: Square, end: Square) -> Board {
        let mut next = *self;
        let Some(mover) = self.occupant(start) else {
            return next;
        };

        if mover.piece == Piece::King && start.1.abs_diff(end.1) == 2 {
            if let Some((rook_from, rook_to)) = castling_rook_cols(end.1) {
                let rook_origin = Square(end.0, rook_from);
                if let Some(rook) = next
                    .occupant(rook_origin)
                    .filter(|occ| occ.is(mover.color, Piece::Rook))
                {
                    next.set(rook_origin, None);
                    next.set(Square(end.0, rook_to), Some(rook.moved()));
                    debug!("castling rook {rook_origin} -> {}", Square(end.0, rook_to));
                }
            }
        }

        next.set(start, None);
        next.set(end, Some(mover.moved()));
        next
    }
}

/// Free-function form of [`Board::apply`].
#[must_use]
pub fn apply(board: &Board, start: Square, end: Square) -> Board {
    board.apply(start, end)
}

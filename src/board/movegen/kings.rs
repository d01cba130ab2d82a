use super::super::{Board, Occupant, Piece, Square};
use super::delta;

/// King column on its home square.
pub(crate) const KING_HOME_COL: usize = 4;

/// Rook origin and destination columns for a castle landing the king on
/// `king_to_col`. `None` when the column is neither c nor g.
pub(crate) const fn castling_rook_cols(king_to_col: usize) -> Option<(usize, usize)> {
    match king_to_col {
        6 => Some((7, 5)),
        2 => Some((0, 3)),
        _ => None,
    }
}

impl Board {
    pub(crate) fn king_move_legal(&self, king: Occupant, start: Square, end: Square) -> bool {
        let (d_row, d_col) = delta(start, end);
        if d_row.abs() <= 1 && d_col.abs() <= 1 {
            return true;
        }
        d_row == 0 && d_col.abs() == 2 && self.castling_legal(king, start, end)
    }

    /// Never-moved and clear-path conditions only; whether the king is in,
    /// passes through or lands on an attacked square is not examined.
    fn castling_legal(&self, king: Occupant, start: Square, end: Square) -> bool {
        let home_row = king.color.back_rank();
        if start != Square(home_row, KING_HOME_COL) || king.has_moved {
            return false;
        }
        let Some((rook_col, _)) = castling_rook_cols(end.1) else {
            return false;
        };

        let rook_sq = Square(home_row, rook_col);
        let rook_ready = self
            .occupant(rook_sq)
            .is_some_and(|rook| rook.is(king.color, Piece::Rook) && !rook.has_moved);
        if !rook_ready {
            return false;
        }

        let step = if rook_col > start.1 { (0, 1) } else { (0, -1) };
        self.path_clear(start, rook_sq, step)
    }
}

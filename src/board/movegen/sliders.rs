use super::super::{Board, Square};
use super::delta;

impl Board {
    pub(crate) fn bishop_move_legal(&self, start: Square, end: Square) -> bool {
        let (d_row, d_col) = delta(start, end);
        if d_row == 0 || d_row.abs() != d_col.abs() {
            return false;
        }
        self.path_clear(start, end, (d_row.signum(), d_col.signum()))
    }

    pub(crate) fn rook_move_legal(&self, start: Square, end: Square) -> bool {
        let (d_row, d_col) = delta(start, end);
        if (d_row == 0) == (d_col == 0) {
            return false;
        }
        self.path_clear(start, end, (d_row.signum(), d_col.signum()))
    }

    pub(crate) fn queen_move_legal(&self, start: Square, end: Square) -> bool {
        self.bishop_move_legal(start, end) || self.rook_move_legal(start, end)
    }
}

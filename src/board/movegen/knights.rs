use super::super::{Board, Square};
use super::delta;

impl Board {
    pub(crate) fn knight_move_legal(start: Square, end: Square) -> bool {
        let (d_row, d_col) = delta(start, end);
        matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1))
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, BoardBuilder, Color, Piece, Square};

    #[test]
    fn test_knight_jumps_over_pieces() {
        let board = Board::new();
        // b1 -> c3 and a3 with the pawn wall in between
        assert!(board.is_legal(Color::White, Square(7, 1), Square(5, 2)));
        assert!(board.is_legal(Color::White, Square(7, 1), Square(5, 0)));
    }

    #[test]
    fn test_knight_shapes() {
        let board = BoardBuilder::new()
            .piece(Square(4, 4), Color::Black, Piece::Knight)
            .build();
        let legal: Vec<Square> = Square::all()
            .filter(|&end| board.is_legal(Color::Black, Square(4, 4), end))
            .collect();
        assert_eq!(legal.len(), 8);
        assert!(!board.is_legal(Color::Black, Square(4, 4), Square(6, 6)));
        assert!(!board.is_legal(Color::Black, Square(4, 4), Square(4, 6)));
    }

    #[test]
    fn test_knight_captures_but_not_own() {
        let board = BoardBuilder::new()
            .piece(Square(4, 4), Color::White, Piece::Knight)
            .piece(Square(2, 5), Color::Black, Piece::Queen)
            .piece(Square(2, 3), Color::White, Piece::Pawn)
            .build();
        assert!(board.is_legal(Color::White, Square(4, 4), Square(2, 5)));
        assert!(!board.is_legal(Color::White, Square(4, 4), Square(2, 3)));
    }
}

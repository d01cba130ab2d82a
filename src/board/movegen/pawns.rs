use super::super::{Board, Color, Square};
use super::delta;

impl Board {
    pub(crate) fn pawn_move_legal(&self, color: Color, start: Square, end: Square) -> bool {
        let dir = color.pawn_direction();
        let (d_row, d_col) = delta(start, end);

        if d_col == 0 {
            if d_row == dir {
                return self.is_empty(end);
            }
            if d_row == 2 * dir && start.0 == color.pawn_start_rank() {
                let Some(between) = start.offset(dir, 0) else {
                    return false;
                };
                return self.is_empty(between) && self.is_empty(end);
            }
            return false;
        }

        d_col.abs() == 1
            && d_row == dir
            && self
                .occupant(end)
                .is_some_and(|target| target.color == color.opponent())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, BoardBuilder, Color, Piece, Square};

    #[test]
    fn test_single_and_double_push() {
        let board = Board::new();
        assert!(board.is_legal(Color::White, Square(6, 4), Square(5, 4)));
        assert!(board.is_legal(Color::White, Square(6, 4), Square(4, 4)));
        assert!(board.is_legal(Color::Black, Square(1, 3), Square(2, 3)));
        assert!(board.is_legal(Color::Black, Square(1, 3), Square(3, 3)));
    }

    #[test]
    fn test_no_backwards_or_triple_push() {
        let board = Board::new();
        assert!(!board.is_legal(Color::White, Square(6, 4), Square(3, 4)));
        let board = BoardBuilder::new()
            .piece(Square(4, 4), Color::White, Piece::Pawn)
            .build();
        assert!(!board.is_legal(Color::White, Square(4, 4), Square(5, 4)));
    }

    #[test]
    fn test_double_push_only_from_start_row() {
        let board = BoardBuilder::new()
            .piece(Square(5, 2), Color::White, Piece::Pawn)
            .build();
        assert!(board.is_legal(Color::White, Square(5, 2), Square(4, 2)));
        assert!(!board.is_legal(Color::White, Square(5, 2), Square(3, 2)));
    }

    #[test]
    fn test_double_push_blocked_by_intermediate() {
        let board = BoardBuilder::starting_position()
            .piece(Square(5, 4), Color::Black, Piece::Knight)
            .build();
        assert!(!board.is_legal(Color::White, Square(6, 4), Square(4, 4)));
        assert!(!board.is_legal(Color::White, Square(6, 4), Square(5, 4)));
    }

    #[test]
    fn test_double_push_blocked_at_destination() {
        let board = BoardBuilder::starting_position()
            .piece(Square(4, 4), Color::Black, Piece::Pawn)
            .build();
        assert!(!board.is_legal(Color::White, Square(6, 4), Square(4, 4)));
        assert!(board.is_legal(Color::White, Square(6, 4), Square(5, 4)));
    }

    #[test]
    fn test_forward_capture_is_illegal() {
        let board = BoardBuilder::new()
            .piece(Square(4, 4), Color::White, Piece::Pawn)
            .piece(Square(3, 4), Color::Black, Piece::Pawn)
            .build();
        assert!(!board.is_legal(Color::White, Square(4, 4), Square(3, 4)));
    }

    #[test]
    fn test_diagonal_capture() {
        let board = BoardBuilder::new()
            .piece(Square(4, 4), Color::White, Piece::Pawn)
            .piece(Square(3, 5), Color::Black, Piece::Knight)
            .build();
        assert!(board.is_legal(Color::White, Square(4, 4), Square(3, 5)));
        // no capture target on the other diagonal
        assert!(!board.is_legal(Color::White, Square(4, 4), Square(3, 3)));
    }

    #[test]
    fn test_black_captures_downward() {
        let board = BoardBuilder::new()
            .piece(Square(3, 3), Color::Black, Piece::Pawn)
            .piece(Square(4, 4), Color::White, Piece::Bishop)
            .piece(Square(2, 2), Color::White, Piece::Bishop)
            .build();
        assert!(board.is_legal(Color::Black, Square(3, 3), Square(4, 4)));
        assert!(!board.is_legal(Color::Black, Square(3, 3), Square(2, 2)));
    }
}

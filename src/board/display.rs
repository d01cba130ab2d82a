use std::fmt;

use super::{Board, Color, Piece};

fn glyph(color: Color, piece: Piece) -> char {
    match (color, piece) {
        (Color::White, Piece::Pawn) => '♙',
        (Color::White, Piece::Knight) => '♘',
        (Color::White, Piece::Bishop) => '♗',
        (Color::White, Piece::Rook) => '♖',
        (Color::White, Piece::Queen) => '♕',
        (Color::White, Piece::King) => '♔',
        (Color::Black, Piece::Pawn) => '♟',
        (Color::Black, Piece::Knight) => '♞',
        (Color::Black, Piece::Bishop) => '♝',
        (Color::Black, Piece::Rook) => '♜',
        (Color::Black, Piece::Queen) => '♛',
        (Color::Black, Piece::King) => '♚',
    }
}

/// Text diagram, rank 8 at the top. `{:#}` uses position-string letters
/// instead of figurines.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for (row, squares) in self.rows().iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for sq in squares {
                let ch = match sq {
                    Some(occ) if f.alternate() => occ.to_fen_char(),
                    Some(occ) => glyph(occ.color, occ.piece),
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f, "{}", 8 - row)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

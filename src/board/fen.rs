//! Position strings and move designators exchanged with the move selector.
//!
//! Only the placement and side-to-move fields are real. Castling rights, the
//! en passant target and the move counters are always written as
//! `KQkq - 0 1`, whatever the game history.

use super::error::{PositionError, SquareError};
use super::{algebraic_to_square, Board, Color, Occupant, Piece, Square};

/// Trailing fields appended after the side-to-move letter.
pub const PLACEHOLDER_FIELDS: &str = "KQkq - 0 1";

/// Encode a board and the side to move as a position string.
///
/// Ranks are written row 0 first (Black's back rank), so the initial board
/// encodes as `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1`.
#[must_use]
pub fn encode(board: &Board, side_to_move: Color) -> String {
    let rows: Vec<String> = board.rows().iter().map(|row| encode_rank(row)).collect();
    format!(
        "{} {} {}",
        rows.join("/"),
        side_to_move.to_fen_char(),
        PLACEHOLDER_FIELDS
    )
}

fn encode_rank(row: &[Option<Occupant>; 8]) -> String {
    let mut out = String::new();
    let mut empty = 0;
    for square in row {
        if let Some(occ) = square {
            if empty > 0 {
                out.push_str(&empty.to_string());
                empty = 0;
            }
            out.push(occ.to_fen_char());
        } else {
            empty += 1;
        }
    }
    if empty > 0 {
        out.push_str(&empty.to_string());
    }
    out
}

/// Parse the placement and side-to-move fields of a position string.
///
/// Remaining fields are accepted and ignored. Every decoded piece is unmoved.
pub fn decode_position(text: &str) -> Result<(Board, Color), PositionError> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.len() < 2 {
        return Err(PositionError::TooFewParts { found: parts.len() });
    }

    let ranks: Vec<&str> = parts[0].split('/').collect();
    if ranks.len() != 8 {
        return Err(PositionError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                col += skip as usize;
                continue;
            }
            let piece = Piece::from_char(c).ok_or(PositionError::InvalidPiece { char: c })?;
            if col >= 8 {
                return Err(PositionError::BadRankLength {
                    rank: row,
                    files: col + 1,
                });
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            board.set(Square(row, col), Some(Occupant::new(color, piece)));
            col += 1;
        }
        if col != 8 {
            return Err(PositionError::BadRankLength {
                rank: row,
                files: col,
            });
        }
    }

    let side = match parts[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(PositionError::InvalidSideToMove {
                found: other.to_string(),
            })
        }
    };

    Ok((board, side))
}

/// Split a move designator such as `"e7e5"` into its two squares.
///
/// Anything past the fourth character (a promotion letter, say) is ignored.
pub fn decode_move(designator: &str) -> Result<(Square, Square), SquareError> {
    let invalid = || SquareError::InvalidSquareName {
        notation: designator.to_string(),
    };
    let from = designator.get(0..2).ok_or_else(invalid)?;
    let to = designator.get(2..4).ok_or_else(invalid)?;
    Ok((algebraic_to_square(from)?, algebraic_to_square(to)?))
}

/// Encode a (start, end) pair as a move designator.
#[must_use]
pub fn encode_move(start: Square, end: Square) -> String {
    format!("{start}{end}")
}

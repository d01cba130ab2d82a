//! Square type and algebraic naming.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the grid, represented as (row, col).
///
/// Row 0 is Black's back rank (rank 8), row 7 is White's (rank 1).
/// Col 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row, col))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Step by a signed (row, col) delta. Returns `None` when leaving the board.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.0.checked_add_signed(d_row)?;
        let col = self.1.checked_add_signed(d_col)?;
        Square::new(row, col)
    }

    /// Iterate over all 64 squares, row by row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square(row, col)))
    }
}

/// Decode an algebraic name such as `"e2"` into a square.
///
/// The file letter maps `a..=h` to col `0..=7`; the rank digit maps to row
/// `8 - digit`.
pub fn algebraic_to_square(name: &str) -> Result<Square, SquareError> {
    let invalid = || SquareError::InvalidSquareName {
        notation: name.to_string(),
    };
    let mut chars = name.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid());
    };

    let col = match file {
        'a'..='h' => file as usize - 'a' as usize,
        _ => return Err(invalid()),
    };
    let row = match rank {
        '1'..='8' => 8 - (rank as usize - '0' as usize),
        _ => return Err(invalid()),
    };
    Ok(Square(row, col))
}

/// Inverse of [`algebraic_to_square`].
#[must_use]
pub fn square_to_algebraic(sq: Square) -> String {
    sq.to_string()
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, 8 - self.0)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square(row, col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        assert_eq!(algebraic_to_square("e2"), Ok(Square(6, 4)));
        assert_eq!(algebraic_to_square("a8"), Ok(Square(0, 0)));
        assert_eq!(algebraic_to_square("h1"), Ok(Square(7, 7)));
    }

    #[test]
    fn test_invalid_names() {
        for bad in ["i9", "e9", "e0", "z1", "", "e", "e22", "E2"] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(SquareError::InvalidSquareName {
                    notation: bad.to_string()
                }),
                "{bad} should not decode"
            );
        }
    }

    #[test]
    fn test_display_inverts_decode() {
        for sq in Square::all() {
            let name = square_to_algebraic(sq);
            assert_eq!(algebraic_to_square(&name), Ok(sq));
        }
    }

    #[test]
    fn test_offset_bounds() {
        assert_eq!(Square(0, 0).offset(-1, 0), None);
        assert_eq!(Square(7, 7).offset(0, 1), None);
        assert_eq!(Square(4, 4).offset(-2, 1), Some(Square(2, 5)));
    }

    #[test]
    fn test_try_from_tuple() {
        assert_eq!(Square::try_from((3, 5)), Ok(Square(3, 5)));
        assert_eq!(
            Square::try_from((8, 0)),
            Err(SquareError::RowOutOfBounds { row: 8 })
        );
        assert_eq!(
            Square::try_from((0, 9)),
            Err(SquareError::ColOutOfBounds { col: 9 })
        );
    }
}

//! Fluent builder for constructing boards.
//!
//! Allows creating positions piece by piece rather than parsing position strings.
//!
//! # Example
//! ```
//! use chess_session::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(7, 7), Color::White, Piece::Rook)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .build();
//! assert_eq!(board.occupants().count(), 3);
//! ```

use super::{Board, Color, Occupant, Piece, Square};

/// A fluent builder for constructing `Board` values.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub const fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::new(),
        }
    }

    /// Place an unmoved piece, replacing whatever was there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.set(square, Some(Occupant::new(color, piece)));
        self
    }

    /// Place a piece that has already moved.
    #[must_use]
    pub fn moved_piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board
            .set(square, Some(Occupant::new(color, piece).moved()));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.set(square, None);
        self
    }

    /// Build the board.
    #[must_use]
    pub const fn build(self) -> Board {
        self.board
    }
}

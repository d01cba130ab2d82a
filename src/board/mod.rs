//! Board state and move legality.
//!
//! A `Board` is an 8x8 grid of optional occupants. Row 0 is Black's back
//! rank and row 7 is White's, so White pawns advance towards row 0.
//!
//! # Example
//! ```
//! use chess_session::board::{Board, Color, Square};
//!
//! let board = Board::new();
//! assert!(board.is_legal(Color::White, Square(6, 4), Square(4, 4)));
//! let after = board.apply(Square(6, 4), Square(4, 4));
//! assert!(after.occupant(Square(4, 4)).unwrap().has_moved);
//! ```

mod builder;
mod display;
mod error;
mod fen;
mod make_move;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{PositionError, SquareError};
pub use fen::{decode_move, decode_position, encode, encode_move, PLACEHOLDER_FIELDS};
pub use make_move::apply;
pub use movegen::{is_legal, path_clear};
pub use state::{create_initial_board, Board};
pub use types::{algebraic_to_square, square_to_algebraic, Color, Occupant, Piece, Square};

//! Core board types.
//!
//! - `Piece`, `Color` and `Occupant` - what stands on a square
//! - `Square` - (row, col) coordinates and their algebraic names

mod piece;
mod square;

pub use piece::{Color, Occupant, Piece};
pub use square::{algebraic_to_square, square_to_algebraic, Square};

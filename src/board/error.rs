//! Error types for board operations.

use std::fmt;

/// Error type for square decoding failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Malformed algebraic coordinate (file outside a-h or rank outside 1-8)
    InvalidSquareName { notation: String },
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidSquareName { notation } => {
                write!(f, "Invalid square name '{notation}'")
            }
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for position string parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Position string needs at least the placement and side-to-move fields
    TooFewParts { found: usize },
    /// Invalid piece character in the placement field
    InvalidPiece { char: char },
    /// Placement field does not have exactly 8 ranks
    WrongRankCount { found: usize },
    /// A rank describes more or fewer than 8 squares
    BadRankLength { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::TooFewParts { found } => {
                write!(f, "Position string must have at least 2 parts, found {found}")
            }
            PositionError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in position string")
            }
            PositionError::WrongRankCount { found } => {
                write!(f, "Expected 8 ranks, found {found}")
            }
            PositionError::BadRankLength { rank, files } => {
                write!(f, "Rank {rank} describes {files} squares, expected 8")
            }
            PositionError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
        }
    }
}

impl std::error::Error for PositionError {}

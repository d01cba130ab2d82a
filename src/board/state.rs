use once_cell::sync::Lazy;

use super::{Color, Occupant, Piece, Square};

static STARTING_BOARD: Lazy<Board> = Lazy::new(|| {
    let mut squares = [[None; 8]; 8];
    for (col, piece) in Piece::BACK_RANK.iter().enumerate() {
        squares[0][col] = Some(Occupant::new(Color::Black, *piece));
        squares[7][col] = Some(Occupant::new(Color::White, *piece));
        squares[1][col] = Some(Occupant::new(Color::Black, Piece::Pawn));
        squares[6][col] = Some(Occupant::new(Color::White, Piece::Pawn));
    }
    Board { squares }
});

/// An 8x8 grid of optional occupants.
///
/// `Board` is a plain value: the move applier copies it and returns the
/// copy, so a board handed out is never changed behind the holder's back.
/// Nothing is validated after construction (no king count, no pawn rows).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [[Option<Occupant>; 8]; 8],
}

impl Board {
    /// The standard starting layout, every piece unmoved.
    #[must_use]
    pub fn new() -> Self {
        *STARTING_BOARD
    }

    /// A board with no occupants.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    #[inline]
    #[must_use]
    pub fn occupant(&self, sq: Square) -> Option<Occupant> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, occupant: Option<Occupant>) {
        self.squares[sq.0][sq.1] = occupant;
    }

    /// All occupied squares, row by row.
    pub fn occupants(&self) -> impl Iterator<Item = (Square, Occupant)> + '_ {
        Square::all().filter_map(move |sq| self.occupant(sq).map(|occ| (sq, occ)))
    }

    /// Number of occupants belonging to `color`.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.occupants().filter(|(_, occ)| occ.color == color).count()
    }

    /// Number of `piece` occupants belonging to `color`.
    #[must_use]
    pub fn count_piece(&self, color: Color, piece: Piece) -> usize {
        self.occupants()
            .filter(|(_, occ)| occ.is(color, piece))
            .count()
    }

    /// The raw grid, row 0 first, for renderers.
    #[must_use]
    pub fn rows(&self) -> &[[Option<Occupant>; 8]; 8] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Build the standard starting board.
#[must_use]
pub fn create_initial_board() -> Board {
    Board::new()
}

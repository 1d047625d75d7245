use std::fmt;

use crate::constants::{
    BACK_RANK_ROLES, BLACK_BACK_RANK, BLACK_PAWN_RANK, BOARD_SIZE, FILE_LETTERS, SQUARES,
    WHITE_BACK_RANK, WHITE_PAWN_RANK,
};
use crate::types::{Color, Piece, Role, Square};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("square {0:?} is already occupied")]
    Occupied(Square),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Self::Empty => None,
            Self::Occupied(piece) => Some(piece),
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// True when the cell holds a piece of `color`.
    pub fn holds(self, color: Color) -> bool {
        match self {
            Self::Empty => false,
            Self::Occupied(piece) => piece.color == color,
        }
    }
}

/// The 8x8 grid, indexed `[rank][file]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_starting_position();
        board
    }

    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn get(&self, square: Square) -> Cell {
        self.cells[usize::from(square.rank)][usize::from(square.file)]
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.get(square).piece()
    }

    /// Places `piece` on an empty square.
    pub fn put(&mut self, piece: Piece, square: Square) -> Result<(), BoardError> {
        let cell = &mut self.cells[usize::from(square.rank)][usize::from(square.file)];
        if let Cell::Occupied(_) = cell {
            return Err(BoardError::Occupied(square));
        }
        *cell = Cell::Occupied(piece);
        Ok(())
    }

    pub fn clear(&mut self, square: Square) -> Option<Piece> {
        let cell = &mut self.cells[usize::from(square.rank)][usize::from(square.file)];
        std::mem::take(cell).piece()
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        SQUARES
            .iter()
            .filter_map(|&square| self.piece_at(square).map(|piece| (square, piece)))
    }

    fn setup_starting_position(&mut self) {
        self.load_backrank(Color::Black, BLACK_BACK_RANK);
        self.load_pawn_rank(Color::Black, BLACK_PAWN_RANK);
        self.load_pawn_rank(Color::White, WHITE_PAWN_RANK);
        self.load_backrank(Color::White, WHITE_BACK_RANK);
    }

    fn load_backrank(&mut self, color: Color, rank: u8) {
        for (file, role) in BACK_RANK_ROLES.into_iter().enumerate() {
            self.cells[usize::from(rank)][file] = Cell::Occupied(Piece::new(role, color));
        }
    }

    fn load_pawn_rank(&mut self, color: Color, rank: u8) {
        self.cells[usize::from(rank)] = [Cell::Occupied(Piece::new(Role::Pawn, color)); BOARD_SIZE];
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..BOARD_SIZE).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in (0..BOARD_SIZE).rev() {
                let symbol = self.cells[rank][file].piece().map_or('.', Piece::symbol);
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for file in (0..BOARD_SIZE).rev() {
            write!(f, " {}", FILE_LETTERS[file])?;
        }
        writeln!(f)
    }
}

use std::fmt;

use arrayvec::ArrayVec;

use crate::constants::{BOARD_SIZE, MAX_MOVES};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const fn opposite(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Rank step a pawn of this color takes when it advances.
    pub const fn forward(self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Pawn = 0,
    Rook = 1,
    Knight = 2,
    Bishop = 3,
    Queen = 4,
    King = 5,
}

impl Role {
    pub const ALL: [Self; 6] = [
        Self::Pawn,
        Self::Rook,
        Self::Knight,
        Self::Bishop,
        Self::Queen,
        Self::King,
    ];

    pub const fn code(self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Rook => 'r',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Queen => 'q',
            Self::King => 'k',
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'p' => Some(Self::Pawn),
            'r' => Some(Self::Rook),
            'n' => Some(Self::Knight),
            'b' => Some(Self::Bishop),
            'q' => Some(Self::Queen),
            'k' => Some(Self::King),
            _ => None,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub role: Role,
    pub color: Color,
}

impl Piece {
    pub const fn new(role: Role, color: Color) -> Self {
        Self { role, color }
    }

    /// Upper case for white, lower case for black.
    pub const fn symbol(self) -> char {
        let code = self.role.code();
        match self.color {
            Color::White => code.to_ascii_uppercase(),
            Color::Black => code,
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Self> {
        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        match Role::from_code(symbol.to_ascii_lowercase()) {
            Some(role) => Some(Self::new(role, color)),
            None => None,
        }
    }
}

/// A coordinate known to lie on the board.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub file: u8,
    pub rank: u8,
}

impl Square {
    pub const fn new(file: i8, rank: i8) -> Option<Self> {
        if on_board(file) && on_board(rank) {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    pub const fn new_unchecked(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }

    pub const fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        Self::new(self.file as i8 + file_delta, self.rank as i8 + rank_delta)
    }

    /// In-bounds squares of the 8-neighbourhood.
    pub fn neighbors(self) -> ArrayVec<Square, 8> {
        crate::constants::KING_STEPS
            .iter()
            .filter_map(|&(df, dr)| self.offset(df, dr))
            .collect()
    }
}

const fn on_board(coord: i8) -> bool {
    coord >= 0 && coord < BOARD_SIZE as i8
}

/// A requested relocation in raw coordinates, as supplied by the caller.
///
/// Coordinates may lie off the board, including `-1` for an unrecognised file
/// letter; `rules::is_on_board` is the gate that rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from_file: i8,
    pub from_rank: i8,
    pub to_file: i8,
    pub to_rank: i8,
}

impl Move {
    pub const fn new(from_file: i8, from_rank: i8, to_file: i8, to_rank: i8) -> Self {
        Self {
            from_file,
            from_rank,
            to_file,
            to_rank,
        }
    }

    pub const fn between(from: Square, to: Square) -> Self {
        Self::new(
            from.file as i8,
            from.rank as i8,
            to.file as i8,
            to.rank as i8,
        )
    }

    pub const fn source(&self) -> Option<Square> {
        Square::new(self.from_file, self.from_rank)
    }

    pub const fn target(&self) -> Option<Square> {
        Square::new(self.to_file, self.to_rank)
    }

    /// Both endpoints, or `None` if either lies off the board.
    pub fn squares(&self) -> Option<(Square, Square)> {
        Some((self.source()?, self.target()?))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})->({},{})",
            self.from_file, self.from_rank, self.to_file, self.to_rank
        )
    }
}

pub type MoveList = ArrayVec<Move, MAX_MOVES>;

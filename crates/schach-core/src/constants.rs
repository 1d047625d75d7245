use crate::types::{Role, Square};

pub const BOARD_SIZE: usize = 8;

pub const BLACK_BACK_RANK: u8 = 0;
pub const BLACK_PAWN_RANK: u8 = 1;
pub const WHITE_PAWN_RANK: u8 = 6;
pub const WHITE_BACK_RANK: u8 = 7;

/// Back-rank roles by file, shared by both colors.
pub const BACK_RANK_ROLES: [Role; BOARD_SIZE] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// File letters indexed by file. Input letter `a` is file 7, `h` is file 0.
pub const FILE_LETTERS: [char; BOARD_SIZE] = ['h', 'g', 'f', 'e', 'd', 'c', 'b', 'a'];

/// Upper bound on moves for one side: with `n` own pieces a move goes to one
/// of the `64 - n` squares not holding an own piece, and `n * (64 - n)` peaks
/// at `n = 32`.
pub const MAX_MOVES: usize = (BOARD_SIZE * BOARD_SIZE / 2) * (BOARD_SIZE * BOARD_SIZE / 2);

pub const KING_STEPS: [(i8, i8); 8] = [
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, 0),
    (1, -1),
];

/// Every square, rank-major from rank 0.
pub const SQUARES: [Square; BOARD_SIZE * BOARD_SIZE] = {
    let mut squares = [Square::new_unchecked(0, 0); BOARD_SIZE * BOARD_SIZE];
    let mut i = 0;
    while i < squares.len() {
        squares[i] = Square::new_unchecked((i % BOARD_SIZE) as u8, (i / BOARD_SIZE) as u8);
        i += 1;
    }
    squares
};

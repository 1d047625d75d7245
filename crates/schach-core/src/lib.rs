pub mod board;
pub mod constants;
pub mod game;
pub mod notation;
pub mod rules;
pub mod types;

pub use board::{Board, BoardError, Cell};
pub use game::{Game, GameError, GameState, GameStatus, Verdict};
pub use notation::{file_from_letter, parse_coordinate, square_name, NotationError};
pub use rules::{
    is_legal_move, is_legal_move_with, is_on_board, king_ring_is_safe, legal_moves,
    legal_moves_with, trace_line, MovementRules, ReferenceRules,
};
pub use types::{Color, Move, MoveList, Piece, Role, Square};

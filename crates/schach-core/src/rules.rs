use log::debug;

use crate::board::{Board, Cell};
use crate::constants::SQUARES;
use crate::types::{Color, Move, MoveList, Piece, Role, Square};

/// Movement predicates, one per role.
///
/// Every predicate may assume both squares are on the board and that the
/// mover owns the piece on `from`; it only decides whether the path and the
/// destination allow the move. The default bodies are the stock rules, so an
/// implementor overrides just the roles it wants to change.
pub trait MovementRules {
    fn is_legal(&self, board: &Board, piece: Piece, from: Square, to: Square) -> bool {
        let color = piece.color;
        match piece.role {
            Role::Pawn => self.pawn(board, color, from, to),
            Role::Rook => self.rook(board, color, from, to),
            Role::Knight => self.knight(board, color, from, to),
            Role::Bishop => self.bishop(board, color, from, to),
            Role::Queen => self.queen(board, color, from, to),
            Role::King => self.king(board, color, from, to),
        }
    }

    fn pawn(&self, board: &Board, color: Color, from: Square, to: Square) -> bool {
        let (df, dr) = deltas(from, to);
        if dr != color.forward() {
            return false;
        }
        match (df.abs(), board.get(to)) {
            (0, Cell::Empty) => true,
            (1, Cell::Occupied(target)) => target.color != color,
            _ => false,
        }
    }

    fn rook(&self, board: &Board, color: Color, from: Square, to: Square) -> bool {
        let (df, dr) = deltas(from, to);
        if (df == 0) == (dr == 0) {
            return false;
        }
        trace_line(board, color, from, to)
    }

    /// Always rejects.
    fn knight(&self, _board: &Board, _color: Color, _from: Square, _to: Square) -> bool {
        false
    }

    fn bishop(&self, board: &Board, color: Color, from: Square, to: Square) -> bool {
        let (df, dr) = deltas(from, to);
        if df == 0 || df.abs() != dr.abs() {
            return false;
        }
        trace_line(board, color, from, to)
    }

    fn queen(&self, board: &Board, color: Color, from: Square, to: Square) -> bool {
        self.rook(board, color, from, to) || self.bishop(board, color, from, to)
    }

    fn king(&self, board: &Board, color: Color, from: Square, to: Square) -> bool {
        let (df, dr) = deltas(from, to);
        if df.abs() > 1 || dr.abs() > 1 || (df == 0 && dr == 0) {
            return false;
        }
        if board.get(to).holds(color) {
            return false;
        }
        king_ring_is_safe(board, color, to)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReferenceRules;

impl MovementRules for ReferenceRules {}

fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.file as i8 - from.file as i8,
        to.rank as i8 - from.rank as i8,
    )
}

pub fn is_on_board(mv: &Move) -> bool {
    mv.squares().is_some()
}

pub fn is_legal_move(board: &Board, turn: Color, mv: &Move) -> bool {
    is_legal_move_with(&ReferenceRules, board, turn, mv)
}

pub fn is_legal_move_with<R>(rules: &R, board: &Board, turn: Color, mv: &Move) -> bool
where
    R: MovementRules + ?Sized,
{
    let Some((from, to)) = mv.squares() else {
        return false;
    };
    let Cell::Occupied(piece) = board.get(from) else {
        return false;
    };
    if piece.color != turn {
        return false;
    }
    let legal = rules.is_legal(board, piece, from, to);
    debug!("{:?} {:?} {mv}: legal={legal}", piece.color, piece.role);
    legal
}

/// Walks from `from` toward the collinear square `to` one cell at a time.
///
/// Fails on any occupied intermediate cell, or when `to` holds a piece of
/// `color`. The caller guarantees the squares share a rank, a file or a
/// diagonal and are distinct.
pub fn trace_line(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let (df, dr) = deltas(from, to);
    let (step_file, step_rank) = (df.signum(), dr.signum());
    let mut current = from;
    loop {
        let Some(next) = current.offset(step_file, step_rank) else {
            return false;
        };
        if next == to {
            return !board.get(to).holds(color);
        }
        if !board.get(next).is_empty() {
            return false;
        }
        current = next;
    }
}

/// True unless the enemy king stands next to `square`.
pub fn king_ring_is_safe(board: &Board, color: Color, square: Square) -> bool {
    let enemy_king = Piece::new(Role::King, color.opposite());
    square
        .neighbors()
        .into_iter()
        .all(|neighbor| board.piece_at(neighbor) != Some(enemy_king))
}

pub fn legal_moves(board: &Board, turn: Color) -> MoveList {
    legal_moves_with(&ReferenceRules, board, turn)
}

pub fn legal_moves_with<R>(rules: &R, board: &Board, turn: Color) -> MoveList
where
    R: MovementRules + ?Sized,
{
    let mut legal = MoveList::new();
    for (from, piece) in board.pieces() {
        if piece.color != turn {
            continue;
        }
        for to in SQUARES {
            if board.get(to).holds(turn) {
                continue;
            }
            if rules.is_legal(board, piece, from, to) {
                // Own-occupied targets are skipped, so `MAX_MOVES` cannot be exceeded.
                legal.push(Move::between(from, to));
            }
        }
    }
    legal
}

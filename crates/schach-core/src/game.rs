use log::info;
use thiserror::Error;

use crate::board::Board;
use crate::rules::{
    is_legal_move_with, is_on_board, legal_moves_with, MovementRules, ReferenceRules,
};
use crate::types::{Color, Move, MoveList};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("move {0} leaves the board")]
    OffBoard(Move),
    #[error("game is over, {winner} won")]
    Finished { winner: Color },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingMove(Color),
    GameOver { winner: Color },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The move was rejected; the same side is still to move.
    Illegal,
    GameOver { winner: Color },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub turn: Color,
    pub is_over: bool,
    pub winner: Option<Color>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            turn: Color::White,
            is_over: false,
            winner: None,
        }
    }
}

impl GameState {
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(winner) if self.is_over => GameStatus::GameOver { winner },
            _ => GameStatus::AwaitingMove(self.turn),
        }
    }
}

/// A single game: the board, whose turn it is, and the rules deciding moves.
///
/// The first legal move ends the game with the mover as the winner; pieces are
/// never relocated.
#[derive(Debug, Clone)]
pub struct Game<R = ReferenceRules> {
    board: Board,
    state: GameState,
    rules: R,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    pub fn with_board(board: Board) -> Self {
        Self::with_rules(board, ReferenceRules)
    }
}

impl<R: MovementRules> Game<R> {
    pub fn with_rules(board: Board, rules: R) -> Self {
        Self {
            board,
            state: GameState::default(),
            rules,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn turn(&self) -> Color {
        self.state.turn
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over
    }

    pub fn winner(&self) -> Option<Color> {
        self.state.winner
    }

    pub fn is_legal(&self, mv: &Move) -> bool {
        is_legal_move_with(&self.rules, &self.board, self.state.turn, mv)
    }

    pub fn moves(&self) -> MoveList {
        if self.state.is_over {
            MoveList::new()
        } else {
            legal_moves_with(&self.rules, &self.board, self.state.turn)
        }
    }

    pub fn submit(&mut self, mv: &Move) -> Result<Verdict, GameError> {
        if let Some(winner) = self.state.winner.filter(|_| self.state.is_over) {
            return Err(GameError::Finished { winner });
        }
        if !is_on_board(mv) {
            return Err(GameError::OffBoard(*mv));
        }
        if !self.is_legal(mv) {
            return Ok(Verdict::Illegal);
        }

        let winner = self.state.turn;
        self.state.is_over = true;
        self.state.winner = Some(winner);
        info!("{winner} played {mv}, game over");
        Ok(Verdict::GameOver { winner })
    }
}

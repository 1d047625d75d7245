use schach_core::board::Board;
use schach_core::game::{Game, GameError, GameState, GameStatus, Verdict};
use schach_core::rules::MovementRules;
use schach_core::types::{Color, Move, Piece, Role, Square};

fn sq(file: i8, rank: i8) -> Square {
    Square::new(file, rank).expect("valid square")
}

struct RejectEverything;

impl MovementRules for RejectEverything {
    fn is_legal(&self, _board: &Board, _piece: Piece, _from: Square, _to: Square) -> bool {
        false
    }
}

#[test]
fn new_game_awaits_white() {
    let game = Game::new();
    assert_eq!(game.status(), GameStatus::AwaitingMove(Color::White));
    assert_eq!(game.turn(), Color::White);
    assert!(!game.is_over());
    assert_eq!(game.winner(), None);
    assert_eq!(game.state(), GameState::default());
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.moves().len(), 8);
}

#[test]
fn first_legal_move_ends_the_game() {
    let mut game = Game::new();
    let before = game.board().clone();

    let verdict = game.submit(&Move::new(4, 6, 4, 5)).unwrap();

    assert_eq!(
        verdict,
        Verdict::GameOver {
            winner: Color::White
        }
    );
    assert!(game.is_over());
    assert_eq!(game.winner(), Some(Color::White));
    assert_eq!(
        game.status(),
        GameStatus::GameOver {
            winner: Color::White
        }
    );
    assert_eq!(game.board(), &before, "pieces are never relocated");
    assert!(game.moves().is_empty());
}

#[test]
fn illegal_move_keeps_the_turn() {
    let mut game = Game::new();

    assert_eq!(game.submit(&Move::new(4, 6, 4, 4)), Ok(Verdict::Illegal));
    assert_eq!(game.submit(&Move::new(1, 7, 2, 5)), Ok(Verdict::Illegal));
    assert_eq!(game.submit(&Move::new(3, 3, 3, 2)), Ok(Verdict::Illegal));

    assert_eq!(game.status(), GameStatus::AwaitingMove(Color::White));
    assert!(!game.is_over());
}

#[test]
fn wrong_color_source_is_rejected_without_advancing() {
    let mut game = Game::new();

    assert_eq!(game.submit(&Move::new(4, 1, 4, 2)), Ok(Verdict::Illegal));

    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.status(), GameStatus::AwaitingMove(Color::White));
}

#[test]
fn off_board_move_is_malformed_input() {
    let mut game = Game::new();
    let mv = Move::new(-1, 6, 0, 5);

    assert_eq!(game.submit(&mv), Err(GameError::OffBoard(mv)));
    assert_eq!(game.status(), GameStatus::AwaitingMove(Color::White));

    let legal = Move::new(0, 6, 0, 5);
    assert!(game.submit(&legal).is_ok());
}

#[test]
fn submitting_after_game_over_fails() {
    let mut game = Game::new();
    game.submit(&Move::new(0, 6, 0, 5)).unwrap();

    assert_eq!(
        game.submit(&Move::new(1, 6, 1, 5)),
        Err(GameError::Finished {
            winner: Color::White
        })
    );
    assert_eq!(
        game.submit(&Move::new(-1, 0, 0, 0)),
        Err(GameError::Finished {
            winner: Color::White
        })
    );
}

#[test]
fn custom_board_game_uses_its_own_position() {
    let mut board = Board::empty();
    board
        .put(Piece::new(Role::Rook, Color::White), sq(0, 0))
        .unwrap();
    board
        .put(Piece::new(Role::Pawn, Color::Black), sq(0, 3))
        .unwrap();
    let mut game = Game::with_board(board);

    assert_eq!(game.submit(&Move::new(0, 0, 0, 7)), Ok(Verdict::Illegal));
    assert!(game.is_legal(&Move::new(0, 0, 0, 3)));
    assert_eq!(
        game.submit(&Move::new(0, 0, 0, 3)),
        Ok(Verdict::GameOver {
            winner: Color::White
        })
    );
}

#[test]
fn rules_are_substitutable() {
    let mut game = Game::with_rules(Board::new(), RejectEverything);

    assert!(game.moves().is_empty());
    assert_eq!(game.submit(&Move::new(4, 6, 4, 5)), Ok(Verdict::Illegal));
    assert!(!game.is_over());
}

#[test]
fn errors_render_readable_messages() {
    assert_eq!(
        GameError::Finished {
            winner: Color::Black
        }
        .to_string(),
        "game is over, Black won"
    );
    assert_eq!(
        GameError::OffBoard(Move::new(-1, 0, 0, 0)).to_string(),
        "move (-1,0)->(0,0) leaves the board"
    );
}

//! Tests for the rules evaluator and the game session.

use tictactoe_ai::{
    Board, Game, GameStatus, LINES, MoveError, MoveResult, Player, Position, Square, check_draw,
    check_winner, evaluate,
};

/// Decodes `n` in base 3 into a board: 0 empty, 1 X, 2 O.
fn board_from_code(mut n: u32) -> Board {
    let mut squares = [Square::Empty; 9];
    for square in squares.iter_mut() {
        *square = match n % 3 {
            0 => Square::Empty,
            1 => Square::Occupied(Player::X),
            _ => Square::Occupied(Player::O),
        };
        n /= 3;
    }
    Board::from_squares(squares)
}

#[test]
fn test_evaluate_every_board() {
    for code in 0..3u32.pow(9) {
        let board = board_from_code(code);
        let squares = board.squares();

        let completed = LINES.iter().find(|line| {
            let [a, b, c] = line.indices();
            squares[a] != Square::Empty && squares[a] == squares[b] && squares[b] == squares[c]
        });
        let full = squares.iter().all(|sq| *sq != Square::Empty);

        let result = evaluate(&board);
        match completed {
            Some(line) => {
                let Square::Occupied(owner) = squares[line.indices()[0]] else {
                    unreachable!("completed line is occupied");
                };
                assert_eq!(
                    result,
                    MoveResult::Win {
                        player: owner,
                        line: *line
                    },
                    "board {}",
                    board
                );
                assert!(!check_draw(&board));
            }
            None if full => {
                assert_eq!(result, MoveResult::Draw, "board {}", board);
                assert!(check_draw(&board));
            }
            None => {
                assert_eq!(result, MoveResult::NoResult, "board {}", board);
                assert_eq!(check_winner(&board), None);
            }
        }
    }
}

#[test]
fn test_evaluate_is_pure() {
    let board: Board = "XXXOO....".parse().unwrap();
    let before = board.clone();
    let first = evaluate(&board);
    assert_eq!(evaluate(&board), first);
    assert_eq!(board, before);
}

#[test]
fn test_full_board_with_winner_is_a_win() {
    let board: Board = "XXXOOXXOO".parse().unwrap();
    assert!(matches!(
        evaluate(&board),
        MoveResult::Win {
            player: Player::X,
            ..
        }
    ));
}

#[test]
fn test_diagonal_win_reports_its_line() {
    let board: Board = "..X.X.X..".parse().unwrap();
    let (winner, line) = check_winner(&board).unwrap();
    assert_eq!(winner, Player::X);
    assert_eq!(line.to_string(), "2-4-6");
}

#[test]
fn test_full_game_to_a_win() {
    let mut game = Game::new();
    for pos in [Position::TopLeft, Position::Center, Position::TopCenter, Position::BottomRight] {
        assert_eq!(game.make_move(pos).unwrap(), GameStatus::InProgress);
    }
    let status = game.make_move(Position::TopRight).unwrap();

    assert_eq!(status.winner(), Some(Player::X));
    assert!(game.is_over());
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(
        game.make_move(Position::BottomLeft),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_full_game_to_a_draw() {
    let mut game = Game::new();
    // X O X / X O O / O X X
    let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];
    for index in moves {
        game.make_move(Position::from_index(index).unwrap()).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.history().len(), 9);
}

#[test]
fn test_resume_picks_up_mid_game() {
    let board: Board = "XX.OO....".parse().unwrap();
    let mut game = Game::resume(board, Player::X).unwrap();
    let status = game.make_move(Position::TopRight).unwrap();
    assert_eq!(status.winner(), Some(Player::X));
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_reset_clears_everything() {
    let mut game = Game::new();
    game.make_move(Position::Center).unwrap();
    game.reset();
    assert_eq!(game, Game::new());
}

//! Tests for the move engine across difficulty levels.

use tictactoe_ai::{
    Board, BoardError, Difficulty, EngineError, MoveResult, Player, Position, RngSource,
    ScriptedRandom, Square, best_move, choose_move, evaluate, minimax, suggest,
};

fn board(s: &str) -> Board {
    s.parse().expect("valid board text")
}

#[test]
fn test_hard_takes_winning_square() {
    let b = board("OO.......");
    let mut rng = ScriptedRandom::new([0]);
    let pos = choose_move(&b, Player::O, Difficulty::Hard, &mut rng).unwrap();
    assert_eq!(pos.to_index(), 2);
}

#[test]
fn test_medium_blocks_immediate_win() {
    let b = board("XX.......");
    let mut rng = ScriptedRandom::new([0]);
    let pos = choose_move(&b, Player::O, Difficulty::Medium, &mut rng).unwrap();
    assert_eq!(pos.to_index(), 2);
}

#[test]
fn test_medium_takes_center_on_empty_board() {
    let mut rng = RngSource::seeded(7);
    let pos = choose_move(&Board::new(), Player::O, Difficulty::Medium, &mut rng).unwrap();
    assert_eq!(pos.to_index(), 4);
}

#[test]
fn test_medium_corner_choice_follows_random_source() {
    let b = board("....X....");
    for (pick, expected) in [(0, 0), (1, 2), (2, 6), (3, 8)] {
        let mut rng = ScriptedRandom::new([pick]);
        let pos = choose_move(&b, Player::O, Difficulty::Medium, &mut rng).unwrap();
        assert_eq!(pos.to_index(), expected);
    }
}

#[test]
fn test_easy_only_picks_empty_squares() {
    let b = board("XO.XO.X.O");
    let mut rng = RngSource::seeded(1234);
    for _ in 0..200 {
        let pos = choose_move(&b, Player::X, Difficulty::Easy, &mut rng).unwrap();
        assert!(b.is_empty(pos), "{} is occupied", pos);
    }
}

#[test]
fn test_easy_with_scripted_source_is_exact() {
    // Empty squares in order: 2, 5, 7.
    let b = board("XO.XO.X.O");
    let mut rng = ScriptedRandom::new([0, 1, 2]);
    let picks: Vec<usize> = (0..3)
        .map(|_| choose_move(&b, Player::X, Difficulty::Easy, &mut rng).unwrap().to_index())
        .collect();
    assert_eq!(picks, [2, 5, 7]);
}

#[test]
fn test_full_board_reports_no_empty_cell() {
    let b = board("XOXOXXOXO");
    let mut rng = ScriptedRandom::new([0]);
    assert_eq!(
        choose_move(&b, Player::X, Difficulty::Hard, &mut rng),
        Err(EngineError::NoEmptyCell)
    );
}

#[test]
fn test_minimax_full_board_without_winner_is_zero() {
    let mut b = board("XOXOXXOXO");
    assert_eq!(minimax(&mut b, 0, true, Player::O), 0);
    assert_eq!(minimax(&mut b, 0, false, Player::O), 0);
}

#[test]
fn test_hard_leaves_input_board_untouched() {
    let cases = ["", "X........", "XO..X....", "XX.OO.X.."];
    for text in cases {
        let b = if text.is_empty() { Board::new() } else { board(text) };
        let before = b.clone();
        let mut rng = ScriptedRandom::new([0]);
        choose_move(&b, b.next_to_move(), Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(b, before);
    }
}

/// Walks every opponent reply, with `hard` answering by full search, and
/// asserts `hard` never loses.
fn assert_hard_never_loses(board: &mut Board, to_move: Player, hard: Player) {
    match evaluate(board) {
        MoveResult::Win { player, .. } => {
            assert_eq!(player, hard, "hard side lost on {}", board);
            return;
        }
        MoveResult::Draw => return,
        MoveResult::NoResult => {}
    }

    if to_move == hard {
        let pos = best_move(board, hard).expect("open board has a move");
        board.set(pos, Square::Occupied(hard));
        assert_hard_never_loses(board, to_move.opponent(), hard);
        board.clear(pos);
    } else {
        for pos in board.empty_positions() {
            board.set(pos, Square::Occupied(to_move));
            assert_hard_never_loses(board, to_move.opponent(), hard);
            board.clear(pos);
        }
    }
}

#[test]
fn test_hard_never_loses_as_second_player() {
    assert_hard_never_loses(&mut Board::new(), Player::X, Player::O);
}

#[test]
fn test_hard_never_loses_as_first_player() {
    assert_hard_never_loses(&mut Board::new(), Player::X, Player::X);
}

/// Like [`assert_hard_never_loses`], but every line must end in a win.
fn assert_hard_always_wins(board: &mut Board, to_move: Player, hard: Player) {
    match evaluate(board) {
        MoveResult::Win { player, .. } => {
            assert_eq!(player, hard, "hard side lost on {}", board);
            return;
        }
        MoveResult::Draw => panic!("hard side let a won position draw: {}", board),
        MoveResult::NoResult => {}
    }

    if to_move == hard {
        let pos = best_move(board, hard).expect("open board has a move");
        board.set(pos, Square::Occupied(hard));
        assert_hard_always_wins(board, to_move.opponent(), hard);
        board.clear(pos);
    } else {
        for pos in board.empty_positions() {
            board.set(pos, Square::Occupied(to_move));
            assert_hard_always_wins(board, to_move.opponent(), hard);
            board.clear(pos);
        }
    }
}

#[test]
fn test_hard_converts_a_forced_win() {
    // O answered a corner opening on an edge, which loses by force.
    let mut b = board("XO.......");
    assert!(minimax(&mut b.clone(), 0, true, Player::X) > 0);
    assert_hard_always_wins(&mut b, Player::X, Player::X);
}

#[test]
fn test_hard_prefers_fastest_win() {
    // X can win now on square 2, or later via other routes.
    let b = board("XX.OO....");
    assert_eq!(best_move(&b, Player::X), Some(Position::TopRight));
}

#[test]
fn test_hard_self_play_is_a_draw() {
    let mut b = Board::new();
    let mut to_move = Player::X;
    while !evaluate(&b).is_terminal() {
        let pos = best_move(&b, to_move).unwrap();
        b.set(pos, Square::Occupied(to_move));
        to_move = to_move.opponent();
    }
    assert_eq!(evaluate(&b), MoveResult::Draw);
}

#[test]
fn test_suggest_infers_side_from_mark_counts() {
    // Two X and one O, so O is due and must block the diagonal at 8.
    let mut rng = ScriptedRandom::new([0]);
    let pos = suggest("XO..X....", None, Difficulty::Medium, &mut rng).unwrap();
    assert_eq!(pos, Position::BottomRight);

    // An explicit side wins over the inferred one: X completes the diagonal.
    let mut rng = ScriptedRandom::new([0]);
    let pos = suggest("XO..X....", Some(Player::X), Difficulty::Medium, &mut rng).unwrap();
    assert_eq!(pos, Position::BottomRight);

    let mut rng = ScriptedRandom::new([0]);
    let pos = suggest("XX.OO....", None, Difficulty::Hard, &mut rng).unwrap();
    assert_eq!(pos, Position::TopRight);
}

#[test]
fn test_suggest_refuses_finished_positions() {
    let mut rng = ScriptedRandom::new([0]);
    let err = suggest("XXXOO....", None, Difficulty::Hard, &mut rng).unwrap_err();
    assert!(matches!(
        err,
        EngineError::GameOver(MoveResult::Win {
            player: Player::X,
            ..
        })
    ));

    let err = suggest("XOXOXXOXO", None, Difficulty::Easy, &mut rng).unwrap_err();
    assert_eq!(err, EngineError::GameOver(MoveResult::Draw));
}

#[test]
fn test_suggest_rejects_bad_boards() {
    let mut rng = ScriptedRandom::new([0]);
    assert_eq!(
        suggest("OO.......", None, Difficulty::Hard, &mut rng),
        Err(EngineError::InvalidBoard(BoardError::MarkCounts { x: 0, o: 2 }))
    );
    assert_eq!(
        suggest("XO", None, Difficulty::Hard, &mut rng),
        Err(EngineError::InvalidBoard(BoardError::WrongLength(2)))
    );
}

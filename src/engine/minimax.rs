//! Exhaustive game-tree search ("hard").
//!
//! The full 3x3 tree is small enough to search without pruning. Search
//! mutates a scratch board in place and undoes every placement before
//! returning, so the scratch ends up identical to how it started.

use crate::games::tictactoe::{Board, Player, Position, Square, check_draw, check_winner};

/// Score of a win found at depth 0.
pub const WIN_SCORE: i32 = 10;

/// Scores `board` for `side` with `maximizing` telling whose turn it is.
///
/// A win for `side` is worth `10 - depth` and a loss `depth - 10`, so faster
/// wins and slower losses are preferred. A draw is worth 0.
pub fn minimax(board: &mut Board, depth: i32, maximizing: bool, side: Player) -> i32 {
    if let Some((winner, _)) = check_winner(board) {
        return if winner == side {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }
    if check_draw(board) {
        return 0;
    }

    let mover = if maximizing { side } else { side.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(mover));
        let score = minimax(board, depth + 1, !maximizing, side);
        board.clear(pos);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Best move for `side`, or `None` on a full board.
///
/// Ties go to the lowest index, since only a strictly better score
/// replaces the current pick.
pub fn best_move(board: &Board, side: Player) -> Option<Position> {
    let mut scratch = board.clone();
    let mut best: Option<(Position, i32)> = None;

    for pos in Position::ALL {
        if !scratch.is_empty(pos) {
            continue;
        }
        scratch.set(pos, Square::Occupied(side));
        let score = minimax(&mut scratch, 0, false, side);
        scratch.clear(pos);

        if best.is_none_or(|(_, top)| score > top) {
            best = Some((pos, score));
        }
    }

    debug_assert_eq!(&scratch, board, "search must restore the scratch board");
    best.map(|(pos, _)| pos)
}

//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};

/// Checks if the board is full (all squares occupied).
///
/// A full board is only a draw once [`check_winner`](super::check_winner)
/// has found no winner, since the last move can also complete a line.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Alias for [`is_full`] under the name the evaluator uses.
pub fn check_draw(board: &Board) -> bool {
    is_full(board)
}

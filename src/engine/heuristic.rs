//! Rule-based "medium" strategy.
//!
//! Priority, first match wins:
//! 1. complete one of our own lines,
//! 2. block an opponent line,
//! 3. take the center,
//! 4. take a random empty corner,
//! 5. take any random empty square.

use super::random::{RandomSource, choose};
use crate::games::tictactoe::{Board, LINES, Player, Position, Square};

/// First line in table order holding two of `player`'s marks and one empty
/// square; returns that square.
pub fn completing_square(board: &Board, player: Player) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let squares = line.positions();
        let owned = squares
            .iter()
            .filter(|&&pos| board.get(pos) == Square::Occupied(player))
            .count();
        let mut empty = squares.iter().copied().filter(|&pos| board.is_empty(pos));

        match (owned, empty.next(), empty.next()) {
            (2, Some(pos), None) => Some(pos),
            _ => None,
        }
    })
}

/// Picks a move for `side` by the fixed priority list.
pub fn heuristic_move(board: &Board, side: Player, rng: &mut dyn RandomSource) -> Option<Position> {
    if let Some(pos) = completing_square(board, side) {
        return Some(pos);
    }
    if let Some(pos) = completing_square(board, side.opponent()) {
        return Some(pos);
    }
    if board.is_empty(Position::Center) {
        return Some(Position::Center);
    }

    let corners: Vec<Position> = Position::CORNERS
        .iter()
        .copied()
        .filter(|&pos| board.is_empty(pos))
        .collect();
    if let Some(pos) = choose(&corners, rng) {
        return Some(pos);
    }

    choose(&board.empty_positions(), rng)
}

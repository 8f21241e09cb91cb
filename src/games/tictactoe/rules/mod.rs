//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the move engine and the game session share one evaluator.

pub mod draw;
pub mod win;

pub use draw::{check_draw, is_full};
pub use win::{LINES, WinningLine, check_winner};

use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    /// No line is complete and empty squares remain.
    NoResult,
    /// A player holds a complete line.
    Win {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// Board is full with no completed line.
    Draw,
}

impl MoveResult {
    /// Returns true if the game is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveResult::NoResult)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            MoveResult::Win { player, .. } => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for MoveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveResult::NoResult => write!(f, "In progress"),
            MoveResult::Win { player, line } => write!(f, "{} wins on {}", player, line),
            MoveResult::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates the board: a win takes precedence over a full board.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate(board: &Board) -> MoveResult {
    if let Some((player, line)) = check_winner(board) {
        MoveResult::Win { player, line }
    } else if check_draw(board) {
        MoveResult::Draw
    } else {
        MoveResult::NoResult
    }
}

//! Tic-tac-toe board, rules, and game session.

mod action;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::{Game, GameStatus};
pub use position::Position;
pub use rules::{LINES, MoveResult, WinningLine, check_draw, check_winner, evaluate};
pub use types::{Board, BoardError, Player, Square};

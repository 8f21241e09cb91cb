//! Tic-tac-toe rules evaluator and move engine.
//!
//! # Architecture
//!
//! - **Games**: board, positions, win/draw rules, and the [`Game`] session
//! - **Engine**: [`choose_move`] with Easy (random), Medium (heuristic) and
//!   Hard (minimax) strategies, drawing randomness from a [`RandomSource`]
//! - **Stats**: persistent win/draw counters
//! - **Terminal**: async players and an [`Orchestrator`] that runs games
//!
//! # Example
//!
//! ```
//! use tictactoe_ai::{
//!     Board, Difficulty, MoveResult, Player, ScriptedRandom, choose_move, evaluate,
//! };
//!
//! let board: Board = "XX.......".parse().unwrap();
//! assert_eq!(evaluate(&board), MoveResult::NoResult);
//!
//! let mut rng = ScriptedRandom::new([0]);
//! let pos = choose_move(&board, Player::O, Difficulty::Medium, &mut rng).unwrap();
//! assert_eq!(pos.to_index(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod engine;
mod games;
mod stats;
mod terminal;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardError, Game, GameStatus, LINES, Move, MoveError, MoveResult, Player, Position,
    Square, WinningLine, check_draw, check_winner, evaluate,
};

// Crate-level exports - Move engine
pub use engine::heuristic::{completing_square, heuristic_move};
pub use engine::minimax::{WIN_SCORE, best_move, minimax};
pub use engine::{
    Difficulty, EngineError, RandomSource, RngSource, ScriptedRandom, choose_move, read_board,
    suggest,
};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, GameMode};

// Crate-level exports - Statistics
pub use stats::{Stats, StatsError, StatsStore};

// Crate-level exports - Terminal front end
pub use terminal::players::{AiPlayer, GamePlayer, HumanPlayer};
pub use terminal::{GameEvent, Orchestrator, PlayOptions, run_play};

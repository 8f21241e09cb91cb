//! Move engine: picks a square for the side to move.
//!
//! The engine is stateless. Callers own the board and hand in a snapshot,
//! the side to move, a [`Difficulty`], and a [`RandomSource`]. The board is
//! never modified.

pub mod heuristic;
pub mod minimax;
pub mod random;

pub use random::{RandomSource, RngSource, ScriptedRandom};

use crate::games::tictactoe::{Board, BoardError, MoveResult, Player, Position, evaluate};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Strength of the AI opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty square.
    Easy,
    /// Win, block, center, corner, then random.
    #[default]
    Medium,
    /// Full minimax search; never loses.
    Hard,
}

/// Caller misuse reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The board could not be read or broke the mark-count invariant.
    #[display("Invalid board: {}", _0)]
    InvalidBoard(BoardError),

    /// Asked to move on a board with no empty square.
    #[display("No empty square to play")]
    NoEmptyCell,

    /// Asked for a move in a position that is already won or drawn.
    #[display("Game is already over: {}", _0)]
    GameOver(MoveResult),
}

impl std::error::Error for EngineError {}

impl From<BoardError> for EngineError {
    fn from(err: BoardError) -> Self {
        EngineError::InvalidBoard(err)
    }
}

/// Parses a board snapshot from text and checks the mark-count invariant.
#[instrument]
pub fn read_board(text: &str) -> Result<Board, EngineError> {
    let board: Board = text.parse()?;
    board.validate()?;
    Ok(board)
}

/// Chooses a square for `side` using the strategy for `difficulty`.
///
/// # Errors
///
/// Returns [`EngineError::NoEmptyCell`] if the board is full.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn choose_move(
    board: &Board,
    side: Player,
    difficulty: Difficulty,
    rng: &mut dyn RandomSource,
) -> Result<Position, EngineError> {
    let choice = match difficulty {
        Difficulty::Easy => random::choose(&board.empty_positions(), rng),
        Difficulty::Medium => heuristic::heuristic_move(board, side, rng),
        Difficulty::Hard => minimax::best_move(board, side),
    };

    let pos = choice.ok_or(EngineError::NoEmptyCell)?;
    debug!(%pos, index = pos.to_index(), "Engine chose move");
    Ok(pos)
}

/// Reads `text` and picks a move for it, the way a one-shot query does.
///
/// The side defaults to whoever is due under X-first alternation. Unlike
/// [`choose_move`], the board is validated and finished positions are
/// refused.
#[instrument(skip(rng))]
pub fn suggest(
    text: &str,
    side: Option<Player>,
    difficulty: Difficulty,
    rng: &mut dyn RandomSource,
) -> Result<Position, EngineError> {
    let board = read_board(text)?;
    let result = evaluate(&board);
    if result.is_terminal() {
        return Err(EngineError::GameOver(result));
    }

    let side = side.unwrap_or_else(|| board.next_to_move());
    choose_move(&board, side, difficulty, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_full_board_is_an_error_at_every_level() {
        let board: Board = "XOXOXXOXO".parse().unwrap();
        let mut rng = ScriptedRandom::new([0]);
        for difficulty in Difficulty::iter() {
            assert_eq!(
                choose_move(&board, Player::X, difficulty, &mut rng),
                Err(EngineError::NoEmptyCell)
            );
        }
    }

    #[test]
    fn test_read_board_checks_structure_and_counts() {
        assert!(read_board("XO..X....").is_ok());
        assert_eq!(
            read_board("XO"),
            Err(EngineError::InvalidBoard(BoardError::WrongLength(2)))
        );
        assert_eq!(
            read_board("OO......."),
            Err(EngineError::InvalidBoard(BoardError::MarkCounts { x: 0, o: 2 }))
        );
    }

    #[test]
    fn test_difficulty_parses_and_displays_lowercase() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_error_display() {
        let err = EngineError::from(BoardError::WrongLength(4));
        assert_eq!(err.to_string(), "Invalid board: Board must have 9 cells, got 4");
        assert_eq!(EngineError::NoEmptyCell.to_string(), "No empty square to play");
        assert_eq!(
            EngineError::GameOver(MoveResult::Draw).to_string(),
            "Game is already over: Draw"
        );
    }
}

//! Game session: authoritative board, turn order, and status.

use super::action::{Move, MoveError};
use super::rules::{MoveResult, WinningLine, evaluate};
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won {
        /// The winning player.
        player: Player,
        /// The line that won it.
        line: WinningLine,
    },
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game accepts no more moves.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { player, .. } => Some(*player),
            _ => None,
        }
    }
}

impl From<MoveResult> for GameStatus {
    fn from(result: MoveResult) -> Self {
        match result {
            MoveResult::NoResult => GameStatus::InProgress,
            MoveResult::Win { player, line } => GameStatus::Won { player, line },
            MoveResult::Draw => GameStatus::Draw,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won { player, .. } => write!(f, "{} Wins!", player),
            GameStatus::Draw => write!(f, "It's a Draw!"),
        }
    }
}

/// Tic-tac-toe game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Resumes a game from an existing position.
    ///
    /// The board must satisfy the mark-count invariant and `to_move` must
    /// agree with it. History starts empty.
    #[instrument(skip(board), fields(board = %board))]
    pub fn resume(board: Board, to_move: Player) -> Result<Self, MoveError> {
        board.validate()?;
        if board.next_to_move() != to_move {
            return Err(MoveError::WrongPlayer(to_move));
        }

        let status = GameStatus::from(evaluate(&board));
        Ok(Self {
            board,
            to_move,
            status,
            history: Vec::new(),
        })
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the moves played since the game started or resumed.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current player's mark and returns the new status.
    ///
    /// The turn passes to the opponent only while the game stays in progress.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));

        self.status = GameStatus::from(evaluate(&self.board));
        if !self.status.is_over() {
            self.to_move = player.opponent();
        }

        debug!(%pos, status = %self.status, "Move applied");
        Ok(self.status)
    }

    /// Starts over with an empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Player::X);
        game.make_move(Position::Center).unwrap();
        assert_eq!(game.to_move(), Player::O);
        game.make_move(Position::TopLeft).unwrap();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.history()[1], Move::new(Player::O, Position::TopLeft));
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut game = Game::new();
        game.make_move(Position::Center).unwrap();
        assert_eq!(
            game.make_move(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_resume_rejects_bad_positions() {
        let board: Board = "OO.......".parse().unwrap();
        assert!(matches!(
            Game::resume(board, Player::X),
            Err(MoveError::InvalidBoard(_))
        ));

        let board: Board = "X........".parse().unwrap();
        assert_eq!(
            Game::resume(board, Player::X),
            Err(MoveError::WrongPlayer(Player::X))
        );
    }

    #[test]
    fn test_resume_detects_finished_game() {
        let board: Board = "XXXOO....".parse().unwrap();
        let game = Game::resume(board, Player::O).unwrap();
        assert!(game.is_over());
        assert_eq!(game.status().winner(), Some(Player::X));
    }

    #[test]
    fn test_reset_returns_to_fresh_game() {
        let mut game = Game::new();
        game.make_move(Position::Center).unwrap();
        game.reset();
        assert_eq!(game, Game::new());
    }
}

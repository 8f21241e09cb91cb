//! Game orchestration between players.

use super::players::GamePlayer;
use crate::games::tictactoe::{Game, GameStatus, MoveError, Player, Position};
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Board after a move (or at the start), in display form.
    StateChanged(String),
    /// A player is about to be asked for a move.
    Thinking {
        /// Display name of the player.
        player: String,
        /// Mark the player holds.
        mark: Player,
    },
    /// Move was made.
    MoveMade {
        /// Display name of the player.
        player: String,
        /// Where the mark went.
        position: Position,
    },
    /// A move was refused and the player will be asked again.
    MoveRejected {
        /// Display name of the player.
        player: String,
        /// Why the move was refused.
        reason: String,
    },
    /// Game ended.
    GameOver {
        /// Final status.
        status: GameStatus,
        /// Display name of the winner, if any.
        winner: Option<String>,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    game: Game,
    player_x: Box<dyn GamePlayer>,
    player_o: Box<dyn GamePlayer>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        player_x: Box<dyn GamePlayer>,
        player_o: Box<dyn GamePlayer>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            game: Game::new(),
            player_x,
            player_o,
            event_tx,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the game loop until the game is over and returns the final status.
    ///
    /// A human move onto an occupied square is reported and asked for again;
    /// the same mistake from an AI ends the loop with an error.
    pub async fn run(&mut self) -> Result<GameStatus> {
        info!("Starting game orchestration");
        self.event_tx
            .send(GameEvent::StateChanged(self.game.board().display()))?;

        while !self.game.is_over() {
            let mark = self.game.to_move();
            let player = match mark {
                Player::X => &mut self.player_x,
                Player::O => &mut self.player_o,
            };
            let player_name = player.name().to_string();

            self.event_tx.send(GameEvent::Thinking {
                player: player_name.clone(),
                mark,
            })?;

            debug!(player = %player_name, "Waiting for move");
            let position = player.get_move(&self.game).await?;

            match self.game.make_move(position) {
                Ok(_) => {}
                Err(err @ MoveError::SquareOccupied(_)) if player.is_human() => {
                    warn!(player = %player_name, %err, "Move rejected");
                    self.event_tx.send(GameEvent::MoveRejected {
                        player: player_name,
                        reason: err.to_string(),
                    })?;
                    continue;
                }
                Err(err) => return Err(err.into()),
            }

            self.event_tx.send(GameEvent::MoveMade {
                player: player_name,
                position,
            })?;
            self.event_tx
                .send(GameEvent::StateChanged(self.game.board().display()))?;
        }

        let status = self.game.status();
        let winner = status.winner().map(|mark| match mark {
            Player::X => self.player_x.name().to_string(),
            Player::O => self.player_o.name().to_string(),
        });
        info!(%status, ?winner, "Game over");
        self.event_tx.send(GameEvent::GameOver { status, winner })?;

        Ok(status)
    }

    /// Restarts the game with the same players.
    pub fn restart(&mut self) {
        self.game.reset();
    }
}

//! AI player backed by the move engine.

use super::GamePlayer;
use crate::engine::{Difficulty, RandomSource, choose_move};
use crate::games::tictactoe::{Game, Position};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::debug;

/// AI opponent with a fixed difficulty.
pub struct AiPlayer {
    name: String,
    difficulty: Difficulty,
    rng: Box<dyn RandomSource + Send>,
    delay: Duration,
}

impl AiPlayer {
    /// Creates an AI that answers without pausing.
    pub fn new(
        name: impl Into<String>,
        difficulty: Difficulty,
        rng: impl RandomSource + Send + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            difficulty,
            rng: Box::new(rng),
            delay: Duration::ZERO,
        }
    }

    /// Sets the cosmetic pause before each move.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The AI's difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

#[async_trait::async_trait]
impl GamePlayer for AiPlayer {
    async fn get_move(&mut self, game: &Game) -> Result<Position> {
        debug!(ai = %self.name, difficulty = %self.difficulty, "AI making move");

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let pos = choose_move(game.board(), game.to_move(), self.difficulty, &mut *self.rng)
            .with_context(|| format!("{} could not move", self.name))?;
        debug!(ai = %self.name, %pos, "AI chose position");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

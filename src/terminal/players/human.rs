//! Human player fed by lines of text.

use super::GamePlayer;
use crate::games::tictactoe::{Game, Position};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, warn};

/// Human player reading one line per move attempt.
///
/// Lines come over a channel so the player does not own stdin; the
/// terminal front end forwards whatever the user types. Two humans at one
/// keyboard share the channel, and only the player being asked reads it.
pub struct HumanPlayer {
    name: String,
    input: Arc<Mutex<mpsc::UnboundedReceiver<String>>>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input_rx: mpsc::UnboundedReceiver<String>) -> Self {
        Self {
            name: name.into(),
            input: Arc::new(Mutex::new(input_rx)),
        }
    }

    /// Another human reading from the same input.
    pub fn sharing_input(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: Arc::clone(&self.input),
        }
    }
}

#[async_trait::async_trait]
impl GamePlayer for HumanPlayer {
    async fn get_move(&mut self, _game: &Game) -> Result<Position> {
        let mut input = self.input.lock().await;
        while let Some(line) = input.recv().await {
            match Position::from_human_input(&line) {
                Some(pos) => {
                    debug!(player = %self.name, %pos, "Human chose position");
                    return Ok(pos);
                }
                None => warn!(player = %self.name, input = %line.trim(), "Unrecognised square"),
            }
        }

        anyhow::bail!("Input channel closed")
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }
}

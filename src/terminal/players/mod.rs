//! Game participants: the `GamePlayer` trait and its implementations.

mod ai;
mod human;

pub use ai::AiPlayer;
pub use human::HumanPlayer;

use crate::games::tictactoe::{Game, Position};
use anyhow::Result;

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait GamePlayer: Send {
    /// Gets a move from this player for the position in `game`.
    async fn get_move(&mut self, game: &Game) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Whether moves come from a person, who may need to be asked again.
    fn is_human(&self) -> bool {
        false
    }
}

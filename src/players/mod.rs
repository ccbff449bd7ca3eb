//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::session::GameSession;
use anyhow::Result;
use tictac_core::Position;

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player.
    ///
    /// The returned position must be empty on the session's board.
    async fn get_move(&mut self, session: &GameSession) -> Result<Position>;

    /// Asked after a round ends; `true` starts another round.
    async fn rematch(&mut self) -> Result<bool> {
        Ok(false)
    }

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

//! Computer player backed by the minimax move engine.

use super::Player;
use crate::session::GameSession;
use anyhow::Result;
use std::time::Duration;
use tictac_core::{MoveEngine, Position};
use tracing::{debug, instrument};

/// Computer player that pauses, then asks the engine for a move.
///
/// The pause is pacing for the person watching; the engine itself answers
/// immediately.
pub struct ComputerPlayer {
    name: String,
    engine: MoveEngine,
    delay: Duration,
}

impl ComputerPlayer {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>, engine: MoveEngine, delay: Duration) -> Self {
        Self {
            name: name.into(),
            engine,
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    #[instrument(skip(self, session), fields(player = %self.name))]
    async fn get_move(&mut self, session: &GameSession) -> Result<Position> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let decision = self.engine.decide(session.board(), *session.difficulty())?;
        debug!(
            position = %decision.position,
            kind = ?decision.kind,
            nodes = decision.nodes,
            "Computer chose position"
        );
        Ok(decision.position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

//! Human player that reads typed lines.

use super::Player;
use crate::orchestrator::GameEvent;
use crate::session::GameSession;
use anyhow::Result;
use tictac_core::Position;
use tokio::sync::mpsc;
use tracing::{info, instrument, warn};

/// Human player fed by a channel of input lines.
///
/// Accepts square numbers `1`-`9` or position labels such as `center`.
pub struct HumanPlayer {
    name: String,
    input_rx: mpsc::UnboundedReceiver<String>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(
        name: impl Into<String>,
        input_rx: mpsc::UnboundedReceiver<String>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            name: name.into(),
            input_rx,
            event_tx,
        }
    }

    async fn next_line(&mut self) -> Result<String> {
        self.input_rx
            .recv()
            .await
            .ok_or_else(|| anyhow::anyhow!("Input channel closed"))
    }

    fn reject(&self, message: String) -> Result<()> {
        warn!(player = %self.name, %message, "Rejected input");
        self.event_tx.send(GameEvent::InvalidInput(message))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    #[instrument(skip(self, session), fields(player = %self.name))]
    async fn get_move(&mut self, session: &GameSession) -> Result<Position> {
        self.event_tx
            .send(GameEvent::Prompt("Your move (1-9):".to_string()))?;

        loop {
            let line = self.next_line().await?;
            let Some(position) = Position::from_label_or_number(&line) else {
                self.reject(format!("{:?} is not a square; type 1-9", line.trim()))?;
                continue;
            };
            if !session.board().is_empty(position) {
                self.reject(format!("Square {} is already occupied", position.to_index() + 1))?;
                continue;
            }
            info!(%position, "Human chose position");
            return Ok(position);
        }
    }

    #[instrument(skip(self), fields(player = %self.name))]
    async fn rematch(&mut self) -> Result<bool> {
        self.event_tx
            .send(GameEvent::Prompt("Play again? [y/n]".to_string()))?;

        loop {
            // Closed input at this prompt means the player walked away.
            let Some(line) = self.input_rx.recv().await else {
                info!(player = %self.name, "Input closed, declining rematch");
                return Ok(false);
            };
            match line.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" | "q" | "quit" => return Ok(false),
                other => self.reject(format!("{:?}: answer y or n", other))?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

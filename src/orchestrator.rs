//! Game orchestration between the human and the computer.

use crate::players::Player;
use crate::session::GameSession;
use anyhow::Result;
use tictac_core::{HUMAN, Outcome, Player as Mark, Position};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Board redrawn after a move or a reset.
    StateChanged(String),
    /// A player is expected to move.
    TurnStarted {
        /// Name of the player to move.
        player: String,
        /// Mark the player places.
        mark: Mark,
    },
    /// The computer is working out its reply.
    ComputerThinking,
    /// Move was made.
    MoveMade {
        /// Name of the player who moved.
        player: String,
        /// Mark that was placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
    },
    /// A question for the human.
    Prompt(String),
    /// The human typed something that is not a legal move.
    InvalidInput(String),
    /// Game ended.
    GameOver {
        /// Final judgment of the board.
        outcome: Outcome,
        /// Human-readable summary.
        message: String,
    },
}

/// Orchestrates rounds between a human and a computer player.
pub struct Orchestrator {
    session: GameSession,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        session: GameSession,
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            session,
            human,
            computer,
            event_tx,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Plays one round to completion and returns how it ended.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<Outcome> {
        info!("Starting game orchestration");
        self.event_tx
            .send(GameEvent::StateChanged(self.session.board().display()))?;

        while let Some(mark) = self.session.to_move() {
            let player = if mark == HUMAN {
                &mut self.human
            } else {
                &mut self.computer
            };
            let player_name = player.name().to_string();

            self.event_tx.send(GameEvent::TurnStarted {
                player: player_name.clone(),
                mark,
            })?;
            if mark != HUMAN {
                self.event_tx.send(GameEvent::ComputerThinking)?;
            }

            debug!(player = %player_name, %mark, "Waiting for move");
            let position = player.get_move(&self.session).await?;
            self.session.play(position)?;

            self.event_tx.send(GameEvent::MoveMade {
                player: player_name,
                mark,
                position,
            })?;
            self.event_tx
                .send(GameEvent::StateChanged(self.session.board().display()))?;
        }

        let outcome = self.session.outcome();
        info!(%outcome, "Round finished");
        self.event_tx.send(GameEvent::GameOver {
            outcome,
            message: self.session.status_string(),
        })?;
        Ok(outcome)
    }

    /// Plays rounds until the human declines a rematch.
    ///
    /// Returns the outcome of every round played.
    #[instrument(skip(self))]
    pub async fn run_series(&mut self) -> Result<Vec<Outcome>> {
        let mut outcomes = Vec::new();
        loop {
            outcomes.push(self.run().await?);
            if !self.human.rematch().await? {
                info!(rounds = outcomes.len(), "Series finished");
                return Ok(outcomes);
            }
            self.restart();
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        self.session.reset();
    }
}

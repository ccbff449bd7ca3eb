//! Line-based terminal front end for interactive play.

use crate::config::GameConfig;
use crate::orchestrator::{GameEvent, Orchestrator};
use crate::players::{ComputerPlayer, HumanPlayer};
use crate::session::GameSession;
use anyhow::Result;
use std::io::BufRead;
use tictac_core::{HUMAN, MoveEngine, Outcome};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Runs interactive rounds on stdin/stdout until the human quits.
#[instrument(skip_all, fields(difficulty = %config.difficulty()))]
pub async fn run_terminal(config: GameConfig) -> Result<Vec<Outcome>> {
    info!("Starting terminal game");

    let (line_tx, line_rx) = mpsc::unbounded_channel();
    spawn_stdin_reader(line_tx);

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(render_events(event_rx));

    let session = GameSession::new(*config.difficulty(), *config.first_player());
    let human = HumanPlayer::new("Human", line_rx, event_tx.clone());
    let computer = ComputerPlayer::new(
        "Computer",
        MoveEngine::from_seed(*config.seed()),
        config.computer_delay(),
    );

    println!("Tic-Tac-Toe, difficulty {}", config.difficulty());
    let mut orchestrator = Orchestrator::new(session, Box::new(human), Box::new(computer), event_tx);
    let result = orchestrator.run_series().await;

    // Dropping the orchestrator closes the event channel and ends the renderer.
    drop(orchestrator);
    renderer.await?;
    result
}

/// Reads stdin on a plain thread so a pending read never blocks shutdown.
fn spawn_stdin_reader(line_tx: mpsc::UnboundedSender<String>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
        debug!("Stdin reader finished");
    });
}

async fn render_events(mut event_rx: mpsc::UnboundedReceiver<GameEvent>) {
    while let Some(event) = event_rx.recv().await {
        match event {
            GameEvent::StateChanged(board) => println!("\n{}\n", board),
            GameEvent::TurnStarted { player, mark } if mark == HUMAN => {
                println!("Next player: {} ({})", player, mark);
            }
            GameEvent::TurnStarted { .. } => {}
            GameEvent::ComputerThinking => println!("Computer (O) is thinking..."),
            GameEvent::MoveMade {
                player,
                mark,
                position,
            } => println!("{} ({}) played {}", player, mark, position.label()),
            GameEvent::Prompt(prompt) => println!("{}", prompt),
            GameEvent::InvalidInput(message) => println!("{}", message),
            GameEvent::GameOver { message, .. } => println!("{}", message),
        }
    }
}

//! Tests for the orchestrator and the channel-fed human player.

use anyhow::Result;
use std::time::Duration;
use tictac::{
    ComputerPlayer, Difficulty, FirstPlayer, GameEvent, GamePlayer, GameSession, HumanPlayer,
    Mark, MoveEngine, Orchestrator, Outcome, Position,
};
use tokio::sync::mpsc;

/// Plays the first empty square from a fixed preference list.
struct ScriptedPlayer {
    preferences: Vec<Position>,
}

#[async_trait::async_trait]
impl GamePlayer for ScriptedPlayer {
    async fn get_move(&mut self, session: &GameSession) -> Result<Position> {
        self.preferences
            .iter()
            .copied()
            .find(|pos| session.board().is_empty(*pos))
            .ok_or_else(|| anyhow::anyhow!("no preferred square left"))
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

fn drain(rx: &mut mpsc::UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

fn computer(seed: u64) -> Box<ComputerPlayer> {
    Box::new(ComputerPlayer::new(
        "Computer",
        MoveEngine::with_seed(seed),
        Duration::ZERO,
    ))
}

#[tokio::test]
async fn test_round_against_optimal_computer() {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let human = ScriptedPlayer {
        preferences: Position::ALL.to_vec(),
    };
    let session = GameSession::new(Difficulty::OPTIMAL, FirstPlayer::Human);
    let mut orchestrator = Orchestrator::new(session, Box::new(human), computer(4), event_tx);

    let outcome = orchestrator.run().await.unwrap();
    assert!(outcome.is_terminal());
    assert_ne!(outcome, Outcome::Win(Mark::X));
    assert_eq!(orchestrator.session().outcome(), outcome);

    let events = drain(&mut event_rx);
    assert!(matches!(events.first(), Some(GameEvent::StateChanged(_))));
    assert!(matches!(
        events.last(),
        Some(GameEvent::GameOver { outcome: o, .. }) if *o == outcome
    ));

    let moves = events
        .iter()
        .filter(|e| matches!(e, GameEvent::MoveMade { .. }))
        .count();
    assert_eq!(moves, orchestrator.session().history().len());

    let thinking = events
        .iter()
        .filter(|e| matches!(e, GameEvent::ComputerThinking))
        .count();
    let computer_moves = orchestrator
        .session()
        .history()
        .iter()
        .filter(|m| m.player == Mark::O)
        .count();
    assert_eq!(thinking, computer_moves);
}

#[tokio::test]
async fn test_computer_opens_when_configured() {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let human = ScriptedPlayer {
        preferences: Position::ALL.iter().rev().copied().collect(),
    };
    let session = GameSession::new(Difficulty::OPTIMAL, FirstPlayer::Computer);
    let mut orchestrator = Orchestrator::new(session, Box::new(human), computer(2), event_tx);

    orchestrator.run().await.unwrap();

    let events = drain(&mut event_rx);
    let first_turn = events
        .iter()
        .find_map(|e| match e {
            GameEvent::TurnStarted { mark, .. } => Some(*mark),
            _ => None,
        });
    assert_eq!(first_turn, Some(Mark::O));
    assert_eq!(orchestrator.session().history()[0].player, Mark::O);
}

#[tokio::test]
async fn test_human_player_skips_bad_input() {
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut human = HumanPlayer::new("Human", input_rx, event_tx);

    let mut session = GameSession::new(Difficulty::OPTIMAL, FirstPlayer::Computer);
    session.play(Position::TopLeft).unwrap();

    for line in ["banana", "10", "1", " center "] {
        input_tx.send(line.to_string()).unwrap();
    }

    let position = human.get_move(&session).await.unwrap();
    assert_eq!(position, Position::Center);

    let events = drain(&mut event_rx);
    assert_eq!(
        events[0],
        GameEvent::Prompt("Your move (1-9):".to_string())
    );
    let rejected = events
        .iter()
        .filter(|e| matches!(e, GameEvent::InvalidInput(_)))
        .count();
    assert_eq!(rejected, 3);
}

#[tokio::test]
async fn test_human_player_fails_when_input_closes() {
    let (input_tx, input_rx) = mpsc::unbounded_channel::<String>();
    let (event_tx, _event_rx) = mpsc::unbounded_channel();
    let mut human = HumanPlayer::new("Human", input_rx, event_tx);
    drop(input_tx);

    let session = GameSession::default();
    assert!(human.get_move(&session).await.is_err());
}

#[tokio::test]
async fn test_series_ends_when_human_declines() {
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let human = HumanPlayer::new("Human", input_rx, event_tx.clone());

    // Squares in order; occupied ones are rejected and the next line is read.
    for n in 1..=9 {
        input_tx.send(n.to_string()).unwrap();
    }
    input_tx.send("n".to_string()).unwrap();

    let session = GameSession::new(Difficulty::OPTIMAL, FirstPlayer::Human);
    let mut orchestrator = Orchestrator::new(session, Box::new(human), computer(9), event_tx);

    let outcomes = orchestrator.run_series().await.unwrap();
    assert_eq!(outcomes.len(), 1);
    assert_ne!(outcomes[0], Outcome::Win(Mark::X));

    let events = drain(&mut event_rx);
    assert!(events.contains(&GameEvent::Prompt("Play again? [y/n]".to_string())));
}

#[tokio::test]
async fn test_closed_input_declines_rematch() {
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (event_tx, _event_rx) = mpsc::unbounded_channel();
    let human = HumanPlayer::new("Human", input_rx, event_tx.clone());

    for n in 1..=9 {
        input_tx.send(n.to_string()).unwrap();
    }
    drop(input_tx);

    let session = GameSession::new(Difficulty::OPTIMAL, FirstPlayer::Human);
    let mut orchestrator = Orchestrator::new(session, Box::new(human), computer(9), event_tx);

    let outcomes = orchestrator.run_series().await.unwrap();
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].is_terminal());
}

#[tokio::test]
async fn test_restart_clears_board() {
    let (event_tx, _event_rx) = mpsc::unbounded_channel();
    let human = ScriptedPlayer {
        preferences: Position::ALL.to_vec(),
    };
    let session = GameSession::new(Difficulty::OPTIMAL, FirstPlayer::Human);
    let mut orchestrator = Orchestrator::new(session, Box::new(human), computer(1), event_tx);

    orchestrator.run().await.unwrap();
    assert!(orchestrator.session().is_over());

    orchestrator.restart();
    assert!(!orchestrator.session().is_over());
    assert!(orchestrator.session().history().is_empty());
}

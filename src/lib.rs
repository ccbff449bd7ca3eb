//! Tictac library - human vs. computer tic-tac-toe
//!
//! The pure rules and the minimax engine live in [`tictac_core`]; this crate
//! coordinates a game around them.
//!
//! # Architecture
//!
//! - **Session**: explicit turn state machine (human turn, computer turn, game over)
//! - **Players**: async human and computer players
//! - **Orchestrator**: drives rounds and emits UI events
//! - **Config**: TOML settings for difficulty, pacing and seeding
//!
//! # Example
//!
//! ```
//! use tictac::{Difficulty, FirstPlayer, GameSession, MoveEngine, Phase, Position};
//!
//! let mut session = GameSession::new(Difficulty::OPTIMAL, FirstPlayer::Human);
//! session.human_move(Position::Center).unwrap();
//! assert_eq!(*session.phase(), Phase::ComputerTurn);
//!
//! let mut engine = MoveEngine::with_seed(1);
//! let decision = session.computer_move(&mut engine).unwrap();
//! assert_eq!(decision.position, Position::TopLeft);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod orchestrator;
mod players;
mod session;
mod simulate;
mod terminal;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Session management
pub use session::{FirstPlayer, GameSession, Move, Phase, SessionError};

// Crate-level exports - Players and orchestration
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{ComputerPlayer, HumanPlayer, Player as GamePlayer};

// Crate-level exports - Front ends
pub use simulate::{Tally, simulate};
pub use terminal::run_terminal;

// Crate-level exports - Core game types
pub use tictac_core::{
    Board, Decision, DecisionKind, Difficulty, EngineError, MoveEngine, Outcome, Player as Mark,
    Position, Square, evaluate,
};

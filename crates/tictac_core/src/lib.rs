//! Pure tic-tac-toe logic for a human-vs-computer game.
//!
//! - **Rules**: [`evaluate`] classifies a board as won, drawn or in progress.
//! - **Engine**: [`decide_computer_move`] mixes uniformly random play with
//!   exhaustive minimax according to a [`Difficulty`].
//!
//! Everything here is synchronous and side-effect free apart from the
//! caller-supplied random source. Boards are `Copy` snapshots.
//!
//! # Example
//!
//! ```
//! use tictac_core::{Board, Difficulty, MoveEngine, Outcome, Position, evaluate};
//!
//! let board: Board = "XX..O....".parse().unwrap();
//! assert_eq!(evaluate(&board), Outcome::InProgress);
//!
//! let mut engine = MoveEngine::with_seed(7);
//! let decision = engine.decide(&board, Difficulty::OPTIMAL).unwrap();
//! assert_eq!(decision.position, Position::TopRight);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod position;
pub mod rules;
mod types;

pub use engine::{
    COMPUTER_WINS, DRAWN, Decision, DecisionKind, Difficulty, HUMAN_WINS, MoveEngine, Score,
    SearchStats, analyze, decide_computer_move, minimax, select_best_move, select_random_move,
};
pub use error::{BoardError, EngineError};
pub use position::Position;
pub use rules::{Outcome, WINNING_LINES, check_winner, evaluate, is_draw, is_full};
pub use types::{Board, COMPUTER, HUMAN, Player, Square};

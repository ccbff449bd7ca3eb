//! Computer move selection.
//!
//! Each decision is a full-strength-or-nothing mixture: one uniform roll
//! against the [`Difficulty`] picks either a uniformly random legal move or
//! the exhaustive minimax move. Difficulty never weakens the search itself.

mod difficulty;
mod minimax;
mod random;

pub use difficulty::Difficulty;
pub use minimax::{
    COMPUTER_WINS, DRAWN, HUMAN_WINS, Score, SearchStats, analyze, minimax, select_best_move,
};
pub use random::select_random_move;

use crate::error::EngineError;
use crate::rules::{check_winner, is_full};
use crate::{Board, Position};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How a decision was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionKind {
    /// Uniform pick among empty squares.
    Random,
    /// Minimax-optimal pick.
    Optimal,
}

/// The engine's chosen move and how it got there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_new::new)]
pub struct Decision {
    /// Square to play.
    pub position: Position,
    /// Which path produced the move.
    pub kind: DecisionKind,
    /// The uniform roll compared against the difficulty.
    pub roll: f64,
    /// Minimax score of the move, for optimal decisions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
    /// Positions visited by the search (zero for random moves).
    pub nodes: u64,
}

impl Decision {
    /// Board index (0-8) of the chosen square.
    pub fn index(&self) -> usize {
        self.position.to_index()
    }
}

/// Decides the computer's next move.
///
/// Draws `roll` uniformly from `[0, 1)`. A roll above `difficulty` plays a
/// random empty square, anything else plays the minimax-optimal square.
/// The caller's board is only read; the search works on copies.
///
/// Fails on a board that is already won or has no empty square.
#[instrument(skip(board, rng), fields(board = %board.to_compact()))]
pub fn decide_computer_move<R: Rng>(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Decision, EngineError> {
    if let Some(winner) = check_winner(board) {
        return Err(EngineError::AlreadyWon(winner));
    }
    if is_full(board) {
        return Err(EngineError::NoEmptySquares);
    }

    let roll: f64 = rng.gen_range(0.0..1.0);
    let decision = if difficulty.plays_optimal(roll) {
        let mut stats = SearchStats::default();
        let (position, score) = minimax::best_move_scored(board, &mut stats)?;
        Decision::new(position, DecisionKind::Optimal, roll, Some(score), stats.nodes)
    } else {
        let position = select_random_move(board, rng)?;
        Decision::new(position, DecisionKind::Random, roll, None, 0)
    };

    debug!(
        position = %decision.position,
        kind = ?decision.kind,
        roll = decision.roll,
        nodes = decision.nodes,
        "Computer move decided"
    );
    Ok(decision)
}

/// Move engine owning its random source.
///
/// Seed it for reproducible play, or let it draw from OS entropy.
#[derive(Debug, Clone)]
pub struct MoveEngine {
    rng: SmallRng,
}

impl MoveEngine {
    /// Creates an engine seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates an engine with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Creates an engine from an optional seed.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::with_seed)
    }

    /// Decides a move at the given difficulty.
    pub fn decide(
        &mut self,
        board: &Board,
        difficulty: Difficulty,
    ) -> Result<Decision, EngineError> {
        decide_computer_move(board, difficulty, &mut self.rng)
    }

    /// Plays a uniformly random empty square.
    pub fn random_move(&mut self, board: &Board) -> Result<Position, EngineError> {
        select_random_move(board, &mut self.rng)
    }

    /// Plays the minimax-optimal square.
    pub fn best_move(&self, board: &Board) -> Result<Position, EngineError> {
        select_best_move(board)
    }
}

impl Default for MoveEngine {
    fn default() -> Self {
        Self::new()
    }
}

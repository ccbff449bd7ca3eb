//! Uniformly random move selection.

use crate::error::EngineError;
use crate::{Board, Position};
use rand::Rng;
use rand::seq::SliceRandom;

/// Picks one empty square uniformly at random.
///
/// Candidates are collected in board order before the draw, so a seeded
/// generator always yields the same square for the same board.
pub fn select_random_move<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<Position, EngineError> {
    Position::valid_moves(board)
        .choose(rng)
        .copied()
        .ok_or(EngineError::NoEmptySquares)
}

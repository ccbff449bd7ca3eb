//! Error types for board construction and move selection.

use crate::position::Position;
use crate::types::Player;

/// Error building or mutating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// A board must have exactly nine squares.
    #[display("Board must have 9 squares, got {}", _0)]
    WrongLength(usize),

    /// A cell character was not a mark or an empty marker.
    #[display("Invalid cell {:?} at index {}", found, index)]
    InvalidCell {
        /// Index of the offending cell.
        index: usize,
        /// The character that was found.
        found: char,
    },

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for BoardError {}

/// Error selecting a computer move.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display)]
pub enum EngineError {
    /// Move selection was asked for on a full board.
    #[display("No empty squares left to move into")]
    NoEmptySquares,

    /// The board already has three in a row.
    #[display("Game is already won by {}", _0)]
    AlreadyWon(Player),

    /// The difficulty was not a number.
    #[display("Difficulty must be a number between 0 and 1, got {}", _0)]
    InvalidDifficulty(f64),
}

impl std::error::Error for EngineError {}

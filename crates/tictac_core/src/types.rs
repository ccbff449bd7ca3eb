//! Core domain types for tic-tac-toe.

use crate::error::BoardError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (the human).
    X,
    /// Player O (the computer).
    O,
}

/// The mark placed by the human player.
pub const HUMAN: Player = Player::X;

/// The mark placed by the computer player.
pub const COMPUTER: Player = Player::O;

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark character for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Parses a single cell character.
    ///
    /// `X`/`O` in either case are marks; `.`, `-` and `_` are empty.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Square::Occupied(Player::X)),
            'O' | 'o' => Some(Square::Occupied(Player::O)),
            '.' | '-' | '_' => Some(Square::Empty),
            _ => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is `Copy`, so every search branch and every caller works on
/// its own snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Number of squares on the board.
    pub const SIZE: usize = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Places a mark on an empty square.
    ///
    /// Squares are never overwritten once set.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), BoardError> {
        if !self.is_empty(pos) {
            return Err(BoardError::SquareOccupied(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(player);
        Ok(())
    }

    /// Returns a copy of the board with `player` marked at `pos`.
    ///
    /// Only valid for empty squares; search code calls this after
    /// enumerating empty positions.
    pub(crate) fn with_mark(mut self, pos: Position, player: Player) -> Self {
        debug_assert!(self.is_empty(pos), "search placed a mark on {pos}");
        self.squares[pos.to_index()] = Square::Occupied(player);
        self
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in ascending index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based number so a human can pick them.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }

    /// Compact one-line form, `X`/`O`/`.` per square.
    pub fn to_compact(&self) -> String {
        self.squares
            .iter()
            .map(|s| match s {
                Square::Empty => '.',
                Square::Occupied(player) => player.symbol(),
            })
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

impl TryFrom<&[Square]> for Board {
    type Error = BoardError;

    fn try_from(cells: &[Square]) -> Result<Self, Self::Error> {
        let squares: [Square; 9] = cells
            .try_into()
            .map_err(|_| BoardError::WrongLength(cells.len()))?;
        Ok(Self { squares })
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses nine cell characters, ignoring whitespace and `|` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(Self::SIZE);
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let square = Square::from_char(c).ok_or(BoardError::InvalidCell {
                index: cells.len(),
                found: c,
            })?;
            cells.push(square);
        }
        Board::try_from(cells.as_slice())
    }
}

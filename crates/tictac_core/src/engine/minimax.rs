//! Exhaustive minimax search from the computer's point of view.
//!
//! The search visits the entire remaining game tree with no pruning and
//! no memoization. Nine squares bound the depth at nine plies, so a full
//! search from the empty board finishes in well under a second.

use crate::error::EngineError;
use crate::rules::{check_winner, is_full};
use crate::{Board, COMPUTER, HUMAN, Position};

/// Minimax value of a position, always from the computer's side.
pub type Score = i8;

/// The computer has, or can force, three in a row.
pub const COMPUTER_WINS: Score = 1;

/// Neither side can force a win.
pub const DRAWN: Score = 0;

/// The human has, or can force, three in a row.
pub const HUMAN_WINS: Score = -1;

/// Counters collected while searching.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, including leaves.
    pub nodes: u64,
}

/// Scores `board` with `maximizing` telling whose turn it is.
///
/// `maximizing == true` means the computer moves next and places its mark;
/// otherwise the human does. Terminal boards score -1 (human line), +1
/// (computer line) or 0 (full, no line) no matter whose turn it is.
pub fn minimax(board: &Board, maximizing: bool) -> Score {
    search(board, maximizing, &mut SearchStats::default())
}

pub(crate) fn search(board: &Board, maximizing: bool, stats: &mut SearchStats) -> Score {
    stats.nodes += 1;

    match check_winner(board) {
        Some(winner) if winner == HUMAN => return HUMAN_WINS,
        Some(_) => return COMPUTER_WINS,
        None => {}
    }
    if is_full(board) {
        return DRAWN;
    }

    let mark = if maximizing { COMPUTER } else { HUMAN };
    let children = Position::ALL
        .into_iter()
        .filter(|pos| board.is_empty(*pos))
        .map(|pos| search(&board.with_mark(pos, mark), !maximizing, stats));

    let best = if maximizing {
        children.max()
    } else {
        children.min()
    };
    // A board that is neither won nor full always has a child.
    best.unwrap_or(DRAWN)
}

/// Picks the computer's minimax-optimal square.
///
/// Squares are tried in ascending index order and only a strictly greater
/// score replaces the current pick, so ties go to the lowest index.
pub fn select_best_move(board: &Board) -> Result<Position, EngineError> {
    best_move_scored(board, &mut SearchStats::default()).map(|(pos, _)| pos)
}

pub(crate) fn best_move_scored(
    board: &Board,
    stats: &mut SearchStats,
) -> Result<(Position, Score), EngineError> {
    let mut best: Option<(Position, Score)> = None;
    for pos in Position::valid_moves(board) {
        let score = search(&board.with_mark(pos, COMPUTER), false, stats);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }
    best.ok_or(EngineError::NoEmptySquares)
}

/// Scores every empty square as a computer move, in index order.
pub fn analyze(board: &Board) -> Vec<(Position, Score)> {
    let mut stats = SearchStats::default();
    Position::valid_moves(board)
        .into_iter()
        .map(|pos| (pos, search(&board.with_mark(pos, COMPUTER), false, &mut stats)))
        .collect()
}

//! Tests for computer move selection.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::HashMap;
use tictac_core::{
    Board, COMPUTER, DecisionKind, Difficulty, EngineError, HUMAN, MoveEngine, Outcome, Player,
    Position, decide_computer_move, evaluate, select_best_move,
};

/// Plays every human continuation against the optimal engine.
///
/// Returns the number of finished games visited.
fn assert_computer_never_loses(board: Board, to_move: Player) -> usize {
    match evaluate(&board) {
        Outcome::Win(winner) => {
            assert_ne!(winner, HUMAN, "human forced a win:\n{board}");
            1
        }
        Outcome::Draw => 1,
        Outcome::InProgress if to_move == COMPUTER => {
            let pos = select_best_move(&board).unwrap();
            let mut next = board;
            next.place(pos, COMPUTER).unwrap();
            assert_computer_never_loses(next, HUMAN)
        }
        Outcome::InProgress => board
            .empty_positions()
            .into_iter()
            .map(|pos| {
                let mut next = board;
                next.place(pos, HUMAN).unwrap();
                assert_computer_never_loses(next, COMPUTER)
            })
            .sum(),
    }
}

#[test]
fn test_optimal_engine_never_loses_moving_second() {
    let games = assert_computer_never_loses(Board::new(), HUMAN);
    assert!(games > 9);
}

#[test]
fn test_optimal_engine_never_loses_moving_first() {
    let games = assert_computer_never_loses(Board::new(), COMPUTER);
    assert!(games > 1);
}

#[test]
fn test_blocks_imminent_human_win() {
    // X X . / . O . / . . .
    let board: Board = "XX..O....".parse().unwrap();
    assert_eq!(select_best_move(&board), Ok(Position::TopRight));
    assert_eq!(select_best_move(&board).unwrap().to_index(), 2);
}

#[test]
fn test_prefers_own_win_over_block() {
    // X X . / O O . / X . .  -- index 2 blocks, index 5 wins.
    let board: Board = "XX.OO.X..".parse().unwrap();
    assert_eq!(select_best_move(&board), Ok(Position::MiddleRight));
}

#[test]
fn test_full_difficulty_always_matches_best_move() {
    let boards = ["X........", "....X....", "XX..O....", "X...O...X", "XO..X...."];
    let mut rng = SmallRng::seed_from_u64(11);
    for cells in boards {
        let board: Board = cells.parse().unwrap();
        let best = select_best_move(&board).unwrap();
        for _ in 0..20 {
            let decision = decide_computer_move(&board, Difficulty::OPTIMAL, &mut rng).unwrap();
            assert_eq!(decision.kind, DecisionKind::Optimal);
            assert_eq!(decision.position, best, "{cells}");
        }
    }
}

#[test]
fn test_zero_difficulty_is_uniform_over_empty_squares() {
    // X O . / . X . / O . .  leaves squares 2, 3, 5, 7 and 8 open.
    let board: Board = "XO..X.O..".parse().unwrap();
    let empty = board.empty_positions();
    assert_eq!(empty.len(), 5);

    let trials = 8_000;
    let mut engine = MoveEngine::with_seed(2024);
    let mut counts: HashMap<Position, usize> = HashMap::new();
    for _ in 0..trials {
        let decision = engine.decide(&board, Difficulty::RANDOM).unwrap();
        assert!(board.is_empty(decision.position));
        *counts.entry(decision.position).or_default() += 1;
    }

    assert_eq!(counts.len(), empty.len());
    let expected = trials / empty.len();
    for pos in empty {
        let seen = counts[&pos];
        assert!(
            seen.abs_diff(expected) < expected / 10,
            "{pos}: {seen} picks, expected about {expected}"
        );
    }
}

#[test]
fn test_half_difficulty_mixes_both_paths() {
    let board: Board = "XO..X.O..".parse().unwrap();
    let difficulty = Difficulty::new(0.5).unwrap();
    let mut engine = MoveEngine::with_seed(99);
    let trials = 2_000;
    let optimal = (0..trials)
        .filter(|_| engine.decide(&board, difficulty).unwrap().kind == DecisionKind::Optimal)
        .count();
    let share = optimal as f64 / trials as f64;
    assert!((0.45..0.55).contains(&share), "optimal share {share}");
}

#[test]
fn test_caller_board_is_untouched() {
    let board: Board = "X...O....".parse().unwrap();
    let snapshot = board;
    let mut engine = MoveEngine::with_seed(5);
    for _ in 0..10 {
        engine.decide(&board, Difficulty::default()).unwrap();
    }
    assert_eq!(board, snapshot);
}

#[test]
fn test_move_selection_on_full_board_fails() {
    let board: Board = "OXOOXXXOX".parse().unwrap();
    let mut engine = MoveEngine::with_seed(0);
    assert_eq!(select_best_move(&board), Err(EngineError::NoEmptySquares));
    assert_eq!(engine.random_move(&board), Err(EngineError::NoEmptySquares));
    assert_eq!(
        engine.decide(&board, Difficulty::RANDOM),
        Err(EngineError::NoEmptySquares)
    );
}

#[test]
fn test_decision_on_won_board_fails() {
    // O has the middle row with squares still open.
    let board: Board = "X.XOOOX..".parse().unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    assert_eq!(
        decide_computer_move(&board, Difficulty::default(), &mut rng),
        Err(EngineError::AlreadyWon(COMPUTER))
    );
}

//! Batch play of the engine against a uniformly random opponent.

use crate::session::{FirstPlayer, GameSession, SessionError};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;
use tictac_core::{COMPUTER, Difficulty, HUMAN, MoveEngine, Outcome, select_random_move};
use tracing::{debug, info, instrument};

/// Results of a batch of simulated rounds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Rounds the computer won.
    pub computer_wins: u32,
    /// Rounds the random opponent won.
    pub human_wins: u32,
    /// Drawn rounds.
    pub draws: u32,
}

impl Tally {
    /// Total rounds recorded.
    pub fn games(&self) -> u32 {
        self.computer_wins + self.human_wins + self.draws
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(mark) if mark == COMPUTER => self.computer_wins += 1,
            Outcome::Win(_) => self.human_wins += 1,
            Outcome::Draw | Outcome::InProgress => self.draws += 1,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: computer {} / random {} / draws {}",
            self.games(),
            self.computer_wins,
            self.human_wins,
            self.draws
        )
    }
}

/// Plays `games` rounds of the engine at `difficulty` against random X moves.
///
/// With a seed the whole batch is reproducible; the opponent's generator is
/// derived from the same seed.
#[instrument]
pub fn simulate(
    games: u32,
    difficulty: Difficulty,
    first_player: FirstPlayer,
    seed: Option<u64>,
) -> Result<Tally, SessionError> {
    let mut engine = MoveEngine::from_seed(seed);
    let mut opponent = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(1)),
        None => SmallRng::from_entropy(),
    };

    let mut session = GameSession::new(difficulty, first_player);
    let mut tally = Tally::default();
    for round in 0..games {
        session.reset();
        while let Some(mark) = session.to_move() {
            if mark == HUMAN {
                let position = select_random_move(session.board(), &mut opponent)?;
                session.human_move(position)?;
            } else {
                session.computer_move(&mut engine)?;
            }
        }
        let outcome = session.outcome();
        debug!(round, %outcome, "Simulated round");
        tally.record(outcome);
    }

    info!(%tally, "Simulation finished");
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outcomes() {
        let mut tally = Tally::default();
        tally.record(Outcome::Win(COMPUTER));
        tally.record(Outcome::Win(HUMAN));
        tally.record(Outcome::Draw);
        assert_eq!(tally.games(), 3);
        assert_eq!(
            tally.to_string(),
            "3 games: computer 1 / random 1 / draws 1"
        );
    }
}

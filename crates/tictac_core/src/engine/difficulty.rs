//! Difficulty as the probability of optimal play.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Probability in `[0, 1]` that the engine plays the minimax-optimal move
/// instead of a uniformly random one.
///
/// Out-of-range values are clamped; NaN is rejected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Difficulty(f64);

impl Difficulty {
    /// Always play a random legal move.
    pub const RANDOM: Self = Self(0.0);

    /// Always play the optimal move.
    pub const OPTIMAL: Self = Self(1.0);

    /// Creates a difficulty, clamping into `[0, 1]`.
    pub fn new(value: f64) -> Result<Self, EngineError> {
        if value.is_nan() {
            return Err(EngineError::InvalidDifficulty(value));
        }
        Ok(Self(value.clamp(0.0, 1.0)))
    }

    /// The probability value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether a uniform roll in `[0, 1)` selects the optimal move.
    ///
    /// Only rolls strictly above the difficulty fall back to random play.
    pub fn plays_optimal(self, roll: f64) -> bool {
        roll <= self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(0.5)
    }
}

impl TryFrom<f64> for Difficulty {
    type Error = EngineError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Difficulty> for f64 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

//! Turn-by-turn game session between the human and the computer.
//!
//! The core engine is stateless; this is where the board, whose turn it is,
//! and the final outcome live between moves.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tictac_core::{
    Board, BoardError, COMPUTER, Decision, Difficulty, EngineError, HUMAN, MoveEngine, Outcome,
    Player as Mark, Position, evaluate,
};
use tracing::{debug, info, instrument, warn};

/// Which side opens a round.
///
/// Defaults to [`FirstPlayer::Human`] so the human moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The human opens with X.
    #[default]
    Human,
    /// The computer opens with O.
    Computer,
}

impl FirstPlayer {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "Human",
            Self::Computer => "Computer",
        }
    }

    /// Toggles between `Human` and `Computer`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }

    /// The opening phase of a round.
    fn opening_phase(self) -> Phase {
        match self {
            Self::Human => Phase::HumanTurn,
            Self::Computer => Phase::ComputerTurn,
        }
    }
}

/// Where a round currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human's mark.
    HumanTurn,
    /// Waiting for the engine's mark.
    ComputerTurn,
    /// The round ended; a new game must be started.
    GameOver(Outcome),
}

impl Phase {
    /// Mark that moves next, if the round is still running.
    pub fn to_move(self) -> Option<Mark> {
        match self {
            Phase::HumanTurn => Some(HUMAN),
            Phase::ComputerTurn => Some(COMPUTER),
            Phase::GameOver(_) => None,
        }
    }

    fn turn_of(mark: Mark) -> Self {
        if mark == HUMAN {
            Phase::HumanTurn
        } else {
            Phase::ComputerTurn
        }
    }
}

/// A mark placed during the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark that was placed.
    pub player: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when applying a move to a session.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display)]
pub enum SessionError {
    /// The round is over; start a new game first.
    #[display("Game is already over")]
    GameOver,

    /// The mark tried to move out of turn.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Mark),

    /// The board rejected the move.
    #[display("{}", _0)]
    Board(BoardError),

    /// The engine could not pick a move.
    #[display("{}", _0)]
    Engine(EngineError),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Board(e) => Some(e),
            SessionError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoardError> for SessionError {
    fn from(err: BoardError) -> Self {
        SessionError::Board(err)
    }
}

impl From<EngineError> for SessionError {
    fn from(err: EngineError) -> Self {
        SessionError::Engine(err)
    }
}

/// One human-vs-computer round and the settings it is played under.
#[derive(Debug, Clone, Getters)]
pub struct GameSession {
    /// The board.
    board: Board,
    /// Whose turn it is, or how the round ended.
    phase: Phase,
    /// Probability that the computer plays optimally.
    difficulty: Difficulty,
    /// Who opens each round.
    first_player: FirstPlayer,
    /// Marks placed this round, oldest first.
    history: Vec<Move>,
}

impl GameSession {
    /// Creates a session with an empty board.
    #[instrument]
    pub fn new(difficulty: Difficulty, first_player: FirstPlayer) -> Self {
        info!(%difficulty, first = first_player.label(), "Creating new game session");
        Self {
            board: Board::new(),
            phase: first_player.opening_phase(),
            difficulty,
            first_player,
            history: Vec::new(),
        }
    }

    /// Mark that moves next, if the round is still running.
    pub fn to_move(&self) -> Option<Mark> {
        self.phase.to_move()
    }

    /// Returns true once the round has ended.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Current terminal-state judgment of the board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Changes the difficulty used for the computer's next decisions.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        debug!(old = %self.difficulty, new = %difficulty, "Difficulty changed");
        self.difficulty = difficulty;
    }

    /// Places the human's mark.
    #[instrument(skip(self))]
    pub fn human_move(&mut self, position: Position) -> Result<Outcome, SessionError> {
        self.apply(HUMAN, position)
    }

    /// Asks the engine for the computer's mark and places it.
    ///
    /// The engine reads a snapshot of the board; the session applies the
    /// returned square itself.
    #[instrument(skip(self, engine))]
    pub fn computer_move(&mut self, engine: &mut MoveEngine) -> Result<Decision, SessionError> {
        self.ensure_turn(COMPUTER)?;
        let decision = engine.decide(&self.board, self.difficulty)?;
        self.apply(COMPUTER, decision.position)?;
        Ok(decision)
    }

    /// Places the mark of whichever side is to move.
    #[instrument(skip(self))]
    pub fn play(&mut self, position: Position) -> Result<Outcome, SessionError> {
        let mark = self.to_move().ok_or(SessionError::GameOver)?;
        self.apply(mark, position)
    }

    /// Clears the board and returns to the opening turn.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.history.len(), "Resetting game session");
        self.board = Board::new();
        self.history.clear();
        self.phase = self.first_player.opening_phase();
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self.phase {
            Phase::HumanTurn => "Next player: Human (X)".to_string(),
            Phase::ComputerTurn => "Next player: Computer (O)".to_string(),
            Phase::GameOver(Outcome::Win(mark)) if mark == HUMAN => {
                "Congratulations! You won!".to_string()
            }
            Phase::GameOver(Outcome::Win(_)) => {
                "Computer won! Better luck next time!".to_string()
            }
            Phase::GameOver(_) => "It's a draw!".to_string(),
        }
    }

    fn ensure_turn(&self, mark: Mark) -> Result<(), SessionError> {
        match self.phase.to_move() {
            None => Err(SessionError::GameOver),
            Some(expected) if expected != mark => {
                warn!(%mark, %expected, "Move out of turn");
                Err(SessionError::WrongTurn(mark))
            }
            Some(_) => Ok(()),
        }
    }

    fn apply(&mut self, mark: Mark, position: Position) -> Result<Outcome, SessionError> {
        self.ensure_turn(mark)?;
        self.board.place(position, mark)?;
        self.history.push(Move::new(mark, position));

        // Winner is checked before fullness inside evaluate.
        let outcome = evaluate(&self.board);
        self.phase = match outcome {
            Outcome::InProgress => Phase::turn_of(mark.opponent()),
            finished => {
                info!(outcome = %finished, moves = self.history.len(), "Game over");
                Phase::GameOver(finished)
            }
        };
        debug!(%mark, %position, phase = ?self.phase, "Move applied");
        Ok(outcome)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Difficulty::default(), FirstPlayer::default())
    }
}

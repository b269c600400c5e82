//! Round state machine, round outcomes and game results.
//!
//! A round moves through
//! `AwaitingAreaChoice -> KillResolved -> AwaitingAccusation -> RoundComplete`
//! and the game stops in `Won` or `Lost`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{AreaId, InvalidChoice, PieceId};

/// Where the engine is within the round protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Pieces are placed; waiting for the protagonist's area.
    AwaitingAreaChoice,
    /// The antagonists have acted (or could not).
    KillResolved,
    /// Accusation options are open.
    AwaitingAccusation,
    /// Between rounds. A fresh game starts here.
    RoundComplete,
    /// Every antagonist is gone.
    Won,
    /// Every visitor is gone.
    Lost,
}

impl RoundPhase {
    /// Check if the game is over.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundPhase::Won | RoundPhase::Lost)
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// All antagonists eliminated.
    Won,
    /// All visitors eliminated.
    Lost,
}

impl From<GameResult> for RoundPhase {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::Won => RoundPhase::Won,
            GameResult::Lost => RoundPhase::Lost,
        }
    }
}

/// What the antagonists did this round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KillOutcome {
    /// Nobody could be reached.
    #[default]
    NoKill,
    /// A visitor was killed.
    Killed {
        /// The eliminated piece.
        victim: PieceId,
        /// Where it happened.
        area: AreaId,
        /// Everyone who shared the area with the victim, ascending.
        suspects: Vec<PieceId>,
    },
}

impl KillOutcome {
    /// The victim, if there was one.
    #[must_use]
    pub fn victim(&self) -> Option<PieceId> {
        match self {
            KillOutcome::NoKill => None,
            KillOutcome::Killed { victim, .. } => Some(*victim),
        }
    }

    /// The suspects, empty when nobody died.
    #[must_use]
    pub fn suspects(&self) -> &[PieceId] {
        match self {
            KillOutcome::NoKill => &[],
            KillOutcome::Killed { suspects, .. } => suspects.as_slice(),
        }
    }
}

/// Everything that happened in one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// Round number, starting at 1.
    pub round: u32,
    /// The protagonist's area.
    pub protected_area: AreaId,
    /// The antagonists' action.
    pub kill: KillOutcome,
    /// The piece the protagonist accused, if any.
    pub accused: Option<PieceId>,
    /// Set when this round ended the game.
    pub result: Option<GameResult>,
}

/// Final tally of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// How the game ended.
    pub result: GameResult,
    /// Rounds played.
    pub turns: u32,
    /// Visitors still alive.
    pub surviving_visitors: usize,
    /// Visitors at the start.
    pub initial_visitors: usize,
}

/// A round operation that could not be applied. State is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The input is not among the valid options.
    #[error(transparent)]
    InvalidChoice(#[from] InvalidChoice),

    /// The operation belongs to a different phase of the round.
    #[error("expected phase {expected:?}, engine is in {actual:?}")]
    OutOfPhase {
        /// Phase the operation requires.
        expected: RoundPhase,
        /// Phase the engine is in.
        actual: RoundPhase,
    },

    /// The game has already ended.
    #[error("the game is over: {0:?}")]
    GameOver(GameResult),
}

//! The protagonist's side of a round.
//!
//! The engine asks a `ProtagonistPolicy` for the two per-round inputs: which
//! area to protect and whom (if anyone) to accuse. A console driver, a
//! scripted test player or a bot all plug in here.

use crate::board::Board;
use crate::core::{AreaId, PieceId};

use super::round::{KillOutcome, RoundError, RoundReport};

/// Supplies the protagonist's decisions.
///
/// Choices must come from the options offered; anything else comes back
/// from the engine as `RoundError::InvalidChoice`.
pub trait ProtagonistPolicy {
    /// Error raised by the policy itself, e.g. console I/O.
    type Error: From<RoundError>;

    /// Pick the area to protect after everyone else has been placed.
    fn choose_area(&mut self, round: u32, board: &Board) -> Result<AreaId, Self::Error>;

    /// Pick a piece to accuse from `options`, or `None` to pass.
    fn choose_accusation(
        &mut self,
        kill: &KillOutcome,
        options: &[PieceId],
    ) -> Result<Option<PieceId>, Self::Error>;

    /// Called once the round has been applied.
    fn round_finished(&mut self, _report: &RoundReport) -> Result<(), Self::Error> {
        Ok(())
    }
}

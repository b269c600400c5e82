//! Game rules: the round engine and everything it decides.
//!
//! - `engine`: `RoundEngine`, the owner of all game state
//! - `targeting`: how the antagonists pick a victim
//! - `round`: round phases, outcomes, results and errors
//! - `policy`: the seam through which the protagonist's choices arrive
//!
//! The engine never prints anything; drivers read its reports.

pub mod engine;
pub mod policy;
pub mod round;
pub mod targeting;

pub use engine::RoundEngine;
pub use policy::ProtagonistPolicy;
pub use round::{GameResult, GameSummary, KillOutcome, RoundError, RoundPhase, RoundReport};
pub use targeting::{kill_candidates, select_kill_target, KillCandidate};

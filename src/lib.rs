//! # vulcan-mystery
//!
//! A hidden-role deduction game engine.
//!
//! A pool of numbered pieces is secretly split into one protagonist (the
//! player), a few antagonists (murderers) and the remaining visitors. Each
//! round everyone is scattered across a handful of areas; the antagonists
//! kill one visitor they share an unprotected area with, and the protagonist
//! may accuse anyone. The game is won when every antagonist is gone and lost
//! when every visitor is.
//!
//! ## Modules
//!
//! - `core`: Piece/area IDs, roles, RNG, configuration, errors
//! - `board`: Per-round area occupancy
//! - `rules`: The round engine, kill targeting and the round state machine
//! - `console`: Narration and validated input for playing in a terminal
//!
//! ## Example
//!
//! ```
//! use vulcan_mystery::{GameConfig, GameRng, RoundEngine};
//!
//! let mut engine = RoundEngine::new(GameConfig::default(), GameRng::new(42)).unwrap();
//! engine.begin_round().unwrap();
//! let kill = engine.submit_area(vulcan_mystery::AreaId::new(0)).unwrap().clone();
//! let options = engine.open_accusations().unwrap();
//! let report = engine.submit_accusation(None).unwrap();
//! assert_eq!(report.kill, kill);
//! assert!(!options.contains(&engine.roles().protagonist()));
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod console;

// Re-export commonly used types
pub use crate::core::{
    AreaId, PieceId,
    GameRng, GameConfig,
    Role, Roles,
    ConfigError, InvalidChoice,
};

pub use crate::board::Board;

pub use crate::rules::{
    RoundEngine, ProtagonistPolicy,
    GameResult, GameSummary, KillOutcome, RoundError, RoundPhase, RoundReport,
    KillCandidate, kill_candidates, select_kill_target,
};

//! Console presentation: narration, the intro, board rendering and the
//! validated prompt loop.
//!
//! Nothing here holds game state. `ConsolePlayer` is a `ProtagonistPolicy`
//! that asks a human for each decision and narrates the engine's reports.
//!
//! Settings come from the environment:
//!
//! | Variable          | Meaning                                   |
//! |-------------------|-------------------------------------------|
//! | `VULCAN_SEED`     | RNG seed; unset draws one from entropy    |
//! | `VULCAN_DELAY_MS` | Per-character narration delay (0 = none)  |

pub mod narrator;
pub mod player;
pub mod prompt;

use std::io;
use std::time::Duration;

use thiserror::Error;

use crate::core::config::{parse_optional, parse_or};
use crate::core::ConfigError;
use crate::rules::RoundError;

pub use narrator::{murderer_phrase, render_board, turn_header, Narrator};
pub use player::ConsolePlayer;
pub use prompt::{choose, parse_choice};

/// Environment variable for the RNG seed.
pub const ENV_SEED: &str = "VULCAN_SEED";
/// Environment variable for the narration delay in milliseconds.
pub const ENV_DELAY_MS: &str = "VULCAN_DELAY_MS";

/// Failure while driving a game from the console.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading input or writing output failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),

    /// The engine rejected a round operation.
    #[error(transparent)]
    Round(#[from] RoundError),
}

/// Console driver settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsoleSettings {
    /// Fixed seed, or `None` for entropy.
    pub seed: Option<u64>,
    /// Base delay between narrated characters.
    pub delay: Duration,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            seed: None,
            delay: Duration::from_millis(100),
        }
    }
}

impl ConsoleSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, defaulting what is unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let seed = parse_optional(&lookup, ENV_SEED)?;
        let delay_ms = parse_or(&lookup, ENV_DELAY_MS, defaults.delay.as_millis() as u64)?;

        Ok(Self {
            seed,
            delay: Duration::from_millis(delay_ms),
        })
    }
}

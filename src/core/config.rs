//! Game configuration: pool size, antagonist count, board size.
//!
//! Defaults match the classic table: nine pieces, two murderers, three
//! areas. Values can be overridden from the environment:
//!
//! | Variable              | Field              |
//! |-----------------------|--------------------|
//! | `VULCAN_PIECES`       | `piece_count`      |
//! | `VULCAN_ANTAGONISTS`  | `antagonist_count` |
//! | `VULCAN_AREAS`        | `area_count`       |

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Environment variable for the piece pool size.
pub const ENV_PIECES: &str = "VULCAN_PIECES";
/// Environment variable for the antagonist count.
pub const ENV_ANTAGONISTS: &str = "VULCAN_ANTAGONISTS";
/// Environment variable for the area count.
pub const ENV_AREAS: &str = "VULCAN_AREAS";

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of pieces in the pool, protagonist included.
    pub piece_count: usize,

    /// Number of antagonists drawn at the start.
    pub antagonist_count: usize,

    /// Number of areas on the board.
    pub area_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            piece_count: 9,
            antagonist_count: 2,
            area_count: 3,
        }
    }
}

impl GameConfig {
    /// Create a configuration. Call `validate` before using it.
    #[must_use]
    pub fn new(piece_count: usize, antagonist_count: usize, area_count: usize) -> Self {
        Self {
            piece_count,
            antagonist_count,
            area_count,
        }
    }

    /// Set the piece pool size.
    #[must_use]
    pub fn with_pieces(mut self, count: usize) -> Self {
        self.piece_count = count;
        self
    }

    /// Set the antagonist count.
    #[must_use]
    pub fn with_antagonists(mut self, count: usize) -> Self {
        self.antagonist_count = count;
        self
    }

    /// Set the number of areas.
    #[must_use]
    pub fn with_areas(mut self, count: usize) -> Self {
        self.area_count = count;
        self
    }

    /// Number of visitors after the protagonist and antagonists are drawn.
    ///
    /// Only meaningful for a validated configuration.
    #[must_use]
    pub fn visitor_count(&self) -> usize {
        self.piece_count
            .saturating_sub(self.antagonist_count)
            .saturating_sub(1)
    }

    /// Check that roles fit in the pool and the board has areas.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if u32::try_from(self.piece_count).is_err() {
            return Err(ConfigError::TooManyPieces { pieces: self.piece_count });
        }
        if self.antagonist_count >= self.piece_count {
            return Err(ConfigError::TooManyAntagonists {
                antagonists: self.antagonist_count,
                pieces: self.piece_count,
            });
        }
        if self.area_count == 0 {
            return Err(ConfigError::NoAreas);
        }
        Ok(())
    }

    /// Read overrides from the process environment on top of the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup` on top of the defaults, then validate.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            piece_count: parse_or(&lookup, ENV_PIECES, defaults.piece_count)?,
            antagonist_count: parse_or(&lookup, ENV_ANTAGONISTS, defaults.antagonist_count)?,
            area_count: parse_or(&lookup, ENV_AREAS, defaults.area_count)?,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Parse `key` through `lookup`, falling back to `default` when unset.
pub(crate) fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    Ok(parse_optional(lookup, key)?.unwrap_or(default))
}

/// Parse `key` through `lookup`; `None` when unset.
pub(crate) fn parse_optional<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    lookup(key)
        .map(|raw| {
            raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            })
        })
        .transpose()
}

//! Configuration and input error types.

use thiserror::Error;

use super::piece::PieceId;

/// A game configuration the engine refuses to start with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The protagonist plus all antagonists do not fit in the piece pool.
    #[error("{antagonists} antagonists plus the protagonist exceed the pool of {pieces} pieces")]
    TooManyAntagonists {
        /// Requested antagonist count.
        antagonists: usize,
        /// Size of the piece pool.
        pieces: usize,
    },

    /// The pool is larger than the piece ID space.
    #[error("a pool of {pieces} pieces exceeds the piece ID range")]
    TooManyPieces {
        /// Size of the piece pool.
        pieces: usize,
    },

    /// The board needs at least one area.
    #[error("the board needs at least one area")]
    NoAreas,

    /// A configuration value could not be parsed.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue {
        /// Name of the setting.
        key: String,
        /// The raw value that failed to parse.
        value: String,
    },

    /// A fixed role assignment is not a valid draw from the pool.
    #[error("invalid role assignment: {0}")]
    InvalidRoles(String),
}

/// A round input that is not among the currently valid options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidChoice {
    /// Area index outside the board.
    #[error("area {area} is out of range (board has {area_count} areas)")]
    AreaOutOfRange {
        /// The zero-based index that was supplied.
        area: usize,
        /// Number of areas on the board.
        area_count: usize,
    },

    /// Accusation target is not a surviving visitor or antagonist.
    #[error("piece {0} cannot be accused")]
    NotAccusable(PieceId),

    /// Raw console input that matches none of the offered options.
    #[error("unrecognized input {input:?}")]
    Unrecognized {
        /// The text as entered.
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::TooManyAntagonists { antagonists: 9, pieces: 9 };
        assert_eq!(
            err.to_string(),
            "9 antagonists plus the protagonist exceed the pool of 9 pieces"
        );
        assert_eq!(ConfigError::NoAreas.to_string(), "the board needs at least one area");
    }

    #[test]
    fn test_invalid_choice_messages() {
        assert_eq!(
            InvalidChoice::NotAccusable(PieceId(4)).to_string(),
            "piece 4 cannot be accused"
        );
        let err = InvalidChoice::Unrecognized { input: "x".to_string() };
        assert_eq!(err.to_string(), "unrecognized input \"x\"");
    }
}

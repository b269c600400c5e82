//! Piece and area identification.
//!
//! Every participant in a game is a numbered piece. Pieces are allocated as
//! `0..piece_count` when the game is constructed and never change identity;
//! they are only reclassified or eliminated.
//!
//! Areas are addressed by a zero-based `AreaId`. The console shows areas
//! 1-based, so `AreaId` converts both ways.
//!
//! ```
//! use vulcan_mystery::core::{AreaId, PieceId};
//!
//! let piece = PieceId::new(7);
//! assert_eq!(piece.raw(), 7);
//! assert_eq!(piece.to_string(), "7");
//!
//! let area = AreaId::from_number(2, 3).unwrap();
//! assert_eq!(area.index(), 1);
//! assert_eq!(area.number(), 2);
//! assert!(AreaId::from_number(4, 3).is_none());
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a piece within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Create a piece ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// All piece IDs for a pool of `piece_count` pieces, ascending.
    ///
    /// Capped at the `u32` range.
    pub fn pool(piece_count: usize) -> impl Iterator<Item = PieceId> {
        (0..u32::try_from(piece_count).unwrap_or(u32::MAX)).map(PieceId)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for PieceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zero-based index of an area on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AreaId(pub usize);

impl AreaId {
    /// Create an area ID from a zero-based index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Convert a 1-based area number (as typed by the player) into an ID.
    ///
    /// Returns `None` when the number is outside `1..=area_count`.
    #[must_use]
    pub fn from_number(number: usize, area_count: usize) -> Option<Self> {
        (1..=area_count).contains(&number).then(|| Self(number - 1))
    }

    /// All area IDs for a board with `area_count` areas.
    pub fn all(area_count: usize) -> impl Iterator<Item = AreaId> {
        (0..area_count).map(AreaId)
    }

    /// Zero-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// 1-based number shown to the player.
    #[must_use]
    pub const fn number(self) -> usize {
        self.0 + 1
    }
}

impl std::fmt::Display for AreaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Area({})", self.number())
    }
}

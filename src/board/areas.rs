//! Per-round area occupancy.
//!
//! The `Board` tracks which pieces stand in which area this round. It is
//! cleared and repopulated every round; nothing carries over.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{AreaId, InvalidChoice, PieceId};

/// Occupants of a single area, kept in ascending piece order.
pub type Occupants = SmallVec<[PieceId; 8]>;

/// Areas and their occupants for the current round.
///
/// ## Usage
///
/// ```
/// use vulcan_mystery::board::Board;
/// use vulcan_mystery::core::{AreaId, PieceId};
///
/// let mut board = Board::new(3);
/// board.place(AreaId::new(1), PieceId::new(5)).unwrap();
/// board.place(AreaId::new(1), PieceId::new(2)).unwrap();
///
/// assert_eq!(board.occupants(AreaId::new(1)), &[PieceId::new(2), PieceId::new(5)]);
/// assert_eq!(board.area_of(PieceId::new(5)), Some(AreaId::new(1)));
/// assert_eq!(board.suspects_for(PieceId::new(5)), vec![PieceId::new(2)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Occupants>", into = "Vec<Occupants>")]
pub struct Board {
    /// Sorted occupant lists, one per area.
    areas: Vec<Occupants>,

    /// Piece locations: piece -> area.
    locations: FxHashMap<PieceId, AreaId>,
}

impl Board {
    /// Create a board with `area_count` empty areas.
    #[must_use]
    pub fn new(area_count: usize) -> Self {
        Self {
            areas: vec![Occupants::new(); area_count],
            locations: FxHashMap::default(),
        }
    }

    /// Number of areas.
    #[must_use]
    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    /// Remove every piece from every area.
    pub fn clear(&mut self) {
        for area in &mut self.areas {
            area.clear();
        }
        self.locations.clear();
    }

    /// Place a piece in an area, keeping the area sorted.
    ///
    /// Panics if the piece is already on the board; each piece is placed at
    /// most once per round.
    pub fn place(&mut self, area: AreaId, piece: PieceId) -> Result<(), InvalidChoice> {
        let area_count = self.areas.len();
        let occupants = self.areas.get_mut(area.index()).ok_or(InvalidChoice::AreaOutOfRange {
            area: area.index(),
            area_count,
        })?;

        if let Some(existing) = self.locations.get(&piece) {
            panic!("piece {piece} is already placed in {existing}");
        }

        let index = occupants.binary_search(&piece).unwrap_or_else(|i| i);
        occupants.insert(index, piece);
        self.locations.insert(piece, area);
        Ok(())
    }

    /// Take a piece off the board.
    ///
    /// Returns the area it was in, or `None` if it was not placed.
    pub fn remove(&mut self, piece: PieceId) -> Option<AreaId> {
        let area = self.locations.remove(&piece)?;
        self.areas[area.index()].retain(|p| *p != piece);
        Some(area)
    }

    /// Pieces in an area, ascending. Empty for an unknown area.
    #[must_use]
    pub fn occupants(&self, area: AreaId) -> &[PieceId] {
        match self.areas.get(area.index()) {
            Some(occupants) => occupants.as_slice(),
            None => &[],
        }
    }

    /// Iterate over all areas with their occupants.
    pub fn areas(&self) -> impl Iterator<Item = (AreaId, &[PieceId])> {
        self.areas
            .iter()
            .enumerate()
            .map(|(i, occupants)| (AreaId::new(i), occupants.as_slice()))
    }

    /// The area a piece is in this round.
    #[must_use]
    pub fn area_of(&self, piece: PieceId) -> Option<AreaId> {
        self.locations.get(&piece).copied()
    }

    /// Everyone sharing an area with `piece`, excluding the piece itself.
    ///
    /// Empty if the piece is not on the board.
    #[must_use]
    pub fn suspects_for(&self, piece: PieceId) -> Vec<PieceId> {
        match self.area_of(piece) {
            Some(area) => self
                .occupants(area)
                .iter()
                .copied()
                .filter(|&p| p != piece)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Total number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.locations.len()
    }
}

/// Rebuilds the location index from serialized area lists.
impl From<Vec<Occupants>> for Board {
    fn from(areas: Vec<Occupants>) -> Self {
        let locations = areas
            .iter()
            .enumerate()
            .flat_map(|(i, occupants)| occupants.iter().map(move |&p| (p, AreaId::new(i))))
            .collect();
        Self { areas, locations }
    }
}

impl From<Board> for Vec<Occupants> {
    fn from(board: Board) -> Self {
        board.areas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<PieceId> {
        raw.iter().copied().map(PieceId).collect()
    }

    #[test]
    fn test_place_keeps_sorted() {
        let mut board = Board::new(2);
        for raw in [7, 1, 4, 0] {
            board.place(AreaId(0), PieceId(raw)).unwrap();
        }
        assert_eq!(board.occupants(AreaId(0)), &ids(&[0, 1, 4, 7])[..]);
        assert!(board.occupants(AreaId(1)).is_empty());
        assert_eq!(board.piece_count(), 4);
    }

    #[test]
    fn test_place_out_of_range() {
        let mut board = Board::new(3);
        let err = board.place(AreaId(3), PieceId(0)).unwrap_err();
        assert_eq!(err, InvalidChoice::AreaOutOfRange { area: 3, area_count: 3 });
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    #[should_panic(expected = "already placed")]
    fn test_place_twice_panics() {
        let mut board = Board::new(3);
        board.place(AreaId(0), PieceId(1)).unwrap();
        let _ = board.place(AreaId(2), PieceId(1));
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new(3);
        board.place(AreaId(0), PieceId(1)).unwrap();
        board.place(AreaId(2), PieceId(2)).unwrap();
        board.clear();

        assert_eq!(board.area_count(), 3);
        assert_eq!(board.piece_count(), 0);
        assert!(board.areas().all(|(_, occupants)| occupants.is_empty()));
        assert_eq!(board.area_of(PieceId(1)), None);
    }

    #[test]
    fn test_remove() {
        let mut board = Board::new(2);
        board.place(AreaId(1), PieceId(3)).unwrap();
        board.place(AreaId(1), PieceId(5)).unwrap();

        assert_eq!(board.remove(PieceId(3)), Some(AreaId(1)));
        assert_eq!(board.occupants(AreaId(1)), &ids(&[5])[..]);
        assert_eq!(board.remove(PieceId(3)), None);
    }

    #[test]
    fn test_suspects_for() {
        let mut board = Board::new(2);
        for raw in [0, 3, 6] {
            board.place(AreaId(0), PieceId(raw)).unwrap();
        }
        board.place(AreaId(1), PieceId(1)).unwrap();

        assert_eq!(board.suspects_for(PieceId(3)), ids(&[0, 6]));
        assert!(board.suspects_for(PieceId(1)).is_empty());
        assert!(board.suspects_for(PieceId(9)).is_empty());
    }

    #[test]
    fn test_area_of() {
        let mut board = Board::new(2);
        board.place(AreaId(1), PieceId(4)).unwrap();
        assert_eq!(board.area_of(PieceId(4)), Some(AreaId(1)));
        assert_eq!(board.area_of(PieceId(0)), None);
    }

    #[test]
    fn test_serialization() {
        let mut board = Board::new(2);
        board.place(AreaId(0), PieceId(2)).unwrap();
        board.place(AreaId(1), PieceId(8)).unwrap();

        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "[[2],[8]]");

        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
        assert_eq!(deserialized.area_of(PieceId(8)), Some(AreaId(1)));
    }
}

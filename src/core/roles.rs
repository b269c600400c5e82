//! Secret role assignment.
//!
//! Roles are drawn once per game from a single shuffle of the piece pool:
//! the first piece of the permutation is the protagonist, the next
//! `antagonist_count` pieces are antagonists and the remainder are visitors.
//! After that, role sets only ever shrink.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::error::ConfigError;
use super::piece::PieceId;
use super::rng::GameRng;

/// The hidden role of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The player-controlled piece. Never eliminated.
    Protagonist,
    /// A murderer hiding among the visitors.
    Antagonist,
    /// A neutral piece.
    Visitor,
}

/// Pairwise-disjoint role collections for one game.
///
/// Antagonists and visitors keep their draw order; placement iterates them
/// in that order, which keeps seeded games reproducible.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roles {
    protagonist: PieceId,
    antagonists: Vec<PieceId>,
    visitors: Vec<PieceId>,
}

impl Roles {
    /// Draw roles for a validated configuration.
    pub fn draw(config: &GameConfig, rng: &mut GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut pool: Vec<PieceId> = PieceId::pool(config.piece_count).collect();
        rng.shuffle(&mut pool);

        // validate() guarantees the pool holds at least antagonist_count + 1.
        let visitors = pool.split_off(config.antagonist_count + 1);
        let antagonists = pool.split_off(1);
        let protagonist = pool[0];

        Ok(Self {
            protagonist,
            antagonists,
            visitors,
        })
    }

    /// Build a predetermined assignment.
    ///
    /// Every piece must come from `0..piece_count` and appear in exactly one
    /// role. Pieces of the pool left unassigned are simply absent from play.
    pub fn fixed(
        piece_count: usize,
        protagonist: PieceId,
        antagonists: impl IntoIterator<Item = PieceId>,
        visitors: impl IntoIterator<Item = PieceId>,
    ) -> Result<Self, ConfigError> {
        let antagonists: Vec<PieceId> = antagonists.into_iter().collect();
        let visitors: Vec<PieceId> = visitors.into_iter().collect();

        let mut seen = FxHashSet::default();
        for piece in std::iter::once(protagonist)
            .chain(antagonists.iter().copied())
            .chain(visitors.iter().copied())
        {
            if piece.raw() as usize >= piece_count {
                return Err(ConfigError::InvalidRoles(format!(
                    "piece {piece} is outside the pool of {piece_count}"
                )));
            }
            if !seen.insert(piece) {
                return Err(ConfigError::InvalidRoles(format!(
                    "piece {piece} is assigned more than one role"
                )));
            }
        }

        Ok(Self {
            protagonist,
            antagonists,
            visitors,
        })
    }

    /// The protagonist's piece.
    #[must_use]
    pub fn protagonist(&self) -> PieceId {
        self.protagonist
    }

    /// Surviving antagonists, in draw order.
    #[must_use]
    pub fn antagonists(&self) -> &[PieceId] {
        &self.antagonists
    }

    /// Surviving visitors, in draw order.
    #[must_use]
    pub fn visitors(&self) -> &[PieceId] {
        &self.visitors
    }

    /// Check if a piece is a surviving antagonist.
    #[must_use]
    pub fn is_antagonist(&self, piece: PieceId) -> bool {
        self.antagonists.contains(&piece)
    }

    /// Role of a piece that is still in the game.
    #[must_use]
    pub fn role_of(&self, piece: PieceId) -> Option<Role> {
        if piece == self.protagonist {
            Some(Role::Protagonist)
        } else if self.antagonists.contains(&piece) {
            Some(Role::Antagonist)
        } else if self.visitors.contains(&piece) {
            Some(Role::Visitor)
        } else {
            None
        }
    }

    /// Check if a piece is still in the game.
    #[must_use]
    pub fn is_alive(&self, piece: PieceId) -> bool {
        self.role_of(piece).is_some()
    }

    /// Every piece still in the game, protagonist included, ascending.
    #[must_use]
    pub fn roster(&self) -> Vec<PieceId> {
        let mut roster = self.accusable();
        roster.push(self.protagonist);
        roster.sort_unstable();
        roster
    }

    /// Surviving visitors and antagonists, ascending.
    #[must_use]
    pub fn accusable(&self) -> Vec<PieceId> {
        let mut pieces: Vec<PieceId> = self
            .visitors
            .iter()
            .chain(self.antagonists.iter())
            .copied()
            .collect();
        pieces.sort_unstable();
        pieces
    }

    /// Remove a piece from every role collection it belongs to.
    ///
    /// Returns the role the piece held, or `None` if it was not an
    /// antagonist or visitor. The protagonist is never removed.
    pub fn eliminate(&mut self, piece: PieceId) -> Option<Role> {
        debug_assert_ne!(piece, self.protagonist, "the protagonist cannot be eliminated");

        if remove_piece(&mut self.antagonists, piece) {
            Some(Role::Antagonist)
        } else if remove_piece(&mut self.visitors, piece) {
            Some(Role::Visitor)
        } else {
            None
        }
    }
}

/// Remove `piece` from `list`, keeping the order of the rest.
fn remove_piece(list: &mut Vec<PieceId>, piece: PieceId) -> bool {
    match list.iter().position(|&p| p == piece) {
        Some(index) => {
            list.remove(index);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<PieceId> {
        raw.iter().copied().map(PieceId).collect()
    }

    #[test]
    fn test_draw_partitions_pool() {
        let config = GameConfig::default();
        let mut rng = GameRng::new(42);
        let roles = Roles::draw(&config, &mut rng).unwrap();

        assert_eq!(roles.antagonists().len(), 2);
        assert_eq!(roles.visitors().len(), 6);
        assert_eq!(roles.roster(), ids(&[0, 1, 2, 3, 4, 5, 6, 7, 8]));
        assert!(!roles.is_antagonist(roles.protagonist()));
    }

    #[test]
    fn test_draw_is_deterministic() {
        let config = GameConfig::default();
        let roles1 = Roles::draw(&config, &mut GameRng::new(7)).unwrap();
        let roles2 = Roles::draw(&config, &mut GameRng::new(7)).unwrap();
        assert_eq!(roles1, roles2);
    }

    #[test]
    fn test_draw_varies_protagonist() {
        let config = GameConfig::default();
        let protagonists: FxHashSet<PieceId> = (0..50)
            .map(|seed| Roles::draw(&config, &mut GameRng::new(seed)).unwrap().protagonist())
            .collect();
        assert!(protagonists.len() > 1);
    }

    #[test]
    fn test_draw_rejects_bad_config() {
        let config = GameConfig::new(3, 3, 2);
        let err = Roles::draw(&config, &mut GameRng::new(1)).unwrap_err();
        assert!(matches!(err, ConfigError::TooManyAntagonists { .. }));
    }

    #[test]
    fn test_fixed_roles() {
        let roles = Roles::fixed(9, PieceId(2), ids(&[3, 7]), ids(&[0, 1, 4, 5, 6, 8])).unwrap();
        assert_eq!(roles.protagonist(), PieceId(2));
        assert_eq!(roles.role_of(PieceId(3)), Some(Role::Antagonist));
        assert_eq!(roles.role_of(PieceId(8)), Some(Role::Visitor));
        assert_eq!(roles.role_of(PieceId(2)), Some(Role::Protagonist));
        assert_eq!(roles.accusable(), ids(&[0, 1, 3, 4, 5, 6, 7, 8]));
    }

    #[test]
    fn test_fixed_rejects_overlap() {
        let err = Roles::fixed(9, PieceId(2), ids(&[3, 7]), ids(&[3, 4])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRoles(_)));

        let err = Roles::fixed(9, PieceId(2), ids(&[2]), ids(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRoles(_)));
    }

    #[test]
    fn test_fixed_rejects_outside_pool() {
        let err = Roles::fixed(4, PieceId(0), ids(&[9]), ids(&[1])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRoles(_)));
    }

    #[test]
    fn test_eliminate() {
        let mut roles = Roles::fixed(6, PieceId(0), ids(&[1, 2]), ids(&[3, 4, 5])).unwrap();

        assert_eq!(roles.eliminate(PieceId(4)), Some(Role::Visitor));
        assert_eq!(roles.visitors(), &ids(&[3, 5])[..]);

        assert_eq!(roles.eliminate(PieceId(1)), Some(Role::Antagonist));
        assert_eq!(roles.antagonists(), &ids(&[2])[..]);

        // Already gone
        assert_eq!(roles.eliminate(PieceId(4)), None);
        assert!(!roles.is_alive(PieceId(4)));
        assert_eq!(roles.roster(), ids(&[0, 2, 3, 5]));
    }
}

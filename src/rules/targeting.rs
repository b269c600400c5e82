//! Antagonist kill targeting.
//!
//! The antagonists act as a group and pick at most one victim per round:
//! - Only areas holding an antagonist and *not* holding the protagonist count
//! - Every non-antagonist in such an area is a candidate
//! - A candidate's score is the number of candidates in its area
//!
//! Crowded areas score higher because a victim from a crowd leaves the most
//! suspects behind. Ties at the top score are broken uniformly at random.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::board::Board;
use crate::core::{AreaId, GameRng, PieceId, Roles};

/// A piece the antagonists could kill this round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillCandidate {
    /// Size of the candidate set in the piece's area.
    pub score: usize,
    /// The candidate.
    pub piece: PieceId,
    /// Where the candidate stands.
    pub area: AreaId,
}

/// Score every piece the antagonists can reach on this board.
///
/// Areas with the protagonist present, or without an antagonist, yield no
/// candidates.
#[must_use]
pub fn kill_candidates(board: &Board, roles: &Roles) -> Vec<KillCandidate> {
    let protagonist = roles.protagonist();
    let mut candidates = Vec::new();

    for (area, occupants) in board.areas() {
        if occupants.contains(&protagonist) {
            continue;
        }
        if !occupants.iter().any(|&p| roles.is_antagonist(p)) {
            continue;
        }

        let local: SmallVec<[PieceId; 8]> = occupants
            .iter()
            .copied()
            .filter(|&p| !roles.is_antagonist(p))
            .collect();
        let score = local.len();

        candidates.extend(local.into_iter().map(|piece| KillCandidate { score, piece, area }));
    }

    candidates
}

/// Pick the victim: uniformly at random among the top-scoring candidates.
///
/// Returns `None` when there is nobody to kill.
pub fn select_kill_target(candidates: &[KillCandidate], rng: &mut GameRng) -> Option<KillCandidate> {
    let best = candidates.iter().map(|c| c.score).max()?;
    let ties: SmallVec<[KillCandidate; 8]> = candidates
        .iter()
        .filter(|c| c.score == best)
        .copied()
        .collect();

    let chosen = rng.choose(ties.as_slice()).copied();
    debug!(best_score = best, ties = ties.len(), victim = ?chosen.map(|c| c.piece), "kill target selected");
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<PieceId> {
        raw.iter().copied().map(PieceId).collect()
    }

    /// Build a board from raw area contents.
    fn board_from(areas: &[&[u32]]) -> Board {
        let mut board = Board::new(areas.len());
        for (i, pieces) in areas.iter().enumerate() {
            for &p in *pieces {
                board.place(AreaId(i), PieceId(p)).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_scores_by_crowd_size() {
        // A=0, M=1 | B=2, C=3, M2=4 | protagonist 9 elsewhere
        let roles = Roles::fixed(10, PieceId(9), ids(&[1, 4]), ids(&[0, 2, 3])).unwrap();
        let board = board_from(&[&[0, 1], &[2, 3, 4], &[9]]);

        let candidates = kill_candidates(&board, &roles);
        assert_eq!(
            candidates,
            vec![
                KillCandidate { score: 1, piece: PieceId(0), area: AreaId(0) },
                KillCandidate { score: 2, piece: PieceId(2), area: AreaId(1) },
                KillCandidate { score: 2, piece: PieceId(3), area: AreaId(1) },
            ]
        );
    }

    #[test]
    fn test_protagonist_blocks_area() {
        let roles = Roles::fixed(6, PieceId(5), ids(&[1]), ids(&[0, 2, 3])).unwrap();
        let board = board_from(&[&[0, 1, 2, 3, 5]]);

        assert!(kill_candidates(&board, &roles).is_empty());
    }

    #[test]
    fn test_area_without_antagonist_is_safe() {
        let roles = Roles::fixed(6, PieceId(5), ids(&[1]), ids(&[0, 2, 3])).unwrap();
        let board = board_from(&[&[0, 2, 3], &[1], &[5]]);

        assert!(kill_candidates(&board, &roles).is_empty());
    }

    #[test]
    fn test_antagonists_do_not_target_each_other() {
        let roles = Roles::fixed(6, PieceId(5), ids(&[1, 2]), ids(&[0])).unwrap();
        let board = board_from(&[&[0, 1, 2], &[5]]);

        let candidates = kill_candidates(&board, &roles);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].piece, PieceId(0));
        assert_eq!(candidates[0].score, 1);
    }

    #[test]
    fn test_select_none_when_empty() {
        let mut rng = GameRng::new(42);
        assert_eq!(select_kill_target(&[], &mut rng), None);
    }

    #[test]
    fn test_select_prefers_highest_score() {
        let roles = Roles::fixed(10, PieceId(9), ids(&[1, 4]), ids(&[0, 2, 3])).unwrap();
        let board = board_from(&[&[0, 1], &[2, 3, 4], &[9]]);
        let candidates = kill_candidates(&board, &roles);

        for seed in 0..100 {
            let mut rng = GameRng::new(seed);
            let chosen = select_kill_target(&candidates, &mut rng).unwrap();
            assert_eq!(chosen.area, AreaId(1));
            assert!(chosen.piece == PieceId(2) || chosen.piece == PieceId(3));
        }
    }

    #[test]
    fn test_tie_break_is_uniform() {
        let roles = Roles::fixed(4, PieceId(3), ids(&[2]), ids(&[0, 1])).unwrap();
        let board = board_from(&[&[0, 1, 2], &[3]]);
        let candidates = kill_candidates(&board, &roles);

        let mut rng = GameRng::new(7);
        let trials = 10_000;
        let mut first = 0;
        for _ in 0..trials {
            if select_kill_target(&candidates, &mut rng).unwrap().piece == PieceId(0) {
                first += 1;
            }
        }

        // Expected 5000, standard deviation 50.
        assert!((4_500..=5_500).contains(&first), "piece 0 chosen {first} times");
    }
}

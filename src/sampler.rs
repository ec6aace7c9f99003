//! Fair random selection of participants into the four groups.

use crate::constants::SUPPORTED_GROUP_SIZES;
use crate::error::DrawError;
use crate::roster::RosterStore;
use crate::types::{GroupAssignment, GroupLabel, ParticipantId};
use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Draws groups from a roster using an injected random number generator.
///
/// The generator is owned by the sampler so tests can pass a seeded
/// [`rand::rngs::StdRng`] and the application passes one seeded from the OS.
#[derive(Debug, Clone)]
pub struct Sampler<R: Rng> {
    rng: R,
}

impl<R: Rng> Sampler<R> {
    /// Creates a sampler drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draws four groups of `group_size` distinct roster participants.
    ///
    /// Roster positions are sampled without replacement, so every subset of the
    /// required size is equally likely. The drawn sequence is then shuffled before
    /// it is cut into chunks, which makes the order uniform as well and gives every
    /// label the same chance of receiving any participant.
    ///
    /// # Arguments
    ///
    /// * `roster` - The roster to draw from
    /// * `group_size` - Participants per group, 2 or 3
    ///
    /// # Returns
    ///
    /// The new assignment, `DrawError::InvalidGroupSize` for an unsupported size, or
    /// `DrawError::InsufficientRoster` when the roster has fewer than
    /// `4 * group_size` participants.
    pub fn select_groups(
        &mut self,
        roster: &RosterStore,
        group_size: usize,
    ) -> Result<GroupAssignment, DrawError> {
        if !SUPPORTED_GROUP_SIZES.contains(&group_size) {
            return Err(DrawError::InvalidGroupSize(group_size));
        }

        let required = GroupLabel::ALL.len() * group_size;
        let available = roster.count();
        if available < required {
            return Err(DrawError::InsufficientRoster {
                required,
                available,
            });
        }

        let entries = roster.entries();
        let mut drawn: Vec<ParticipantId> = index::sample(&mut self.rng, available, required)
            .into_iter()
            .map(|position| entries[position].id)
            .collect();
        drawn.shuffle(&mut self.rng);

        GroupAssignment::from_drawn(drawn, group_size)
            .ok_or(DrawError::InvalidGroupSize(group_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RosterEntry;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn roster_with_ids(ids: impl IntoIterator<Item = ParticipantId>) -> RosterStore {
        RosterStore::from_entries(
            ids.into_iter()
                .map(|id| RosterEntry::new(format!("P{id}"), id))
                .collect(),
        )
    }

    fn seeded(seed: u64) -> Sampler<StdRng> {
        Sampler::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_groups_are_distinct_and_from_roster() {
        let roster = roster_with_ids(100..140);
        let pool: HashSet<_> = roster.id_pool().into_iter().collect();
        let mut sampler = seeded(7);

        for size in [2, 3] {
            for _ in 0..50 {
                let assignment = sampler.select_groups(&roster, size).unwrap();
                for (_, ids) in assignment.iter() {
                    assert_eq!(ids.len(), size);
                }
                let all = assignment.all_ids();
                let unique: HashSet<_> = all.iter().copied().collect();
                assert_eq!(unique.len(), 4 * size);
                assert!(unique.is_subset(&pool));
            }
        }
    }

    #[test]
    fn test_exact_fit_uses_whole_roster() {
        let roster = roster_with_ids(1..=8);
        let mut sampler = seeded(42);
        let assignment = sampler.select_groups(&roster, 2).unwrap();
        let drawn: HashSet<_> = assignment.all_ids().into_iter().collect();
        assert_eq!(drawn, (1..=8).collect::<HashSet<_>>());
    }

    #[test]
    fn test_insufficient_roster_is_rejected() {
        let roster = roster_with_ids(1..=11);
        let mut sampler = seeded(1);
        assert_eq!(
            sampler.select_groups(&roster, 3),
            Err(DrawError::InsufficientRoster {
                required: 12,
                available: 11
            })
        );
        assert!(sampler.select_groups(&roster, 2).is_ok());
    }

    #[test]
    fn test_invalid_group_size_is_rejected() {
        let roster = roster_with_ids(1..=40);
        let mut sampler = seeded(1);
        for size in [0, 1, 4, 10] {
            assert_eq!(
                sampler.select_groups(&roster, size),
                Err(DrawError::InvalidGroupSize(size))
            );
        }
    }

    #[test]
    fn test_same_seed_gives_same_draw() {
        let roster = roster_with_ids(1..=30);
        let first = seeded(1234).select_groups(&roster, 3).unwrap();
        let second = seeded(1234).select_groups(&roster, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        let roster = roster_with_ids(1..=30);
        let differing = (0..100u64)
            .filter(|seed| {
                let a = seeded(*seed).select_groups(&roster, 2).unwrap();
                let b = seeded(seed + 1000).select_groups(&roster, 2).unwrap();
                a != b
            })
            .count();
        assert!(differing >= 95, "only {differing} of 100 seed pairs differed");
    }

    #[test]
    fn test_labels_are_treated_alike() {
        // With an exact fit every id is drawn each time; only the order decides
        // which label gets it. Each id should land in every group about equally.
        let roster = roster_with_ids(1..=8);
        let mut sampler = seeded(99);
        let trials = 4000;
        let mut red_hits_for_id_one = 0;
        let mut purple_hits_for_id_one = 0;
        for _ in 0..trials {
            let assignment = sampler.select_groups(&roster, 2).unwrap();
            if assignment[GroupLabel::Red].contains(&1) {
                red_hits_for_id_one += 1;
            }
            if assignment[GroupLabel::Purple].contains(&1) {
                purple_hits_for_id_one += 1;
            }
        }
        // Expected 1000 each; allow generous slack.
        for hits in [red_hits_for_id_one, purple_hits_for_id_one] {
            assert!((800..1200).contains(&hits), "unexpected hit count {hits}");
        }
    }
}

//! Randomized selection sized to the requested duration.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::Exercise;

/// Hard cap on exercises in one workout.
pub const MAX_EXERCISES: usize = 12;

/// How many exercises a workout of `minutes` should contain, before the pool
/// size is taken into account.
///
/// | minutes   | count                   |
/// |-----------|-------------------------|
/// | ≤ 10      | max(4, ⌊m / 2⌋)         |
/// | 11 ..= 20 | max(6, ⌊m / 2.5⌋)       |
/// | > 20      | max(8, ⌊m / 3⌋)         |
///
/// The result is capped at [`MAX_EXERCISES`].
pub fn target_count(minutes: u32) -> usize {
    let m = minutes as usize;
    let n = if m <= 10 {
        (m / 2).max(4)
    } else if m <= 20 {
        (m * 2 / 5).max(6)
    } else {
        (m / 3).max(8)
    };
    n.min(MAX_EXERCISES)
}

/// Uniformly shuffle `candidates` and keep the first [`target_count`].
///
/// A pool smaller than the target yields every candidate, in shuffled order.
pub fn select<'a, R: Rng + ?Sized>(
    candidates: &[&'a Exercise],
    minutes: u32,
    rng: &mut R,
) -> Vec<&'a Exercise> {
    let n = target_count(minutes);
    let mut picked = candidates.to_vec();
    picked.shuffle(rng);
    picked.truncate(n);
    tracing::debug!(target = n, pool = candidates.len(), picked = picked.len(), "selected exercises");
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Equipment, Goal, Intensity};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Mcg128Xsl64;

    fn pool(n: u32) -> Vec<Exercise> {
        (1..=n)
            .map(|id| Exercise {
                id,
                name: format!("Exercise {id}"),
                goal: Goal::Strength,
                equipment: Equipment::Bodyweight,
                intensity: Intensity::Medium,
                caption: format!("Caption {id}"),
                description: None,
            })
            .collect()
    }

    #[test]
    fn count_bands() {
        assert_eq!(target_count(5), 4);
        assert_eq!(target_count(10), 5);
        assert_eq!(target_count(15), 6);
        assert_eq!(target_count(20), 8);
        assert_eq!(target_count(25), 8);
        assert_eq!(target_count(30), 10);
    }

    #[test]
    fn count_is_capped() {
        assert_eq!(target_count(36), 12);
        assert_eq!(target_count(90), 12);
    }

    #[test]
    fn undersized_pool_returns_everything() {
        let exercises = pool(3);
        let refs: Vec<&Exercise> = exercises.iter().collect();
        let mut rng = Mcg128Xsl64::seed_from_u64(7);
        let picked = select(&refs, 30, &mut rng);
        assert_eq!(picked.len(), 3);
    }

    #[test]
    fn same_seed_same_selection() {
        let exercises = pool(20);
        let refs: Vec<&Exercise> = exercises.iter().collect();
        let a = select(&refs, 20, &mut Mcg128Xsl64::seed_from_u64(42));
        let b = select(&refs, 20, &mut Mcg128Xsl64::seed_from_u64(42));
        let ids = |v: &[&Exercise]| v.iter().map(|e| e.id).collect::<Vec<_>>();
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn selection_is_not_catalog_order() {
        let exercises = pool(20);
        let refs: Vec<&Exercise> = exercises.iter().collect();
        let mut rng = Mcg128Xsl64::seed_from_u64(1);
        // Over many draws, the first pick must not always be the first entry.
        let firsts: std::collections::HashSet<u32> = (0..50)
            .map(|_| select(&refs, 10, &mut rng)[0].id)
            .collect();
        assert!(firsts.len() > 1);
    }

    proptest! {
        #[test]
        fn picks_are_bounded_and_unique(minutes in 5u32..=30, pool_size in 4u32..40, seed in any::<u64>()) {
            let exercises = pool(pool_size);
            let refs: Vec<&Exercise> = exercises.iter().collect();
            let mut rng = Mcg128Xsl64::seed_from_u64(seed);
            let picked = select(&refs, minutes, &mut rng);

            prop_assert!(picked.len() >= 4);
            prop_assert!(picked.len() <= MAX_EXERCISES);
            prop_assert!(picked.len() <= (pool_size as usize).min(MAX_EXERCISES));

            let mut ids: Vec<u32> = picked.iter().map(|e| e.id).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), picked.len());
        }
    }
}

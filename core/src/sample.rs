use alloc::vec::Vec;
use rand::prelude::*;
use rand::seq::index;

/// Draws `amount` items uniformly at random without replacement.
///
/// Returns `None` when there are fewer than `amount` items.
pub fn sample_without_replacement<T, R>(
    items: Vec<T>,
    amount: usize,
    rng: &mut R,
) -> Option<Vec<T>>
where
    R: Rng,
{
    let len = items.len();
    if amount > len {
        return None;
    }

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    let sample = index::sample(rng, len, amount)
        .into_iter()
        .filter_map(|i| slots[i].take())
        .collect();
    Some(sample)
}

/// Seeded generator used for all board sampling.
pub fn board_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use alloc::vec;

    #[test]
    fn sample_is_distinct_and_from_pool() {
        let pool: Vec<u32> = (100..110).collect();

        for seed in 0..50 {
            let sample = sample_without_replacement(pool.clone(), 5, &mut board_rng(seed)).unwrap();
            let unique: BTreeSet<_> = sample.iter().copied().collect();

            assert_eq!(sample.len(), 5);
            assert_eq!(unique.len(), 5);
            assert!(sample.iter().all(|id| pool.contains(id)));
        }
    }

    #[test]
    fn sample_of_everything_is_a_permutation() {
        let sample = sample_without_replacement(vec![1, 2, 3, 4], 4, &mut board_rng(7)).unwrap();
        let sorted: BTreeSet<_> = sample.into_iter().collect();

        assert_eq!(sorted, BTreeSet::from([1, 2, 3, 4]));
    }

    #[test]
    fn sample_too_large_is_none() {
        assert_eq!(sample_without_replacement(vec![1, 2], 3, &mut board_rng(0)), None);
        assert_eq!(
            sample_without_replacement(Vec::<u8>::new(), 0, &mut board_rng(0)),
            Some(vec![])
        );
    }

    #[test]
    fn every_item_gets_drawn_eventually() {
        let mut drawn = BTreeSet::new();
        for seed in 0..200 {
            let pool = vec!['a', 'b', 'c', 'd', 'e'];
            drawn.extend(sample_without_replacement(pool, 2, &mut board_rng(seed)).unwrap());
        }

        assert_eq!(drawn, BTreeSet::from(['a', 'b', 'c', 'd', 'e']));
    }

    #[test]
    fn same_seed_same_sample() {
        let pool: Vec<u32> = (0..40).collect();
        let a = sample_without_replacement(pool.clone(), 6, &mut board_rng(42));
        let b = sample_without_replacement(pool, 6, &mut board_rng(42));

        assert_eq!(a, b);
    }
}

use super::GameRng;

/// Draw one item with probability proportional to its weight.
///
/// Negative weights count as zero. Returns `None` when the total weight is
/// zero (or the slice is empty); callers skip the event in that case.
pub fn weighted_pick<T: Copy>(rng: &mut GameRng, items: &[(T, f64)]) -> Option<T> {
    let total: f64 = items.iter().map(|(_, w)| w.max(0.0)).sum();
    if total <= 0.0 || !total.is_finite() {
        return None;
    }

    let mut remaining = rng.unit() * total;
    let mut last_positive = None;
    for &(item, weight) in items {
        let weight = weight.max(0.0);
        if weight == 0.0 {
            continue;
        }
        if remaining < weight {
            return Some(item);
        }
        remaining -= weight;
        last_positive = Some(item);
    }

    // Floating-point leftovers land on the last eligible item
    last_positive
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_total_weight_is_no_selection() {
        let mut rng = GameRng::seeded(3);
        assert_eq!(weighted_pick::<u32>(&mut rng, &[]), None);
        assert_eq!(weighted_pick(&mut rng, &[(1u32, 0.0), (2, 0.0)]), None);
        assert_eq!(weighted_pick(&mut rng, &[(1u32, -4.0)]), None);
    }

    #[test]
    fn test_single_positive_weight_always_wins() {
        let mut rng = GameRng::seeded(4);
        for _ in 0..200 {
            assert_eq!(weighted_pick(&mut rng, &[(1u32, 0.0), (2, 5.0), (3, 0.0)]), Some(2));
        }
    }

    #[test]
    fn test_distribution_follows_weights() {
        let mut rng = GameRng::seeded(5);
        let items = [(0usize, 1.0), (1usize, 3.0)];
        let mut counts = [0u32; 2];
        for _ in 0..20_000 {
            counts[weighted_pick(&mut rng, &items).unwrap()] += 1;
        }
        let share = counts[1] as f64 / 20_000.0;
        assert!((share - 0.75).abs() < 0.02, "heavy item share was {}", share);
    }

    proptest! {
        #[test]
        fn prop_never_picks_zero_weight(
            weights in proptest::collection::vec(0.0f64..10.0, 1..20),
            zero_at in 0usize..20,
            seed in any::<u64>()
        ) {
            let mut items: Vec<(usize, f64)> = weights.into_iter().enumerate().collect();
            let zero_at = zero_at % items.len();
            items[zero_at].1 = 0.0;

            let mut rng = GameRng::seeded(seed);
            if let Some(picked) = weighted_pick(&mut rng, &items) {
                prop_assert!(items[picked].1 > 0.0);
            } else {
                prop_assert!(items.iter().all(|(_, w)| *w == 0.0));
            }
        }
    }
}

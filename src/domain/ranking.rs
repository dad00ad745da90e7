use crate::domain::entities::offer::Offer;

/// Sort by APR descending and keep the first `limit` offers.
///
/// `sort_by` is stable, so offers with equal APR keep their input order.
/// Non-finite or negative rates rank as 0.0.
pub fn rank_by_apr(mut offers: Vec<Offer>, limit: usize) -> Vec<Offer> {
    offers.sort_by(|a, b| sort_key(b).total_cmp(&sort_key(a)));
    offers.truncate(limit);
    offers
}

fn sort_key(offer: &Offer) -> f64 {
    if offer.apr.is_finite() && offer.apr > 0.0 {
        offer.apr
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::offer::FLEXIBLE;

    fn offer(asset: &str, apr: f64) -> Offer {
        Offer::new("Binance", asset, FLEXIBLE, apr)
    }

    #[test]
    fn test_descending_order() {
        let ranked = rank_by_apr(vec![offer("A", 0.01), offer("B", 0.2), offer("C", 0.05)], 10);
        let aprs: Vec<f64> = ranked.iter().map(|o| o.apr).collect();
        assert_eq!(aprs, vec![0.2, 0.05, 0.01]);
    }

    #[test]
    fn test_equal_apr_keeps_input_order() {
        let input = vec![offer("LOW", 0.03), offer("FIRST", 0.10), offer("SECOND", 0.10)];
        let ranked = rank_by_apr(input, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].asset, "FIRST");
        assert_eq!(ranked[1].asset, "SECOND");
    }

    #[test]
    fn test_truncates_to_min_of_limit_and_len() {
        let input: Vec<Offer> = (0..5).map(|i| offer("X", i as f64 / 100.0)).collect();
        assert_eq!(rank_by_apr(input.clone(), 3).len(), 3);
        assert_eq!(rank_by_apr(input.clone(), 50).len(), 5);
        assert!(rank_by_apr(Vec::new(), 10).is_empty());
    }

    #[test]
    fn test_monotonic_for_mixed_input() {
        let input: Vec<Offer> = [0.07, 0.0, 0.3, 0.07, 0.12, 0.0, 0.5]
            .iter()
            .map(|apr| offer("X", *apr))
            .collect();
        let ranked = rank_by_apr(input, 10);
        for pair in ranked.windows(2) {
            assert!(pair[0].apr >= pair[1].apr);
        }
    }

    #[test]
    fn test_nan_and_negative_apr_rank_as_zero() {
        let mut input: Vec<Offer> = (0..40)
            .map(|i| offer("X", (i % 7) as f64 / 100.0))
            .collect();
        for (i, o) in input.iter_mut().enumerate() {
            if i % 3 == 0 {
                o.apr = f64::NAN;
            } else if i % 5 == 0 {
                o.apr = -0.5;
            }
        }
        input[1].asset = "BEST".to_string();
        input[1].apr = 0.9;

        let ranked = rank_by_apr(input, 40);
        assert_eq!(ranked.len(), 40);
        assert_eq!(ranked[0].asset, "BEST");
        for pair in ranked.windows(2) {
            assert!(sort_key(&pair[0]) >= sort_key(&pair[1]));
        }
        let tail = &ranked[ranked.len() - 1];
        assert!(tail.apr.is_nan() || tail.apr <= 0.0);
    }
}

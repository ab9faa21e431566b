use proptest::prelude::*;
use vetrina_core::{change_series, summarize};

fn positive_closes() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.01f64..10_000.0, 2..200)
}

proptest! {
    #[test]
    fn change_series_len_is_input_len_minus_one(closes in positive_closes()) {
        let changes = change_series(&closes).unwrap();
        prop_assert_eq!(changes.len(), closes.len() - 1);
    }

    #[test]
    fn summary_statistics_are_finite(closes in positive_closes()) {
        let s = summarize(&closes).unwrap();
        prop_assert!(s.annual_return_pct.is_finite());
        prop_assert!(s.annual_volatility_pct.is_finite());
        prop_assert!(s.annual_volatility_pct >= 0.0);
    }

    #[test]
    fn changes_reproduce_the_relative_path(closes in positive_closes()) {
        let changes = change_series(&closes).unwrap();
        let mut price = closes[0];
        for (change, expected) in changes.iter().zip(&closes[1..]) {
            price *= 1.0 + change;
            prop_assert!((price - expected).abs() <= 1e-6 * expected.abs());
        }
    }

    #[test]
    fn any_non_positive_close_is_rejected(
        mut closes in positive_closes(),
        idx in any::<prop::sample::Index>(),
        bad in -100.0f64..=0.0,
    ) {
        let slot = idx.index(closes.len());
        closes[slot] = bad;
        prop_assert!(change_series(&closes).is_err());
    }
}

use vetrina_core::{VetrinaError, change_series, summarize};

#[test]
fn change_series_drops_the_first_row() {
    let closes = [100.0, 101.0, 99.0, 103.5];
    let changes = change_series(&closes).unwrap();
    assert_eq!(changes.len(), closes.len() - 1);
}

#[test]
fn constant_series_has_zero_return_and_volatility() {
    let s = summarize(&[100.0, 100.0, 100.0, 100.0]).unwrap();
    assert_eq!(s.changes, vec![0.0, 0.0, 0.0]);
    assert_eq!(s.annual_return_pct, 0.0);
    assert_eq!(s.annual_volatility_pct, 0.0);
}

#[test]
fn symmetric_moves_cancel_in_the_mean_but_not_the_stddev() {
    // [100, 110, 99]: changes are +10% and -10%, so the mean return is zero
    // while the population stddev is exactly 0.10.
    let s = summarize(&[100.0, 110.0, 99.0]).unwrap();
    assert_eq!(s.changes.len(), 2);
    assert!((s.changes[0] - 0.10).abs() < 1e-12);
    assert!((s.changes[1] + 0.10).abs() < 1e-12);
    assert!(s.annual_return_pct.abs() < 1e-9);
    let expected = 0.10 * 252.0_f64.sqrt() * 100.0;
    assert!((s.annual_volatility_pct - expected).abs() < 1e-9);
    assert!((expected - 158.745).abs() < 1e-2);
}

#[test]
fn rejects_series_shorter_than_two() {
    assert_eq!(
        change_series(&[100.0]),
        Err(VetrinaError::insufficient_data(2, 1))
    );
    assert_eq!(
        change_series(&[]),
        Err(VetrinaError::insufficient_data(2, 0))
    );
}

#[test]
fn rejects_non_positive_and_non_finite_prices() {
    assert!(matches!(
        change_series(&[100.0, -5.0]),
        Err(VetrinaError::InvalidArg(_))
    ));
    assert!(matches!(
        change_series(&[100.0, 0.0, 101.0]),
        Err(VetrinaError::InvalidArg(_))
    ));
    assert!(matches!(
        change_series(&[100.0, f64::NAN]),
        Err(VetrinaError::InvalidArg(_))
    ));
}

#[test]
fn summary_never_emits_nan_for_valid_input() {
    let s = summarize(&[0.0001, 5000.0, 0.0001]).unwrap();
    assert!(s.annual_return_pct.is_finite());
    assert!(s.annual_volatility_pct.is_finite());
}

#[test]
fn changes_reconstruct_the_relative_price_path() {
    let closes = [100.0, 110.0, 99.0, 104.25, 104.25, 87.3];
    let changes = change_series(&closes).unwrap();

    let mut price = closes[0];
    for (change, expected) in changes.iter().zip(&closes[1..]) {
        price *= 1.0 + change;
        assert!(
            (price - expected).abs() < 1e-9 * expected,
            "reconstructed {price} drifted from {expected}"
        );
    }
}

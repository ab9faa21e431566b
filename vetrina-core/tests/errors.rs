use vetrina_core::VetrinaError;

#[test]
fn insufficient_data_message_carries_both_counts() {
    let e = VetrinaError::insufficient_data(2, 1);
    assert_eq!(
        e.to_string(),
        "insufficient data: need at least 2 price points, got 1"
    );
}

#[test]
fn actionability_classification() {
    assert!(!VetrinaError::unsupported("news").is_actionable());
    assert!(!VetrinaError::not_found("history for AAPL").is_actionable());
    assert!(VetrinaError::connector("vetrina-yahoo", "rate limit").is_actionable());
    assert!(VetrinaError::insufficient_data(2, 0).is_actionable());
}

#[test]
fn errors_round_trip_through_serde() {
    let e = VetrinaError::connector("vetrina-alphavantage", "HTTP 503");
    let json = serde_json::to_string(&e).unwrap();
    let back: VetrinaError = serde_json::from_str(&json).unwrap();
    assert_eq!(e, back);
}

use std::sync::Arc;

use vetrina::{NEWS_ON_PAGE, Vetrina};
use vetrina_core::{DateRange, Symbol, summarize};
use vetrina_mock::MockConnector;

fn vetrina() -> Vetrina {
    Vetrina::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn full_dashboard_populates_every_section() {
    let symbol = Symbol::new("AAPL").unwrap();
    let data = vetrina().dashboard(&symbol, DateRange::default_range()).await;

    let history = data.history.data.as_ref().unwrap();
    assert_eq!(history.candles.len(), 5);

    let movements = data.movements.data.as_ref().unwrap();
    assert_eq!(movements.rows.len(), history.candles.len() - 1);
    // Wiring check: the section carries exactly what the calculator produces
    // for the same close column.
    let expected = summarize(&history.closes()).unwrap();
    assert_eq!(movements.annual_return_pct, expected.annual_return_pct);
    assert_eq!(movements.annual_volatility_pct, expected.annual_volatility_pct);
    assert_eq!(movements.rows[0].change, expected.changes[0]);
    assert_eq!(movements.rows[0].candle.ts, history.candles[1].ts);

    assert_eq!(data.balance_sheet.data.as_ref().unwrap().len(), 2);
    assert_eq!(data.cashflow.data.as_ref().unwrap().len(), 2);
    // The mock feed has 8 items; the page shows at most 5.
    assert_eq!(data.news.data.as_ref().unwrap().len(), NEWS_ON_PAGE);
}

#[tokio::test]
async fn failing_provider_only_darkens_its_own_sections() {
    let symbol = Symbol::new("FAIL").unwrap();
    let data = vetrina().dashboard(&symbol, DateRange::default_range()).await;

    for (section_err, label) in [
        (&data.history.error, "history"),
        (&data.movements.error, "movements"),
        (&data.balance_sheet.error, "balance_sheet"),
        (&data.cashflow.error, "cashflow"),
        (&data.news.error, "news"),
    ] {
        let msg = section_err
            .as_ref()
            .unwrap_or_else(|| panic!("{label} should carry an error"));
        assert!(msg.contains("forced failure"), "{label}: {msg}");
    }
}

#[tokio::test]
async fn short_history_surfaces_insufficient_data_in_movements_only() {
    let symbol = Symbol::new("SHORT").unwrap();
    let data = vetrina().dashboard(&symbol, DateRange::default_range()).await;

    assert!(data.history.is_ok(), "one candle still charts");
    let msg = data.movements.error.as_ref().unwrap();
    assert!(msg.contains("insufficient data"), "got {msg}");
}

#[tokio::test]
async fn unknown_symbol_reports_not_found_per_section() {
    let symbol = Symbol::new("ZZZZZZ").unwrap();
    let data = vetrina().dashboard(&symbol, DateRange::default_range()).await;

    assert!(data.history.error.as_ref().unwrap().contains("not found"));
    assert!(data.movements.error.as_ref().unwrap().contains("not found"));
    // Fundamentals and news fixtures treat unknown symbols as empty feeds.
    assert!(data.balance_sheet.is_ok());
    assert!(data.news.is_ok());
}

#[tokio::test]
async fn dashboard_data_serializes_for_the_json_endpoint() {
    let symbol = Symbol::new("AAPL").unwrap();
    let data = vetrina().dashboard(&symbol, DateRange::default_range()).await;

    let json = serde_json::to_value(&data).unwrap();
    assert_eq!(json["symbol"], "AAPL");
    assert!(json["movements"]["data"]["annual_return_pct"].is_number());
    assert!(json["movements"].get("error").is_none());
    assert!(json["history"]["data"]["candles"][0]["close"].is_number());
}

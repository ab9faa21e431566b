use chrono::NaiveDate;
use vetrina_core::{Candle, HistoryResponse};

pub fn by_symbol(s: &str) -> Option<HistoryResponse> {
    match s {
        "AAPL" => Some(build(vec![
            ("2020-01-02", 74.06, 75.15, 73.80, 75.09, 135_480_400),
            ("2020-01-03", 74.29, 75.14, 74.13, 74.36, 146_322_800),
            ("2020-01-06", 73.45, 74.99, 73.19, 74.95, 118_387_200),
            ("2020-01-07", 74.96, 75.22, 74.37, 74.60, 108_872_000),
            ("2020-01-08", 74.29, 76.11, 74.29, 75.80, 132_079_200),
        ])),
        "MSFT" => Some(build(vec![
            ("2020-01-02", 158.78, 160.73, 158.33, 160.62, 22_622_100),
            ("2020-01-03", 158.32, 159.95, 158.06, 158.62, 21_116_200),
            ("2020-01-06", 157.08, 159.10, 156.51, 159.03, 20_813_700),
        ])),
        // One candle only: too short for a change series.
        "SHORT" => Some(build(vec![(
            "2020-01-02",
            100.0,
            101.0,
            99.0,
            100.5,
            1_000,
        )])),
        _ => None,
    }
}

fn build(rows: Vec<(&str, f64, f64, f64, f64, u64)>) -> HistoryResponse {
    let candles = rows
        .into_iter()
        .map(|(date, open, high, low, close, volume)| Candle {
            ts: NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
                .and_utc(),
            open,
            high,
            low,
            close,
            volume,
        })
        .collect();
    HistoryResponse { candles }
}

use chrono::{Duration, NaiveDate};
use vetrina_core::{NewsArticle, NewsRequest};

pub fn by_symbol(s: &str, req: &NewsRequest) -> Vec<NewsArticle> {
    let mut items = match s {
        "AAPL" => {
            let base = NaiveDate::from_ymd_opt(2020, 8, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap()
                .and_utc();
            (0..8)
                .map(|i| NewsArticle {
                    published: Some(base + Duration::hours(i)),
                    title: format!("Apple headline {}", i + 1),
                    summary: format!("Summary for Apple story {}", i + 1),
                    sentiment_title: 0.4 - 0.1 * i as f64,
                    sentiment_summary: 0.2,
                })
                .collect::<Vec<_>>()
        }
        _ => vec![],
    };
    items.truncate(req.count);
    items
}

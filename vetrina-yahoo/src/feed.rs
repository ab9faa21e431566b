//! RSS headline feed parsing and VADER sentiment scoring.

use chrono::{DateTime, Utc};
use vetrina_core::{NewsArticle, VetrinaError};

/// Parse the raw RSS payload into scored articles, in feed order.
///
/// Items without a title carry no headline to display or score and are
/// skipped. `pubDate` values that fail to parse leave `published` empty
/// rather than discarding the item.
pub(crate) fn parse_feed(bytes: &[u8], count: usize) -> Result<Vec<NewsArticle>, VetrinaError> {
    let channel = rss::Channel::read_from(bytes)
        .map_err(|e| VetrinaError::Data(format!("unparseable news feed: {e}")))?;

    let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
    let mut articles = Vec::new();
    for item in channel.items() {
        if articles.len() >= count {
            break;
        }
        let Some(title) = item.title() else {
            tracing::warn!("skipping feed item without a title");
            continue;
        };
        let summary = item.description().unwrap_or_default();
        articles.push(NewsArticle {
            published: item.pub_date().and_then(parse_pub_date),
            title: title.to_string(),
            summary: summary.to_string(),
            sentiment_title: compound_score(&analyzer, title),
            sentiment_summary: compound_score(&analyzer, summary),
        });
    }
    Ok(articles)
}

fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn compound_score(
    analyzer: &vader_sentiment::SentimentIntensityAnalyzer,
    text: &str,
) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    analyzer
        .polarity_scores(text)
        .get("compound")
        .copied()
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel>
  <title>Yahoo! Finance: AAPL News</title>
  <link>http://finance.yahoo.com/q/h?s=aapl</link>
  <description>Latest Financial News for AAPL</description>
  <item>
    <title>Analysts praise Apple's great quarter</title>
    <description>Strong growth across all product categories delighted investors.</description>
    <pubDate>Mon, 03 Aug 2020 14:00:00 +0000</pubDate>
  </item>
  <item>
    <description>an item without a title</description>
  </item>
  <item>
    <title>Supplier warns of severe shortages and painful delays</title>
    <description></description>
    <pubDate>not a date</pubDate>
  </item>
</channel></rss>"#;

    #[test]
    fn parses_items_and_scores_both_texts() {
        let articles = parse_feed(FEED.as_bytes(), 20).unwrap();
        assert_eq!(articles.len(), 2);

        let first = &articles[0];
        assert!(first.published.is_some());
        assert!(first.sentiment_title > 0.0, "positive headline should score > 0");
        assert!(first.sentiment_summary > 0.0);

        let second = &articles[1];
        assert!(second.published.is_none());
        assert!(second.sentiment_title < 0.0, "negative headline should score < 0");
        assert_eq!(second.sentiment_summary, 0.0);
    }

    #[test]
    fn count_truncates_the_feed() {
        let articles = parse_feed(FEED.as_bytes(), 1).unwrap();
        assert_eq!(articles.len(), 1);
    }

    #[test]
    fn garbage_is_a_data_error() {
        assert!(matches!(
            parse_feed(b"not xml at all", 5),
            Err(VetrinaError::Data(_))
        ));
    }
}

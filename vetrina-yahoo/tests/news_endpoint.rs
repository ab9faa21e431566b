use httpmock::prelude::*;
use vetrina_core::connector::NewsProvider;
use vetrina_core::{NewsRequest, Symbol, VetrinaError};
use vetrina_yahoo::YahooConnector;

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel>
  <title>Yahoo! Finance: AAPL News</title>
  <link>http://finance.yahoo.com/q/h?s=aapl</link>
  <description>Latest Financial News for AAPL</description>
  <item>
    <title>Apple wins broad praise for excellent results</title>
    <description>Investors were happy with the impressive numbers.</description>
    <pubDate>Tue, 04 Aug 2020 09:30:00 +0000</pubDate>
  </item>
  <item>
    <title>Lawsuit accuses supplier of fraud</title>
    <description>A painful dispute drags on.</description>
    <pubDate>Mon, 03 Aug 2020 16:45:00 +0000</pubDate>
  </item>
</channel></rss>"#;

fn connector_for(server: &MockServer) -> YahooConnector {
    YahooConnector::builder()
        .chart_base_url(server.base_url())
        .feed_base_url(server.base_url())
        .build()
        .unwrap()
}

#[tokio::test]
async fn news_parses_feed_and_scores_sentiment() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/rss/2.0/headline")
                .query_param("s", "AAPL")
                .query_param("region", "US");
            then.status(200)
                .header("content-type", "application/rss+xml")
                .body(FEED);
        })
        .await;

    let connector = connector_for(&server);
    let symbol = Symbol::new("AAPL").unwrap();
    let articles = connector
        .news(&symbol, NewsRequest::default())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(articles.len(), 2);
    assert!(articles[0].sentiment_title > 0.0);
    assert!(articles[1].sentiment_title < 0.0);
    assert!(articles[0].published.unwrap() > articles[1].published.unwrap());
}

#[tokio::test]
async fn news_count_limits_returned_items() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/rss/2.0/headline");
            then.status(200).body(FEED);
        })
        .await;

    let connector = connector_for(&server);
    let symbol = Symbol::new("AAPL").unwrap();
    let articles = connector
        .news(&symbol, NewsRequest { count: 1 })
        .await
        .unwrap();
    assert_eq!(articles.len(), 1);
}

#[tokio::test]
async fn http_failure_surfaces_as_connector_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/rss/2.0/headline");
            then.status(429).body("slow down");
        })
        .await;

    let connector = connector_for(&server);
    let symbol = Symbol::new("AAPL").unwrap();
    let err = connector
        .news(&symbol, NewsRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, VetrinaError::Connector { .. }), "got {err:?}");
}

#[tokio::test]
async fn unparseable_feed_is_a_data_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/rss/2.0/headline");
            then.status(200).body("<html>definitely not rss</html>");
        })
        .await;

    let connector = connector_for(&server);
    let symbol = Symbol::new("AAPL").unwrap();
    let err = connector
        .news(&symbol, NewsRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, VetrinaError::Data(_)), "got {err:?}");
}

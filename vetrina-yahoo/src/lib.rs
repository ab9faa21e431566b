//! vetrina-yahoo
//!
//! Yahoo Finance connector for the vetrina dashboard. Implements two
//! capabilities:
//!
//! - history: daily OHLCV via the v8 chart JSON endpoint;
//! - news: the RSS headline feed, each item scored with the VADER
//!   sentiment lexicon.
//!
//! Both endpoints are unauthenticated. Base URLs are injectable so tests can
//! point the connector at a local mock server.
#![warn(missing_docs)]

mod chart;
mod feed;

use async_trait::async_trait;
use url::Url;

use vetrina_core::connector::{HistoryProvider, NewsProvider, VetrinaConnector};
use vetrina_core::{HistoryRequest, HistoryResponse, NewsArticle, NewsRequest, Symbol, VetrinaError};

const DEFAULT_CHART_BASE: &str = "https://query1.finance.yahoo.com";
const DEFAULT_FEED_BASE: &str = "https://feeds.finance.yahoo.com";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Connector backed by the public Yahoo Finance endpoints.
pub struct YahooConnector {
    http: reqwest::Client,
    chart_base: Url,
    feed_base: Url,
}

/// Builder for [`YahooConnector`] with overridable base URLs.
pub struct YahooConnectorBuilder {
    http: Option<reqwest::Client>,
    chart_base: String,
    feed_base: String,
}

impl Default for YahooConnectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl YahooConnectorBuilder {
    /// Start from the production endpoints.
    #[must_use]
    pub fn new() -> Self {
        Self {
            http: None,
            chart_base: DEFAULT_CHART_BASE.to_string(),
            feed_base: DEFAULT_FEED_BASE.to_string(),
        }
    }

    /// Use a caller-supplied `reqwest::Client`.
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Override the chart endpoint base (tests point this at a mock server).
    #[must_use]
    pub fn chart_base_url(mut self, base: impl Into<String>) -> Self {
        self.chart_base = base.into();
        self
    }

    /// Override the RSS feed endpoint base.
    #[must_use]
    pub fn feed_base_url(mut self, base: impl Into<String>) -> Self {
        self.feed_base = base.into();
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` if a base URL does not parse or the HTTP client
    /// cannot be constructed.
    pub fn build(self) -> Result<YahooConnector, VetrinaError> {
        let parse = |label: &str, raw: &str| {
            Url::parse(raw)
                .map_err(|e| VetrinaError::InvalidArg(format!("invalid {label} base URL: {e}")))
        };
        let http = match self.http {
            Some(c) => c,
            None => reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .map_err(|e| {
                    VetrinaError::connector("vetrina-yahoo", format!("failed to build client: {e}"))
                })?,
        };
        Ok(YahooConnector {
            http,
            chart_base: parse("chart", &self.chart_base)?,
            feed_base: parse("feed", &self.feed_base)?,
        })
    }
}

impl YahooConnector {
    /// Build against the production Yahoo endpoints.
    ///
    /// # Panics
    /// Panics only if the compiled-in default URLs fail to parse, which is
    /// unexpected in normal environments.
    #[must_use]
    pub fn new_default() -> Self {
        YahooConnectorBuilder::new()
            .build()
            .expect("default Yahoo endpoints must parse")
    }

    /// Start building a connector with custom endpoints or client.
    #[must_use]
    pub fn builder() -> YahooConnectorBuilder {
        YahooConnectorBuilder::new()
    }

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("delisted")
    }

    fn tag(e: reqwest::Error) -> VetrinaError {
        VetrinaError::connector("vetrina-yahoo", e.to_string())
    }

    fn chart_url(&self, symbol: &Symbol, req: &HistoryRequest) -> Result<Url, VetrinaError> {
        let mut url = self
            .chart_base
            .join(&format!("v8/finance/chart/{symbol}"))
            .map_err(|e| VetrinaError::InvalidArg(format!("bad chart URL: {e}")))?;
        url.query_pairs_mut()
            .append_pair("period1", &req.range.start_timestamp().to_string())
            .append_pair("period2", &req.range.end_timestamp().to_string())
            .append_pair("interval", "1d")
            .append_pair("events", "div,splits");
        Ok(url)
    }

    fn feed_url(&self, symbol: &Symbol) -> Result<Url, VetrinaError> {
        let mut url = self
            .feed_base
            .join("rss/2.0/headline")
            .map_err(|e| VetrinaError::InvalidArg(format!("bad feed URL: {e}")))?;
        url.query_pairs_mut()
            .append_pair("s", symbol.as_str())
            .append_pair("region", "US")
            .append_pair("lang", "en-US");
        Ok(url)
    }
}

#[async_trait]
impl HistoryProvider for YahooConnector {
    async fn history(
        &self,
        symbol: &Symbol,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, VetrinaError> {
        let url = self.chart_url(symbol, &req)?;
        tracing::debug!(%symbol, %url, "fetching chart history");

        let resp = self.http.get(url).send().await.map_err(Self::tag)?;
        let status = resp.status();
        let envelope: chart::ChartEnvelope = resp.json().await.map_err(|e| {
            if status.is_success() {
                VetrinaError::Data(format!("unparseable chart response: {e}"))
            } else {
                VetrinaError::connector("vetrina-yahoo", format!("status {status}"))
            }
        })?;

        if let Some(err) = envelope.chart.error {
            let msg = err
                .description
                .or(err.code)
                .unwrap_or_else(|| format!("status {status}"));
            if Self::looks_like_not_found(&msg) {
                return Err(VetrinaError::not_found(format!("history for {symbol}")));
            }
            return Err(VetrinaError::connector("vetrina-yahoo", msg));
        }

        envelope
            .chart
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| VetrinaError::Data("no close column in chart response".into()))?
            .into_history()
    }
}

#[async_trait]
impl NewsProvider for YahooConnector {
    async fn news(
        &self,
        symbol: &Symbol,
        req: NewsRequest,
    ) -> Result<Vec<NewsArticle>, VetrinaError> {
        let url = self.feed_url(symbol)?;
        tracing::debug!(%symbol, %url, "fetching news feed");

        let resp = self.http.get(url).send().await.map_err(Self::tag)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(VetrinaError::connector(
                "vetrina-yahoo",
                format!("status {status}"),
            ));
        }
        let bytes = resp.bytes().await.map_err(Self::tag)?;
        feed::parse_feed(&bytes, req.count)
    }
}

impl VetrinaConnector for YahooConnector {
    fn name(&self) -> &'static str {
        "vetrina-yahoo"
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
}

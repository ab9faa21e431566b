//! Common data structures exchanged between connectors and the dashboard.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::VetrinaError;

/// A validated, uppercase-normalized ticker symbol.
///
/// Construction trims surrounding whitespace and uppercases the input; an
/// empty or whitespace-containing ticker is rejected up front so connectors
/// never see one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Parse a user-supplied ticker string.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the trimmed input is empty or contains
    /// interior whitespace.
    pub fn new(raw: &str) -> Result<Self, VetrinaError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(VetrinaError::InvalidArg("empty ticker symbol".into()));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(VetrinaError::InvalidArg(format!(
                "ticker symbol contains whitespace: {trimmed:?}"
            )));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// The canonical symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inclusive calendar date range for a history request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First calendar day included in the range.
    pub start: NaiveDate,
    /// Last calendar day included in the range.
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `start > end`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the start date is after the end date.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, VetrinaError> {
        if start > end {
            return Err(VetrinaError::InvalidArg(format!(
                "start date {start} is after end date {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// The fixed default range the dashboard opens with.
    #[must_use]
    pub fn default_range() -> Self {
        // Both dates are valid calendar days; unwrap cannot fire.
        Self {
            start: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
        }
    }

    /// Unix timestamp of the range start (midnight UTC).
    #[must_use]
    pub fn start_timestamp(&self) -> i64 {
        self.start
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp()
    }

    /// Unix timestamp of the first midnight past the range end, making the
    /// end day inclusive for providers with exclusive upper bounds.
    #[must_use]
    pub fn end_timestamp(&self) -> i64 {
        (self.end + chrono::Days::new(1))
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp()
    }
}

/// Request for daily OHLCV history over a date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRequest {
    /// Calendar range to fetch, inclusive on both ends.
    pub range: DateRange,
}

impl HistoryRequest {
    /// Request history over `range`.
    #[must_use]
    pub const fn new(range: DateRange) -> Self {
        Self { range }
    }
}

/// A single daily OHLCV bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Bar timestamp (UTC).
    pub ts: DateTime<Utc>,
    /// Opening price.
    pub open: f64,
    /// Intraday high.
    pub high: f64,
    /// Intraday low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume; 0 when the provider reports none.
    pub volume: u64,
}

/// Time-ordered daily history for one symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// Candles in ascending timestamp order.
    pub candles: Vec<Candle>,
}

impl HistoryResponse {
    /// The closing-price column, in series order.
    #[must_use]
    pub fn closes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.close).collect()
    }
}

/// One annual balance-sheet report row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetRow {
    /// Fiscal period end date.
    pub period: NaiveDate,
    /// Total assets, if reported.
    pub total_assets: Option<f64>,
    /// Total liabilities, if reported.
    pub total_liabilities: Option<f64>,
    /// Total shareholder equity, if reported.
    pub total_equity: Option<f64>,
    /// Cash and cash equivalents, if reported.
    pub cash: Option<f64>,
    /// Long-term debt, if reported.
    pub long_term_debt: Option<f64>,
}

/// One annual cash-flow report row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashflowRow {
    /// Fiscal period end date.
    pub period: NaiveDate,
    /// Cash flow from operations, if reported.
    pub operating_cashflow: Option<f64>,
    /// Capital expenditures, if reported.
    pub capital_expenditure: Option<f64>,
    /// Cash flow from investing, if reported.
    pub investing_cashflow: Option<f64>,
    /// Cash flow from financing, if reported.
    pub financing_cashflow: Option<f64>,
    /// Net income, if reported.
    pub net_income: Option<f64>,
}

/// One news item with sentiment scores for its title and summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Publish timestamp, when the feed carries one.
    pub published: Option<DateTime<Utc>>,
    /// Headline.
    pub title: String,
    /// Summary/description text; may be empty.
    pub summary: String,
    /// VADER compound sentiment of the title, in [-1, 1].
    pub sentiment_title: f64,
    /// VADER compound sentiment of the summary, in [-1, 1].
    pub sentiment_summary: f64,
}

/// Request parameters for a news fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsRequest {
    /// Maximum number of items the connector should return.
    pub count: usize,
}

impl Default for NewsRequest {
    fn default() -> Self {
        Self { count: 20 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_normalizes_case_and_whitespace() {
        let s = Symbol::new("  aapl ").unwrap();
        assert_eq!(s.as_str(), "AAPL");
    }

    #[test]
    fn symbol_rejects_empty_and_interior_whitespace() {
        assert!(matches!(
            Symbol::new("   "),
            Err(VetrinaError::InvalidArg(_))
        ));
        assert!(matches!(
            Symbol::new("BRK B"),
            Err(VetrinaError::InvalidArg(_))
        ));
    }

    #[test]
    fn date_range_rejects_inverted_bounds() {
        let start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert!(matches!(
            DateRange::new(start, end),
            Err(VetrinaError::InvalidArg(_))
        ));
    }

    #[test]
    fn date_range_end_timestamp_is_exclusive_midnight() {
        let r = DateRange::default_range();
        assert_eq!(r.end_timestamp() - r.start_timestamp(), 367 * 86_400);
    }
}

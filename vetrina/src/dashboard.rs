//! The per-request dashboard pass: fetch each section once, compute the
//! movements table, and capture failures per section.

use serde::{Deserialize, Serialize};

use crate::Vetrina;
use vetrina_core::{
    BalanceSheetRow, Candle, CashflowRow, DateRange, HistoryRequest, HistoryResponse, NewsArticle,
    NewsRequest, Symbol, VetrinaError, summarize,
};

/// Number of news items the dashboard page shows.
pub const NEWS_ON_PAGE: usize = 5;

/// Outcome of one dashboard section: either its data or the user-visible
/// message of the error caught at the fetch site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section<T> {
    /// Section payload when the fetch succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// User-visible error message when it did not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Section<T> {
    fn from_result(label: &str, res: Result<T, VetrinaError>) -> Self {
        match res {
            Ok(data) => Self {
                data: Some(data),
                error: None,
            },
            Err(e) => {
                tracing::warn!(section = label, error = %e, "dashboard section failed");
                Self {
                    data: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// True when the section carries data.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.data.is_some()
    }
}

/// One row of the price-movements table: the candle plus its fractional
/// change against the previous close. The first fetched candle has no prior
/// close and therefore no row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementRow {
    /// The daily bar this row describes.
    #[serde(flatten)]
    pub candle: Candle,
    /// Fractional change versus the previous close.
    pub change: f64,
}

/// The price-movements table and its annualized summary statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movements {
    /// Table rows, one per consecutive close pair.
    pub rows: Vec<MovementRow>,
    /// `mean(change) * 252 * 100`, in percent.
    pub annual_return_pct: f64,
    /// `population_stddev(change) * sqrt(252) * 100`, in percent.
    pub annual_volatility_pct: f64,
}

/// Everything one dashboard render needs, with failures captured per section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    /// The requested ticker.
    pub symbol: Symbol,
    /// The requested calendar range.
    pub range: DateRange,
    /// Daily history backing the price and volume charts.
    pub history: Section<HistoryResponse>,
    /// Movements table; empty whenever history is unavailable or too short.
    pub movements: Section<Movements>,
    /// Annual balance-sheet rows.
    pub balance_sheet: Section<Vec<BalanceSheetRow>>,
    /// Annual cash-flow rows.
    pub cashflow: Section<Vec<CashflowRow>>,
    /// Top news items, truncated to [`NEWS_ON_PAGE`].
    pub news: Section<Vec<NewsArticle>>,
}

impl Vetrina {
    /// Run one sequential fetch-then-compute pass for the dashboard.
    ///
    /// Sections are fetched one after another, never concurrently; a slow
    /// provider blocks the render. Every provider error is caught here and
    /// stored as its section's message, so the page always renders whatever
    /// sections succeeded.
    pub async fn dashboard(&self, symbol: &Symbol, range: DateRange) -> DashboardData {
        let history = self.history(symbol, HistoryRequest::new(range)).await;
        let movements = match &history {
            Ok(h) => build_movements(h),
            // History is this section's input; reuse its error message.
            Err(e) => Err(e.clone()),
        };
        let balance_sheet = self.balance_sheet(symbol).await;
        let cashflow = self.cashflow(symbol).await;
        let news = self.news(symbol, NewsRequest::default()).await.map(|mut v| {
            v.truncate(NEWS_ON_PAGE);
            v
        });

        DashboardData {
            symbol: symbol.clone(),
            range,
            history: Section::from_result("history", history),
            movements: Section::from_result("movements", movements),
            balance_sheet: Section::from_result("balance_sheet", balance_sheet),
            cashflow: Section::from_result("cashflow", cashflow),
            news: Section::from_result("news", news),
        }
    }
}

fn build_movements(history: &HistoryResponse) -> Result<Movements, VetrinaError> {
    let summary = summarize(&history.closes())?;
    let rows = history.candles[1..]
        .iter()
        .cloned()
        .zip(summary.changes.iter().copied())
        .map(|(candle, change)| MovementRow { candle, change })
        .collect();
    Ok(Movements {
        rows,
        annual_return_pct: summary.annual_return_pct,
        annual_volatility_pct: summary.annual_volatility_pct,
    })
}

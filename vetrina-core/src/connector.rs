use async_trait::async_trait;

use crate::VetrinaError;
use crate::types::{
    BalanceSheetRow, CashflowRow, HistoryRequest, HistoryResponse, NewsArticle, NewsRequest, Symbol,
};

/// Focused role trait for connectors that provide daily OHLCV history.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch daily history for the given symbol and date range.
    async fn history(
        &self,
        symbol: &Symbol,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, VetrinaError>;
}

/// Focused role trait for connectors that provide annual balance sheets.
#[async_trait]
pub trait BalanceSheetProvider: Send + Sync {
    /// Fetch annual balance-sheet rows for the given symbol.
    async fn balance_sheet(&self, symbol: &Symbol) -> Result<Vec<BalanceSheetRow>, VetrinaError>;
}

/// Focused role trait for connectors that provide annual cash-flow statements.
#[async_trait]
pub trait CashflowProvider: Send + Sync {
    /// Fetch annual cash-flow rows for the given symbol.
    async fn cashflow(&self, symbol: &Symbol) -> Result<Vec<CashflowRow>, VetrinaError>;
}

/// Focused role trait for connectors that provide sentiment-scored news.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch news articles for the given symbol, in feed order.
    async fn news(
        &self,
        symbol: &Symbol,
        req: NewsRequest,
    ) -> Result<Vec<NewsArticle>, VetrinaError>;
}

/// Main connector trait implemented by provider crates. Exposes capability
/// discovery via the `as_*_provider` accessors; a connector advertises a
/// capability by returning a usable trait object reference.
pub trait VetrinaConnector: Send + Sync {
    /// A stable identifier used in error tagging (e.g. "vetrina-yahoo").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise history capability.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }

    /// Advertise balance-sheet capability.
    fn as_balance_sheet_provider(&self) -> Option<&dyn BalanceSheetProvider> {
        None
    }

    /// Advertise cash-flow capability.
    fn as_cashflow_provider(&self) -> Option<&dyn CashflowProvider> {
        None
    }

    /// Advertise news capability.
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        None
    }
}

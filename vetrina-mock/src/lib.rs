use async_trait::async_trait;
use vetrina_core::connector::{
    BalanceSheetProvider, CashflowProvider, HistoryProvider, NewsProvider, VetrinaConnector,
};
use vetrina_core::{
    BalanceSheetRow, CashflowRow, HistoryRequest, HistoryResponse, NewsArticle, NewsRequest,
    Symbol, VetrinaError,
};

mod fixtures;

/// Mock connector for CI-safe tests and examples. Provides deterministic data
/// from static fixtures; the sentinel symbol `FAIL` forces a connector error
/// on every capability.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str) -> VetrinaError {
        VetrinaError::not_found(what.to_string())
    }

    fn maybe_fail(symbol: &str, capability: &'static str) -> Result<(), VetrinaError> {
        if symbol == "FAIL" {
            return Err(VetrinaError::connector(
                "vetrina-mock",
                format!("forced failure: {capability}"),
            ));
        }
        Ok(())
    }
}

impl VetrinaConnector for MockConnector {
    fn name(&self) -> &'static str {
        "vetrina-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }
    fn as_balance_sheet_provider(&self) -> Option<&dyn BalanceSheetProvider> {
        Some(self as &dyn BalanceSheetProvider)
    }
    fn as_cashflow_provider(&self) -> Option<&dyn CashflowProvider> {
        Some(self as &dyn CashflowProvider)
    }
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(
        &self,
        symbol: &Symbol,
        _req: HistoryRequest,
    ) -> Result<HistoryResponse, VetrinaError> {
        let s = symbol.as_str();
        Self::maybe_fail(s, "history")?;
        fixtures::history::by_symbol(s).ok_or_else(|| Self::not_found(&format!("history for {s}")))
    }
}

#[async_trait]
impl BalanceSheetProvider for MockConnector {
    async fn balance_sheet(&self, symbol: &Symbol) -> Result<Vec<BalanceSheetRow>, VetrinaError> {
        let s = symbol.as_str();
        Self::maybe_fail(s, "balance_sheet")?;
        Ok(fixtures::fundamentals::balance_sheet_by_symbol(s))
    }
}

#[async_trait]
impl CashflowProvider for MockConnector {
    async fn cashflow(&self, symbol: &Symbol) -> Result<Vec<CashflowRow>, VetrinaError> {
        let s = symbol.as_str();
        Self::maybe_fail(s, "cashflow")?;
        Ok(fixtures::fundamentals::cashflow_by_symbol(s))
    }
}

#[async_trait]
impl NewsProvider for MockConnector {
    async fn news(
        &self,
        symbol: &Symbol,
        req: NewsRequest,
    ) -> Result<Vec<NewsArticle>, VetrinaError> {
        let s = symbol.as_str();
        Self::maybe_fail(s, "news")?;
        Ok(fixtures::news::by_symbol(s, &req))
    }
}

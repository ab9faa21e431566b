//! vetrina-alphavantage
//!
//! Alpha Vantage connector for the vetrina dashboard. Implements the two
//! fundamentals capabilities: annual balance sheets (`function=BALANCE_SHEET`)
//! and annual cash-flow statements (`function=CASH_FLOW`).
//!
//! The provider requires an API key; rate-limit responses arrive as a `Note`
//! payload and are surfaced as connector errors carrying the provider's
//! message.
#![warn(missing_docs)]

mod wire;

use async_trait::async_trait;
use url::Url;

use vetrina_core::connector::{BalanceSheetProvider, CashflowProvider, VetrinaConnector};
use vetrina_core::{BalanceSheetRow, CashflowRow, Symbol, VetrinaError};

const DEFAULT_BASE: &str = "https://www.alphavantage.co";

/// Connector backed by the Alpha Vantage fundamentals API.
pub struct AvConnector {
    http: reqwest::Client,
    base: Url,
    api_key: String,
}

impl AvConnector {
    /// Build against the production endpoint with the given API key.
    ///
    /// # Panics
    /// Panics only if the compiled-in default URL fails to parse, which is
    /// unexpected in normal environments.
    #[must_use]
    pub fn new_with_key(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE, api_key).expect("default Alpha Vantage endpoint must parse")
    }

    /// Build against a custom endpoint (tests point this at a mock server).
    ///
    /// # Errors
    /// Returns `InvalidArg` if the base URL does not parse.
    pub fn with_base_url(
        base: impl AsRef<str>,
        api_key: impl Into<String>,
    ) -> Result<Self, VetrinaError> {
        Ok(Self {
            http: reqwest::Client::new(),
            base: Url::parse(base.as_ref())
                .map_err(|e| VetrinaError::InvalidArg(format!("invalid base URL: {e}")))?,
            api_key: api_key.into(),
        })
    }

    fn query_url(&self, function: &str, symbol: &Symbol) -> Result<Url, VetrinaError> {
        let mut url = self
            .base
            .join("query")
            .map_err(|e| VetrinaError::InvalidArg(format!("bad query URL: {e}")))?;
        url.query_pairs_mut()
            .append_pair("function", function)
            .append_pair("symbol", symbol.as_str())
            .append_pair("apikey", &self.api_key);
        Ok(url)
    }

    async fn fetch_reports(
        &self,
        function: &str,
        symbol: &Symbol,
    ) -> Result<Vec<wire::AnnualReport>, VetrinaError> {
        let url = self.query_url(function, symbol)?;
        tracing::debug!(%symbol, function, "fetching fundamentals");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| VetrinaError::connector("vetrina-alphavantage", e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(VetrinaError::connector(
                "vetrina-alphavantage",
                format!("status {status}"),
            ));
        }

        let envelope: wire::ReportEnvelope = resp
            .json()
            .await
            .map_err(|e| VetrinaError::Data(format!("unparseable {function} response: {e}")))?;

        if let Some(msg) = envelope.error_message {
            return Err(VetrinaError::not_found(format!(
                "{function} for {symbol}: {msg}"
            )));
        }
        // The API reports rate limiting and key problems as a 200 with a note.
        if let Some(msg) = envelope.note.or(envelope.information) {
            return Err(VetrinaError::connector("vetrina-alphavantage", msg));
        }
        if envelope.annual_reports.is_empty() {
            return Err(VetrinaError::not_found(format!("{function} for {symbol}")));
        }
        Ok(envelope.annual_reports)
    }
}

#[async_trait]
impl BalanceSheetProvider for AvConnector {
    async fn balance_sheet(&self, symbol: &Symbol) -> Result<Vec<BalanceSheetRow>, VetrinaError> {
        self.fetch_reports("BALANCE_SHEET", symbol)
            .await?
            .into_iter()
            .map(wire::AnnualReport::into_balance_sheet)
            .collect()
    }
}

#[async_trait]
impl CashflowProvider for AvConnector {
    async fn cashflow(&self, symbol: &Symbol) -> Result<Vec<CashflowRow>, VetrinaError> {
        self.fetch_reports("CASH_FLOW", symbol)
            .await?
            .into_iter()
            .map(wire::AnnualReport::into_cashflow)
            .collect()
    }
}

impl VetrinaConnector for AvConnector {
    fn name(&self) -> &'static str {
        "vetrina-alphavantage"
    }

    fn vendor(&self) -> &'static str {
        "Alpha Vantage"
    }

    fn as_balance_sheet_provider(&self) -> Option<&dyn BalanceSheetProvider> {
        Some(self as &dyn BalanceSheetProvider)
    }

    fn as_cashflow_provider(&self) -> Option<&dyn CashflowProvider> {
        Some(self as &dyn CashflowProvider)
    }
}

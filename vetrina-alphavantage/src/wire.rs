//! Wire types for the Alpha Vantage `query?function=` JSON endpoints.
//!
//! Numeric line items arrive as strings and absent values as the literal
//! `"None"`; both are normalized to `Option<f64>` here. A payload carrying a
//! `Note`/`Information` field instead of reports is the provider's rate-limit
//! or diagnostic response.

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;

use vetrina_core::{BalanceSheetRow, CashflowRow, VetrinaError};

#[derive(Deserialize, Debug)]
pub(crate) struct ReportEnvelope {
    #[serde(rename = "annualReports", default)]
    pub annual_reports: Vec<AnnualReport>,
    #[serde(rename = "Note", default)]
    pub note: Option<String>,
    #[serde(rename = "Information", default)]
    pub information: Option<String>,
    #[serde(rename = "Error Message", default)]
    pub error_message: Option<String>,
}

/// One annual report: a fiscal date plus a flat map of string-valued line items.
#[derive(Deserialize, Debug)]
pub(crate) struct AnnualReport {
    #[serde(rename = "fiscalDateEnding")]
    pub fiscal_date_ending: String,
    #[serde(flatten)]
    pub items: HashMap<String, serde_json::Value>,
}

impl AnnualReport {
    fn period(&self) -> Result<NaiveDate, VetrinaError> {
        NaiveDate::parse_from_str(&self.fiscal_date_ending, "%Y-%m-%d").map_err(|e| {
            VetrinaError::Data(format!(
                "bad fiscalDateEnding {:?}: {e}",
                self.fiscal_date_ending
            ))
        })
    }

    /// Numeric line item lookup; `"None"`, empty strings, and absent keys all
    /// collapse to `None`.
    fn item(&self, key: &str) -> Option<f64> {
        match self.items.get(key)? {
            serde_json::Value::String(s) if s != "None" && !s.is_empty() => s.parse().ok(),
            serde_json::Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub(crate) fn into_balance_sheet(self) -> Result<BalanceSheetRow, VetrinaError> {
        Ok(BalanceSheetRow {
            period: self.period()?,
            total_assets: self.item("totalAssets"),
            total_liabilities: self.item("totalLiabilities"),
            total_equity: self.item("totalShareholderEquity"),
            cash: self.item("cashAndCashEquivalentsAtCarryingValue"),
            long_term_debt: self.item("longTermDebt"),
        })
    }

    pub(crate) fn into_cashflow(self) -> Result<CashflowRow, VetrinaError> {
        Ok(CashflowRow {
            period: self.period()?,
            operating_cashflow: self.item("operatingCashflow"),
            capital_expenditure: self.item("capitalExpenditures"),
            investing_cashflow: self.item("cashflowFromInvestment"),
            financing_cashflow: self.item("cashflowFromFinancing"),
            net_income: self.item("netIncome"),
        })
    }
}

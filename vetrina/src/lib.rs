//! Vetrina assembles a single-page financial dashboard from pluggable
//! market data connectors.
//!
//! Overview
//! - Routes each capability (history, balance sheet, cash flow, news) to the
//!   first registered connector that advertises it.
//! - Performs one sequential fetch-then-compute pass per request: price
//!   history feeds the charts and the movements table; fundamentals and news
//!   are fetched independently.
//! - Catches every provider error at its call site and stores it as that
//!   section's user-visible message; the remaining sections render
//!   unaffected. There are no retries and no fallback providers.
//!
//! Building a dashboard:
//! ```rust,ignore
//! use std::sync::Arc;
//! use vetrina::Vetrina;
//! use vetrina_core::{DateRange, Symbol};
//!
//! let yahoo = Arc::new(YahooConnector::new_default());
//! let av = Arc::new(AvConnector::new_with_key("..."));
//!
//! let vetrina = Vetrina::builder()
//!     .with_connector(yahoo)
//!     .with_connector(av)
//!     .build()?;
//!
//! let data = vetrina
//!     .dashboard(&Symbol::new("AAPL")?, DateRange::default_range())
//!     .await;
//! ```
//!
//! See `examples/` for a runnable end-to-end snapshot against the mock
//! connector.
#![warn(missing_docs)]

pub(crate) mod core;
/// Dashboard assembly: the per-request fetch-then-compute pass.
pub mod dashboard;
mod router;

pub use core::{Vetrina, VetrinaBuilder};
pub use dashboard::{DashboardData, MovementRow, Movements, NEWS_ON_PAGE, Section};

// Re-export core types for convenience
pub use vetrina_core::{
    BalanceSheetRow, Candle, CashflowRow, DateRange, HistoryRequest, HistoryResponse,
    MovementSummary, NewsArticle, NewsRequest, Symbol, VetrinaConnector, VetrinaError,
};

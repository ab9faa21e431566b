//! vetrina-core
//!
//! Core types, traits, and the one owned piece of numeric logic shared across
//! the vetrina workspace.
//!
//! - `types`: common data structures (candles, statement rows, news articles,
//!   requests).
//! - `connector`: the `VetrinaConnector` trait and capability provider traits.
//! - `movements`: the per-period change series and the annualized
//!   return/volatility summary computed from it.
//!
//! Connector implementations are expected to run under a Tokio 1.x runtime;
//! this crate itself performs no I/O.
#![warn(missing_docs)]

/// Connector capability traits and the primary `VetrinaConnector` interface.
pub mod connector;
/// Error taxonomy shared by connectors and the dashboard facade.
pub mod error;
/// Per-period change series and annualized return/volatility statistics.
pub mod movements;
pub mod types;

pub use connector::VetrinaConnector;
pub use error::VetrinaError;
pub use movements::{MovementSummary, TRADING_DAYS_PER_YEAR, change_series, summarize};
pub use types::*;

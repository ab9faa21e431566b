use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the vetrina workspace.
///
/// Covers capability mismatches, argument validation errors, provider-tagged
/// failures, not-found conditions, and the calculator's insufficient-data
/// condition.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VetrinaError {
    /// The requested capability is not implemented by any registered connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "history").
        capability: String,
    },

    /// Issues with the returned or expected data (missing columns, malformed
    /// payloads, unparseable feeds).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument (empty ticker, inverted date range, a
    /// non-positive price in a series).
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Too few price points to derive a change series.
    #[error("insufficient data: need at least {needed} price points, got {got}")]
    InsufficientData {
        /// Minimum number of points the computation requires.
        needed: usize,
        /// Number of points actually supplied.
        got: usize,
    },

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "history for AAPL".
        what: String,
    },
}

impl VetrinaError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build an `InsufficientData` error.
    #[must_use]
    pub const fn insufficient_data(needed: usize, got: usize) -> Self {
        Self::InsufficientData { needed, got }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// Capability absence and benign not-found conditions are informational;
    /// everything else points at bad input or a failing provider.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(self, Self::Unsupported { .. } | Self::NotFound { .. })
    }
}

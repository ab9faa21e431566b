//! Wire types for the Yahoo v8 chart endpoint and their mapping to candles.
//!
//! The payload carries parallel arrays keyed off `timestamp`; individual
//! entries are nullable. Rows without a close are unusable for both charting
//! and the change series and are skipped, matching the dropna behavior the
//! dashboard expects.

use chrono::DateTime;
use serde::Deserialize;
use vetrina_core::{Candle, HistoryResponse, VetrinaError};

#[derive(Deserialize, Debug)]
pub(crate) struct ChartEnvelope {
    pub chart: ChartResponse,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ChartResponse {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ChartError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ChartResult {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Deserialize, Debug)]
pub(crate) struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteBlock>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct QuoteBlock {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

impl ChartResult {
    /// Zip the parallel arrays into candles, skipping rows with a null close.
    pub(crate) fn into_history(self) -> Result<HistoryResponse, VetrinaError> {
        let quote = self
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| VetrinaError::Data("no quote block in chart response".into()))?;
        if quote.close.is_empty() {
            return Err(VetrinaError::Data(
                "no close column in chart response".into(),
            ));
        }
        if quote.close.len() != self.timestamp.len() {
            return Err(VetrinaError::Data(format!(
                "close column length {} does not match {} timestamps",
                quote.close.len(),
                self.timestamp.len()
            )));
        }

        let mut candles = Vec::with_capacity(self.timestamp.len());
        let mut skipped = 0usize;
        for (i, (ts, close)) in self.timestamp.iter().zip(&quote.close).enumerate() {
            let Some(close) = close else {
                skipped += 1;
                continue;
            };
            let Some(ts) = DateTime::from_timestamp(*ts, 0) else {
                skipped += 1;
                continue;
            };
            let at = |col: &[Option<f64>]| col.get(i).copied().flatten().unwrap_or(*close);
            candles.push(Candle {
                ts,
                open: at(&quote.open),
                high: at(&quote.high),
                low: at(&quote.low),
                close: *close,
                volume: quote.volume.get(i).copied().flatten().unwrap_or(0),
            });
        }
        if skipped > 0 {
            tracing::warn!(skipped, "dropped chart rows without a usable close");
        }
        candles.sort_by_key(|c| c.ts);
        Ok(HistoryResponse { candles })
    }
}

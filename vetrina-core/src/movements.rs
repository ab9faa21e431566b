//! Per-period fractional changes and the annualized summary derived from them.
//!
//! This is the dashboard's only owned numeric logic. Everything here is a
//! pure function of its input slice; the caller supplies the closing-price
//! column of a fetched history and receives either a summary or an explicit
//! invalid-input error. NaN is never produced.

use crate::VetrinaError;

/// Trading days per year used to scale daily statistics to annual figures.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Annualized summary of a close series.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementSummary {
    /// Fractional change per consecutive close pair; `len == closes.len() - 1`.
    pub changes: Vec<f64>,
    /// `mean(changes) * 252 * 100`, in percent.
    pub annual_return_pct: f64,
    /// `population_stddev(changes) * sqrt(252) * 100`, in percent.
    pub annual_volatility_pct: f64,
}

/// Derive the fractional change series from a close series.
///
/// `change[i] = close[i+1] / close[i] - 1`. The first close has no prior
/// value to compare against and is dropped, never emitted as a placeholder.
///
/// # Errors
/// - `InsufficientData` when fewer than 2 closes are supplied.
/// - `InvalidArg` when any close is non-positive or non-finite; the ratio is
///   undefined for such inputs.
pub fn change_series(closes: &[f64]) -> Result<Vec<f64>, VetrinaError> {
    if closes.len() < 2 {
        return Err(VetrinaError::insufficient_data(2, closes.len()));
    }
    if let Some(bad) = closes.iter().find(|p| !p.is_finite() || **p <= 0.0) {
        return Err(VetrinaError::InvalidArg(format!(
            "close price must be a positive finite number, got {bad}"
        )));
    }
    Ok(closes.windows(2).map(|w| w[1] / w[0] - 1.0).collect())
}

/// Compute the change series and its annualized return/volatility.
///
/// The volatility uses the population standard deviation (divisor n, not
/// n−1); a single-element change series therefore has zero volatility.
///
/// # Errors
/// Propagates the [`change_series`] validation errors; otherwise always
/// succeeds.
pub fn summarize(closes: &[f64]) -> Result<MovementSummary, VetrinaError> {
    let changes = change_series(closes)?;
    let annual_return_pct = mean(&changes) * TRADING_DAYS_PER_YEAR * 100.0;
    let annual_volatility_pct =
        population_stddev(&changes) * TRADING_DAYS_PER_YEAR.sqrt() * 100.0;
    Ok(MovementSummary {
        changes,
        annual_return_pct,
        annual_volatility_pct,
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Standard deviation with divisor n. Callers guarantee a non-empty slice.
fn population_stddev(values: &[f64]) -> f64 {
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pair_has_zero_volatility() {
        let s = summarize(&[100.0, 110.0]).unwrap();
        assert_eq!(s.changes.len(), 1);
        assert!((s.changes[0] - 0.10).abs() < 1e-12);
        assert!((s.annual_return_pct - 2520.0).abs() < 1e-9);
        assert_eq!(s.annual_volatility_pct, 0.0);
    }
}

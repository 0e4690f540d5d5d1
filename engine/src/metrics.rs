// Headline statistics over a price series
use shared::models::{Metrics, PriceChange, PriceSeries};

use crate::error::{EngineError, Result};

/// Move from `reference` to `last`, in price units and percent of `reference`.
///
/// Both the dashboard metrics and the watchlist go through this. A zero reference
/// yields a non-finite percentage.
pub fn price_change(reference: f64, last: f64) -> PriceChange {
    let absolute = last - reference;
    PriceChange {
        absolute,
        percent: absolute / reference * 100.0,
    }
}

/// Summary of the whole window. The reference price is the close of the first row.
pub fn compute_metrics(series: &PriceSeries) -> Result<Metrics> {
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return Err(EngineError::EmptySeries(series.symbol.clone()));
    };

    let change = price_change(first.close, last.close);
    let period_high = series
        .candles
        .iter()
        .map(|c| c.high)
        .fold(f64::NEG_INFINITY, f64::max);
    let period_low = series
        .candles
        .iter()
        .map(|c| c.low)
        .fold(f64::INFINITY, f64::min);
    let total_volume = series.candles.iter().map(|c| c.volume).sum();

    if !change.percent.is_finite() {
        tracing::warn!(symbol = %series.symbol, first_close = first.close, "Percent change is not finite");
    }

    Ok(Metrics {
        last_close: last.close,
        first_close: first.close,
        change: change.absolute,
        percent_change: change.percent,
        period_high,
        period_low,
        total_volume,
    })
}

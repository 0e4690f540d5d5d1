// Technical indicators module
pub mod ema;
pub mod sma;

pub use ema::Ema;
pub use sma::Sma;

use serde_json::Value;
use shared::models::{Candle, IndicatorKind, PriceSeries};

// Common trait for all indicators
pub trait IndicatorCalculator: Send + Sync {
    fn name(&self) -> &str;
    fn parameters(&self) -> Value;
    /// One entry per candle; `None` where the window is not yet full.
    fn calculate(&self, data: &[Candle]) -> Vec<Option<f64>>;
}

pub fn calculator_for(kind: IndicatorKind) -> Box<dyn IndicatorCalculator> {
    match kind {
        IndicatorKind::Sma20 => Box::new(Sma::new(IndicatorKind::WINDOW)),
        IndicatorKind::Ema20 => Box::new(Ema::new(IndicatorKind::WINDOW)),
    }
}

/// The two overlay columns, aligned with the series by position.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorColumns {
    pub sma_20: Vec<Option<f64>>,
    pub ema_20: Vec<Option<f64>>,
}

impl IndicatorColumns {
    pub fn column(&self, kind: IndicatorKind) -> &[Option<f64>] {
        match kind {
            IndicatorKind::Sma20 => &self.sma_20,
            IndicatorKind::Ema20 => &self.ema_20,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedSeries {
    pub series: PriceSeries,
    pub indicators: IndicatorColumns,
}

/// Appends the 20-sample SMA and EMA of close.
pub fn add_indicators(series: PriceSeries) -> EnrichedSeries {
    let compute = |kind: IndicatorKind| {
        let calculator = calculator_for(kind);
        let values = calculator.calculate(&series.candles);
        tracing::debug!(
            symbol = %series.symbol,
            indicator = calculator.name(),
            parameters = %calculator.parameters(),
            defined = values.iter().filter(|v| v.is_some()).count(),
            "Calculated indicator"
        );
        values
    };
    let indicators = IndicatorColumns {
        sma_20: compute(IndicatorKind::Sma20),
        ema_20: compute(IndicatorKind::Ema20),
    };
    EnrichedSeries { series, indicators }
}

#[cfg(test)]
pub(crate) mod testing {
    use chrono::Utc;
    use shared::models::{BarTimestamp, Candle};

    pub fn closes(values: &[f64]) -> Vec<Candle> {
        values
            .iter()
            .map(|&close| Candle {
                timestamp: BarTimestamp::Zoned(Utc::now().fixed_offset()),
                open: close,
                high: close,
                low: close,
                close,
                volume: 0,
            })
            .collect()
    }

    pub fn assert_close(actual: &[Option<f64>], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "Vectors differ in length");
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            let a = a.unwrap_or_else(|| panic!("Missing value at index {}", i));
            assert!((a - e).abs() < 1e-9, "Mismatch at index {}: {} != {}", i, a, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testing::closes;

    #[test]
    fn test_indicators_defined_from_twentieth_row() {
        let values: Vec<f64> = (1..=30).map(|i| i as f64).collect();
        let enriched = add_indicators(PriceSeries::new("NVDA", closes(&values)));

        for column in [&enriched.indicators.sma_20, &enriched.indicators.ema_20] {
            assert_eq!(column.len(), 30);
            assert!(column[..19].iter().all(Option::is_none));
            assert!(column[19..].iter().all(Option::is_some));
        }
        // mean of 1..=20
        assert_eq!(enriched.indicators.sma_20[19], Some(10.5));
    }

    #[test]
    fn test_short_series_has_no_indicator_values() {
        let enriched = add_indicators(PriceSeries::new("NVDA", closes(&[1.0; 19])));
        assert!(enriched.indicators.sma_20.iter().all(Option::is_none));
        assert!(enriched.indicators.ema_20.iter().all(Option::is_none));
    }

    #[test]
    fn test_column_lookup_by_kind() {
        let enriched = add_indicators(PriceSeries::new("NVDA", closes(&[5.0; 20])));
        assert_eq!(enriched.indicators.column(IndicatorKind::Sma20)[19], Some(5.0));
        testing::assert_close(&enriched.indicators.column(IndicatorKind::Ema20)[19..], &[5.0]);
    }
}

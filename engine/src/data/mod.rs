// Data acquisition and normalization
pub mod csv_parser;
pub mod normalizer;
pub mod provider;
pub mod yahoo;

pub use provider::{build_provider, fetch, FetchRange, MarketDataProvider};

#[cfg(test)]
pub(crate) mod testing {
    use super::{FetchRange, MarketDataProvider};
    use crate::error::{EngineError, Result};
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use shared::models::{BarTimestamp, Candle, Interval, PriceSeries};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory provider that records every call it receives.
    #[derive(Default)]
    pub struct StaticProvider {
        series: HashMap<String, Vec<Candle>>,
        failing: Vec<String>,
        pub calls: Mutex<Vec<(String, FetchRange, Interval)>>,
    }

    impl StaticProvider {
        pub fn with_series(mut self, symbol: &str, candles: Vec<Candle>) -> Self {
            self.series.insert(symbol.to_string(), candles);
            self
        }

        pub fn failing_on(mut self, symbol: &str) -> Self {
            self.failing.push(symbol.to_string());
            self
        }

        pub fn called_symbols(&self) -> Vec<String> {
            self.calls.lock().unwrap().iter().map(|(s, _, _)| s.clone()).collect()
        }
    }

    #[async_trait]
    impl MarketDataProvider for StaticProvider {
        fn name(&self) -> &str {
            "static"
        }

        async fn fetch_range(&self, symbol: &str, range: FetchRange, interval: Interval) -> Result<PriceSeries> {
            self.calls.lock().unwrap().push((symbol.to_string(), range, interval));
            if self.failing.iter().any(|s| s == symbol) {
                return Err(EngineError::ProviderError(format!("Not Found for symbol '{}'", symbol)));
            }
            let candles = self.series.get(symbol).cloned().unwrap_or_default();
            Ok(PriceSeries::new(symbol, candles))
        }
    }

    /// Minute bars starting 2024-03-11 13:30 UTC with the given closes; open/high/low derive from close.
    pub fn minute_candles(closes: &[f64]) -> Vec<Candle> {
        let start = DateTime::from_timestamp(1_710_163_800, 0).unwrap_or_else(Utc::now);
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Candle {
                timestamp: BarTimestamp::Zoned((start + chrono::Duration::minutes(i as i64)).fixed_offset()),
                open: close - 0.5,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 100,
            })
            .collect()
    }
}

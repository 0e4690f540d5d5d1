// Market data provider seam: every fetch goes through `MarketDataProvider`
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use shared::models::{Interval, Period, PriceSeries};
use std::sync::Arc;

use crate::config::settings::{EngineSettings, ProviderKind};
use crate::data::csv_parser::CsvProvider;
use crate::data::yahoo::YahooProvider;
use crate::error::Result;

/// What range of history a fetch should cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchRange {
    /// Let the provider resolve the period in its own vocabulary.
    Period(Period),
    /// Explicit `[start, end]` window.
    Window {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

impl FetchRange {
    /// The one-week period is the only one resolved locally, as a 7-day window ending at `now`.
    pub fn for_period(period: Period, now: DateTime<Utc>) -> Self {
        match period {
            Period::Week1 => FetchRange::Window {
                start: now - Duration::days(7),
                end: now,
            },
            other => FetchRange::Period(other),
        }
    }
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch_range(&self, symbol: &str, range: FetchRange, interval: Interval) -> Result<PriceSeries>;
}

/// Fetches `symbol` for `period` sampled at `interval`. Errors from the provider propagate untouched.
pub async fn fetch(
    provider: &dyn MarketDataProvider,
    symbol: &str,
    period: Period,
    interval: Interval,
) -> Result<PriceSeries> {
    let range = FetchRange::for_period(period, Utc::now());
    tracing::debug!(
        provider = provider.name(),
        symbol = %symbol,
        %period,
        %interval,
        ?range,
        "Fetching price series"
    );
    let series = provider.fetch_range(symbol, range, interval).await?;
    tracing::debug!(symbol = %symbol, rows = series.len(), "Fetched price series");
    Ok(series)
}

pub fn build_provider(settings: &EngineSettings) -> Result<Arc<dyn MarketDataProvider>> {
    let provider: Arc<dyn MarketDataProvider> = match settings.provider {
        ProviderKind::Yahoo => Arc::new(YahooProvider::new(&settings.yahoo_base_url, &settings.user_agent)?),
        ProviderKind::Csv => Arc::new(CsvProvider::new(settings.csv_dir.clone())),
    };
    tracing::info!(provider = provider.name(), "Market data provider ready");
    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_week_resolves_to_seven_day_window() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 16, 0, 0).unwrap();
        match FetchRange::for_period(Period::Week1, now) {
            FetchRange::Window { start, end } => {
                assert_eq!(end, now);
                assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 8, 16, 0, 0).unwrap());
            }
            other => panic!("expected window, got {:?}", other),
        }
    }

    #[test]
    fn test_other_periods_delegate_to_provider() {
        let now = Utc::now();
        for period in [Period::Day1, Period::Month1, Period::Year1, Period::Max] {
            assert_eq!(FetchRange::for_period(period, now), FetchRange::Period(period));
        }
    }

    #[test]
    fn test_build_csv_provider() {
        let settings = EngineSettings {
            provider: ProviderKind::Csv,
            ..EngineSettings::default()
        };
        let provider = build_provider(&settings).unwrap();
        assert_eq!(provider.name(), "csv");
    }
}

// HTTP client for the Yahoo Finance chart endpoint
use async_trait::async_trait;
use chrono::DateTime;
use serde::{Deserialize, Serialize};
use shared::models::{BarTimestamp, Candle, Interval, PriceSeries};
use url::Url;

use super::provider::{FetchRange, MarketDataProvider};
use crate::error::{EngineError, Result};

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ChartQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    period1: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    period2: Option<i64>,
    interval: &'static str,
    include_pre_post: bool,
}

impl ChartQuery {
    fn new(range: FetchRange, interval: Interval) -> Self {
        let (range, period1, period2) = match range {
            FetchRange::Period(period) => (Some(period.as_str()), None, None),
            FetchRange::Window { start, end } => (None, Some(start.timestamp()), Some(end.timestamp())),
        };
        ChartQuery {
            range,
            period1,
            period2,
            interval: interval.as_str(),
            include_pre_post: false,
        }
    }
}

#[derive(Deserialize, Debug)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Deserialize, Debug)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Deserialize, Debug)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: ChartIndicators,
}

#[derive(Deserialize, Debug)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Deserialize, Debug, Default)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

fn at<T: Copy>(values: &[Option<T>], idx: usize) -> Option<T> {
    values.get(idx).copied().flatten()
}

/// Turns a chart response body into a series. Intervals with any missing price are dropped.
pub fn decode_chart(symbol: &str, body: &str) -> Result<PriceSeries> {
    let envelope: ChartEnvelope = serde_json::from_str(body)?;
    if let Some(err) = envelope.chart.error {
        return Err(EngineError::ProviderError(format!(
            "{} for symbol '{}': {}",
            err.code, symbol, err.description
        )));
    }

    let Some(result) = envelope.chart.result.and_then(|r| r.into_iter().next()) else {
        return Ok(PriceSeries::new(symbol, Vec::new()));
    };
    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();

    let mut candles = Vec::with_capacity(result.timestamp.len());
    for (idx, &ts) in result.timestamp.iter().enumerate() {
        let (Some(open), Some(high), Some(low), Some(close)) = (
            at(&quote.open, idx),
            at(&quote.high, idx),
            at(&quote.low, idx),
            at(&quote.close, idx),
        ) else {
            continue;
        };
        let timestamp = DateTime::from_timestamp(ts, 0)
            .ok_or_else(|| EngineError::ProcessingError(format!("Invalid provider timestamp: {}", ts)))?;
        candles.push(Candle {
            timestamp: BarTimestamp::Zoned(timestamp.fixed_offset()),
            open,
            high,
            low,
            close,
            volume: at(&quote.volume, idx).map_or(0, |v| v.max(0.0).round() as u64),
        });
    }

    Ok(PriceSeries::new(symbol, candles))
}

pub struct YahooProvider {
    client: reqwest::Client,
    api_host: Url,
}

impl YahooProvider {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            client,
            api_host: Url::parse(base_url)?,
        })
    }

    fn chart_url(&self, symbol: &str, query: &ChartQuery) -> Result<Url> {
        let mut url = self.api_host.clone();
        // `push` percent-encodes the symbol, so `?`, `#` and `/` stay inside the last segment.
        url.path_segments_mut()
            .map_err(|_| EngineError::ConfigError(format!("'{}' cannot be used as a base URL", self.api_host)))?
            .clear()
            .extend(["v8", "finance", "chart"])
            .push(symbol);
        let qs = serde_qs::to_string(query)
            .map_err(|e| EngineError::ProcessingError(format!("Cannot encode chart query: {}", e)))?;
        url.set_query(Some(&qs));
        Ok(url)
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo"
    }

    async fn fetch_range(&self, symbol: &str, range: FetchRange, interval: Interval) -> Result<PriceSeries> {
        let query = ChartQuery::new(range, interval);
        let url = self.chart_url(symbol, &query)?;
        tracing::info!(symbol = %symbol, ?query, "Run chart query");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        match decode_chart(symbol, &body) {
            Ok(series) => Ok(series),
            Err(EngineError::DecodeError { source }) if !status.is_success() => {
                tracing::warn!(symbol = %symbol, %status, error = %source, "Undecodable error response");
                Err(EngineError::ProviderError(format!("HTTP {} for symbol '{}'", status, symbol)))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
    {"chart":{"result":[{
        "meta":{"currency":"USD","symbol":"NVDA","exchangeTimezoneName":"America/New_York"},
        "timestamp":[1710163800,1710163860,1710163920],
        "indicators":{"quote":[{
            "open":[100.0,null,102.0],
            "high":[101.0,null,103.5],
            "low":[99.5,null,101.0],
            "close":[100.5,null,103.0],
            "volume":[1200,null,800]
        }]}
    }],"error":null}}
    "#;

    #[test]
    fn test_decode_chart_drops_empty_intervals() {
        let series = decode_chart("NVDA", SAMPLE).unwrap();
        assert_eq!(series.symbol, "NVDA");
        assert_eq!(series.len(), 2);
        let first = &series.candles[0];
        assert_eq!(first.open, 100.0);
        assert_eq!(first.volume, 1200);
        assert!(first.timestamp.is_zoned());
        assert_eq!(series.candles[1].close, 103.0);
    }

    #[test]
    fn test_decode_chart_error_payload() {
        let body = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;
        let err = decode_chart("NOPE", body).unwrap_err();
        assert!(matches!(err, EngineError::ProviderError(_)));
        assert!(err.to_string().contains("Not Found for symbol 'NOPE'"));
    }

    #[test]
    fn test_decode_chart_without_timestamps_is_empty() {
        let body = r#"{"chart":{"result":[{"meta":{},"indicators":{"quote":[{}]}}],"error":null}}"#;
        let series = decode_chart("AAPL", body).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_decode_chart_garbage() {
        let err = decode_chart("AAPL", "<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, EngineError::DecodeError { .. }));
    }

    #[test]
    fn test_chart_url_for_period_and_window() {
        let provider = YahooProvider::new("https://query1.finance.yahoo.com", "test-agent").unwrap();

        let query = ChartQuery::new(FetchRange::Period(shared::models::Period::Month1), Interval::Day1);
        let url = provider.chart_url("NVDA", &query).unwrap();
        assert_eq!(url.path(), "/v8/finance/chart/NVDA");
        let qs = url.query().unwrap();
        assert!(qs.contains("range=1mo"));
        assert!(qs.contains("interval=1d"));
        assert!(!qs.contains("period1"));

        let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let end = DateTime::from_timestamp(1_700_604_800, 0).unwrap();
        let query = ChartQuery::new(FetchRange::Window { start, end }, Interval::Minute30);
        let url = provider.chart_url("NVDA", &query).unwrap();
        let qs = url.query().unwrap();
        assert!(qs.contains("period1=1700000000"));
        assert!(qs.contains("period2=1700604800"));
        assert!(qs.contains("interval=30m"));
        assert!(!qs.contains("range="));
    }

    #[test]
    fn test_chart_url_escapes_symbol() {
        let provider = YahooProvider::new("https://query1.finance.yahoo.com", "test-agent").unwrap();
        let query = ChartQuery::new(FetchRange::Period(shared::models::Period::Day1), Interval::Minute1);

        let url = provider.chart_url("A?B", &query).unwrap();
        assert_eq!(url.path(), "/v8/finance/chart/A%3FB");
        assert!(url.query().unwrap().starts_with("range=1d"));

        let url = provider.chart_url("BRK/B", &query).unwrap();
        assert_eq!(url.path(), "/v8/finance/chart/BRK%2FB");

        let url = provider.chart_url("../../v7/x", &query).unwrap();
        assert_eq!(url.path_segments().unwrap().count(), 4);
        assert!(url.path().starts_with("/v8/finance/chart/"));

        let url = provider.chart_url("A#B", &query).unwrap();
        assert!(url.fragment().is_none());
        assert_eq!(url.path(), "/v8/finance/chart/A%23B");
    }
}

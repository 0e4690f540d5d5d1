use async_trait::async_trait;
use chrono::{DateTime, Months, NaiveDate, NaiveDateTime, TimeZone, Utc};
use csv::{ReaderBuilder, StringRecord};
use shared::models::{BarTimestamp, Candle, Interval, Period, PriceSeries};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::normalizer::{as_utc, DISPLAY_TZ};
use super::provider::{FetchRange, MarketDataProvider};
use crate::error::{EngineError, Result};

// Parsing for the provider's CSV export: Date,Open,High,Low,Close,Adj Close,Volume
pub mod export_format {
    use super::*;
    use std::str::FromStr;

    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` and either of those with a `±HH:MM` offset.
    pub fn parse_timestamp(s: &str) -> Result<BarTimestamp> {
        let s = s.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
            return Ok(BarTimestamp::Zoned(ts));
        }
        if let Ok(ts) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%:z") {
            return Ok(BarTimestamp::Zoned(ts));
        }
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
            return Ok(BarTimestamp::Naive(ts));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(BarTimestamp::Naive)
            .ok_or_else(|| EngineError::CsvDataFormatError(format!("Failed to parse date '{}'", s)))
    }

    /// `None` for the export's `null` placeholder.
    pub fn parse_price(s: &str) -> Result<Option<f64>> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("null") {
            return Ok(None);
        }
        f64::from_str(s)
            .map(Some)
            .map_err(|e| EngineError::CsvDataFormatError(format!("Failed to parse decimal '{}': {}", s, e)))
    }

    pub fn parse_volume(s: &str) -> Result<Option<u64>> {
        Ok(parse_price(s)?.map(|v| v.max(0.0).round() as u64))
    }

}

pub struct CsvParser;

impl CsvParser {
    pub fn load_candles_from_csv(file_path: &Path) -> Result<Vec<Candle>> {
        let file = File::open(file_path)?;
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let headers = rdr.headers()?.clone();
        let mut candles = Vec::new();

        for (idx, result) in rdr.records().enumerate() {
            let record = result?;
            let line = idx + 2;
            let field = |name: &str| Self::get_field(&record, &headers, name, line);

            let timestamp = export_format::parse_timestamp(field("Date")?)?;
            let prices = (
                export_format::parse_price(field("Open")?)?,
                export_format::parse_price(field("High")?)?,
                export_format::parse_price(field("Low")?)?,
                export_format::parse_price(field("Close")?)?,
            );
            let (Some(open), Some(high), Some(low), Some(close)) = prices else {
                tracing::debug!(line, "Skipping CSV row with missing prices");
                continue;
            };
            let volume = export_format::parse_volume(field("Volume")?)?.unwrap_or(0);

            candles.push(Candle {
                timestamp,
                open,
                high,
                low,
                close,
                volume,
            });
        }
        Ok(candles)
    }

    fn get_field<'a>(record: &'a StringRecord, headers: &StringRecord, name: &str, line: usize) -> Result<&'a str> {
        headers
            .iter()
            .position(|header| header.trim() == name)
            .and_then(|pos| record.get(pos))
            .ok_or_else(|| EngineError::CsvDataFormatError(format!("Missing '{}' field in CSV record at line {}", name, line)))
    }
}

/// Offline provider reading `<dir>/<SYMBOL>.csv`.
///
/// The file's own sampling is used as-is; the requested interval is not resampled.
pub struct CsvProvider {
    dir: PathBuf,
}

impl CsvProvider {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, symbol: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", symbol.to_uppercase()))
    }
}

/// The one-day lookback starts at midnight of the newest row's date in the display zone.
fn lookback_start(period: Period, newest: DateTime<Utc>) -> Option<DateTime<Utc>> {
    match period {
        Period::Day1 => newest
            .with_timezone(&DISPLAY_TZ)
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .and_then(|midnight| DISPLAY_TZ.from_local_datetime(&midnight).earliest())
            .map(|start| start.with_timezone(&Utc)),
        Period::Week1 => Some(newest - chrono::Duration::days(7)),
        Period::Month1 => newest.checked_sub_months(Months::new(1)),
        Period::Year1 => newest.checked_sub_months(Months::new(12)),
        Period::Max => None,
    }
}

/// Keeps the rows that fall inside `range`.
pub fn select_range(candles: Vec<Candle>, range: FetchRange) -> Vec<Candle> {
    let (start, end) = match range {
        FetchRange::Window { start, end } => (Some(start), Some(end)),
        FetchRange::Period(period) => {
            let Some(newest) = candles.iter().map(|c| as_utc(c.timestamp)).max() else {
                return candles;
            };
            (lookback_start(period, newest), None)
        }
    };
    candles
        .into_iter()
        .filter(|c| {
            let t = as_utc(c.timestamp);
            start.map_or(true, |s| t >= s) && end.map_or(true, |e| t <= e)
        })
        .collect()
}

#[async_trait]
impl MarketDataProvider for CsvProvider {
    fn name(&self) -> &str {
        "csv"
    }

    async fn fetch_range(&self, symbol: &str, range: FetchRange, interval: Interval) -> Result<PriceSeries> {
        let path = self.path_for(symbol);
        tracing::info!(symbol = %symbol, path = %path.display(), %interval, "Loading price series from CSV");
        let candles = CsvParser::load_candles_from_csv(&path)?;
        let total = candles.len();
        let selected = select_range(candles, range);
        tracing::debug!(symbol = %symbol, total, selected = selected.len(), "Selected CSV rows");
        Ok(PriceSeries::new(symbol.to_uppercase(), selected))
    }
}

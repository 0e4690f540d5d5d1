use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Timestamp of a bar as delivered by a provider.
///
/// Providers that report epoch times yield `Zoned` values; date-only or
/// offset-less exports yield `Naive` ones until the normalizer localizes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BarTimestamp {
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl BarTimestamp {
    pub fn is_zoned(&self) -> bool {
        matches!(self, BarTimestamp::Zoned(_))
    }
}

impl fmt::Display for BarTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarTimestamp::Zoned(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S%:z")),
            BarTimestamp::Naive(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: BarTimestamp,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// One fetch worth of OHLCV rows, ascending by timestamp.
///
/// Ordering and uniqueness come from the provider and are not re-checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub symbol: String,
    pub candles: Vec<Candle>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, candles: Vec<Candle>) -> Self {
        Self {
            symbol: symbol.into(),
            candles,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn first(&self) -> Option<&Candle> {
        self.candles.first()
    }

    pub fn last(&self) -> Option<&Candle> {
        self.candles.last()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSelectionError {
    kind: &'static str,
    value: String,
}

impl fmt::Display for ParseSelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for ParseSelectionError {}

/// Look-back period offered in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1d")]
    Day1,
    #[serde(rename = "1wk")]
    Week1,
    #[serde(rename = "1mo")]
    Month1,
    #[serde(rename = "1y")]
    Year1,
    #[serde(rename = "max")]
    Max,
}

impl Period {
    pub const ALL: [Period; 5] = [
        Period::Day1,
        Period::Week1,
        Period::Month1,
        Period::Year1,
        Period::Max,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day1 => "1d",
            Period::Week1 => "1wk",
            Period::Month1 => "1mo",
            Period::Year1 => "1y",
            Period::Max => "max",
        }
    }

    /// Fixed sampling interval used for this period.
    pub fn interval(&self) -> Interval {
        match self {
            Period::Day1 => Interval::Minute1,
            Period::Week1 => Interval::Minute30,
            Period::Month1 => Interval::Day1,
            Period::Year1 | Period::Max => Interval::Week1,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| ParseSelectionError {
                kind: "period",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1m")]
    Minute1,
    #[serde(rename = "30m")]
    Minute30,
    #[serde(rename = "1d")]
    Day1,
    #[serde(rename = "1wk")]
    Week1,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Minute1 => "1m",
            Interval::Minute30 => "30m",
            Interval::Day1 => "1d",
            Interval::Week1 => "1wk",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartType {
    Candlestick,
    Line,
}

impl ChartType {
    pub const ALL: [ChartType; 2] = [ChartType::Candlestick, ChartType::Line];

    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Candlestick => "Candlestick",
            ChartType::Line => "Line",
        }
    }

    /// Anything other than "Candlestick" draws the close line.
    pub fn from_selection(label: &str) -> Self {
        if label.trim() == ChartType::Candlestick.label() {
            ChartType::Candlestick
        } else {
            ChartType::Line
        }
    }
}

/// Overlay indicators offered in the multi-select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorKind {
    Sma20,
    Ema20,
}

impl IndicatorKind {
    pub const WINDOW: usize = 20;
    pub const ALL: [IndicatorKind; 2] = [IndicatorKind::Sma20, IndicatorKind::Ema20];

    pub fn label(&self) -> &'static str {
        match self {
            IndicatorKind::Sma20 => "SMA 20",
            IndicatorKind::Ema20 => "EMA 20",
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            IndicatorKind::Sma20 => "SMA_20",
            IndicatorKind::Ema20 => "EMA_20",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        IndicatorKind::ALL
            .into_iter()
            .find(|k| k.label() == label.trim())
    }
}

/// Everything one dashboard refresh needs, captured at the moment Update is pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardRequest {
    pub symbol: String,
    pub period: Period,
    pub interval: Interval,
    pub chart_type: ChartType,
    pub indicators: Vec<IndicatorKind>,
}

impl DashboardRequest {
    pub fn new(
        symbol: impl Into<String>,
        period: Period,
        chart_type: ChartType,
        indicators: Vec<IndicatorKind>,
    ) -> Self {
        let mut unique = Vec::with_capacity(indicators.len());
        for kind in indicators {
            if !unique.contains(&kind) {
                unique.push(kind);
            }
        }
        Self {
            symbol: symbol.into().trim().to_string(),
            period,
            interval: period.interval(),
            chart_type,
            indicators: unique,
        }
    }

    /// Builds a request from raw widget selections. Unknown indicator labels are dropped.
    pub fn from_selections<S: AsRef<str>>(
        symbol: &str,
        period: Period,
        chart_label: &str,
        indicator_labels: &[S],
    ) -> Self {
        let indicators = indicator_labels
            .iter()
            .filter_map(|label| IndicatorKind::from_label(label.as_ref()))
            .collect();
        Self::new(symbol, period, ChartType::from_selection(chart_label), indicators)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Direction::Up
        } else if value < 0.0 {
            Direction::Down
        } else {
            Direction::Flat
        }
    }
}

/// Absolute and relative move from a reference price to the latest price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceChange {
    pub absolute: f64,
    pub percent: f64,
}

impl PriceChange {
    pub fn direction(&self) -> Direction {
        Direction::of(self.absolute)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub last_close: f64,
    /// Close of the first row in the window, not the prior session's close.
    pub first_close: f64,
    pub change: f64,
    pub percent_change: f64,
    pub period_high: f64,
    pub period_low: f64,
    pub total_volume: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub symbol: String,
    pub last_price: f64,
    pub change: PriceChange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_interval_mapping() {
        assert_eq!(Period::Day1.interval(), Interval::Minute1);
        assert_eq!(Period::Week1.interval(), Interval::Minute30);
        assert_eq!(Period::Month1.interval(), Interval::Day1);
        assert_eq!(Period::Year1.interval(), Interval::Week1);
        assert_eq!(Period::Max.interval(), Interval::Week1);
    }

    #[test]
    fn period_parses_sidebar_values() {
        for period in Period::ALL {
            assert_eq!(period.as_str().parse::<Period>().unwrap(), period);
        }
        let err = "2y".parse::<Period>().unwrap_err();
        assert_eq!(err.to_string(), "unknown period '2y'");
    }

    #[test]
    fn unknown_chart_type_falls_back_to_line() {
        assert_eq!(ChartType::from_selection("Candlestick"), ChartType::Candlestick);
        assert_eq!(ChartType::from_selection("Line"), ChartType::Line);
        assert_eq!(ChartType::from_selection("Heikin-Ashi"), ChartType::Line);
    }

    #[test]
    fn indicator_table_columns() {
        assert_eq!(IndicatorKind::Sma20.column(), "SMA_20");
        assert_eq!(IndicatorKind::Ema20.column(), "EMA_20");
    }

    #[test]
    fn request_drops_unknown_and_duplicate_indicators() {
        let req = DashboardRequest::from_selections(
            " NVDA ",
            Period::Week1,
            "Candlestick",
            &["EMA 20", "RSI 14", "EMA 20", "SMA 20"],
        );
        assert_eq!(req.symbol, "NVDA");
        assert_eq!(req.interval, Interval::Minute30);
        assert_eq!(req.indicators, vec![IndicatorKind::Ema20, IndicatorKind::Sma20]);
    }

    #[test]
    fn direction_follows_sign() {
        assert_eq!(Direction::of(1.5), Direction::Up);
        assert_eq!(Direction::of(-0.1), Direction::Down);
        assert_eq!(Direction::of(0.0), Direction::Flat);
        assert_eq!(Direction::of(f64::NAN), Direction::Flat);
    }

    #[test]
    fn period_serializes_as_provider_vocabulary() {
        assert_eq!(serde_json::to_string(&Period::Week1).unwrap(), "\"1wk\"");
        assert_eq!(serde_json::to_string(&Interval::Minute30).unwrap(), "\"30m\"");
    }
}

// Timestamp normalization into the display zone
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use shared::models::{BarTimestamp, PriceSeries};

/// Zone every chart and table is rendered in.
pub const DISPLAY_TZ: Tz = chrono_tz::US::Eastern;

/// Instant of a bar; naive timestamps are read as UTC.
pub fn as_utc(ts: BarTimestamp) -> DateTime<Utc> {
    match ts {
        BarTimestamp::Zoned(zoned) => zoned.with_timezone(&Utc),
        BarTimestamp::Naive(naive) => naive.and_utc(),
    }
}

pub fn to_display_zone(ts: BarTimestamp) -> BarTimestamp {
    BarTimestamp::Zoned(as_utc(ts).with_timezone(&DISPLAY_TZ).fixed_offset())
}

/// Localizes naive timestamps to UTC, then converts every row to US/Eastern.
///
/// Re-applying is harmless: zoned rows skip localization and the conversion is deterministic.
pub fn normalize(mut series: PriceSeries) -> PriceSeries {
    let naive = series.candles.iter().filter(|c| !c.timestamp.is_zoned()).count();
    if naive > 0 {
        tracing::debug!(symbol = %series.symbol, naive, "Localizing naive timestamps as UTC");
    }
    for candle in series.candles.iter_mut() {
        candle.timestamp = to_display_zone(candle.timestamp);
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, TimeZone};
    use shared::models::Candle;

    fn candle_at(timestamp: BarTimestamp) -> Candle {
        Candle { timestamp, open: 1.0, high: 1.0, low: 1.0, close: 1.0, volume: 1 }
    }

    fn zoned(ts: BarTimestamp) -> DateTime<FixedOffset> {
        match ts {
            BarTimestamp::Zoned(z) => z,
            BarTimestamp::Naive(n) => panic!("expected zoned timestamp, got {}", n),
        }
    }

    #[test]
    fn test_naive_is_read_as_utc_then_converted() {
        // 2024-01-15 is in EST (UTC-5)
        let naive = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(15, 0, 0).unwrap();
        let series = normalize(PriceSeries::new("NVDA", vec![candle_at(BarTimestamp::Naive(naive))]));
        let ts = zoned(series.candles[0].timestamp);
        assert_eq!(ts.offset().local_minus_utc(), -5 * 3600);
        assert_eq!(ts.format("%H:%M").to_string(), "10:00");
    }

    #[test]
    fn test_zoned_utc_converts_with_daylight_saving() {
        // 2024-07-01 is in EDT (UTC-4)
        let utc = Utc.with_ymd_and_hms(2024, 7, 1, 13, 30, 0).unwrap().fixed_offset();
        let series = normalize(PriceSeries::new("NVDA", vec![candle_at(BarTimestamp::Zoned(utc))]));
        let ts = zoned(series.candles[0].timestamp);
        assert_eq!(ts.offset().local_minus_utc(), -4 * 3600);
        assert_eq!(ts.format("%H:%M").to_string(), "09:30");
        assert_eq!(ts, utc);
    }

    #[test]
    fn test_normalize_is_stable_on_eastern_input() {
        let eastern = FixedOffset::west_opt(5 * 3600).unwrap();
        let ts = eastern.with_ymd_and_hms(2024, 2, 1, 9, 30, 0).unwrap();
        let input = PriceSeries::new("AAPL", vec![candle_at(BarTimestamp::Zoned(ts))]);
        let once = normalize(input.clone());
        assert_eq!(once, input);
        let twice = normalize(once.clone());
        assert_eq!(twice, once);
    }

    #[test]
    fn test_normalize_empty_series() {
        let series = normalize(PriceSeries::new("META", Vec::new()));
        assert!(series.is_empty());
    }
}

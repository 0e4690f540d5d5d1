// Sidebar watchlist: latest price and intraday move per symbol
use shared::models::{Period, PriceSeries, WatchlistEntry};

use crate::data::normalizer::normalize;
use crate::data::{fetch, MarketDataProvider};
use crate::metrics::price_change;

pub const WATCHLIST_PERIOD: Period = Period::Day1;

/// Entry for one symbol, or `None` when the series is empty.
///
/// The reference price here is the first row's open, while the dashboard metrics use
/// the first row's close. Both go through `price_change`.
pub fn summarize(series: &PriceSeries) -> Option<WatchlistEntry> {
    let (first, last) = (series.first()?, series.last()?);
    Some(WatchlistEntry {
        symbol: series.symbol.clone(),
        last_price: last.close,
        change: price_change(first.open, last.close),
    })
}

/// Fetches each symbol in turn with the one-day period.
///
/// A symbol whose fetch fails is logged and skipped like an empty result, so the other
/// symbols still show.
pub async fn handle_watchlist(provider: &dyn MarketDataProvider, symbols: &[String]) -> Vec<WatchlistEntry> {
    let mut entries = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        let series = match fetch(provider, symbol, WATCHLIST_PERIOD, WATCHLIST_PERIOD.interval()).await {
            Ok(series) => series,
            Err(e) => {
                tracing::warn!(symbol = %symbol, error_detail = %e, "Skipping watchlist symbol");
                continue;
            }
        };
        if series.is_empty() {
            continue;
        }
        if let Some(entry) = summarize(&normalize(series)) {
            entries.push(entry);
        }
    }
    tracing::debug!(requested = symbols.len(), shown = entries.len(), "Watchlist refreshed");
    entries
}

// Sidebar panel with the fixed watchlist quotes
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::WatchlistEntry;
use shared::utils::{format_delta, format_usd};

use super::metrics::delta_class;

#[component]
pub fn WatchlistPanel(entries: Vec<WatchlistEntry>) -> Element {
    rsx! {
        h3 { "Real-Time Stock Prices" }
        {entries.iter().map(|entry| {
            let symbol = entry.symbol.clone();
            let price = format_usd(entry.last_price);
            let delta = format_delta(&entry.change);
            let class = delta_class(Some(entry.change.direction()));
            rsx! {
                div { class: "metric", key: "{symbol}",
                    div { class: "label", "{symbol}" }
                    div { class: "value", "{price}" }
                    div { class: "{class}", "{delta}" }
                }
            }
        })}
    }
}

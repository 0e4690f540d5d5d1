// Historical price and indicator tables
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::IndicatorKind;
use shared::utils::{format_optional, format_thousands};
use shared::view::{IndicatorRow, PriceRow};

#[component]
pub fn PriceTable(rows: Vec<PriceRow>) -> Element {
    rsx! {
        h3 { "Historical Data" }
        div { class: "table-scroll",
            table {
                thead {
                    tr {
                        th { "Datetime" }
                        th { "Open" }
                        th { "High" }
                        th { "Low" }
                        th { "Close" }
                        th { "Volume" }
                    }
                }
                tbody {
                    {rows.iter().map(|row| {
                        let ts = row.timestamp.to_string();
                        let open = format!("{:.2}", row.open);
                        let high = format!("{:.2}", row.high);
                        let low = format!("{:.2}", row.low);
                        let close = format!("{:.2}", row.close);
                        let volume = format_thousands(row.volume);
                        rsx! {
                            tr { key: "{ts}",
                                td { "{ts}" }
                                td { "{open}" }
                                td { "{high}" }
                                td { "{low}" }
                                td { "{close}" }
                                td { "{volume}" }
                            }
                        }
                    })}
                }
            }
        }
    }
}

#[component]
pub fn IndicatorTable(rows: Vec<IndicatorRow>) -> Element {
    rsx! {
        h3 { "Technical Indicators" }
        div { class: "table-scroll",
            table {
                thead {
                    tr {
                        th { "Datetime" }
                        th { {IndicatorKind::Sma20.column()} }
                        th { {IndicatorKind::Ema20.column()} }
                    }
                }
                tbody {
                    {rows.iter().map(|row| {
                        let ts = row.timestamp.to_string();
                        let sma = format_optional(row.sma_20);
                        let ema = format_optional(row.ema_20);
                        rsx! {
                            tr { key: "{ts}",
                                td { "{ts}" }
                                td { "{sma}" }
                                td { "{ema}" }
                            }
                        }
                    })}
                }
            }
        }
    }
}

// Sidebar: chart parameters, the Update button and the About box
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::{ChartType, IndicatorKind, Period};

use crate::state::app_state::SidebarSelection;

#[component]
pub fn Sidebar(selection: Signal<SidebarSelection>, about: String, on_update: EventHandler<()>) -> Element {
    let mut selection = selection;
    let current = selection.read().clone();
    let ticker = current.ticker.clone();
    let period = current.period.as_str();
    let chart = current.chart_type.label();

    rsx! {
        h2 { "Chart Parameters" }
        label { "Ticker" }
        input {
            r#type: "text",
            value: "{ticker}",
            oninput: move |evt| selection.write().ticker = evt.value(),
        }
        label { "Time Period" }
        select {
            value: "{period}",
            onchange: move |evt| match evt.value().parse::<Period>() {
                Ok(p) => selection.write().period = p,
                Err(e) => tracing::warn!(error = %e, "Ignoring period selection"),
            },
            for p in Period::ALL {
                option { value: p.as_str(), selected: p == current.period, "{p}" }
            }
        }
        label { "Chart Type" }
        select {
            value: "{chart}",
            onchange: move |evt| selection.write().chart_type = ChartType::from_selection(&evt.value()),
            for c in ChartType::ALL {
                option { value: c.label(), selected: c == current.chart_type, "{c.label()}" }
            }
        }
        label { "Technical Indicators" }
        for kind in IndicatorKind::ALL {
            label {
                input {
                    r#type: "checkbox",
                    checked: current.indicators.contains(&kind),
                    onchange: move |_| selection.write().toggle(kind),
                }
                "{kind.label()}"
            }
        }
        button { onclick: move |_| on_update.call(()), "Update" }
        h3 { "About" }
        p { class: "info", "{about}" }
    }
}

#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::components::{ChartView, IndicatorTable, MetricsPanel, PriceTable, Sidebar, WatchlistPanel};
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::services::engine_client::EngineClient;
use crate::state::app_state::{DashboardView, SidebarSelection};

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let client = use_context::<EngineClient>();

    let css = ThemePalette::named(&config.app.theme).stylesheet();
    let title = config.app.title.clone();
    let about = config.app.about.clone();
    let chart_style = config.chart.clone();

    let default_ticker = client.default_ticker().to_string();
    let selection = use_signal(move || SidebarSelection::new(&default_ticker));
    let mut view = use_signal(|| DashboardView::Idle);

    let watch_client = client.clone();
    let mut watchlist = use_resource(move || {
        let client = watch_client.clone();
        async move { client.watchlist().await }
    });

    let on_update = move |_: ()| {
        let request = selection.read().to_request();
        view.set(DashboardView::Loading);
        let client = client.clone();
        spawn(async move {
            match client.refresh(request).await {
                Ok(model) => view.set(DashboardView::Ready(Box::new(model))),
                Err(e) => {
                    tracing::error!(error = %format!("{:#}", e), "Dashboard refresh failed");
                    view.set(DashboardView::Failed(format!("{:#}", e)));
                }
            }
        });
        watchlist.restart();
    };

    let watchlist_panel = match &*watchlist.read() {
        Some(entries) => rsx! { WatchlistPanel { entries: entries.clone() } },
        None => rsx! { p { class: "info", "Loading watchlist..." } },
    };

    let main_panel = match view.read().clone() {
        DashboardView::Idle => rsx! { p { class: "info", "Choose a ticker and press Update." } },
        DashboardView::Loading => rsx! { p { class: "info", "Loading..." } },
        DashboardView::Failed(message) => rsx! { p { class: "error", "{message}" } },
        DashboardView::Ready(model) => {
            let model = *model;
            rsx! {
                MetricsPanel { headline: model.headline, secondary: model.secondary }
                ChartView { chart: model.chart, style: chart_style }
                PriceTable { rows: model.price_table }
                IndicatorTable { rows: model.indicator_table }
            }
        }
    };

    rsx! {
        style { "{css}" }
        div { class: "layout",
            div { class: "sidebar",
                Sidebar { selection: selection, about: about, on_update: on_update }
                {watchlist_panel}
            }
            div { class: "main",
                h1 { "{title}" }
                {main_panel}
            }
        }
    }
}

// Headline and secondary metric cards
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::Direction;
use shared::view::MetricView;

pub fn delta_class(direction: Option<Direction>) -> &'static str {
    match direction {
        Some(Direction::Up) => "delta up",
        Some(Direction::Down) => "delta down",
        Some(Direction::Flat) | None => "delta",
    }
}

#[component]
pub fn MetricCard(metric: MetricView) -> Element {
    let label = metric.label.clone();
    let value = metric.value.clone();
    let class = delta_class(metric.direction);
    rsx! {
        div { class: "metric",
            div { class: "label", "{label}" }
            div { class: "value", "{value}" }
            if let Some(delta) = metric.delta.clone() {
                div { class: "{class}", "{delta}" }
            }
        }
    }
}

#[component]
pub fn MetricsPanel(headline: MetricView, secondary: Vec<MetricView>) -> Element {
    rsx! {
        MetricCard { metric: headline }
        div { class: "metric-row",
            for metric in secondary.into_iter() {
                MetricCard { metric: metric }
            }
        }
    }
}

// Line layers: close price for line charts and the indicator overlays
#![allow(non_snake_case)]
use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub color: String,
    /// SVG `points` strings, one per unbroken run of values.
    pub segments: Vec<String>,
}

#[component]
pub fn LineLayer(series: LineSeries, width: u32) -> Element {
    let color = series.color.clone();
    rsx! {
        {series.segments.iter().map(|points| {
            let points = points.clone();
            rsx! {
                polyline { points: "{points}", fill: "none", stroke: "{color}", stroke_width: "{width}" }
            }
        })}
    }
}

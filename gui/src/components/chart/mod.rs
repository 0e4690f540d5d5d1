// Price chart drawn as inline SVG from the engine's ChartSpec
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::BarTimestamp;
use shared::view::{ChartSpec, Trace};

use crate::config::ChartConfig;

pub mod candlestick;
pub mod indicators;

use candlestick::{candle_glyphs, CandlestickLayer};
use indicators::{LineLayer, LineSeries};

const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 48.0;
const PRICE_TICKS: usize = 6;
const TIME_TICKS: usize = 6;

/// Maps bar indices and prices onto SVG coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl PlotArea {
    /// `None` when the chart has nothing finite to plot.
    pub fn fit(width: f64, height: f64, chart: &ChartSpec) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut count = 0;
        for trace in &chart.traces {
            match trace {
                Trace::Candlestick(c) => {
                    count = count.max(c.x.len());
                    for v in c.low.iter().chain(c.high.iter()).filter(|v| v.is_finite()) {
                        min = min.min(*v);
                        max = max.max(*v);
                    }
                }
                Trace::Line(l) => {
                    count = count.max(l.x.len());
                    for v in l.y.iter().flatten().filter(|v| v.is_finite()) {
                        min = min.min(*v);
                        max = max.max(*v);
                    }
                }
            }
        }
        if count == 0 || !min.is_finite() || !max.is_finite() {
            return None;
        }
        Some(Self { width, height, min, max, count })
    }

    fn inner_width(&self) -> f64 {
        (self.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0)
    }

    fn inner_height(&self) -> f64 {
        (self.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0)
    }

    pub fn left(&self) -> f64 {
        MARGIN_LEFT
    }

    pub fn right(&self) -> f64 {
        MARGIN_LEFT + self.inner_width()
    }

    pub fn bottom(&self) -> f64 {
        MARGIN_TOP + self.inner_height()
    }

    pub fn slot_width(&self) -> f64 {
        self.inner_width() / self.count as f64
    }

    /// Centre of the slot for bar `index`.
    pub fn x(&self, index: usize) -> f64 {
        MARGIN_LEFT + self.slot_width() * (index as f64 + 0.5)
    }

    pub fn y(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return MARGIN_TOP + self.inner_height() / 2.0;
        }
        MARGIN_TOP + (self.max - value) / span * self.inner_height()
    }

    pub fn price_ticks(&self, n: usize) -> Vec<f64> {
        if n < 2 || self.max <= self.min {
            return vec![self.min];
        }
        let step = (self.max - self.min) / (n - 1) as f64;
        (0..n).map(|i| self.min + step * i as f64).collect()
    }

    /// Index positions for time labels, always including the first and last bar.
    pub fn time_ticks(&self, n: usize) -> Vec<usize> {
        if self.count <= n || n < 2 {
            return (0..self.count).collect();
        }
        let step = (self.count - 1) as f64 / (n - 1) as f64;
        (0..n).map(|i| (step * i as f64).round() as usize).collect()
    }

    /// SVG `points` strings; a gap in the values starts a new segment.
    pub fn polyline_segments(&self, values: &[Option<f64>]) -> Vec<String> {
        let mut segments = Vec::new();
        let mut current: Vec<String> = Vec::new();
        for (i, value) in values.iter().enumerate() {
            match value.filter(|v| v.is_finite()) {
                Some(v) => current.push(format!("{:.2},{:.2}", self.x(i), self.y(v))),
                None if !current.is_empty() => segments.push(std::mem::take(&mut current).join(" ")),
                None => {}
            }
        }
        if !current.is_empty() {
            segments.push(current.join(" "));
        }
        segments
    }
}

fn short_label(ts: &BarTimestamp) -> String {
    ts.to_string().chars().take(16).collect()
}

#[component]
pub fn ChartView(chart: ChartSpec, style: ChartConfig) -> Element {
    let width = style.width as f64;
    let height = chart.height as f64;
    let title = chart.title.clone();
    let x_title = chart.x_axis_title.clone();
    let y_title = chart.y_axis_title.clone();
    let svg_width = style.width;
    let svg_height = chart.height;
    let view_box = format!("0 0 {} {}", svg_width, svg_height);

    let Some(area) = PlotArea::fit(width, height, &chart) else {
        return rsx! {
            h3 { "{title}" }
            p { "No data to chart." }
        };
    };

    let grid = style.grid_color.clone();
    let line_width = style.line_width;
    let candle_style = style.candle.clone();
    let left = area.left();
    let right = area.right();
    let bottom = area.bottom();
    let x_title_x = (left + right) / 2.0;
    let x_title_y = height - 8.0;
    let y_title_y = (MARGIN_TOP + bottom) / 2.0;

    let glyphs = chart
        .traces
        .iter()
        .find_map(|t| match t {
            Trace::Candlestick(c) => Some(candle_glyphs(c, &area)),
            Trace::Line(_) => None,
        })
        .unwrap_or_default();

    let lines: Vec<LineSeries> = chart
        .line_traces()
        .map(|l| LineSeries {
            name: l.name.clone(),
            color: style.color_for(&l.name).to_string(),
            segments: area.polyline_segments(&l.y),
        })
        .collect();

    let time_labels: Vec<(f64, String)> = chart
        .traces
        .first()
        .map(|t| match t {
            Trace::Candlestick(c) => &c.x,
            Trace::Line(l) => &l.x,
        })
        .map(|xs| {
            area.time_ticks(TIME_TICKS)
                .into_iter()
                .filter_map(|i| xs.get(i).map(|ts| (area.x(i), short_label(ts))))
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        h3 { "{title}" }
        svg {
            width: "{svg_width}",
            height: "{svg_height}",
            view_box: "{view_box}",
            {area.price_ticks(PRICE_TICKS).into_iter().map(|price| {
                let y = area.y(price);
                let label = format!("{:.2}", price);
                let label_x = left - 6.0;
                rsx! {
                    line { x1: "{left}", x2: "{right}", y1: "{y}", y2: "{y}", stroke: "{grid}", stroke_width: "1" }
                    text { x: "{label_x}", y: "{y}", fill: "currentColor", font_size: "11", text_anchor: "end", "{label}" }
                }
            })}
            {time_labels.into_iter().map(|(x, label)| {
                let y = bottom + 16.0;
                rsx! {
                    text { x: "{x}", y: "{y}", fill: "currentColor", font_size: "11", text_anchor: "middle", "{label}" }
                }
            })}
            CandlestickLayer { glyphs: glyphs, style: candle_style }
            for series in lines.iter().cloned() {
                LineLayer { series: series, width: line_width }
            }
            text { x: "{x_title_x}", y: "{x_title_y}", fill: "currentColor", font_size: "12", text_anchor: "middle", "{x_title}" }
            text {
                x: "14",
                y: "{y_title_y}",
                fill: "currentColor",
                font_size: "12",
                text_anchor: "middle",
                transform: "rotate(-90 14 {y_title_y})",
                "{y_title}"
            }
        }
        div { class: "legend",
            {lines.iter().map(|series| {
                let swatch = format!("color: {}; margin-right: 16px;", series.color);
                let name = series.name.clone();
                rsx! { span { style: "{swatch}", "■ {name}" } }
            })}
        }
    }
}

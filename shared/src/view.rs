// Toolkit-independent render model produced by the engine and drawn by the GUI.
use serde::{Deserialize, Serialize};

use crate::models::{BarTimestamp, DashboardRequest, Direction, Metrics};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricView {
    pub label: String,
    pub value: String,
    pub delta: Option<String>,
    pub direction: Option<Direction>,
}

impl MetricView {
    pub fn plain(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            delta: None,
            direction: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandlestickTrace {
    pub x: Vec<BarTimestamp>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineTrace {
    pub name: String,
    pub x: Vec<BarTimestamp>,
    pub y: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trace {
    Candlestick(CandlestickTrace),
    Line(LineTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub height: u32,
    pub traces: Vec<Trace>,
}

impl ChartSpec {
    pub fn has_candlestick(&self) -> bool {
        self.traces.iter().any(|t| matches!(t, Trace::Candlestick(_)))
    }

    pub fn line_traces(&self) -> impl Iterator<Item = &LineTrace> {
        self.traces.iter().filter_map(|t| match t {
            Trace::Line(line) => Some(line),
            Trace::Candlestick(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRow {
    pub timestamp: BarTimestamp,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub timestamp: BarTimestamp,
    pub sma_20: Option<f64>,
    pub ema_20: Option<f64>,
}

/// Output of one dashboard refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderModel {
    pub request: DashboardRequest,
    pub metrics: Metrics,
    pub headline: MetricView,
    pub secondary: Vec<MetricView>,
    pub chart: ChartSpec,
    pub price_table: Vec<PriceRow>,
    pub indicator_table: Vec<IndicatorRow>,
}

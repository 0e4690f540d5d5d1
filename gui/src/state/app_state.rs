// Sidebar selections and the dashboard view state
use shared::models::{ChartType, DashboardRequest, IndicatorKind, Period};
use shared::view::RenderModel;

/// Current widget values. Turned into an immutable request when Update is pressed.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarSelection {
    pub ticker: String,
    pub period: Period,
    pub chart_type: ChartType,
    pub indicators: Vec<IndicatorKind>,
}

impl SidebarSelection {
    pub fn new(default_ticker: &str) -> Self {
        Self {
            ticker: default_ticker.to_string(),
            period: Period::Day1,
            chart_type: ChartType::Candlestick,
            indicators: Vec::new(),
        }
    }

    pub fn toggle(&mut self, kind: IndicatorKind) {
        if let Some(pos) = self.indicators.iter().position(|k| *k == kind) {
            self.indicators.remove(pos);
        } else {
            self.indicators.push(kind);
        }
    }

    pub fn to_request(&self) -> DashboardRequest {
        DashboardRequest::new(
            self.ticker.to_uppercase(),
            self.period,
            self.chart_type,
            self.indicators.clone(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    /// Nothing requested yet; the main area stays empty until Update.
    Idle,
    Loading,
    Ready(Box<RenderModel>),
    Failed(String),
}

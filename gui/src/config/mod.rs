// GUI configuration module
pub mod theme;

use serde::Deserialize;

/// Mirrors `assets/config/default.json`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub engine: EngineConnSettings,
    pub chart: ChartConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub title: String,
    pub about: String,
    pub theme: String, // "dark" or "light"
    pub window_width: u32,
    pub window_height: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EngineConnSettings {
    /// Optional engine settings JSON; `DASHBOARD_*` variables still apply on top.
    pub settings_file: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChartConfig {
    pub width: u32,
    pub candle: CandleStyle,
    pub line_color: String,
    pub line_width: u32,
    pub grid_color: String,
    pub indicators: IndicatorColors,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CandleStyle {
    pub bullish_color: String,
    pub bearish_color: String,
    pub wick_width: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct IndicatorColors {
    pub sma: String,
    pub ema: String,
}

impl ChartConfig {
    /// Stroke for a named line trace; the price line uses `line_color`.
    pub fn color_for(&self, trace_name: &str) -> &str {
        match trace_name {
            "SMA 20" => &self.indicators.sma,
            "EMA 20" => &self.indicators.ema,
            _ => &self.line_color,
        }
    }
}

impl AppConfig {
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config_str = include_str!("../../assets/config/default.json");
        let config: AppConfig = serde_json::from_str(config_str)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = AppConfig::load_default().unwrap();
        assert_eq!(config.app.title, "Real Time Stock Analysis Dashboard");
        assert!(config.engine.settings_file.is_none());
        assert_eq!(config.chart.candle.bullish_color, "#26a69a");
    }

    #[test]
    fn test_color_for_trace() {
        let chart = AppConfig::load_default().unwrap().chart;
        assert_eq!(chart.color_for("SMA 20"), "#FFC107");
        assert_eq!(chart.color_for("EMA 20"), "#03A9F4");
        assert_eq!(chart.color_for("Close"), chart.line_color);
    }
}

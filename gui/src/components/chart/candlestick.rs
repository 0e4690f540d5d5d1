// Candlestick layer for the price chart
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::view::CandlestickTrace;

use super::PlotArea;
use crate::config::CandleStyle;

/// Share of a bar slot taken by the candle body.
const BODY_RATIO: f64 = 0.7;
const MIN_BODY_HEIGHT: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CandleGlyph {
    pub x: f64,
    pub wick_top: f64,
    pub wick_bottom: f64,
    pub body_top: f64,
    pub body_height: f64,
    pub body_width: f64,
    pub bullish: bool,
}

/// A bar closing at or above its open counts as bullish.
pub fn candle_glyphs(trace: &CandlestickTrace, area: &PlotArea) -> Vec<CandleGlyph> {
    let body_width = (area.slot_width() * BODY_RATIO).max(1.0);
    (0..trace.x.len())
        .filter_map(|i| {
            let (open, high, low, close) = (
                *trace.open.get(i)?,
                *trace.high.get(i)?,
                *trace.low.get(i)?,
                *trace.close.get(i)?,
            );
            let top = area.y(open.max(close));
            let bottom = area.y(open.min(close));
            Some(CandleGlyph {
                x: area.x(i),
                wick_top: area.y(high),
                wick_bottom: area.y(low),
                body_top: top,
                body_height: (bottom - top).max(MIN_BODY_HEIGHT),
                body_width,
                bullish: close >= open,
            })
        })
        .collect()
}

#[component]
pub fn CandlestickLayer(glyphs: Vec<CandleGlyph>, style: CandleStyle) -> Element {
    let wick_width = style.wick_width;
    rsx! {
        {glyphs.iter().map(|g| {
            let color = if g.bullish { style.bullish_color.clone() } else { style.bearish_color.clone() };
            let x = g.x;
            let wick_top = g.wick_top;
            let wick_bottom = g.wick_bottom;
            let body_x = g.x - g.body_width / 2.0;
            let body_top = g.body_top;
            let body_width = g.body_width;
            let body_height = g.body_height;
            rsx! {
                line { x1: "{x}", x2: "{x}", y1: "{wick_top}", y2: "{wick_bottom}", stroke: "{color}", stroke_width: "{wick_width}" }
                rect { x: "{body_x}", y: "{body_top}", width: "{body_width}", height: "{body_height}", fill: "{color}" }
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::BarTimestamp;
    use shared::view::{ChartSpec, Trace};

    fn trace() -> CandlestickTrace {
        let ts = |m| {
            BarTimestamp::Naive(
                chrono::NaiveDate::from_ymd_opt(2024, 3, 11)
                    .unwrap()
                    .and_hms_opt(9, m, 0)
                    .unwrap(),
            )
        };
        CandlestickTrace {
            x: vec![ts(0), ts(1), ts(2)],
            open: vec![10.0, 12.0, 11.0],
            high: vec![13.0, 12.5, 11.0],
            low: vec![9.0, 10.0, 11.0],
            close: vec![12.0, 10.5, 11.0],
        }
    }

    fn area_for(trace: &CandlestickTrace) -> PlotArea {
        let chart = ChartSpec {
            title: String::new(),
            x_axis_title: String::new(),
            y_axis_title: String::new(),
            height: 600,
            traces: vec![Trace::Candlestick(trace.clone())],
        };
        PlotArea::fit(1000.0, 600.0, &chart).unwrap()
    }

    #[test]
    fn test_glyph_direction() {
        let trace = trace();
        let glyphs = candle_glyphs(&trace, &area_for(&trace));
        assert_eq!(glyphs.len(), 3);
        assert!(glyphs[0].bullish);
        assert!(!glyphs[1].bullish);
        // doji: close == open
        assert!(glyphs[2].bullish);
    }

    #[test]
    fn test_glyph_geometry() {
        let trace = trace();
        let area = area_for(&trace);
        let glyphs = candle_glyphs(&trace, &area);
        let g = &glyphs[0];
        assert_eq!(g.wick_top, area.y(13.0));
        assert_eq!(g.wick_bottom, area.y(9.0));
        assert_eq!(g.body_top, area.y(12.0));
        assert!((g.body_height - (area.y(10.0) - area.y(12.0))).abs() < 1e-9);
        assert_eq!(glyphs[2].body_height, MIN_BODY_HEIGHT);
        assert!(g.body_width < area.slot_width());
    }
}

// Builds the toolkit-independent render model from an enriched series
use shared::models::{ChartType, DashboardRequest, Direction, IndicatorKind, Metrics, PriceChange};
use shared::utils::{format_delta, format_thousands, format_usd};
use shared::view::{
    CandlestickTrace, ChartSpec, IndicatorRow, LineTrace, MetricView, PriceRow, RenderModel, Trace,
};

use crate::indicators::EnrichedSeries;

pub const CHART_HEIGHT: u32 = 600;

/// Last close with the move since the first row of the window.
///
/// The delta slot holds the change `last - first`, not the first close itself.
pub fn headline(symbol: &str, metrics: &Metrics) -> MetricView {
    let change = PriceChange {
        absolute: metrics.change,
        percent: metrics.percent_change,
    };
    MetricView {
        label: format!("{} Last Price", symbol),
        value: format_usd(metrics.last_close),
        delta: Some(format_delta(&change)),
        direction: Some(Direction::of(metrics.change)),
    }
}

pub fn secondary(metrics: &Metrics) -> Vec<MetricView> {
    vec![
        MetricView::plain("High", format_usd(metrics.period_high)),
        MetricView::plain("Low", format_usd(metrics.period_low)),
        MetricView::plain("Volume", format_thousands(metrics.total_volume)),
    ]
}

/// Price trace for the selected chart type followed by one line per selected indicator.
pub fn build_chart(request: &DashboardRequest, enriched: &EnrichedSeries) -> ChartSpec {
    let candles = &enriched.series.candles;
    let x: Vec<_> = candles.iter().map(|c| c.timestamp).collect();

    let price_trace = match request.chart_type {
        ChartType::Candlestick => Trace::Candlestick(CandlestickTrace {
            x: x.clone(),
            open: candles.iter().map(|c| c.open).collect(),
            high: candles.iter().map(|c| c.high).collect(),
            low: candles.iter().map(|c| c.low).collect(),
            close: candles.iter().map(|c| c.close).collect(),
        }),
        ChartType::Line => Trace::Line(LineTrace {
            name: "Close".to_string(),
            x: x.clone(),
            y: candles.iter().map(|c| Some(c.close)).collect(),
        }),
    };

    let mut traces = vec![price_trace];
    traces.extend(request.indicators.iter().map(|&kind: &IndicatorKind| {
        Trace::Line(LineTrace {
            name: kind.label().to_string(),
            x: x.clone(),
            y: enriched.indicators.column(kind).to_vec(),
        })
    }));

    ChartSpec {
        title: format!("{} {} Chart", request.symbol, request.period.as_str().to_uppercase()),
        x_axis_title: "Time".to_string(),
        y_axis_title: "Price (USD)".to_string(),
        height: CHART_HEIGHT,
        traces,
    }
}

pub fn price_table(enriched: &EnrichedSeries) -> Vec<PriceRow> {
    enriched
        .series
        .candles
        .iter()
        .map(|c| PriceRow {
            timestamp: c.timestamp,
            open: c.open,
            high: c.high,
            low: c.low,
            close: c.close,
            volume: c.volume,
        })
        .collect()
}

pub fn indicator_table(enriched: &EnrichedSeries) -> Vec<IndicatorRow> {
    enriched
        .series
        .candles
        .iter()
        .zip(enriched.indicators.sma_20.iter().zip(&enriched.indicators.ema_20))
        .map(|(c, (&sma_20, &ema_20))| IndicatorRow {
            timestamp: c.timestamp,
            sma_20,
            ema_20,
        })
        .collect()
}

pub fn build_render_model(request: &DashboardRequest, enriched: &EnrichedSeries, metrics: Metrics) -> RenderModel {
    RenderModel {
        request: request.clone(),
        headline: headline(&request.symbol, &metrics),
        secondary: secondary(&metrics),
        chart: build_chart(request, enriched),
        price_table: price_table(enriched),
        indicator_table: indicator_table(enriched),
        metrics,
    }
}

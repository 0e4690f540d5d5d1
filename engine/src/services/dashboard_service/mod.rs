// engine/src/services/dashboard_service/mod.rs
// Request/response entry point for the dashboard: fetch -> normalize -> enrich -> compute -> render.
use shared::models::{DashboardRequest, WatchlistEntry};
use shared::view::RenderModel;
use std::sync::Arc;

use crate::config::settings::EngineSettings;
use crate::data::normalizer::normalize;
use crate::data::{build_provider, fetch, MarketDataProvider};
use crate::error::Result;
use crate::indicators::add_indicators;
use crate::metrics::compute_metrics;

pub mod render;
pub mod watchlist;

/// Stateless between calls: every request repeats the whole pipeline.
#[derive(Clone)]
pub struct DashboardService {
    provider: Arc<dyn MarketDataProvider>,
    watchlist: Vec<String>,
}

impl DashboardService {
    pub fn new(provider: Arc<dyn MarketDataProvider>, watchlist: Vec<String>) -> Self {
        DashboardService { provider, watchlist }
    }

    pub fn from_settings(settings: &EngineSettings) -> Result<Self> {
        Ok(Self::new(build_provider(settings)?, settings.watchlist.clone()))
    }

    pub async fn handle(&self, request: &DashboardRequest) -> Result<RenderModel> {
        tracing::info!(
            symbol = %request.symbol,
            period = %request.period,
            interval = %request.interval,
            chart_type = ?request.chart_type,
            indicators = ?request.indicators,
            "Received DashboardRequest"
        );

        let series = fetch(self.provider.as_ref(), &request.symbol, request.period, request.interval).await?;
        let enriched = add_indicators(normalize(series));
        let metrics = match compute_metrics(&enriched.series) {
            Ok(m) => m,
            Err(e) => {
                tracing::error!(symbol = %request.symbol, error_detail = %e, "Cannot compute metrics");
                return Err(e);
            }
        };

        let model = render::build_render_model(request, &enriched, metrics);
        tracing::info!(
            symbol = %request.symbol,
            rows = model.price_table.len(),
            traces = model.chart.traces.len(),
            "Dashboard rendered"
        );
        Ok(model)
    }

    pub async fn watchlist(&self) -> Vec<WatchlistEntry> {
        watchlist::handle_watchlist(self.provider.as_ref(), &self.watchlist).await
    }
}

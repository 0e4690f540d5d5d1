// In-process client for the dashboard engine
use anyhow::{Context, Result};
use engine::config::settings::EngineSettings;
use engine::DashboardService;
use shared::models::{DashboardRequest, WatchlistEntry};
use shared::view::RenderModel;
use std::path::Path;

/// Cheap to clone; shared with components through the Dioxus context.
#[derive(Clone)]
pub struct EngineClient {
    service: DashboardService,
    default_ticker: String,
}

impl EngineClient {
    pub fn from_settings(settings_file: Option<&str>) -> Result<Self> {
        let settings = EngineSettings::load(settings_file.map(Path::new))
            .context("loading engine settings")?;
        tracing::info!(
            provider = ?settings.provider,
            default_ticker = %settings.default_ticker,
            "Engine client ready"
        );
        let service = DashboardService::from_settings(&settings)?;
        Ok(Self {
            service,
            default_ticker: settings.default_ticker,
        })
    }

    pub fn default_ticker(&self) -> &str {
        &self.default_ticker
    }

    pub async fn refresh(&self, request: DashboardRequest) -> Result<RenderModel> {
        let symbol = request.symbol.clone();
        self.service
            .handle(&request)
            .await
            .with_context(|| format!("No data for {}", symbol))
    }

    pub async fn watchlist(&self) -> Vec<WatchlistEntry> {
        self.service.watchlist().await
    }
}


// Engine settings: optional JSON file, then environment overrides
use serde::Deserialize;
use shared::models::Period;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, Result};

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Yahoo,
    Csv,
}

impl std::str::FromStr for ProviderKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "yahoo" => Ok(ProviderKind::Yahoo),
            "csv" => Ok(ProviderKind::Csv),
            other => Err(EngineError::ConfigError(format!("unknown provider '{}'", other))),
        }
    }
}

/// Parses a period selection such as `1mo`; used for the CLI `--period` flag.
pub fn parse_period(value: &str) -> Result<Period> {
    value
        .parse::<Period>()
        .map_err(|_| EngineError::UnknownPeriod(value.to_string()))
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EngineSettings {
    pub provider: ProviderKind,
    pub yahoo_base_url: String,
    pub user_agent: String,
    pub csv_dir: PathBuf,
    pub default_ticker: String,
    pub watchlist: Vec<String>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            provider: ProviderKind::Yahoo,
            yahoo_base_url: "https://query1.finance.yahoo.com".to_string(),
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) stock-dashboard/0.1".to_string(),
            csv_dir: PathBuf::from("data"),
            default_ticker: "NVDA".to_string(),
            watchlist: ["META", "AAPL", "GOOGL", "AMZN", "MSFT", "NFLX"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

fn env_str(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl EngineSettings {
    /// Reads `path` when given, otherwise starts from defaults, then applies `DASHBOARD_*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(p) => {
                let raw = fs::read_to_string(p)?;
                serde_json::from_str::<EngineSettings>(&raw)?
            }
            None => EngineSettings::default(),
        };
        base.with_overrides(env_str)
    }

    /// Applies overrides from a lookup function keyed by environment variable name.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(kind) = lookup("DASHBOARD_PROVIDER") {
            self.provider = kind.parse()?;
        }
        if let Some(url) = lookup("DASHBOARD_YAHOO_URL") {
            self.yahoo_base_url = url;
        }
        if let Some(dir) = lookup("DASHBOARD_CSV_DIR") {
            self.csv_dir = PathBuf::from(dir);
        }
        if let Some(ticker) = lookup("DASHBOARD_DEFAULT_TICKER") {
            self.default_ticker = ticker;
        }
        if let Some(list) = lookup("DASHBOARD_WATCHLIST") {
            self.watchlist = list
                .split(',')
                .map(|s| s.trim().to_uppercase())
                .filter(|s| !s.is_empty())
                .collect();
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.default_ticker.trim().is_empty() {
            return Err(EngineError::ConfigError("default_ticker must not be empty".to_string()));
        }
        if self.provider == ProviderKind::Yahoo {
            url::Url::parse(&self.yahoo_base_url)?;
        }
        Ok(())
    }
}

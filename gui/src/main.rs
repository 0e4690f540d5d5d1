// Desktop entry point for the stock dashboard
#![allow(non_snake_case)]

use anyhow::Context;
use dioxus::prelude::*;
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

mod app;
mod components;
mod config;
mod services;
mod state;

use app::App;
use config::AppConfig;
use services::engine_client::EngineClient;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app_config = AppConfig::load_default().context("loading embedded GUI configuration")?;
    tracing::info!(version = %app_config.version, "Loaded GUI configuration");

    let client = EngineClient::from_settings(app_config.engine.settings_file.as_deref())?;

    let desktop_config = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(app_config.app.title.clone())
            .with_inner_size(LogicalSize::new(
                app_config.app.window_width,
                app_config.app.window_height,
            )),
    );

    tracing::info!("Starting dashboard GUI");
    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config)
        .with_context(client)
        .launch(App);
    Ok(())
}

// Headless dashboard: runs one refresh and prints the result
use anyhow::Context;
use clap::Parser;
use engine::config::settings::EngineSettings;
use engine::DashboardService;
use engine::config::settings::parse_period;
use shared::models::{DashboardRequest, IndicatorKind, Period, WatchlistEntry};
use shared::utils::{format_delta, format_optional, format_usd};
use shared::view::{RenderModel, Trace};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dashboard", about = "Stock price dashboard without the GUI")]
struct Opts {
    /// Ticker symbol; defaults to the configured default ticker
    #[arg(short, long)]
    ticker: Option<String>,

    /// One of 1d, 1wk, 1mo, 1y, max
    #[arg(short, long, default_value = "1d", value_parser = parse_period)]
    period: Period,

    /// Candlestick or Line
    #[arg(short, long, default_value = "Candlestick")]
    chart: String,

    /// Overlay indicator ("SMA 20" or "EMA 20"); repeatable
    #[arg(short, long = "indicator")]
    indicators: Vec<String>,

    /// Also print the watchlist panel
    #[arg(short, long)]
    watchlist: bool,

    /// Print the render model as JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Engine settings file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    let settings = EngineSettings::load(opts.config.as_deref()).context("loading engine settings")?;
    info!(provider = ?settings.provider, "Starting dashboard engine");

    let service = DashboardService::from_settings(&settings)?;
    let ticker = opts.ticker.unwrap_or_else(|| settings.default_ticker.clone());
    let request = DashboardRequest::from_selections(&ticker, opts.period, &opts.chart, opts.indicators.as_slice());

    let model = service
        .handle(&request)
        .await
        .with_context(|| format!("refreshing dashboard for {}", request.symbol))?;
    let watchlist = if opts.watchlist {
        Some(service.watchlist().await)
    } else {
        None
    };

    if opts.json {
        let out = serde_json::json!({ "dashboard": model, "watchlist": watchlist });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_report(&model);
        if let Some(entries) = &watchlist {
            print_watchlist(entries);
        }
    }
    Ok(())
}

fn print_report(model: &RenderModel) {
    let headline = &model.headline;
    println!(
        "{}: {}  {}",
        headline.label,
        headline.value,
        headline.delta.as_deref().unwrap_or_default()
    );
    for metric in &model.secondary {
        println!("  {:<8}{}", metric.label, metric.value);
    }

    println!("\n{}", model.chart.title);
    for trace in &model.chart.traces {
        match trace {
            Trace::Candlestick(c) => println!("  candlestick: {} bars", c.x.len()),
            Trace::Line(l) => println!(
                "  line '{}': {} points",
                l.name,
                l.y.iter().filter(|v| v.is_some()).count()
            ),
        }
    }

    println!("\nHistorical Data");
    println!("{:<26}{:>12}{:>12}{:>12}{:>12}{:>14}", "Datetime", "Open", "High", "Low", "Close", "Volume");
    for row in &model.price_table {
        println!(
            "{:<26}{:>12.2}{:>12.2}{:>12.2}{:>12.2}{:>14}",
            row.timestamp.to_string(),
            row.open,
            row.high,
            row.low,
            row.close,
            row.volume
        );
    }

    println!("\nTechnical Indicators");
    println!(
        "{:<26}{:>12}{:>12}",
        "Datetime",
        IndicatorKind::Sma20.column(),
        IndicatorKind::Ema20.column()
    );
    for row in &model.indicator_table {
        println!(
            "{:<26}{:>12}{:>12}",
            row.timestamp.to_string(),
            format_optional(row.sma_20),
            format_optional(row.ema_20)
        );
    }
}

fn print_watchlist(entries: &[WatchlistEntry]) {
    println!("\nReal-Time Stock Prices");
    for entry in entries {
        println!(
            "  {:<6}{:>14}  {}",
            entry.symbol,
            format_usd(entry.last_price),
            format_delta(&entry.change)
        );
    }
}

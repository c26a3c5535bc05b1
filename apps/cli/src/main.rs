//! Dashboard export CLI.
//!
//! Reads the trading process's account state file, aggregates it into the
//! portfolio-state document, and atomically replaces the output artifact.
//!
//! # Usage
//!
//! ```bash
//! # One export pass with the default file layout
//! tradefolio
//!
//! # Explicit paths, with a settings file and current market prices
//! tradefolio --state trade_state.json --out outputs/portfolio.json \
//!     --config dashboard.json --prices prices.json
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use tradefolio_core::portfolio::{ExportService, PriceMap};
use tradefolio_core::settings::DashboardSettings;
use tradefolio_storage_json::{JsonAccountStore, JsonPortfolioStore};

#[derive(Parser)]
#[command(name = "tradefolio")]
#[command(about = "Aggregates trading account state into the dashboard portfolio document", long_about = None)]
#[command(version)]
struct Cli {
    /// Account state file maintained by the trading process
    #[arg(short, long, default_value = "trade_state.json")]
    state: PathBuf,

    /// Output portfolio document
    #[arg(short, long, default_value = "outputs/portfolio.json")]
    out: PathBuf,

    /// Settings file: retention window, risk-free rate, instrument registry
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Current market prices, instrument code -> price
    #[arg(short, long)]
    prices: Option<PathBuf>,
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<DashboardSettings> {
    let Some(path) = path else {
        return Ok(DashboardSettings::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading settings file {}", path.display()))?;
    let settings: DashboardSettings = serde_json::from_str(&contents)
        .with_context(|| format!("parsing settings file {}", path.display()))?;
    settings.validate()?;
    Ok(settings)
}

fn load_prices(path: Option<&Path>) -> anyhow::Result<PriceMap> {
    let Some(path) = path else {
        return Ok(PriceMap::new());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading price file {}", path.display()))?;
    let prices: PriceMap = serde_json::from_str(&contents)
        .with_context(|| format!("parsing price file {}", path.display()))?;
    Ok(prices)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let settings = load_settings(cli.config.as_deref())?;
    let prices = load_prices(cli.prices.as_deref())?;

    let service = ExportService::new(
        Arc::new(JsonAccountStore::new(&cli.state)),
        Arc::new(JsonPortfolioStore::new(&cli.out)),
        settings,
    );

    let result = service.export(&prices).await?;

    let summary = &result.state.summary;
    info!(
        "Portfolio exported to {}: total_value={} daily_pnl={} total_return={}%",
        cli.out.display(),
        summary.total_value,
        summary.daily_pnl,
        summary.total_return
    );
    if result.has_warnings() {
        warn!(
            "{} malformed record(s) skipped during aggregation",
            result.warnings.len()
        );
    }

    Ok(())
}

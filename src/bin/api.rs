//! WeDay API Server
//!
//! Run with: cargo run --bin weday-api
//!
//! # Configuration
//!
//! Read from the first config file found (see `Config::load_default`), then
//! overridden by environment variables:
//! - `WEDAY_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `WEDAY_API_PORT`: Port to listen on (default: 8082)
//! - `WEDAY_TOTAL_BUDGET`: Total wedding budget (default: 30000)
//! - `WEDAY_WEDDING_DATE`: Wedding date, `YYYY-MM-DD` (default: 2025-10-15)
//! - `WEDAY_LOG_LEVEL` / `WEDAY_LOG_FORMAT`: Logging (default: info, pretty)
//! - `RUST_LOG`: Overrides the log filter entirely

use weday::api::{serve, AppState};
use weday::config::{init_logging, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_logging(&config.logging)?;

    tracing::info!("Starting WeDay API server v{}", env!("CARGO_PKG_VERSION"));

    let planner = config.planner.planner()?;
    tracing::info!(
        guests = planner.guests.len(),
        tasks = planner.tasks.len(),
        vendors = planner.vendors.len(),
        expenses = planner.expenses.len(),
        total_budget = planner.total_budget(),
        wedding_date = %planner.wedding_date(),
        "Planner loaded"
    );

    let state = AppState::from_planner(planner, config.api.clone());

    tracing::info!("Starting server on {}:{}", config.api.host, config.api.port);
    serve(state, &config.api).await?;

    tracing::info!("WeDay API server stopped");
    Ok(())
}

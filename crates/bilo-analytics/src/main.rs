//! Analytics service binary.
//!
//! Config: `BILO_CONFIG` (optional YAML), `PORT` (default 3011),
//! `RUST_LOG` (default `info`).

use tracing_subscriber::{fmt, EnvFilter};

use bilo_analytics::{app_state::AppState, config::AnalyticsConfig, router, DEFAULT_PORT, SERVICE};
use bilo_core::error::Result;
use bilo_http::{config, server};

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    run()
        .await
        .inspect_err(|e| tracing::error!(error = %e, "analytics-service failed"))
}

async fn run() -> Result<()> {
    let cfg: AnalyticsConfig = config::load()?;
    let listen = cfg.server.listen_addr(DEFAULT_PORT)?;

    let state = AppState::new(cfg);
    let app = router::build_router(state);

    server::serve(app, listen, SERVICE).await
}

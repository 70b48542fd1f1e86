//! Forecourtd - UK fuel-price aggregation service
//!
//! Serves the read API immediately and pulls the retailer feeds once, on a
//! background task, after a short startup delay.
//!
//! # Usage
//!
//! ```bash
//! # DATABASE_URL is required; PORT overrides [api_server] port
//! DATABASE_URL=data/forecourt.db forecourtd
//! forecourtd --config configs/config.toml --log-level debug
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::{Method, header};
use clap::Parser;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use forecourt_api::{AppState, build_router};
use forecourt_config::Config;
use forecourt_feeds::FeedClient;
use forecourt_pipeline::Aggregator;
use forecourt_store::PriceStore;

/// Forecourtd - UK fuel-price aggregation service
#[derive(Parser, Debug)]
#[command(name = "forecourtd")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "configs/config.toml")]
    config: std::path::PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    run(cli).await
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load_or_default(&cli.config)
        .with_context(|| format!("failed to load config '{}'", cli.config.display()))?;
    config.apply_env().context("invalid environment override")?;

    // No store, no service
    let db_path = config.database_url()?.to_string();
    let store = Arc::new(
        PriceStore::open(&db_path)
            .await
            .context("failed to open snapshot store")?,
    );

    // One aggregation run per process lifetime, detached from the serving
    // path; its failures are logged inside the task, never propagated here.
    let feed = FeedClient::new().context("failed to build feed client")?;
    let aggregator = Aggregator::new(feed, store.clone(), config.aggregation.urls.clone());
    let delay = Duration::from_secs(config.aggregation.startup_delay_secs);
    info!(
        feeds = config.aggregation.urls.len(),
        delay_secs = config.aggregation.startup_delay_secs,
        "scheduling aggregation run"
    );
    let _aggregation = aggregator.spawn(delay);

    let app = build_router(AppState::new(store))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::PUT,
                    Method::POST,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        );

    let addr = config.api_server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .context("failed to bind API server")?;

    info!(addr = %addr, "API server listening");

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for shutdown signal");
            return;
        }
        info!("shutdown signal received");
        shutdown.cancel();
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await
        .context("API server error")?;

    Ok(())
}

/// Initialize the tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(filter)
        .init();

    Ok(())
}

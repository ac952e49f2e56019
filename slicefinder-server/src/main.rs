//! HTTP front end for the slice finder: builds the place catalog at startup
//! and serves nearest-place and route-walkthrough queries.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use slicefinder_core::loading::{FirebaseCandidateStore, GooglePlacesClient, build_catalog};

mod app;
mod config;
mod error;

use config::ServerConfig;

#[derive(Parser, Debug)]
#[command(name = "slicefinder-server", about = "Dollar-slice finder HTTP API")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "slicefinder.toml")]
    config: PathBuf,
    /// Override the bind address from the configuration.
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = ServerConfig::load(&args.config)?;
    let bind = args.bind.unwrap_or(config.bind);

    let store = FirebaseCandidateStore::new(&config.finder);
    let places = GooglePlacesClient::new(&config.finder);
    let catalog = build_catalog(&config.finder, &store, &places).await?;
    tracing::info!(places = catalog.len(), "catalog ready");

    let router = app::build_router(app::AppState::new(config.finder, catalog));

    tracing::info!(%bind, "listening");
    let listener = tokio::net::TcpListener::bind(bind).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(%err, "failed to install ctrl-c handler");
    }
}

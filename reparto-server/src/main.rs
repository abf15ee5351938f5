//! HTTP front-end for the reparto routing core

mod config;
mod handlers;
mod state;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use clap::Parser;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use reparto_core::prelude::*;

use config::ServerConfig;
use state::{AppState, SharedState};

#[derive(Debug, Parser)]
#[command(name = "reparto-server", about = "Nearest-depot routing server")]
struct Args {
    /// Path to the TOML configuration file; defaults apply without one.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn build_state(config: &ServerConfig) -> Result<AppState, Error> {
    config.depot_rule.validate()?;
    config.cost_model.validate()?;

    let graph = create_road_graph(&config.model_config())?;
    let depots = config.depot_rule.candidates(&graph);
    tracing::info!(
        "{} depot nodes among {} total",
        depots.len(),
        graph.node_count()
    );

    Ok(AppState {
        graph,
        rule: config.depot_rule,
        depots,
        cost_model: config.cost_model,
        cache: PathCache::new(),
    })
}

fn build_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route("/shortest_path", post(handlers::shortest_path))
        .route("/graph", get(handlers::graph))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(ConcurrencyLimitLayer::new(256))
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = ServerConfig::load(args.config.as_deref())?;

    // Load-time failures abort here, before the listener binds.
    let state = Arc::new(build_state(&config)?);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install ctrl-c handler: {e}");
    }
}

//! Process entry point.
//!
//! Resolves configuration, starts the listener, and composes the request
//! pipeline. All real request handling comes from the initializer; the
//! built-in one only exposes the core service endpoints.

use std::path::PathBuf;

use async_trait::async_trait;
use axum::{routing::get, Json, Router};
use clap::Parser;
use serde_json::{json, Value};

use opdeck::config::{self, ObservabilityConfig};
use opdeck::lifecycle::{report_failure, shutdown, startup};
use opdeck::observability::init_logging;
use opdeck::pipeline::BoxError;
use opdeck::{Initializer, ListenerHandle, ServerConfig, Shutdown};

#[derive(Debug, Parser)]
#[command(name = "opdeck", version, about)]
struct Args {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listening port, overriding the environment and the config file.
    #[arg(long)]
    port: Option<u16>,
}

/// Core service endpoints installed through the initializer seam.
struct CoreInitializer;

#[async_trait]
impl Initializer for CoreInitializer {
    async fn init(
        &self,
        _config: &ServerConfig,
        listener: &ListenerHandle,
    ) -> Result<Router, BoxError> {
        tracing::debug!(address = %listener.local_addr(), "Building core service routes");
        Ok(Router::new()
            .route("/api/health", get(health))
            .route("/api/version", get(version)))
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn version() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let mut config = match config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            init_logging(&ObservabilityConfig::default());
            report_failure(&error.into());
            return;
        }
    };
    if let Some(port) = args.port {
        config.listener.port = port;
    }

    init_logging(&config.observability);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "opdeck starting");
    tracing::info!(
        port = config.listener.port,
        static_dir = %config.dashboard.static_dir.display(),
        view_engine = %config.views.engine,
        "Configuration resolved"
    );

    let shutdown = Shutdown::new();
    shutdown::trigger_on_ctrl_c(&shutdown);

    match startup::run(config, &CoreInitializer, &shutdown).await {
        Ok(server) => {
            if let Err(error) = server.wait().await {
                report_failure(&error);
            }
        }
        Err(error) => report_failure(&error),
    }
}

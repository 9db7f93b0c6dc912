//! Startup orchestration.
//!
//! # Responsibilities
//! - Express the bootstrap sequence as type states: [`Bootstrap`] (pipeline
//!   built, nothing bound) → [`BoundServer`] (listener accepting) →
//!   [`RunningServer`] (serve loop live, composition possible)
//! - Funnel every bootstrap failure into one structured sink
//!
//! Handler installation is only reachable through [`RunningServer`], so the
//! bind-before-initializer ordering holds by construction.

use thiserror::Error;
use tokio::task::JoinHandle;

use crate::config::{ConfigError, ServerConfig};
use crate::http;
use crate::lifecycle::shutdown::Shutdown;
use crate::net::{Listener, ListenerError, ListenerHandle};
use crate::pipeline::{composer, ComposeError, HandlerSlot, Initializer};

/// Unified error for the bootstrap sequence.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bind(#[from] ListenerError),

    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error("serve loop failed: {0}")]
    Serve(#[source] std::io::Error),
}

impl BootstrapError {
    /// Which bootstrap stage produced the error.
    pub fn stage(&self) -> &'static str {
        match self {
            BootstrapError::Config(_) => "config",
            BootstrapError::Bind(_) => "bind",
            BootstrapError::Compose(_) => "compose",
            BootstrapError::Serve(_) => "serve",
        }
    }
}

/// The single failure sink for the bootstrap sequence.
///
/// Nothing in the sequence propagates to a caller above the process entry
/// point; every failure lands here with its stage attached, and the process
/// keeps whatever service was established before the failure.
pub fn report_failure(error: &BootstrapError) {
    tracing::error!(
        stage = error.stage(),
        error = %error,
        "Bootstrap step failed; continuing with the units installed so far"
    );
}

/// Bootstrap with the synchronous pipeline built and nothing bound yet.
pub struct Bootstrap {
    config: ServerConfig,
    slot: HandlerSlot,
    pipeline: axum::Router,
}

impl Bootstrap {
    /// Install the synchronous units: cross-origin policy, request id and
    /// trace layers, dashboard mount, slot fallback.
    pub fn new(config: ServerConfig) -> Self {
        if !config.dashboard.static_dir.exists() {
            tracing::warn!(
                static_dir = %config.dashboard.static_dir.display(),
                "Dashboard asset directory not found; the mount will serve 404s"
            );
        }

        let slot = HandlerSlot::new();
        let pipeline = http::build_pipeline(&config, slot.clone());
        Self {
            config,
            slot,
            pipeline,
        }
    }

    /// Bind the listener and begin accepting connections.
    ///
    /// On success the readiness signal is emitted with the dashboard
    /// location. On failure no readiness signal exists and the error goes
    /// to the caller's sink.
    pub async fn bind(self) -> Result<BoundServer, BootstrapError> {
        let listener = Listener::bind(&self.config.listener).await?;
        let handle = listener.handle();

        tracing::info!(
            dashboard_url = %handle.dashboard_url(),
            view_engine = %self.config.views.engine,
            "Application started"
        );

        Ok(BoundServer {
            config: self.config,
            slot: self.slot,
            pipeline: self.pipeline,
            listener,
            handle,
        })
    }
}

/// A bound, accepting server whose serve loop has not started yet.
pub struct BoundServer {
    config: ServerConfig,
    slot: HandlerSlot,
    pipeline: axum::Router,
    listener: Listener,
    handle: ListenerHandle,
}

impl BoundServer {
    pub fn handle(&self) -> ListenerHandle {
        self.handle.clone()
    }

    /// Spawn the serve loop. The listener moves into the loop; composition
    /// happens against the returned [`RunningServer`].
    pub fn start(self, shutdown: &Shutdown) -> RunningServer {
        let task = tokio::spawn(http::serve(
            self.listener.into_inner(),
            self.pipeline,
            shutdown.subscribe(),
        ));

        RunningServer {
            config: self.config,
            slot: self.slot,
            handle: self.handle,
            task,
        }
    }
}

/// A serving process; the external handler may or may not be installed yet.
pub struct RunningServer {
    config: ServerConfig,
    slot: HandlerSlot,
    handle: ListenerHandle,
    task: JoinHandle<Result<(), std::io::Error>>,
}

impl RunningServer {
    pub fn handle(&self) -> ListenerHandle {
        self.handle.clone()
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Whether the external handler has been installed.
    pub fn is_composed(&self) -> bool {
        self.slot.is_installed()
    }

    /// Await the external initializer and install its handler.
    ///
    /// Only this continuation suspends; the serve loop keeps accepting.
    pub async fn compose(&self, initializer: &dyn Initializer) -> Result<(), BootstrapError> {
        composer::compose(&self.config, &self.handle, &self.slot, initializer)
            .await
            .map_err(BootstrapError::from)
    }

    /// Wait for the serve loop to finish (i.e., shutdown).
    pub async fn wait(self) -> Result<(), BootstrapError> {
        match self.task.await {
            Ok(result) => result.map_err(BootstrapError::Serve),
            Err(join_error) => Err(BootstrapError::Serve(std::io::Error::other(join_error))),
        }
    }
}

/// The full bootstrap sequence used by the binary.
///
/// Initializer failure is reported through [`report_failure`] and swallowed:
/// the process stays up with a partially-initialized pipeline. Bind failure
/// surfaces to the caller, since without a listener there is nothing to keep
/// running.
pub async fn run(
    config: ServerConfig,
    initializer: &dyn Initializer,
    shutdown: &Shutdown,
) -> Result<RunningServer, BootstrapError> {
    let bound = Bootstrap::new(config).bind().await?;
    let server = bound.start(shutdown);

    if let Err(error) = server.compose(initializer).await {
        report_failure(&error);
    }

    Ok(server)
}

//! Shared utilities for bootstrap and composition testing.
#![allow(dead_code)]

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{routing::get, Router};
use tokio::net::TcpStream;

use opdeck::pipeline::BoxError;
use opdeck::{Initializer, ListenerHandle, ServerConfig};

/// Config bound to an ephemeral loopback port with assets in `static_dir`.
pub fn test_config(static_dir: &Path) -> ServerConfig {
    let mut config = ServerConfig::default();
    config.listener.host = "127.0.0.1".to_string();
    config.listener.port = 0;
    config.dashboard.static_dir = static_dir.to_path_buf();
    config
}

/// Write a minimal dashboard bundle into `dir`.
pub fn write_dashboard(dir: &Path) {
    std::fs::write(dir.join("index.html"), "<html>deck</html>").unwrap();
    std::fs::write(dir.join("app.js"), "console.log('deck');").unwrap();
}

/// Initializer returning a small API, counting invocations and proving the
/// listener is accepting at init time by connecting to it.
pub struct ApiInitializer {
    pub calls: Arc<AtomicUsize>,
}

impl ApiInitializer {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl Initializer for ApiInitializer {
    async fn init(
        &self,
        _config: &ServerConfig,
        listener: &ListenerHandle,
    ) -> Result<Router, BoxError> {
        // The listener must already accept connections here.
        TcpStream::connect(listener.local_addr()).await?;
        self.calls.fetch_add(1, Ordering::SeqCst);

        Ok(Router::new().route("/api/ping", get(|| async { "pong" })))
    }
}

/// Initializer that always fails.
pub struct FailingInitializer;

#[async_trait]
impl Initializer for FailingInitializer {
    async fn init(
        &self,
        _config: &ServerConfig,
        _listener: &ListenerHandle,
    ) -> Result<Router, BoxError> {
        Err("backing store offline".into())
    }
}

/// Initializer that never resolves.
pub struct PendingInitializer;

#[async_trait]
impl Initializer for PendingInitializer {
    async fn init(
        &self,
        _config: &ServerConfig,
        _listener: &ListenerHandle,
    ) -> Result<Router, BoxError> {
        std::future::pending::<()>().await;
        unreachable!("pending initializer resolved")
    }
}

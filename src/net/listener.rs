//! TCP listener bootstrap.
//!
//! # Responsibilities
//! - Bind to the configured host and port
//! - Begin accepting connections immediately on bind
//! - Hand out a read-only handle for the initializer contract and logs

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ListenerConfig;
use crate::http::dashboard::DASHBOARD_PREFIX;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("failed to bind {host}:{port}: {source}")]
    Bind {
        host: String,
        port: u16,
        source: std::io::Error,
    },
}

/// The bound network socket.
///
/// Created on bind, consumed by the serve loop. Once bound, the port is
/// fixed for the life of the process.
pub struct Listener {
    inner: TcpListener,
    handle: ListenerHandle,
}

impl Listener {
    /// Bind to the configured address and begin listening.
    pub async fn bind(config: &ListenerConfig) -> Result<Self, ListenerError> {
        let bind = |source| ListenerError::Bind {
            host: config.host.clone(),
            port: config.port,
            source,
        };

        let inner = TcpListener::bind((config.host.as_str(), config.port))
            .await
            .map_err(bind)?;
        let local_addr = inner.local_addr().map_err(bind)?;

        tracing::info!(address = %local_addr, "Listener bound");

        Ok(Self {
            inner,
            handle: ListenerHandle { local_addr },
        })
    }

    /// Read-only view of the bound socket.
    pub fn handle(&self) -> ListenerHandle {
        self.handle.clone()
    }

    /// Surrender the socket to the serve loop.
    pub fn into_inner(self) -> TcpListener {
        self.inner
    }
}

/// Read-only view of a bound listener.
///
/// Shared with the external initializer and the readiness log; closing the
/// socket stays with the bootstrap flow that created it.
#[derive(Debug, Clone)]
pub struct ListenerHandle {
    local_addr: SocketAddr,
}

impl ListenerHandle {
    #[cfg(test)]
    pub(crate) fn for_tests(local_addr: SocketAddr) -> Self {
        Self { local_addr }
    }

    /// The address the listener actually bound (port 0 resolves here).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Human-reachable dashboard location for the readiness signal.
    pub fn dashboard_url(&self) -> String {
        let ip = self.local_addr.ip();
        let host = if ip.is_unspecified() {
            "localhost".to_string()
        } else {
            ip.to_string()
        };
        format!(
            "http://{}:{}{}",
            host,
            self.local_addr.port(),
            DASHBOARD_PREFIX
        )
    }
}

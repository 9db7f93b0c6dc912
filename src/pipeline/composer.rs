//! Asynchronous handler composition.
//!
//! # Responsibilities
//! - Define the contract with the external initializer
//! - Await its result without blocking the serve loop
//! - Install the returned handler into the live pipeline exactly once

use async_trait::async_trait;
use axum::Router;
use thiserror::Error;

use crate::config::ServerConfig;
use crate::net::ListenerHandle;
use crate::pipeline::slot::{AlreadyInstalled, HandlerSlot};

/// Boxed error returned across the initializer boundary.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The external collaborator supplying the main request-handling unit.
///
/// Invoked exactly once per bootstrap, strictly after the listener is bound
/// and accepting. The returned router's internals (routing tables,
/// persistence, auth) are entirely the implementor's concern.
#[async_trait]
pub trait Initializer: Send + Sync {
    async fn init(
        &self,
        config: &ServerConfig,
        listener: &ListenerHandle,
    ) -> Result<Router, BoxError>;
}

/// Error type for the composition step.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("initializer failed: {0}")]
    Init(#[source] BoxError),

    #[error(transparent)]
    Install(#[from] AlreadyInstalled),
}

/// Obtain the external handler and install it into the slot.
///
/// Suspends only this continuation; the serve loop keeps accepting while
/// the initializer runs. There is no timeout: an initializer that never
/// resolves leaves the pipeline permanently incomplete.
pub async fn compose(
    config: &ServerConfig,
    listener: &ListenerHandle,
    slot: &HandlerSlot,
    initializer: &dyn Initializer,
) -> Result<(), ComposeError> {
    tracing::debug!(address = %listener.local_addr(), "Requesting handler from initializer");

    let handler = initializer
        .init(config, listener)
        .await
        .map_err(ComposeError::Init)?;

    slot.install(handler)?;
    tracing::info!("Request handler installed");

    Ok(())
}

//! The install-once cell holding the externally-supplied handler.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use axum::Router;
use thiserror::Error;

/// Returned when a second handler install is attempted.
#[derive(Debug, Error)]
#[error("a request handler is already installed")]
pub struct AlreadyInstalled;

/// Holds the externally-supplied request handler once it exists.
///
/// Readers on the request path do lock-free loads; the single writer is the
/// composition flow, which installs at most once. Before install, the slot
/// is empty and slot-routed requests are handled by the caller's fallback.
#[derive(Clone, Default)]
pub struct HandlerSlot {
    inner: Arc<ArcSwapOption<Router>>,
}

impl HandlerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the handler. Fails if one is already present.
    pub fn install(&self, handler: Router) -> Result<(), AlreadyInstalled> {
        if self.inner.load().is_some() {
            return Err(AlreadyInstalled);
        }
        self.inner.store(Some(Arc::new(handler)));
        Ok(())
    }

    /// The installed handler, if composition has completed.
    pub fn get(&self) -> Option<Arc<Router>> {
        self.inner.load_full()
    }

    pub fn is_installed(&self) -> bool {
        self.inner.load().is_some()
    }
}

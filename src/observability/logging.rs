//! Structured logging initialization.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Initialize the tracing subscriber.
///
/// RUST_LOG wins when set; otherwise the configured level applies to this
/// crate and the HTTP trace layer. Call once, before any bootstrap step.
pub fn init_logging(config: &ObservabilityConfig) {
    let fallback = format!(
        "opdeck={level},tower_http={level}",
        level = config.log_level
    );

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

//! Environment overlay for the configuration.
//!
//! The listening port is the one value resolvable from the environment.
//! Absence is not an error; an unparseable value collapses to the fixed
//! default rather than aborting startup.

use crate::config::schema::{ServerConfig, DEFAULT_PORT};

/// Environment variable selecting the listening port.
pub const PORT_VAR: &str = "PORT";

/// Resolve a port from a raw environment value.
///
/// Unset, empty, or unparseable values yield `fallback`.
pub fn resolve_port(raw: Option<String>, fallback: u16) -> u16 {
    raw.as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse().ok())
        .unwrap_or(fallback)
}

/// Apply the environment overlay to an already-loaded configuration.
///
/// A present PORT value replaces whatever the file specified; a present but
/// unusable value falls back to [`DEFAULT_PORT`], not to the file value.
pub fn apply_env(config: &mut ServerConfig) {
    if let Ok(raw) = std::env::var(PORT_VAR) {
        config.listener.port = resolve_port(Some(raw), DEFAULT_PORT);
    }
}

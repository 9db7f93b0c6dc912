//! Static dashboard mount.

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// Fixed route prefix the dashboard is served under.
pub const DASHBOARD_PREFIX: &str = "/dashboard";

/// Pass-through file server for the built dashboard assets.
///
/// Unknown paths under the prefix fall back to `index.html`, which is where
/// the single-page dashboard takes over routing.
pub fn mount(static_dir: &Path) -> Router {
    let index = static_dir.join("index.html");
    Router::new().nest_service(
        DASHBOARD_PREFIX,
        ServeDir::new(static_dir).not_found_service(ServeFile::new(index)),
    )
}

//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum serve loop, graceful shutdown)
//!     → cross-origin / request-id / trace layers
//!     → dashboard.rs (static mount, /dashboard prefix)
//!     → slot fallback (installed handler, or 404 until composition)
//! ```

pub mod dashboard;
pub mod server;

pub use server::{build_pipeline, serve};

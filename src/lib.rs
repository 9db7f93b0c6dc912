//! Dashboard application server bootstrap.
//!
//! Opens an HTTP listener, mounts the static dashboard, and defers all real
//! request handling to an externally supplied [`Initializer`]. The listener
//! accepts connections before composition completes; until then only the
//! synchronous units (cross-origin policy, static assets) respond.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod pipeline;

pub use config::ServerConfig;
pub use lifecycle::startup::{Bootstrap, BootstrapError, BoundServer, RunningServer};
pub use lifecycle::Shutdown;
pub use net::ListenerHandle;
pub use pipeline::{BoxError, HandlerSlot, Initializer};

//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Resolve config → build pipeline → bind listener → spawn serve loop
//!     → await initializer → install handler
//!
//! Failure:
//!     every bootstrap error → report_failure (single structured sink)
//!     → process keeps serving whatever was installed before the failure
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C → broadcast → serve loop drains and exits
//! ```
//!
//! # Design Decisions
//! - Ordered startup enforced by type states, not statement order
//! - Initializer failure is recoverable by design: logged, never fatal

pub mod shutdown;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{report_failure, Bootstrap, BootstrapError, BoundServer, RunningServer};

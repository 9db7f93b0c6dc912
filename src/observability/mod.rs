//! Observability subsystem.
//!
//! Structured logging via `tracing`; every startup event, the readiness
//! signal, and the bootstrap failure sink all flow through it.

pub mod logging;

pub use logging::init_logging;

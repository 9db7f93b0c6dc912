//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig
//!     → listener.rs (bind, begin accepting)
//!     → Listener (owns the socket, consumed by the serve loop)
//!     → ListenerHandle (read-only view: address, dashboard URL)
//! ```
//!
//! # Design Decisions
//! - The socket is bound before any request handler beyond the synchronous
//!   units exists; connections queue until the serve loop runs
//! - Only the bootstrap flow owns the listener; everything else sees the
//!   cloneable read-only handle

pub mod listener;

pub use listener::{Listener, ListenerError, ListenerHandle};

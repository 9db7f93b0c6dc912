//! Request pipeline composition subsystem.
//!
//! # Data Flow
//! ```text
//! Synchronous units (cors, request id, trace, dashboard mount)
//!     → installed while building the router, before bind
//!
//! External handler:
//!     composer.rs (await the initializer) → slot.rs (install once)
//!     → dispatched behind every synchronous unit
//! ```
//!
//! # Design Decisions
//! - The slot is the only mutable cell in the pipeline; everything else is
//!   append-only by construction
//! - Install happens at most once; a second install is an error, not a swap

pub mod composer;
pub mod slot;

pub use composer::{compose, BoxError, ComposeError, Initializer};
pub use slot::{AlreadyInstalled, HandlerSlot};

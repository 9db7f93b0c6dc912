//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, all fields defaulted)
//!     → env.rs (environment overlay: PORT)
//!     → semantic checks (loader.rs)
//!     → ServerConfig (validated, immutable)
//!     → passed explicitly through every bootstrap step
//! ```
//!
//! # Design Decisions
//! - Config is immutable once resolved; the bound port never changes for
//!   the life of the process
//! - All fields have defaults so an absent or empty config file is valid
//! - The environment overlay wins over the file; CLI flags win over both

pub mod env;
pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{
    CorsConfig, DashboardConfig, ListenerConfig, ObservabilityConfig, ServerConfig, ViewConfig,
};

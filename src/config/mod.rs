//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! ServerConfig::default()   (binary: fixed 0.0.0.0:3000)
//!   or loader.rs            (library callers: TOML file)
//!     → ServerConfig (immutable)
//!     → lifecycle::start
//! ```
//!
//! # Design Decisions
//! - Every field has a default matching the fixed production values
//! - The binary never reads a file, flag, or environment variable for the port

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{ListenerConfig, LoggingConfig, ServerConfig, DEFAULT_PORT};

//! Observability subsystem.
//!
//! Structured logs go to stderr through `tracing`. Stdout is reserved for
//! the single startup line printed by `lifecycle::startup`.

pub mod logging;

pub use logging::init_logging;

//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig
//!     → listener.rs (bind, report bound address)
//!     → Hand off to HTTP layer (axum accept loop)
//! ```
//!
//! # Design Decisions
//! - No connection cap: every accepted connection is served
//! - Bind errors are returned, never retried

pub mod listener;

pub use listener::{Listener, ListenerError};

//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     ServerConfig → bind → NotListening ⇒ Listening → banner → spawn serve task
//!
//! Shutdown (RunningServer::shutdown):
//!     broadcast → stop accepting → serve task returns
//! ```
//!
//! `Listening` is terminal for the binary: it never triggers shutdown and only
//! process termination tears it down. Library callers and tests use
//! `RunningServer::shutdown` to release the port.

pub mod startup;

pub use startup::{
    banner, start, start_with_output, ListenerState, RunningServer, ServeError, StartError,
};

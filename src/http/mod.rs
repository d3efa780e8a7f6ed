//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum accept loop, trace layer)
//!     → response.rs (fixed handler, request never inspected)
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use response::{backend_ok, BODY};
pub use server::HttpServer;

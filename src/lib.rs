//! Backend liveness responder.
//!
//! Binds a TCP port and answers every HTTP request with `200 OK` and the body
//! `Backend OK`. No routing, no request inspection, no shared state.
//!
//! ```text
//!   config ──▶ net::listener ──▶ lifecycle::start ──▶ http::server ──▶ http::response
//!                (bind)          (banner, spawn)       (axum loop)      ("Backend OK")
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::{start, start_with_output, RunningServer, StartError};

//! The fixed response.
//!
//! Every request, whatever its method, path, headers or body, gets the same
//! answer: `200 OK` with the ten bytes `Backend OK` and axum's default
//! `text/plain; charset=utf-8` content type.

use axum::http::StatusCode;

/// Response body sent for every request. No trailing newline.
pub const BODY: &str = "Backend OK";

/// Handler for all requests.
pub async fn backend_ok() -> (StatusCode, &'static str) {
    (StatusCode::OK, BODY)
}

//! HTTP server setup.
//!
//! # Responsibilities
//! - Build the axum Router: no routes, a single fallback handler
//! - Wire up request tracing
//! - Serve a bound listener until shutdown

use axum::Router;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::http::response::backend_ok;
use crate::net::Listener;

/// HTTP server answering every request with the fixed response.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    pub fn new() -> Self {
        Self {
            router: Self::build_router(),
        }
    }

    /// Every method and path falls through to the same handler.
    fn build_router() -> Router {
        Router::new()
            .fallback(backend_ok)
            .layer(TraceLayer::new_for_http())
    }

    /// The router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve connections on `listener` until `shutdown` fires or its sender is dropped.
    pub async fn run(
        self,
        listener: Listener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr();
        tracing::debug!(address = %addr, "HTTP server starting");

        axum::serve(listener.into_inner(), self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!(address = %addr, "HTTP server stopped");
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

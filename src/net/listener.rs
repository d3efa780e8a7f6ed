//! TCP listener binding.
//!
//! # Responsibilities
//! - Bind to the configured host and port
//! - Surface bind failures (address in use, permission denied) as errors
//! - Report the bound address, which differs from the configured one for port 0

use std::io;
use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    /// The OS refused to attach a socket to the address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
}

impl ListenerError {
    /// Whether the bind failed because another socket already owns the port.
    pub fn is_addr_in_use(&self) -> bool {
        match self {
            ListenerError::Bind { source, .. } => source.kind() == io::ErrorKind::AddrInUse,
        }
    }
}

/// A bound TCP listener that has not started serving yet.
#[derive(Debug)]
pub struct Listener {
    inner: TcpListener,
    local_addr: SocketAddr,
}

impl Listener {
    /// Bind to the configured address.
    pub async fn bind(config: &ListenerConfig) -> Result<Self, ListenerError> {
        let addr = config.socket_addr();

        let inner = TcpListener::bind(addr)
            .await
            .map_err(|source| ListenerError::Bind { addr, source })?;

        let local_addr = inner
            .local_addr()
            .map_err(|source| ListenerError::Bind { addr, source })?;

        tracing::info!(address = %local_addr, "Listener bound");

        Ok(Self { inner, local_addr })
    }

    /// Address the socket is actually bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn into_inner(self) -> TcpListener {
        self.inner
    }
}

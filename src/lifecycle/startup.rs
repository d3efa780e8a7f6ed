//! Startup orchestration.
//!
//! # Responsibilities
//! - Bind the listener (fail fast, no retry, no fallback port)
//! - Announce the bound port exactly once (stdout for the binary)
//! - Spawn the serve task and hand back a handle to it

use std::io::{self, Write};
use std::net::SocketAddr;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::config::ServerConfig;
use crate::http::HttpServer;
use crate::net::{Listener, ListenerError};

/// Error returned when the server cannot start.
#[derive(Debug, thiserror::Error)]
pub enum StartError {
    #[error(transparent)]
    Listener(#[from] ListenerError),
    /// The socket was bound but the startup line could not be written.
    #[error("failed to announce startup: {0}")]
    Announce(#[source] io::Error),
}

impl StartError {
    pub fn is_addr_in_use(&self) -> bool {
        match self {
            StartError::Listener(e) => e.is_addr_in_use(),
            StartError::Announce(_) => false,
        }
    }
}

/// Error returned when the serve task ends abnormally.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("server I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("serve task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Listener lifecycle. There is no state after `Listening`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerState {
    NotListening,
    Listening,
}

/// Startup confirmation line.
pub fn banner(port: u16) -> String {
    format!("Backend running on port {port}")
}

/// Handle to a listening server.
///
/// Dropping `shutdown_tx` closes the channel, which the serve task treats as
/// a shutdown request, so the sender lives exactly as long as the handle.
#[derive(Debug)]
pub struct RunningServer {
    local_addr: SocketAddr,
    state: ListenerState,
    shutdown_tx: broadcast::Sender<()>,
    task: JoinHandle<Result<(), io::Error>>,
}

impl RunningServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// The bound port (resolved when the config asked for port 0).
    pub fn port(&self) -> u16 {
        self.local_addr.port()
    }

    pub fn state(&self) -> ListenerState {
        self.state
    }

    /// Wait for the serve task. Without a shutdown this runs for the life of the process.
    pub async fn wait(self) -> Result<(), ServeError> {
        let RunningServer {
            task, shutdown_tx, ..
        } = self;
        let result = task.await;
        drop(shutdown_tx);
        result??;
        Ok(())
    }

    /// Stop accepting, let in-flight responses finish, and release the port.
    pub async fn shutdown(self) -> Result<(), ServeError> {
        let _ = self.shutdown_tx.send(());
        self.task.await??;
        Ok(())
    }
}

/// Bind the configured port and start answering requests, announcing on stdout.
pub async fn start(config: ServerConfig) -> Result<RunningServer, StartError> {
    start_with_output(config, io::stdout()).await
}

/// Like [`start`], writing the startup line to `out` instead of stdout.
pub async fn start_with_output<W: Write>(
    config: ServerConfig,
    mut out: W,
) -> Result<RunningServer, StartError> {
    let mut state = ListenerState::NotListening;
    tracing::debug!(?state, address = %config.listener.socket_addr(), "Starting backend");

    let listener = Listener::bind(&config.listener).await?;
    let local_addr = listener.local_addr();
    state = ListenerState::Listening;

    writeln!(out, "{}", banner(local_addr.port()))
        .and_then(|()| out.flush())
        .map_err(StartError::Announce)?;

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let server = HttpServer::new();
    let task = tokio::spawn(server.run(listener, shutdown_rx));

    Ok(RunningServer {
        local_addr,
        state,
        shutdown_tx,
        task,
    })
}

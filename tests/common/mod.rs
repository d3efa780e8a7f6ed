//! Shared utilities for integration tests.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use backend_ok::{RunningServer, ServerConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Start the backend on an ephemeral loopback port.
pub async fn start_loopback() -> RunningServer {
    let mut config = ServerConfig::with_port(0);
    config.listener.host = IpAddr::V4(Ipv4Addr::LOCALHOST);
    backend_ok::start(config).await.unwrap()
}

/// Raw response split into status line, headers (lower-cased names) and body.
#[derive(Debug, PartialEq)]
pub struct RawResponse {
    pub status_line: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RawResponse {
    #[allow(dead_code)]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Headers minus `date`, which changes between responses.
    #[allow(dead_code)]
    pub fn stable_headers(&self) -> Vec<(String, String)> {
        self.headers
            .iter()
            .filter(|(k, _)| k != "date")
            .cloned()
            .collect()
    }
}

/// Write `request` verbatim and read until the server closes the connection.
/// The request should carry `Connection: close`.
pub async fn raw_request(addr: SocketAddr, request: &str) -> RawResponse {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.unwrap();

    let split = buf
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has no header terminator");
    let head = String::from_utf8(buf[..split].to_vec()).unwrap();
    let body = buf[split + 4..].to_vec();

    let mut lines = head.split("\r\n");
    let status_line = lines.next().unwrap_or_default().to_string();
    let headers = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();

    RawResponse {
        status_line,
        headers,
        body,
    }
}

use backend_ok::config::ServerConfig;
use backend_ok::observability::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Fixed 0.0.0.0:3000; the process takes no arguments.
    let config = ServerConfig::default();

    init_logging(&config.logging);

    tracing::info!(
        address = %config.listener.socket_addr(),
        version = env!("CARGO_PKG_VERSION"),
        "backend-ok starting"
    );

    let server = backend_ok::start(config).await?;
    server.wait().await?;

    Ok(())
}
